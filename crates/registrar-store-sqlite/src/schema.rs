//! SQL schema for the Registrar SQLite store.
//!
//! Executed once at connection startup. Column names are the camelCase field
//! names clients see in JSON.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// Reference columns (`professorId`, `studentId`, `subjectId`) carry no
/// `REFERENCES` clause: dangling ids are valid data.
pub const SCHEMA: &str = r#"
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS "students" (
    "id"        TEXT PRIMARY KEY,
    "firstName" TEXT NOT NULL DEFAULT '',
    "lastName"  TEXT NOT NULL DEFAULT '',
    "birthDate" TEXT,                       -- RFC 3339 UTC or NULL
    "address"   TEXT NOT NULL DEFAULT '',
    "email"     TEXT NOT NULL DEFAULT '',
    "phone"     TEXT NOT NULL DEFAULT '',
    "createdAt" TEXT NOT NULL               -- RFC 3339 UTC; server-assigned
);

CREATE TABLE IF NOT EXISTS "subjects" (
    "id"                 TEXT PRIMARY KEY,
    "subjectName"        TEXT NOT NULL DEFAULT '',
    "subjectDescription" TEXT NOT NULL DEFAULT '',
    "professorId"        TEXT,
    "createdAt"          TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS "professors" (
    "id"        TEXT PRIMARY KEY,
    "firstName" TEXT NOT NULL DEFAULT '',
    "lastName"  TEXT NOT NULL DEFAULT '',
    "email"     TEXT NOT NULL DEFAULT '',
    "createdAt" TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS "registerStudentSubject" (
    "id"             TEXT PRIMARY KEY,
    "studentId"      TEXT,
    "subjectId"      TEXT,
    "grade"          INTEGER NOT NULL DEFAULT 0,
    "dateRegistered" TEXT,
    "createdAt"      TEXT NOT NULL
);

PRAGMA user_version = 1;
"#;
