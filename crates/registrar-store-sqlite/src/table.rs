//! [`Table`] — how each entity maps onto its SQLite table.
//!
//! The gateway in [`crate::store`] is written once against this trait; the
//! impls below are the only per-entity SQLite code.

use registrar_core::{
  Entity, enrollment::Enrollment, professor::Professor, student::Student,
  subject::Subject,
};
use rusqlite::{Row, types::Value};

use crate::{
  Result,
  encode::{
    RawEnrollment, RawProfessor, RawStudent, RawSubject, encode_dt, encode_uuid,
    opt_dt, opt_uuid, text,
  },
};

pub trait Table: Entity {
  /// Unquoted table name.
  const TABLE: &'static str;

  /// Column names in bind order. The first is always `id`.
  const COLUMNS: &'static [&'static str];

  /// Column values read off a row before decoding. Produced on the database
  /// thread, decoded back on the caller's.
  type Raw: Send + 'static;

  /// One value per entry in [`Table::COLUMNS`], same order.
  fn to_row(&self) -> Vec<Value>;

  fn read_row(row: &Row<'_>) -> rusqlite::Result<Self::Raw>;

  fn from_raw(raw: Self::Raw) -> Result<Self>;
}

// ─── Student ─────────────────────────────────────────────────────────────────

impl Table for Student {
  const TABLE: &'static str = "students";
  const COLUMNS: &'static [&'static str] = &[
    "id", "firstName", "lastName", "birthDate", "address", "email", "phone",
    "createdAt",
  ];

  type Raw = RawStudent;

  fn to_row(&self) -> Vec<Value> {
    vec![
      Value::Text(encode_uuid(self.id)),
      text(&self.first_name),
      text(&self.last_name),
      opt_dt(self.birth_date),
      text(&self.address),
      text(&self.email),
      text(&self.phone),
      Value::Text(encode_dt(self.created_at)),
    ]
  }

  fn read_row(row: &Row<'_>) -> rusqlite::Result<RawStudent> {
    Ok(RawStudent {
      id:         row.get(0)?,
      first_name: row.get(1)?,
      last_name:  row.get(2)?,
      birth_date: row.get(3)?,
      address:    row.get(4)?,
      email:      row.get(5)?,
      phone:      row.get(6)?,
      created_at: row.get(7)?,
    })
  }

  fn from_raw(raw: RawStudent) -> Result<Self> { raw.into_student() }
}

// ─── Subject ─────────────────────────────────────────────────────────────────

impl Table for Subject {
  const TABLE: &'static str = "subjects";
  const COLUMNS: &'static [&'static str] =
    &["id", "subjectName", "subjectDescription", "professorId", "createdAt"];

  type Raw = RawSubject;

  fn to_row(&self) -> Vec<Value> {
    vec![
      Value::Text(encode_uuid(self.id)),
      text(&self.subject_name),
      text(&self.subject_description),
      opt_uuid(self.professor_id),
      Value::Text(encode_dt(self.created_at)),
    ]
  }

  fn read_row(row: &Row<'_>) -> rusqlite::Result<RawSubject> {
    Ok(RawSubject {
      id:                  row.get(0)?,
      subject_name:        row.get(1)?,
      subject_description: row.get(2)?,
      professor_id:        row.get(3)?,
      created_at:          row.get(4)?,
    })
  }

  fn from_raw(raw: RawSubject) -> Result<Self> { raw.into_subject() }
}

// ─── Professor ───────────────────────────────────────────────────────────────

impl Table for Professor {
  const TABLE: &'static str = "professors";
  const COLUMNS: &'static [&'static str] =
    &["id", "firstName", "lastName", "email", "createdAt"];

  type Raw = RawProfessor;

  fn to_row(&self) -> Vec<Value> {
    vec![
      Value::Text(encode_uuid(self.id)),
      text(&self.first_name),
      text(&self.last_name),
      text(&self.email),
      Value::Text(encode_dt(self.created_at)),
    ]
  }

  fn read_row(row: &Row<'_>) -> rusqlite::Result<RawProfessor> {
    Ok(RawProfessor {
      id:         row.get(0)?,
      first_name: row.get(1)?,
      last_name:  row.get(2)?,
      email:      row.get(3)?,
      created_at: row.get(4)?,
    })
  }

  fn from_raw(raw: RawProfessor) -> Result<Self> { raw.into_professor() }
}

// ─── Enrollment ──────────────────────────────────────────────────────────────

impl Table for Enrollment {
  const TABLE: &'static str = "registerStudentSubject";
  const COLUMNS: &'static [&'static str] =
    &["id", "studentId", "subjectId", "grade", "dateRegistered", "createdAt"];

  type Raw = RawEnrollment;

  fn to_row(&self) -> Vec<Value> {
    vec![
      Value::Text(encode_uuid(self.id)),
      opt_uuid(self.student_id),
      opt_uuid(self.subject_id),
      Value::Integer(self.grade),
      opt_dt(self.date_registered),
      Value::Text(encode_dt(self.created_at)),
    ]
  }

  fn read_row(row: &Row<'_>) -> rusqlite::Result<RawEnrollment> {
    Ok(RawEnrollment {
      id:              row.get(0)?,
      student_id:      row.get(1)?,
      subject_id:      row.get(2)?,
      grade:           row.get(3)?,
      date_registered: row.get(4)?,
      created_at:      row.get(5)?,
    })
  }

  fn from_raw(raw: RawEnrollment) -> Result<Self> { raw.into_enrollment() }
}
