//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings. UUIDs are stored as
//! hyphenated lowercase strings.

use chrono::{DateTime, Utc};
use registrar_core::{
  enrollment::Enrollment, professor::Professor, student::Student, subject::Subject,
};
use rusqlite::types::Value;
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

pub fn decode_opt_uuid(s: Option<String>) -> Result<Option<Uuid>> {
  s.as_deref().map(decode_uuid).transpose()
}

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

pub fn decode_opt_dt(s: Option<String>) -> Result<Option<DateTime<Utc>>> {
  s.as_deref().map(decode_dt).transpose()
}

// ─── Column values ───────────────────────────────────────────────────────────

pub fn text(s: &str) -> Value { Value::Text(s.to_owned()) }

pub fn opt_uuid(id: Option<Uuid>) -> Value {
  id.map_or(Value::Null, |id| Value::Text(encode_uuid(id)))
}

pub fn opt_dt(dt: Option<DateTime<Utc>>) -> Value {
  dt.map_or(Value::Null, |dt| Value::Text(encode_dt(dt)))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `students` row.
pub struct RawStudent {
  pub id:         String,
  pub first_name: String,
  pub last_name:  String,
  pub birth_date: Option<String>,
  pub address:    String,
  pub email:      String,
  pub phone:      String,
  pub created_at: String,
}

impl RawStudent {
  pub fn into_student(self) -> Result<Student> {
    Ok(Student {
      id:         decode_uuid(&self.id)?,
      first_name: self.first_name,
      last_name:  self.last_name,
      birth_date: decode_opt_dt(self.birth_date)?,
      address:    self.address,
      email:      self.email,
      phone:      self.phone,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from a `subjects` row.
pub struct RawSubject {
  pub id:                  String,
  pub subject_name:        String,
  pub subject_description: String,
  pub professor_id:        Option<String>,
  pub created_at:          String,
}

impl RawSubject {
  pub fn into_subject(self) -> Result<Subject> {
    Ok(Subject {
      id:                  decode_uuid(&self.id)?,
      subject_name:        self.subject_name,
      subject_description: self.subject_description,
      professor_id:        decode_opt_uuid(self.professor_id)?,
      created_at:          decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from a `professors` row.
pub struct RawProfessor {
  pub id:         String,
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub created_at: String,
}

impl RawProfessor {
  pub fn into_professor(self) -> Result<Professor> {
    Ok(Professor {
      id:         decode_uuid(&self.id)?,
      first_name: self.first_name,
      last_name:  self.last_name,
      email:      self.email,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

/// Raw values read directly from a `registerStudentSubject` row.
pub struct RawEnrollment {
  pub id:              String,
  pub student_id:      Option<String>,
  pub subject_id:      Option<String>,
  pub grade:           i64,
  pub date_registered: Option<String>,
  pub created_at:      String,
}

impl RawEnrollment {
  pub fn into_enrollment(self) -> Result<Enrollment> {
    Ok(Enrollment {
      id:              decode_uuid(&self.id)?,
      student_id:      decode_opt_uuid(self.student_id)?,
      subject_id:      decode_opt_uuid(self.subject_id)?,
      grade:           self.grade,
      date_registered: decode_opt_dt(self.date_registered)?,
      created_at:      decode_dt(&self.created_at)?,
    })
  }
}
