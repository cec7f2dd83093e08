//! Enrollment — the link between a student and a subject, with a grade.
//!
//! Exposed over HTTP as `registerStudentSubject`. Both references are soft:
//! an enrollment may point at a student or subject that does not exist.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
  pub id:              Uuid,
  pub student_id:      Option<Uuid>,
  pub subject_id:      Option<Uuid>,
  /// No declared range.
  pub grade:           i64,
  pub date_registered: Option<DateTime<Utc>>,
  pub created_at:      DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewEnrollment {
  pub student_id:      Option<Uuid>,
  pub subject_id:      Option<Uuid>,
  #[serde(deserialize_with = "crate::entity::null_as_default")]
  pub grade:           i64,
  pub date_registered: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentPatch {
  pub student_id:      Option<Uuid>,
  pub subject_id:      Option<Uuid>,
  pub grade:           Option<i64>,
  pub date_registered: Option<DateTime<Utc>>,
}

impl Entity for Enrollment {
  const KIND: &'static str = "enrollment";

  type Draft = NewEnrollment;
  type Patch = EnrollmentPatch;

  fn id(&self) -> Uuid { self.id }

  fn created_at(&self) -> DateTime<Utc> { self.created_at }

  fn from_draft(id: Uuid, created_at: DateTime<Utc>, draft: NewEnrollment) -> Self {
    Enrollment {
      id,
      student_id: draft.student_id,
      subject_id: draft.subject_id,
      grade: draft.grade,
      date_registered: draft.date_registered,
      created_at,
    }
  }

  fn apply(&mut self, patch: EnrollmentPatch) {
    if let Some(v) = patch.student_id {
      self.student_id = Some(v);
    }
    if let Some(v) = patch.subject_id {
      self.subject_id = Some(v);
    }
    if let Some(v) = patch.grade {
      self.grade = v;
    }
    if let Some(v) = patch.date_registered {
      self.date_registered = Some(v);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn grade_accepts_any_integer() {
    let draft: NewEnrollment =
      serde_json::from_value(json!({ "grade": -7 })).unwrap();
    assert_eq!(draft.grade, -7);
  }

  #[test]
  fn null_grade_reads_as_zero() {
    let draft: NewEnrollment =
      serde_json::from_value(json!({ "grade": null })).unwrap();
    assert_eq!(draft.grade, 0);
  }

  #[test]
  fn fractional_grade_is_rejected() {
    let res = serde_json::from_value::<NewEnrollment>(json!({ "grade": 9.5 }));
    assert!(res.is_err());
  }

  #[test]
  fn patch_changes_grade_only() {
    let student = Uuid::new_v4();
    let mut e = Enrollment::from_draft(Uuid::new_v4(), Utc::now(), NewEnrollment {
      student_id: Some(student),
      grade: 4,
      ..Default::default()
    });

    e.apply(EnrollmentPatch { grade: Some(10), ..Default::default() });

    assert_eq!(e.grade, 10);
    assert_eq!(e.student_id, Some(student));
  }
}
