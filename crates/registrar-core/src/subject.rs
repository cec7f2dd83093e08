//! Subject — a course taught by a professor.
//!
//! `professor_id` is a soft reference: it is stored as given and never
//! checked against the professors collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
  pub id:                  Uuid,
  pub subject_name:        String,
  pub subject_description: String,
  pub professor_id:        Option<Uuid>,
  pub created_at:          DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewSubject {
  #[serde(deserialize_with = "crate::entity::null_as_default")]
  pub subject_name:        String,
  #[serde(deserialize_with = "crate::entity::null_as_default")]
  pub subject_description: String,
  pub professor_id:        Option<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectPatch {
  pub subject_name:        Option<String>,
  pub subject_description: Option<String>,
  pub professor_id:        Option<Uuid>,
}

impl Entity for Subject {
  const KIND: &'static str = "subject";

  type Draft = NewSubject;
  type Patch = SubjectPatch;

  fn id(&self) -> Uuid { self.id }

  fn created_at(&self) -> DateTime<Utc> { self.created_at }

  fn from_draft(id: Uuid, created_at: DateTime<Utc>, draft: NewSubject) -> Self {
    Subject {
      id,
      subject_name: draft.subject_name,
      subject_description: draft.subject_description,
      professor_id: draft.professor_id,
      created_at,
    }
  }

  fn apply(&mut self, patch: SubjectPatch) {
    if let Some(v) = patch.subject_name {
      self.subject_name = v;
    }
    if let Some(v) = patch.subject_description {
      self.subject_description = v;
    }
    if let Some(v) = patch.professor_id {
      self.professor_id = Some(v);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn malformed_professor_id_is_rejected_at_binding() {
    let res = serde_json::from_value::<NewSubject>(json!({
      "subjectName": "Analysis",
      "professorId": "not-a-uuid",
    }));
    assert!(res.is_err());
  }

  #[test]
  fn patch_replaces_professor_reference() {
    let mut s = Subject::from_draft(Uuid::new_v4(), Utc::now(), NewSubject {
      subject_name: "Analysis".into(),
      ..Default::default()
    });
    let prof = Uuid::new_v4();

    s.apply(SubjectPatch { professor_id: Some(prof), ..Default::default() });

    assert_eq!(s.professor_id, Some(prof));
    assert_eq!(s.subject_name, "Analysis");
  }
}
