//! Professor — a member of teaching staff.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Professor {
  pub id:         Uuid,
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewProfessor {
  #[serde(deserialize_with = "crate::entity::null_as_default")]
  pub first_name: String,
  #[serde(deserialize_with = "crate::entity::null_as_default")]
  pub last_name:  String,
  #[serde(deserialize_with = "crate::entity::null_as_default")]
  pub email:      String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorPatch {
  pub first_name: Option<String>,
  pub last_name:  Option<String>,
  pub email:      Option<String>,
}

impl Entity for Professor {
  const KIND: &'static str = "professor";

  type Draft = NewProfessor;
  type Patch = ProfessorPatch;

  fn id(&self) -> Uuid { self.id }

  fn created_at(&self) -> DateTime<Utc> { self.created_at }

  fn from_draft(id: Uuid, created_at: DateTime<Utc>, draft: NewProfessor) -> Self {
    Professor {
      id,
      first_name: draft.first_name,
      last_name: draft.last_name,
      email: draft.email,
      created_at,
    }
  }

  fn apply(&mut self, patch: ProfessorPatch) {
    if let Some(v) = patch.first_name {
      self.first_name = v;
    }
    if let Some(v) = patch.last_name {
      self.last_name = v;
    }
    if let Some(v) = patch.email {
      self.email = v;
    }
  }
}
