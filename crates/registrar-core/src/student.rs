//! Student — a person enrolled at the institution.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
  pub id:         Uuid,
  pub first_name: String,
  pub last_name:  String,
  pub birth_date: Option<DateTime<Utc>>,
  pub address:    String,
  pub email:      String,
  pub phone:      String,
  pub created_at: DateTime<Utc>,
}

/// JSON body accepted by `POST /students`. Omitted fields default to empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewStudent {
  #[serde(deserialize_with = "crate::entity::null_as_default")]
  pub first_name: String,
  #[serde(deserialize_with = "crate::entity::null_as_default")]
  pub last_name:  String,
  pub birth_date: Option<DateTime<Utc>>,
  #[serde(deserialize_with = "crate::entity::null_as_default")]
  pub address:    String,
  #[serde(deserialize_with = "crate::entity::null_as_default")]
  pub email:      String,
  #[serde(deserialize_with = "crate::entity::null_as_default")]
  pub phone:      String,
}

/// JSON body accepted by `PUT /students/:id`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPatch {
  pub first_name: Option<String>,
  pub last_name:  Option<String>,
  pub birth_date: Option<DateTime<Utc>>,
  pub address:    Option<String>,
  pub email:      Option<String>,
  pub phone:      Option<String>,
}

impl Entity for Student {
  const KIND: &'static str = "student";

  type Draft = NewStudent;
  type Patch = StudentPatch;

  fn id(&self) -> Uuid { self.id }

  fn created_at(&self) -> DateTime<Utc> { self.created_at }

  fn from_draft(id: Uuid, created_at: DateTime<Utc>, draft: NewStudent) -> Self {
    Student {
      id,
      first_name: draft.first_name,
      last_name: draft.last_name,
      birth_date: draft.birth_date,
      address: draft.address,
      email: draft.email,
      phone: draft.phone,
      created_at,
    }
  }

  fn apply(&mut self, patch: StudentPatch) {
    if let Some(v) = patch.first_name {
      self.first_name = v;
    }
    if let Some(v) = patch.last_name {
      self.last_name = v;
    }
    if let Some(v) = patch.birth_date {
      self.birth_date = Some(v);
    }
    if let Some(v) = patch.address {
      self.address = v;
    }
    if let Some(v) = patch.email {
      self.email = v;
    }
    if let Some(v) = patch.phone {
      self.phone = v;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn ada() -> Student {
    let draft: NewStudent = serde_json::from_value(json!({
      "firstName": "Ada",
      "lastName":  "Lovelace",
      "email":     "ada@x.io",
    }))
    .unwrap();
    Student::from_draft(Uuid::new_v4(), Utc::now(), draft)
  }

  #[test]
  fn draft_missing_fields_default_to_empty() {
    let s = ada();
    assert_eq!(s.first_name, "Ada");
    assert_eq!(s.address, "");
    assert_eq!(s.phone, "");
    assert!(s.birth_date.is_none());
  }

  #[test]
  fn null_text_fields_read_as_empty() {
    let draft: NewStudent = serde_json::from_value(json!({
      "firstName": "Ada",
      "phone":     null,
      "address":   null,
    }))
    .unwrap();
    assert_eq!(draft.first_name, "Ada");
    assert_eq!(draft.phone, "");
    assert_eq!(draft.address, "");
  }

  #[test]
  fn patch_overlays_only_present_fields() {
    let mut s = ada();
    let before = s.clone();

    let patch: StudentPatch =
      serde_json::from_value(json!({ "phone": "555-0100" })).unwrap();
    s.apply(patch);

    assert_eq!(s.phone, "555-0100");
    assert_eq!(s.first_name, before.first_name);
    assert_eq!(s.email, before.email);
  }

  #[test]
  fn patch_ignores_id_and_created_at() {
    let mut s = ada();
    let before = s.clone();

    let patch: StudentPatch = serde_json::from_value(json!({
      "id":        Uuid::new_v4(),
      "createdAt": "2001-01-01T00:00:00Z",
      "lastName":  "King",
    }))
    .unwrap();
    s.apply(patch);

    assert_eq!(s.id, before.id);
    assert_eq!(s.created_at, before.created_at);
    assert_eq!(s.last_name, "King");
  }

  #[test]
  fn serializes_camel_case() {
    let v = serde_json::to_value(ada()).unwrap();
    assert!(v.get("firstName").is_some());
    assert!(v.get("createdAt").is_some());
    assert!(v.get("birthDate").unwrap().is_null());
  }
}
