//! The [`Entity`] trait shared by every record type.
//!
//! An entity owns a store-assigned `id` and a `createdAt` stamp. Everything
//! else is caller data, supplied whole on create (the [`Entity::Draft`]) and
//! piecemeal on update (the [`Entity::Patch`]).

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use uuid::Uuid;

pub trait Entity:
  Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
  /// Singular name used in error messages and logs, e.g. `"student"`.
  const KIND: &'static str;

  /// Create input: every field except `id` and `createdAt`.
  type Draft: DeserializeOwned + Send + 'static;

  /// Update input: every field optional. Absent fields are left untouched.
  type Patch: DeserializeOwned + Send + 'static;

  fn id(&self) -> Uuid;

  fn created_at(&self) -> DateTime<Utc>;

  /// Build a full record from a draft and the server-assigned metadata.
  fn from_draft(id: Uuid, created_at: DateTime<Utc>, draft: Self::Draft) -> Self;

  /// Overlay the fields present in `patch`. Never touches `id` or
  /// `created_at`.
  fn apply(&mut self, patch: Self::Patch);
}

/// Deserialize a draft field so that an explicit `null` reads the same as an
/// omitted key: the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
