//! The [`Gateway`] trait: the narrow persistence interface the core needs.
//!
//! The trait is implemented by storage backends (e.g.
//! `registrar-store-sqlite`). The resource service depends on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::entity::Entity;

/// Row-level access to one entity type's collection.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait Gateway<T: Entity>: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new row. The caller has already populated `id` and
  /// `created_at`; a duplicate `id` is a store error.
  fn insert(
    &self,
    record: T,
  ) -> impl Future<Output = Result<T, Self::Error>> + Send + '_;

  /// Every row of this entity type, in no particular order.
  fn find_all(&self) -> impl Future<Output = Result<Vec<T>, Self::Error>> + Send + '_;

  /// Retrieve a row by id. Returns `None` if not found.
  fn find_by_id(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<T>, Self::Error>> + Send + '_;

  /// Replace the full row keyed by `record.id()`, inserting it if absent.
  fn save(&self, record: T) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Remove the row if present. Deleting a missing id is not an error.
  fn delete_by_id(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
