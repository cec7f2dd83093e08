//! Error types for `registrar-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// No row of the given kind matches the identifier.
  #[error("{kind} not found: {id}")]
  NotFound { kind: &'static str, id: String },

  /// Any failure reported by the storage gateway, passed through verbatim.
  #[error("{0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
    Error::NotFound { kind, id: id.into() }
  }

  pub fn is_not_found(&self) -> bool { matches!(self, Error::NotFound { .. }) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
