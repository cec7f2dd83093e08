//! JSON REST API for Registrar.
//!
//! Exposes an axum [`Router`] backed by any store that implements
//! [`Gateway`] for all four entity types. CORS, tracing, and transport
//! concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = registrar_api::api_router(store.clone(), ApiOptions::default());
//! ```

pub mod error;
pub mod resource;

use std::sync::Arc;

use axum::Router;
use registrar_core::{
  Gateway, ResourceService, enrollment::Enrollment, professor::Professor,
  student::Student, subject::Subject,
};

pub use error::ApiError;
use resource::{ResourceState, routes};

/// Knobs for how core outcomes are reported over HTTP.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiOptions {
  /// Report a missing record as 500 instead of 404, for clients written
  /// against the legacy contract.
  pub collapse_not_found: bool,
}

/// Build a fully-materialised API router for `store`.
///
/// Enrollments are served under both `/registerStudentSubject` and
/// `/registerStudentSubjects`; the plural form is what the existing
/// front-end calls.
pub fn api_router<G>(store: Arc<G>, options: ApiOptions) -> Router<()>
where
  G: Gateway<Student>
    + Gateway<Subject>
    + Gateway<Professor>
    + Gateway<Enrollment>
    + 'static,
{
  let students = state::<Student, G>(&store, options);
  let subjects = state::<Subject, G>(&store, options);
  let professors = state::<Professor, G>(&store, options);
  let enrollments = state::<Enrollment, G>(&store, options);

  Router::new()
    .merge(routes("/students", students))
    .merge(routes("/subjects", subjects))
    .merge(routes("/professors", professors))
    .merge(routes("/registerStudentSubject", enrollments.clone()))
    .merge(routes("/registerStudentSubjects", enrollments))
}

fn state<T, G>(store: &Arc<G>, options: ApiOptions) -> ResourceState<T, G>
where
  T: registrar_core::Entity,
  G: Gateway<T>,
{
  ResourceState { service: ResourceService::new(Arc::clone(store)), options }
}

// ─── Integration tests ────────────────────────────────────────────────────────
