//! Generic handlers for one `/{resource}` collection.
//!
//! | Method   | Path              | Success             |
//! |----------|-------------------|---------------------|
//! | `POST`   | `/{resource}`     | 201 + stored record |
//! | `GET`    | `/{resource}`     | 200 + every record  |
//! | `GET`    | `/{resource}/:id` | 200 + one record    |
//! | `PUT`    | `/{resource}/:id` | 204                 |
//! | `DELETE` | `/{resource}/:id` | 204, even if absent |

use axum::{
  Json, Router,
  extract::{Path, State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
  routing::get,
};
use registrar_core::{Entity, Gateway, ResourceService};

use crate::{ApiOptions, error::ApiError};

/// Handler state for a single resource collection.
pub struct ResourceState<T, G> {
  pub service: ResourceService<T, G>,
  pub options: ApiOptions,
}

impl<T, G> Clone for ResourceState<T, G> {
  fn clone(&self) -> Self {
    Self { service: self.service.clone(), options: self.options }
  }
}

/// Mount the five CRUD routes for `T` under `base` (e.g. `"/students"`).
pub fn routes<T, G>(base: &str, state: ResourceState<T, G>) -> Router<()>
where
  T: Entity,
  G: Gateway<T> + 'static,
{
  Router::new()
    .route(base, get(list::<T, G>).post(create::<T, G>))
    .route(
      &format!("{base}/{{id}}"),
      get(get_one::<T, G>).put(update::<T, G>).delete(remove::<T, G>),
    )
    .with_state(state)
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /{resource}` — returns 201 + the stored record.
pub async fn create<T, G>(
  State(state): State<ResourceState<T, G>>,
  body: Result<Json<T::Draft>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  T: Entity,
  G: Gateway<T>,
{
  let Json(draft) = body?;
  let record = state
    .service
    .create(draft)
    .await
    .map_err(|e| ApiError::from_core(e, state.options))?;
  Ok((StatusCode::CREATED, Json(record)))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /{resource}`
pub async fn list<T, G>(
  State(state): State<ResourceState<T, G>>,
) -> Result<Json<Vec<T>>, ApiError>
where
  T: Entity,
  G: Gateway<T>,
{
  let records = state
    .service
    .list()
    .await
    .map_err(|e| ApiError::from_core(e, state.options))?;
  Ok(Json(records))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /{resource}/:id`
pub async fn get_one<T, G>(
  State(state): State<ResourceState<T, G>>,
  Path(id): Path<String>,
) -> Result<Json<T>, ApiError>
where
  T: Entity,
  G: Gateway<T>,
{
  let record = state
    .service
    .get(&id)
    .await
    .map_err(|e| ApiError::from_core(e, state.options))?;
  Ok(Json(record))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /{resource}/:id` — body carries only the fields to change.
pub async fn update<T, G>(
  State(state): State<ResourceState<T, G>>,
  Path(id): Path<String>,
  body: Result<Json<T::Patch>, JsonRejection>,
) -> Result<StatusCode, ApiError>
where
  T: Entity,
  G: Gateway<T>,
{
  // A missing record outranks a malformed body.
  let patch = match body {
    Ok(Json(patch)) => patch,
    Err(rejection) => {
      state
        .service
        .get(&id)
        .await
        .map_err(|e| ApiError::from_core(e, state.options))?;
      return Err(rejection.into());
    }
  };
  state
    .service
    .update(&id, patch)
    .await
    .map_err(|e| ApiError::from_core(e, state.options))?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /{resource}/:id`
pub async fn remove<T, G>(
  State(state): State<ResourceState<T, G>>,
  Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
  T: Entity,
  G: Gateway<T>,
{
  state
    .service
    .delete(&id)
    .await
    .map_err(|e| ApiError::from_core(e, state.options))?;
  Ok(StatusCode::NO_CONTENT)
}
