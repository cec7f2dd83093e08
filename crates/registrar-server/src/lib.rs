//! HTTP server assembly for Registrar.
//!
//! Wraps the [`registrar_api`] router with CORS and request tracing, and
//! defines the configuration the binary reads at startup.

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  http::{HeaderValue, Method, header},
};
use registrar_api::ApiOptions;
use registrar_core::{
  Gateway, enrollment::Enrollment, professor::Professor, student::Student,
  subject::Subject,
};
use serde::Deserialize;
use tower_http::{
  cors::{AllowOrigin, CorsLayer},
  trace::TraceLayer,
};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `registrar.toml` and
/// `REGISTRAR_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:               String,
  pub port:               u16,
  pub store_path:         PathBuf,
  /// Origins allowed to call the API from a browser.
  pub allowed_origins:    Vec<String>,
  /// Report missing records as 500 rather than 404.
  pub collapse_not_found: bool,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:               "0.0.0.0".to_string(),
      port:               9123,
      store_path:         PathBuf::from("registrar.db"),
      allowed_origins:    vec!["http://localhost:5174".to_string()],
      collapse_not_found: false,
    }
  }
}

impl ServerConfig {
  pub fn api_options(&self) -> ApiOptions {
    ApiOptions { collapse_not_found: self.collapse_not_found }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router for `store`.
pub fn router<G>(store: Arc<G>, config: &ServerConfig) -> Router
where
  G: Gateway<Student>
    + Gateway<Subject>
    + Gateway<Professor>
    + Gateway<Enrollment>
    + 'static,
{
  registrar_api::api_router(store, config.api_options())
    .layer(cors_layer(&config.allowed_origins))
    .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
  let origins: Vec<HeaderValue> = origins
    .iter()
    .filter_map(|o| match HeaderValue::from_str(o) {
      Ok(v) => Some(v),
      Err(_) => {
        tracing::warn!(origin = %o, "ignoring invalid CORS origin");
        None
      }
    })
    .collect();

  CorsLayer::new()
    .allow_origin(AllowOrigin::list(origins))
    .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
    .allow_headers([header::CONTENT_TYPE])
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{body::Body, http::{Request, StatusCode}};
  use registrar_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  async fn app() -> Router {
    let store = SqliteStore::open_in_memory().await.unwrap();
    router(Arc::new(store), &ServerConfig::default())
  }

  #[tokio::test]
  async fn preflight_from_allowed_origin_is_granted() {
    let req = Request::builder()
      .method("OPTIONS")
      .uri("/students")
      .header(header::ORIGIN, "http://localhost:5174")
      .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
      .body(Body::empty())
      .unwrap();

    let resp = app().await.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
      resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
      "http://localhost:5174"
    );
  }

  #[tokio::test]
  async fn other_origins_get_no_cors_grant() {
    let req = Request::builder()
      .method("GET")
      .uri("/students")
      .header(header::ORIGIN, "http://evil.example")
      .body(Body::empty())
      .unwrap();

    let resp = app().await.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
  }

  #[test]
  fn defaults_match_the_legacy_deployment() {
    let cfg = ServerConfig::default();
    assert_eq!(cfg.port, 9123);
    assert_eq!(cfg.allowed_origins, ["http://localhost:5174"]);
    assert!(!cfg.collapse_not_found);
  }
}
