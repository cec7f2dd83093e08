//! Core types and trait definitions for the Registrar record service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod enrollment;
pub mod entity;
pub mod error;
pub mod professor;
pub mod service;
pub mod store;
pub mod student;
pub mod subject;

pub use entity::Entity;
pub use error::{Error, Result};
pub use service::ResourceService;
pub use store::Gateway;
