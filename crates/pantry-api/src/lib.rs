//! HTTP API for the pantry backend.
//!
//! This crate wires the identity and token stores from `pantry-auth` and
//! the ownership-scoped repositories into actix-web handlers. All resource
//! endpoints require a bearer token; the caller resolved from it is the
//! only owner whose records a request can see or create.

pub mod app;
pub mod error;
pub mod handlers;
pub mod media;
pub mod repositories;
pub mod routes;
pub mod validation;

pub use app::AppComponents;
pub use error::ApiError;
