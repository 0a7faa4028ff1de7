//! Pantry server library.
//!
//! The heavy lifting (configuration, logging, bootstrap, HTTP server
//! wiring) lives in dedicated modules so `main.rs` stays a thin
//! orchestrator.

pub mod commands;
pub mod config;
pub mod lifecycle;
pub mod logging;
pub mod middleware;
