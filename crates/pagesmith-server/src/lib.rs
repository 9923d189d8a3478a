//! HTTP server for Pagesmith.
//!
//! Serves a single-page chat UI at `/` and a small JSON API under it:
//! `POST /chat` runs one generation turn, `GET /transcript` returns the
//! conversation so far, `GET /health` is a liveness probe.
//!
//! The router is built by [`handlers::router`] from an [`AppState`] so
//! tests can mount it on an ephemeral port with a scripted model.

pub mod config;
pub mod error;
pub mod handlers;
pub mod page;

pub use config::ServerConfig;
pub use handlers::{router, AppState};
