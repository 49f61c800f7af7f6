//! HTTP boundary for the rendering frontend
//!
//! Exposes the session over JSON: catalog search, selection mutation, the
//! node-click focus callback, viewport measurement, and the derived graph
//! plus render config.

pub mod handler;
pub mod server;

// Re-export main types
pub use server::{router, HttpServer};
