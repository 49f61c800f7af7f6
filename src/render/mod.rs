//! Render configuration for the external force-graph renderer
//!
//! The engine does no drawing itself. This module produces the configuration
//! object the rendering boundary consumes, including the focus-driven link
//! label visibility rule.

pub mod config;

// Re-export main types
pub use config::{resolve, D3Config, LinkConfig, NodeConfig, RenderConfig, Viewport};
