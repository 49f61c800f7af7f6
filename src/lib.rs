//! Costar Graph Engine
//!
//! An in-memory selection-to-graph derivation engine: search a static movie
//! catalog, curate a small ordered selection of movies, and derive a
//! co-starring actor graph with deterministic per-movie styling plus a
//! render configuration for an external force-graph component.
//!
//! # Architecture
//!
//! - `catalog`: static movie records, lenient JSON loading, substring search
//!   with pagination
//! - `graph`: bounded deduplicated selection, fixed style palette, pure
//!   node/link derivation
//! - `render`: viewport handling, renderer configuration, focus-driven link
//!   label visibility
//! - `session`: the explicit state container tying the above together with
//!   full synchronous re-derivation on every transition
//! - `http`: a thin axum boundary serving the engine to a rendering frontend
//!
//! # Example Usage
//!
//! ```rust
//! use costar::{Catalog, MovieRecord, Session, Viewport};
//!
//! let catalog = Catalog::from_records(vec![
//!     MovieRecord::new("Aladdin", ["Scott Weinger", "Robin Williams", "Linda Larkin"]),
//!     MovieRecord::new("Mulan", ["Ming-Na Wen", "Eddie Murphy"]),
//! ]);
//! let mut session = Session::new(catalog);
//!
//! // Search, then select
//! let aladdin = session.search("alad", 9, 1)[0].clone();
//! session.add_movie(aladdin);
//! assert_eq!(session.graph().node_count(), 3);
//! assert_eq!(session.graph().link_count(), 4);
//!
//! // Focus a node; only its links keep their labels
//! session.set_viewport(Viewport::new(600, 800));
//! session.set_focus(Some("Robin Williams".to_string()));
//! let visible = session
//!     .graph()
//!     .links
//!     .iter()
//!     .filter(|link| session.config().label_visible(link))
//!     .count();
//! assert_eq!(visible, 3);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod graph;
pub mod http;
pub mod render;
pub mod session;

// Re-export main types for convenience
pub use catalog::{Catalog, CatalogError, CatalogResult, MovieRecord};
pub use graph::{
    derive, CostarGraph, CurveType, GraphLink, GraphNode, LinkStyle, SelectionSet, StrokeLinecap,
    LINK_HIGHLIGHT_COLOR, LINK_PALETTE,
};
pub use http::{router, HttpServer};
pub use render::{resolve, RenderConfig, Viewport};
pub use session::Session;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
