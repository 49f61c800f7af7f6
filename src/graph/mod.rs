//! Co-star graph derivation
//!
//! This module implements the selection-to-graph core:
//! - a bounded, ordered, title-deduplicated selection of movies
//! - a fixed link-style palette indexed by selection position
//! - pure derivation of actor nodes and directed co-star links

pub mod derive;
pub mod link;
pub mod node;
pub mod selection;
pub mod style;

// Re-export main types
pub use derive::{derive, CostarGraph};
pub use link::{GraphLink, LINK_HIGHLIGHT_COLOR};
pub use node::GraphNode;
pub use selection::SelectionSet;
pub use style::{CurveType, LinkStyle, StrokeLinecap, LINK_PALETTE};
