//! Link type for the derived co-star graph

use super::style::LinkStyle;
use serde::Serialize;

/// Highlight color applied to every link when its endpoint is hovered
pub const LINK_HIGHLIGHT_COLOR: &str = "lightblue";

/// A directed co-starring relationship within one movie
///
/// Source and target are actor names; the label is the movie title. The
/// style triple is flattened into the link on serialization, matching the
/// renderer's flat link-object shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphLink {
    /// Actor the link points from
    pub source: String,

    /// Actor the link points to
    pub target: String,

    /// Title of the movie both actors appear in
    pub label: String,

    /// Hover highlight color, constant across all links
    pub highlight_color: &'static str,

    /// Per-movie style triple, positional in the selection
    #[serde(flatten)]
    pub style: LinkStyle,
}

impl GraphLink {
    /// Create a new link between two co-stars of one movie
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        label: impl Into<String>,
        style: LinkStyle,
    ) -> Self {
        GraphLink {
            source: source.into(),
            target: target.into(),
            label: label.into(),
            highlight_color: LINK_HIGHLIGHT_COLOR,
            style,
        }
    }

    /// Whether the given node is one of this link's endpoints
    pub fn touches(&self, node: &str) -> bool {
        self.source == node || self.target == node
    }
}
