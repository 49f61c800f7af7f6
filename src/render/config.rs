//! Renderer configuration and focus/visibility resolution

use crate::graph::GraphLink;
use serde::{Deserialize, Serialize};

/// Fill color of every node
pub const NODE_COLOR: &str = "lightgreen";

/// Node size passed through to the renderer
pub const NODE_SIZE: u32 = 200;

/// Stroke color of a highlighted node
pub const NODE_HIGHLIGHT_STROKE_COLOR: &str = "blue";

/// Repulsion constant for the force layout
pub const GRAVITY: i32 = -1500;

/// Measured size of the rendering surface
///
/// Supplied by the layout boundary; the engine copies it into the config
/// verbatim and performs no layout logic of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub height: u32,
    pub width: u32,
}

impl Viewport {
    /// Create a viewport from measured dimensions
    pub fn new(height: u32, width: u32) -> Self {
        Viewport { height, width }
    }
}

/// Node styling section of the render config
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeConfig {
    pub color: &'static str,
    pub size: u32,
    pub highlight_stroke_color: &'static str,
}

/// Link styling section of the render config
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkConfig {
    pub highlight_color: &'static str,
    pub render_label: bool,
}

/// Force-layout parameters
#[derive(Debug, Clone, Serialize)]
pub struct D3Config {
    pub gravity: i32,
}

/// The full configuration handed to the rendering boundary
///
/// Styling is fixed; only the surface size and the focused node vary. The
/// focused node feeds [`RenderConfig::label_visible`], the single piece of
/// behavior that depends on focus state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    pub node_highlight_behavior: bool,
    pub height: u32,
    pub width: u32,
    pub node: NodeConfig,
    pub link: LinkConfig,
    pub d3: D3Config,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focused_node: Option<String>,
}

impl RenderConfig {
    /// Whether a link's label should be drawn
    ///
    /// True iff a node is focused and it is one of the link's endpoints.
    pub fn label_visible(&self, link: &GraphLink) -> bool {
        match &self.focused_node {
            Some(focused) => link.touches(focused),
            None => false,
        }
    }
}

/// Build the render config for the current focus state and surface size
pub fn resolve(focused_node: Option<&str>, viewport: Viewport) -> RenderConfig {
    RenderConfig {
        node_highlight_behavior: true,
        height: viewport.height,
        width: viewport.width,
        node: NodeConfig {
            color: NODE_COLOR,
            size: NODE_SIZE,
            highlight_stroke_color: NODE_HIGHLIGHT_STROKE_COLOR,
        },
        link: LinkConfig {
            highlight_color: crate::graph::LINK_HIGHLIGHT_COLOR,
            render_label: true,
        },
        d3: D3Config { gravity: GRAVITY },
        focused_node: focused_node.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphLink, LINK_PALETTE};

    fn link(source: &str, target: &str) -> GraphLink {
        GraphLink::new(source, target, "Aladdin", LINK_PALETTE[0])
    }

    #[test]
    fn test_viewport_is_copied_verbatim() {
        let config = resolve(None, Viewport::new(480, 640));
        assert_eq!(config.height, 480);
        assert_eq!(config.width, 640);
    }

    #[test]
    fn test_no_focus_hides_every_label() {
        let config = resolve(None, Viewport::default());
        assert!(!config.label_visible(&link("a", "b")));
        assert!(!config.label_visible(&link("b", "a")));
    }

    #[test]
    fn test_focus_shows_labels_on_touching_links_only() {
        let config = resolve(Some("a"), Viewport::default());

        assert!(config.label_visible(&link("a", "b")));
        assert!(config.label_visible(&link("c", "a")));
        assert!(!config.label_visible(&link("b", "c")));
    }

    #[test]
    fn test_fixed_styling_sections() {
        let config = resolve(None, Viewport::default());

        assert!(config.node_highlight_behavior);
        assert_eq!(config.node.color, "lightgreen");
        assert_eq!(config.node.size, 200);
        assert_eq!(config.node.highlight_stroke_color, "blue");
        assert_eq!(config.link.highlight_color, "lightblue");
        assert!(config.link.render_label);
        assert_eq!(config.d3.gravity, -1500);
    }

    #[test]
    fn test_config_serialization_shape() {
        let config = resolve(Some("Robin Williams"), Viewport::new(300, 400));
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["nodeHighlightBehavior"], true);
        assert_eq!(json["height"], 300);
        assert_eq!(json["width"], 400);
        assert_eq!(json["node"]["highlightStrokeColor"], "blue");
        assert_eq!(json["link"]["renderLabel"], true);
        assert_eq!(json["d3"]["gravity"], -1500);
        assert_eq!(json["focusedNode"], "Robin Williams");

        // Unset focus is omitted entirely
        let json = serde_json::to_value(resolve(None, Viewport::default())).unwrap();
        assert!(json.get("focusedNode").is_none());
    }
}
