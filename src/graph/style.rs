//! Per-movie link styling
//!
//! Every selected movie gets one entry of a fixed palette, indexed by its
//! position in the selection. The palette length equals the selection
//! capacity, so every selected movie carries a distinct style. If the
//! capacity ever changes, the palette must be resized with it; there is no
//! wraparound policy.

use serde::Serialize;

/// Link curve shape understood by the force-graph renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CurveType {
    Straight,
    CurveSmooth,
    CurveFull,
}

/// SVG stroke-linecap value applied to the link stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeLinecap {
    Butt,
    Round,
    Square,
}

/// The style triple attached to every link of one selected movie
///
/// Serializes to the renderer's `{type, color, strokeLinecap}` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkStyle {
    /// Curve shape (`type` on the wire)
    #[serde(rename = "type")]
    pub curve: CurveType,

    /// Stroke color
    pub color: &'static str,

    /// Stroke line cap
    pub stroke_linecap: StrokeLinecap,
}

/// Fixed palette of link styles, indexed by selection position
pub const LINK_PALETTE: [LinkStyle; 8] = [
    LinkStyle { curve: CurveType::Straight, color: "#DB0160", stroke_linecap: StrokeLinecap::Butt },
    LinkStyle { curve: CurveType::CurveSmooth, color: "#AA0BDB", stroke_linecap: StrokeLinecap::Butt },
    LinkStyle { curve: CurveType::CurveFull, color: "#DB2D0B", stroke_linecap: StrokeLinecap::Butt },
    LinkStyle { curve: CurveType::Straight, color: "#16DB8D", stroke_linecap: StrokeLinecap::Round },
    LinkStyle { curve: CurveType::CurveSmooth, color: "#96DB16", stroke_linecap: StrokeLinecap::Round },
    LinkStyle { curve: CurveType::CurveFull, color: "#FF8CBD", stroke_linecap: StrokeLinecap::Round },
    LinkStyle { curve: CurveType::Straight, color: "#FFF599", stroke_linecap: StrokeLinecap::Square },
    LinkStyle { curve: CurveType::CurveSmooth, color: "#66FF6C", stroke_linecap: StrokeLinecap::Square },
];
