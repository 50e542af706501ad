//! Style parameters for routing and sampling edges

use serde::Deserialize;

use super::RoutingMode;

/// Optional per-axis override of the step router's split center
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CenterOverride {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

/// Style parameters for one edge
///
/// Defaults are in scene units (a node is roughly one unit across), not
/// pixels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EdgeStyle {
    /// How the edge is routed
    pub routing: RoutingMode,

    /// Largest corner bend of the smooth step router
    pub corner_radius: f64,

    /// Distance endpoints are pushed out from their node before routing
    pub gap_offset: f64,

    /// Bezier curvature for endpoints that face away from each other
    pub curvature: f64,

    /// Unit-scale constant multiplied into the bezier curvature
    /// (25 for pixel coordinates, 2.5 for scene coordinates)
    pub curvature_scale: f64,

    /// Minimum gap kept between an endpoint and its gapped point when both
    /// endpoints share a side (1 for pixel coordinates)
    pub gap_margin: f64,

    /// Optional explicit center for the step router's split
    pub center: CenterOverride,

    /// Samples per segment when converting the path to a polyline
    pub divisions: usize,

    /// Rendered line thickness
    pub thickness: f64,

    /// Fraction on either side of an arrow used to estimate its tangent
    pub arrow_delta: f64,

    /// Draw an arrowhead at the source end
    pub start_arrow: bool,

    /// Draw an arrowhead at the target end
    pub end_arrow: bool,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            routing: RoutingMode::default(),
            corner_radius: 0.5,
            gap_offset: 2.0,
            curvature: 0.25,
            curvature_scale: 2.5,
            gap_margin: 0.1,
            center: CenterOverride::default(),
            divisions: 12,
            thickness: 0.05,
            arrow_delta: 0.05,
            start_arrow: false,
            end_arrow: true,
        }
    }
}

impl EdgeStyle {
    /// Create a style with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the routing mode
    pub fn with_routing(mut self, routing: RoutingMode) -> Self {
        self.routing = routing;
        self
    }

    /// Set the corner radius of step routes
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Set the endpoint gap offset
    pub fn with_gap_offset(mut self, offset: f64) -> Self {
        self.gap_offset = offset;
        self
    }

    /// Set the bezier curvature
    pub fn with_curvature(mut self, curvature: f64) -> Self {
        self.curvature = curvature;
        self
    }

    /// Use pixel-scale constants (curvature scale 25, gap margin 1)
    pub fn with_pixel_units(mut self) -> Self {
        self.curvature_scale = 25.0;
        self.gap_margin = 1.0;
        self
    }

    /// Set the explicit split center
    pub fn with_center(mut self, center: CenterOverride) -> Self {
        self.center = center;
        self
    }

    /// Set the samples per segment
    pub fn with_divisions(mut self, divisions: usize) -> Self {
        self.divisions = divisions;
        self
    }

    /// Set the line thickness
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Enable or disable the two arrowheads
    pub fn with_arrows(mut self, start: bool, end: bool) -> Self {
        self.start_arrow = start;
        self.end_arrow = end;
        self
    }
}
