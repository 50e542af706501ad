//! Edge routing between anchored endpoints
//!
//! Each router is a pure function from a [`RouteRequest`] and an
//! [`EdgeStyle`] to a [`RouteResult`]. The [`RoutingMode`] selects the
//! strategy; [`RoutingMode::Custom`] defers to a caller-supplied
//! [`EdgeRouter`].

pub mod anchor;
pub mod bezier;
pub mod config;
pub mod custom;
pub mod error;
pub mod step;
pub mod straight;

use std::fmt;

use serde::Deserialize;
use tracing::debug;

pub use anchor::AnchorSide;
pub use bezier::{route_bezier, BezierOptions};
pub use config::{CenterOverride, EdgeStyle};
pub use custom::{EdgeRouter, UnprovidedRouter};
pub use error::RouteError;
pub use step::{route_step, StepOptions};
pub use straight::route_straight;

use crate::path::{Path, Point3};

/// Routing strategy for an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingMode {
    /// Straight line from source to target
    Straight,
    /// Orthogonal segments with sharp corners
    Step,
    /// Orthogonal segments with rounded corners
    SmoothStep,
    /// Single cubic Bezier curve
    #[default]
    Bezier,
    /// Caller-supplied router
    Custom,
}

impl RoutingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RoutingMode::Straight => "straight",
            RoutingMode::Step => "step",
            RoutingMode::SmoothStep => "smooth_step",
            RoutingMode::Bezier => "bezier",
            RoutingMode::Custom => "custom",
        }
    }
}

impl fmt::Display for RoutingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Endpoints of an edge and the sides they leave their nodes from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteRequest {
    pub source: Point3,
    pub target: Point3,
    pub source_side: AnchorSide,
    pub target_side: AnchorSide,
}

impl RouteRequest {
    pub fn new(source: Point3, source_side: AnchorSide, target: Point3, target_side: AnchorSide) -> Self {
        Self {
            source,
            target,
            source_side,
            target_side,
        }
    }

    /// Copy of this request with `Center` sides replaced by a facing pair
    pub fn with_resolved_sides(&self) -> Self {
        let (source_side, target_side) =
            AnchorSide::resolve_center(self.source_side, self.target_side, self.source, self.target);
        Self {
            source_side,
            target_side,
            ..*self
        }
    }
}

/// A routed edge
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    pub path: Path,
    /// Where to center the edge's text label
    pub label: Point3,
    /// Per-axis displacement of the label from the source
    pub offset: Point3,
}

/// Label center and per-axis half extent of the source→target box
///
/// Per axis the center is measured back from the target:
/// `target + offset` when the target lies below the source, `target - offset`
/// otherwise.
pub fn edge_center(source: Point3, target: Point3) -> (Point3, Point3) {
    let offset = (target - source).abs() * 0.5;
    let axis_center = |t: f64, s: f64, o: f64| if t < s { t + o } else { t - o };
    let center = Point3::new(
        axis_center(target.x, source.x, offset.x),
        axis_center(target.y, source.y, offset.y),
        axis_center(target.z, source.z, offset.z),
    );
    (center, offset)
}

/// Route an edge with the strategy named by `style.routing`
///
/// `custom` is consulted only for [`RoutingMode::Custom`]; without one the
/// request fails with [`RouteError::UnimplementedRouter`].
pub fn route(
    request: &RouteRequest,
    style: &EdgeStyle,
    custom: Option<&dyn EdgeRouter>,
) -> Result<RouteResult, RouteError> {
    let result = match style.routing {
        RoutingMode::Straight => route_straight(request.source, request.target),
        RoutingMode::Step => route_step(request, &StepOptions::from(style).with_corner_radius(0.0)),
        RoutingMode::SmoothStep => route_step(request, &StepOptions::from(style)),
        RoutingMode::Bezier => route_bezier(request, &BezierOptions::from(style)),
        RoutingMode::Custom => custom.unwrap_or(&UnprovidedRouter).route(request, style)?,
    };

    debug!(
        mode = %style.routing,
        segments = result.path.len(),
        label = ?result.label,
        "routed edge"
    );
    Ok(result)
}
