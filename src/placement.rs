//! Arrowhead and label placement on routed edges
//!
//! Turns a [`RouteResult`] into the pieces a renderer draws: the sampled
//! polyline, the label anchor and one placement per arrowhead.

use std::f64::consts::{FRAC_PI_2, PI};

use tracing::warn;

use crate::path::{Path, Point3};
use crate::routing::{self, EdgeRouter, EdgeStyle, RouteError, RouteRequest};

/// Position and in-plane rotation of an arrowhead glyph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowPlacement {
    pub position: Point3,
    /// Radians about the z axis; zero leaves a glyph pointing up (+y)
    pub rotation: f64,
    /// Unit heading of the glyph in 3D, zero on degenerate paths
    pub direction: Point3,
}

/// Rotation that turns an upward-pointing glyph along `behind → ahead`
pub fn tangent_rotation(behind: Point3, ahead: Point3) -> f64 {
    (ahead.y - behind.y).atan2(ahead.x - behind.x) + FRAC_PI_2
}

/// Arrow at `fraction` of the path, oriented along the path direction
///
/// The tangent is estimated between the samples `delta` before and after
/// `fraction`, clamped to the ends of the path. Fractions use the path's
/// equal-segment convention.
pub fn place_arrow(path: &Path, fraction: f64, delta: f64) -> Option<ArrowPlacement> {
    let position = path.point_at_fraction(fraction)?;
    let behind = path.point_at_fraction((fraction - delta).max(0.0))?;
    let ahead = path.point_at_fraction((fraction + delta).min(1.0))?;
    Some(ArrowPlacement {
        position,
        rotation: tangent_rotation(behind, ahead),
        direction: behind.direction_to(ahead),
    })
}

/// Everything needed to draw one edge
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeGeometry {
    pub polyline: Vec<Point3>,
    pub label: Point3,
    pub offset: Point3,
    pub thickness: f64,
    /// Points back into the source node
    pub start_arrow: Option<ArrowPlacement>,
    /// Points into the target node
    pub end_arrow: Option<ArrowPlacement>,
}

/// Route and sample one edge
///
/// `Center` sides are resolved to a facing pair first.
pub fn build_edge(
    request: &RouteRequest,
    style: &EdgeStyle,
    custom: Option<&dyn EdgeRouter>,
) -> Result<EdgeGeometry, RouteError> {
    let request = request.with_resolved_sides();
    let result = routing::route(&request, style, custom)?;

    let polyline = result.path.get_points(style.divisions);
    if polyline.is_empty() {
        return Err(RouteError::EmptyPath);
    }

    let start_arrow = if style.start_arrow {
        place_arrow(&result.path, 0.0, style.arrow_delta).map(|arrow| ArrowPlacement {
            rotation: arrow.rotation + PI,
            direction: -arrow.direction,
            ..arrow
        })
    } else {
        None
    };
    let end_arrow = if style.end_arrow {
        place_arrow(&result.path, 1.0, style.arrow_delta)
    } else {
        None
    };

    Ok(EdgeGeometry {
        polyline,
        label: result.label,
        offset: result.offset,
        thickness: style.thickness,
        start_arrow,
        end_arrow,
    })
}

/// Like [`build_edge`], but logs and drops edges that cannot be drawn
pub fn try_build_edge(
    request: &RouteRequest,
    style: &EdgeStyle,
    custom: Option<&dyn EdgeRouter>,
) -> Option<EdgeGeometry> {
    match build_edge(request, style, custom) {
        Ok(geometry) => Some(geometry),
        Err(err) => {
            warn!(%err, mode = %style.routing, "skipping edge");
            None
        }
    }
}
