//! Straight-line routing

use crate::path::{Path, Point3};

use super::{edge_center, RouteResult};

/// Route a single straight line from `source` to `target`
pub fn route_straight(source: Point3, target: Point3) -> RouteResult {
    let mut path = Path::starting_at(source);
    path.line_to(target);
    let (label, offset) = edge_center(source, target);
    RouteResult {
        path,
        label,
        offset,
    }
}
