//! Cubic Bezier routing

use crate::path::{Path, Point3};

use super::{AnchorSide, EdgeStyle, RouteRequest, RouteResult};

/// Parameters of the Bezier router
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierOptions {
    /// Curvature for endpoints that sit behind each other
    pub curvature: f64,
    /// Unit-scale constant applied with the curvature
    pub curvature_scale: f64,
}

impl Default for BezierOptions {
    fn default() -> Self {
        Self::from(&EdgeStyle::default())
    }
}

impl From<&EdgeStyle> for BezierOptions {
    fn from(style: &EdgeStyle) -> Self {
        Self {
            curvature: style.curvature,
            curvature_scale: style.curvature_scale,
        }
    }
}

/// Distance of a control point from its endpoint
///
/// `distance` is how far the other endpoint lies ahead along the anchor
/// direction. Negative distances (endpoint behind) bend out by the square
/// root so the curve loops back smoothly.
pub fn control_offset(distance: f64, curvature: f64, curvature_scale: f64) -> f64 {
    if distance >= 0.0 {
        0.5 * distance
    } else {
        curvature * curvature_scale * (-distance).sqrt()
    }
}

/// Control point for an endpoint leaving along `side` towards `other`
pub fn control_point(side: AnchorSide, from: Point3, other: Point3, options: &BezierOptions) -> Point3 {
    let direction = side.direction();
    let distance = (other - from).dot(direction);
    from + direction * control_offset(distance, options.curvature, options.curvature_scale)
}

/// Route a single cubic Bezier between the endpoints
pub fn route_bezier(request: &RouteRequest, options: &BezierOptions) -> RouteResult {
    let source = request.source;
    let target = request.target;
    let control1 = control_point(request.source_side, source, target, options);
    let control2 = control_point(request.target_side, target, source, options);

    let mut path = Path::starting_at(source);
    path.bezier_curve_to(control1, control2, target);

    // Closed form of the curve at t = 0.5
    let label = source * 0.125 + control1 * 0.375 + control2 * 0.375 + target * 0.125;
    let offset = (label - source).abs();

    RouteResult {
        path,
        label,
        offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> BezierOptions {
        BezierOptions {
            curvature: 0.25,
            curvature_scale: 2.5,
        }
    }

    #[test]
    fn test_control_offset_ahead() {
        assert_eq!(control_offset(2.0, 0.25, 2.5), 1.0);
        assert_eq!(control_offset(0.0, 0.25, 2.5), 0.0);
    }

    #[test]
    fn test_control_offset_behind() {
        assert_eq!(control_offset(-4.0, 0.25, 2.5), 1.25);
        assert_eq!(control_offset(-4.0, 0.25, 25.0), 12.5);
    }

    #[test]
    fn test_source_control_point() {
        let request = RouteRequest::new(
            Point3::ZERO,
            AnchorSide::Right,
            Point3::new(2.0, 0.0, 0.0),
            AnchorSide::Left,
        );
        let result = route_bezier(&request, &options());
        match &result.path.segments()[0] {
            crate::path::Segment::CubicBezier {
                control1, control2, ..
            } => {
                assert_eq!(*control1, Point3::new(1.0, 0.0, 0.0));
                assert_eq!(*control2, Point3::new(1.0, 0.0, 0.0));
            }
            other => panic!("expected cubic bezier, got {:?}", other),
        }
        assert_eq!(result.label, Point3::new(1.0, 0.0, 0.0));
        assert_eq!(result.offset, Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_label_matches_curve_midpoint() {
        let request = RouteRequest::new(
            Point3::new(0.0, 0.0, 1.0),
            AnchorSide::Top,
            Point3::new(3.0, -2.0, 0.0),
            AnchorSide::Front,
        );
        let result = route_bezier(&request, &options());
        let mid = result.path.point_at_fraction(0.5).unwrap();
        assert!(mid.distance(result.label) < 1e-12);
    }

    #[test]
    fn test_control_point_along_z() {
        let control = control_point(
            AnchorSide::Back,
            Point3::ZERO,
            Point3::new(0.0, 0.0, -6.0),
            &options(),
        );
        assert_eq!(control, Point3::new(0.0, 0.0, -3.0));
    }

    #[test]
    fn test_center_side_keeps_control_on_endpoint() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(
            control_point(AnchorSide::Center, p, Point3::ZERO, &options()),
            p
        );
    }

    #[test]
    fn test_coincident_endpoints() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let request = RouteRequest::new(p, AnchorSide::Right, p, AnchorSide::Left);
        let result = route_bezier(&request, &options());
        assert_eq!(result.label, p);
        assert!(result.path.get_points(4).iter().all(|q| *q == p));
    }
}
