//! Orthogonal ("step") routing with rounded corners
//!
//! Endpoints are first pushed out from their nodes by the gap offset. The
//! route then runs along the axis the source side faces:
//!
//! - facing sides (right → left, top → bottom, ...) split once at a center
//!   coordinate, giving two intermediate points;
//! - same or mixed sides turn through a single L corner.
//!
//! Every interior corner is rounded with a short quadratic bend no larger
//! than half of either adjacent leg.

use tracing::trace;

use crate::path::{Axis, Path, Point3};

use super::{edge_center, AnchorSide, CenterOverride, EdgeStyle, RouteRequest, RouteResult};

/// Parameters of the step router
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOptions {
    /// Largest corner bend; zero gives sharp corners
    pub corner_radius: f64,
    /// Distance endpoints are pushed out from their node
    pub offset: f64,
    /// Minimum distance kept between an endpoint and its corrected gapped point
    pub gap_margin: f64,
    /// Explicit center of the split for facing sides
    pub center: CenterOverride,
}

impl Default for StepOptions {
    fn default() -> Self {
        Self::from(&EdgeStyle::default())
    }
}

impl From<&EdgeStyle> for StepOptions {
    fn from(style: &EdgeStyle) -> Self {
        Self {
            corner_radius: style.corner_radius,
            offset: style.gap_offset,
            gap_margin: style.gap_margin,
            center: style.center,
        }
    }
}

impl StepOptions {
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }
}

/// Unrounded waypoints of a step route and the label center
#[derive(Debug, Clone, PartialEq)]
pub struct StepPoints {
    /// `[source, source gapped, intermediate..., target gapped, target]`
    pub points: Vec<Point3>,
    pub label: Point3,
}

/// Route orthogonal segments between the endpoints
pub fn route_step(request: &RouteRequest, options: &StepOptions) -> RouteResult {
    let StepPoints { points, label } = step_points(request, options);
    trace!(?points, "step waypoints");

    let path = round_corners(&points, options.corner_radius);
    let (_, offset) = edge_center(request.source, request.target);
    RouteResult {
        path,
        label,
        offset,
    }
}

/// Axis the route leaves the source along, and which way it heads
fn main_direction(source_side: AnchorSide, source_gapped: Point3, target_gapped: Point3) -> (Axis, f64) {
    let axis = source_side.axis().unwrap_or(Axis::Y);
    let direction = if source_gapped.get(axis) < target_gapped.get(axis) {
        1.0
    } else {
        -1.0
    };
    (axis, direction)
}

/// Axis across the main one: the target side's axis when it differs,
/// otherwise y for x routes and x for the others
fn cross_axis(main: Axis, target_side: AnchorSide) -> Axis {
    match target_side.axis() {
        Some(axis) if axis != main => axis,
        _ => match main {
            Axis::X | Axis::Z => Axis::Y,
            Axis::Y => Axis::X,
        },
    }
}

/// The axis that is neither `main` nor `cross`
fn depth_axis(main: Axis, cross: Axis) -> Axis {
    match (main, cross) {
        (Axis::X, Axis::Y) | (Axis::Y, Axis::X) => Axis::Z,
        (Axis::X, Axis::Z) | (Axis::Z, Axis::X) => Axis::Y,
        _ => Axis::X,
    }
}

/// Extra waypoint settling `depth` first when the leg `from → to` would
/// otherwise change two coordinates at once
fn depth_turn(from: Point3, to: Point3, depth: Axis) -> Option<Point3> {
    let turn = from.with(depth, to.get(depth));
    (turn != from && turn != to).then_some(turn)
}

/// Compute the unrounded waypoints and label of a step route
pub fn step_points(request: &RouteRequest, options: &StepOptions) -> StepPoints {
    let RouteRequest {
        source,
        target,
        source_side,
        target_side,
    } = *request;
    let offset = options.offset;
    let source_dir = source_side.direction();
    let target_dir = target_side.direction();
    let source_gapped = source_side.gapped(source, offset);
    let target_gapped = target_side.gapped(target, offset);

    let (axis, current) = main_direction(source_side, source_gapped, target_gapped);
    let source_leads = source_dir.get(axis) == current;
    let (default_center, _) = edge_center(source, target);

    let mut source_gap_offset = Point3::ZERO;
    let mut target_gap_offset = Point3::ZERO;

    let (waypoints, label) = if source_dir.get(axis) * target_dir.get(axis) == -1.0 {
        let center = Point3::new(
            options.center.x.unwrap_or(default_center.x),
            options.center.y.unwrap_or(default_center.y),
            options.center.z.unwrap_or(default_center.z),
        );
        let split = if source_leads {
            axis
        } else {
            cross_axis(axis, target_side)
        };
        let from = source_gapped.with(split, center.get(split));
        let to = target_gapped.with(split, center.get(split));
        let depth = depth_axis(axis, cross_axis(axis, target_side));
        let mut waypoints = vec![from];
        waypoints.extend(depth_turn(from, to, depth));
        waypoints.push(to);
        (waypoints, center)
    } else {
        let main_from_target = source_gapped.with(axis, target_gapped.get(axis));
        let main_from_source = target_gapped.with(axis, source_gapped.get(axis));
        let mut corner = if source_leads {
            main_from_target
        } else {
            main_from_source
        };

        if source_side == target_side {
            // Endpoints closer than the offset would put the corner on top of
            // a gapped point; pull that gapped point back towards its node
            let diff = (source.get(axis) - target.get(axis)).abs();
            if diff <= offset {
                let gap = (offset - options.gap_margin).min(offset - diff);
                if source_leads {
                    let sign = if source_gapped.get(axis) > source.get(axis) { -1.0 } else { 1.0 };
                    source_gap_offset = source_gap_offset.with(axis, sign * gap);
                } else {
                    let sign = if target_gapped.get(axis) > target.get(axis) { -1.0 } else { 1.0 };
                    target_gap_offset = target_gap_offset.with(axis, sign * gap);
                }
            }
        } else {
            let cross = cross_axis(axis, target_side);
            let same_dir = source_dir.get(axis) == target_dir.get(cross);
            let source_cross = source_gapped.get(cross);
            let target_cross = target_gapped.get(cross);
            let source_above = source_cross > target_cross;
            let source_below = source_cross < target_cross;
            let flip = if source_dir.get(axis) == 1.0 {
                (!same_dir && source_above) || (same_dir && source_below)
            } else {
                (!same_dir && source_below) || (same_dir && source_above)
            };
            if flip {
                corner = main_from_source;
            }
        }

        let source_end = source_gapped + source_gap_offset;
        let target_end = target_gapped + target_gap_offset;
        let label = label_on_longest_leg(source_end, target_end, corner);

        let depth = depth_axis(axis, cross_axis(axis, target_side));
        let mut waypoints = Vec::with_capacity(3);
        waypoints.extend(depth_turn(source_end, corner, depth));
        waypoints.push(corner);
        waypoints.extend(depth_turn(corner, target_end, depth));
        (waypoints, label)
    };

    let mut points = Vec::with_capacity(waypoints.len() + 4);
    points.push(source);
    points.push(source_gapped + source_gap_offset);
    points.extend(waypoints);
    points.push(target_gapped + target_gap_offset);
    points.push(target);

    StepPoints { points, label }
}

/// Center the label along the axis with the longest leg through `corner`
///
/// Ties resolve x before y before z.
fn label_on_longest_leg(source: Point3, target: Point3, corner: Point3) -> Point3 {
    let extent = |axis: Axis| {
        (source.get(axis) - corner.get(axis))
            .abs()
            .max((target.get(axis) - corner.get(axis)).abs())
    };
    let (x, y, z) = (extent(Axis::X), extent(Axis::Y), extent(Axis::Z));

    let axis = if x >= y && x >= z {
        Axis::X
    } else if y >= z {
        Axis::Y
    } else {
        Axis::Z
    };

    corner.with(axis, (source.get(axis) + target.get(axis)) / 2.0)
}

/// Join `points` with lines, rounding every turn
pub fn round_corners(points: &[Point3], radius: f64) -> Path {
    let mut path = Path::new();
    let Some((&first, rest)) = points.split_first() else {
        return path;
    };
    let Some(&last) = rest.last() else {
        return path;
    };

    path.move_to(first);
    for window in points.windows(3) {
        push_bend(&mut path, window[0], window[1], window[2], radius);
    }
    path.line_to(last);
    path
}

/// Whether `a`, `b` and `c` lie on one axis-aligned line
fn is_straight(a: Point3, b: Point3, c: Point3) -> bool {
    Axis::ALL
        .iter()
        .filter(|&&axis| a.shares(b, axis) && b.shares(c, axis))
        .count()
        >= 2
}

/// Append the corner at `b` between legs `a → b` and `b → c`
fn push_bend(path: &mut Path, a: Point3, b: Point3, c: Point3, radius: f64) {
    let bend = (a.distance(b) / 2.0)
        .min(b.distance(c) / 2.0)
        .min(radius.max(0.0));

    if is_straight(a, b, c) {
        path.line_to(b);
        return;
    }

    let incoming = a.direction_to(b);
    let outgoing = b.direction_to(c);
    path.line_to(b - incoming * bend)
        .quadratic_curve_to(b, b + outgoing * bend);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Segment;

    fn options(offset: f64, radius: f64) -> StepOptions {
        StepOptions {
            corner_radius: radius,
            offset,
            gap_margin: 1.0,
            center: CenterOverride::default(),
        }
    }

    fn request(
        source: Point3,
        source_side: AnchorSide,
        target: Point3,
        target_side: AnchorSide,
    ) -> RouteRequest {
        RouteRequest::new(source, source_side, target, target_side)
    }

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    #[test]
    fn test_facing_sides_split_vertically() {
        let req = request(p(0.0, 0.0), AnchorSide::Right, p(100.0, 50.0), AnchorSide::Left);
        let step = step_points(&req, &options(20.0, 5.0));
        assert_eq!(
            step.points,
            vec![
                p(0.0, 0.0),
                p(20.0, 0.0),
                p(50.0, 0.0),
                p(50.0, 50.0),
                p(80.0, 50.0),
                p(100.0, 50.0),
            ]
        );
        assert_eq!(step.label, p(50.0, 25.0));
    }

    #[test]
    fn test_facing_sides_going_backwards_split_horizontally() {
        // Source leaves right but the target sits to its left
        let req = request(p(100.0, 0.0), AnchorSide::Right, p(0.0, 100.0), AnchorSide::Left);
        let step = step_points(&req, &options(20.0, 5.0));
        assert_eq!(
            step.points,
            vec![
                p(100.0, 0.0),
                p(120.0, 0.0),
                p(120.0, 50.0),
                p(-20.0, 50.0),
                p(-20.0, 100.0),
                p(0.0, 100.0),
            ]
        );
        assert_eq!(step.label, p(50.0, 50.0));
    }

    #[test]
    fn test_center_override_moves_split() {
        let req = request(p(0.0, 0.0), AnchorSide::Right, p(100.0, 50.0), AnchorSide::Left);
        let mut opts = options(20.0, 5.0);
        opts.center.x = Some(30.0);
        let step = step_points(&req, &opts);
        assert_eq!(step.points[2], p(30.0, 0.0));
        assert_eq!(step.points[3], p(30.0, 50.0));
        assert_eq!(step.label, p(30.0, 25.0));
    }

    #[test]
    fn test_facing_vertical_sides() {
        // Top faces +y, so a target above with a bottom side faces it
        let req = request(p(0.0, 0.0), AnchorSide::Top, p(40.0, 100.0), AnchorSide::Bottom);
        let step = step_points(&req, &options(10.0, 5.0));
        assert_eq!(
            step.points,
            vec![
                p(0.0, 0.0),
                p(0.0, 10.0),
                p(0.0, 50.0),
                p(40.0, 50.0),
                p(40.0, 90.0),
                p(40.0, 100.0),
            ]
        );
    }

    #[test]
    fn test_mixed_sides_single_corner() {
        let req = request(p(0.0, 0.0), AnchorSide::Right, p(100.0, 100.0), AnchorSide::Bottom);
        let step = step_points(&req, &options(20.0, 5.0));
        // Out to the right, then up into the target's bottom
        assert_eq!(
            step.points,
            vec![
                p(0.0, 0.0),
                p(20.0, 0.0),
                p(100.0, 0.0),
                p(100.0, 80.0),
                p(100.0, 100.0),
            ]
        );
        // Horizontal leg (80) equals the vertical one (80); x wins the tie
        assert_eq!(step.label, p(60.0, 0.0));
    }

    #[test]
    fn test_mixed_sides_flip() {
        let req = request(p(0.0, 100.0), AnchorSide::Right, p(100.0, 0.0), AnchorSide::Bottom);
        let step = step_points(&req, &options(20.0, 5.0));
        // Target's bottom faces away from the source: go down first
        assert_eq!(step.points[2], p(20.0, -20.0));
        assert_eq!(step.points.len(), 5);
    }

    #[test]
    fn test_same_side_gap_correction() {
        // Both on the right side, nearly aligned on x
        let req = request(p(0.0, 0.0), AnchorSide::Right, p(5.0, 100.0), AnchorSide::Right);
        let step = step_points(&req, &options(20.0, 5.0));
        // diff = 5 <= 20, gap = min(19, 15) = 15 pulls the source gap back
        assert_eq!(step.points[1], p(5.0, 0.0));
        assert_eq!(step.points[2], p(25.0, 0.0));
        assert_eq!(step.points[3], p(25.0, 100.0));
    }

    #[test]
    fn test_same_side_gap_correction_on_target() {
        let req = request(p(5.0, 0.0), AnchorSide::Right, p(0.0, 100.0), AnchorSide::Right);
        let step = step_points(&req, &options(20.0, 5.0));
        assert_eq!(
            step.points,
            vec![
                p(5.0, 0.0),
                p(25.0, 0.0),
                p(25.0, 100.0),
                p(5.0, 100.0),
                p(0.0, 100.0),
            ]
        );
    }

    #[test]
    fn test_same_side_far_apart_has_no_correction() {
        let req = request(p(0.0, 0.0), AnchorSide::Right, p(100.0, 100.0), AnchorSide::Right);
        let step = step_points(&req, &options(20.0, 5.0));
        assert_eq!(
            step.points,
            vec![
                p(0.0, 0.0),
                p(20.0, 0.0),
                p(120.0, 0.0),
                p(120.0, 100.0),
                p(100.0, 100.0),
            ]
        );
    }

    #[test]
    fn test_front_back_route_along_z() {
        let req = request(
            Point3::ZERO,
            AnchorSide::Front,
            Point3::new(0.0, 4.0, 10.0),
            AnchorSide::Back,
        );
        let step = step_points(&req, &options(1.0, 0.5));
        assert_eq!(step.points[1], Point3::new(0.0, 0.0, 1.0));
        assert_eq!(step.points[2], Point3::new(0.0, 0.0, 5.0));
        assert_eq!(step.points[3], Point3::new(0.0, 4.0, 5.0));
        assert_eq!(step.points[4], Point3::new(0.0, 4.0, 9.0));
    }

    #[test]
    fn test_facing_sides_settle_depth_before_cross() {
        let req = request(
            Point3::ZERO,
            AnchorSide::Right,
            Point3::new(5.0, 3.0, 2.0),
            AnchorSide::Left,
        );
        let step = step_points(&req, &options(1.0, 0.5));
        assert_eq!(
            step.points,
            vec![
                Point3::ZERO,
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(2.5, 0.0, 0.0),
                Point3::new(2.5, 0.0, 2.0),
                Point3::new(2.5, 3.0, 2.0),
                Point3::new(4.0, 3.0, 2.0),
                Point3::new(5.0, 3.0, 2.0),
            ]
        );
    }

    #[test]
    fn test_mixed_sides_enter_target_along_its_axis() {
        // Back faces -z, so the last leg runs along z into the target
        let req = request(
            Point3::ZERO,
            AnchorSide::Right,
            Point3::new(10.0, -4.0, 6.0),
            AnchorSide::Back,
        );
        let step = step_points(&req, &options(1.0, 0.5));
        assert_eq!(
            step.points,
            vec![
                Point3::ZERO,
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(10.0, 0.0, 0.0),
                Point3::new(10.0, -4.0, 0.0),
                Point3::new(10.0, -4.0, 5.0),
                Point3::new(10.0, -4.0, 6.0),
            ]
        );
    }

    #[test]
    fn test_depth_axis() {
        assert_eq!(depth_axis(Axis::X, Axis::Y), Axis::Z);
        assert_eq!(depth_axis(Axis::Z, Axis::X), Axis::Y);
        assert_eq!(depth_axis(Axis::Y, Axis::Z), Axis::X);
    }

    #[test]
    fn test_label_prefers_z_only_when_strictly_longest() {
        let corner = Point3::ZERO;
        let label = label_on_longest_leg(Point3::new(0.0, 0.0, 8.0), Point3::new(2.0, 0.0, 0.0), corner);
        assert_eq!(label, Point3::new(0.0, 0.0, 4.0));

        let tie = label_on_longest_leg(Point3::new(0.0, 3.0, 0.0), Point3::new(0.0, 0.0, 3.0), corner);
        assert_eq!(tie, Point3::new(0.0, 1.5, 0.0));
    }

    #[test]
    fn test_bend_clamps_to_half_segment() {
        let mut path = Path::starting_at(p(0.0, 0.0));
        push_bend(&mut path, p(0.0, 0.0), p(0.2, 0.0), p(0.2, 5.0), 100.0);
        assert_eq!(path.len(), 2);
        assert_eq!(path.segments()[0], Segment::line(p(0.0, 0.0), p(0.1, 0.0)));
        assert_eq!(
            path.segments()[1],
            Segment::QuadraticBezier {
                from: p(0.1, 0.0),
                control: p(0.2, 0.0),
                to: p(0.2, 0.1),
            }
        );
    }

    #[test]
    fn test_bend_uses_radius_when_legs_are_long() {
        let mut path = Path::starting_at(p(0.0, 0.0));
        push_bend(&mut path, p(0.0, 0.0), p(10.0, 0.0), p(10.0, -10.0), 2.0);
        assert_eq!(path.current_point(), p(10.0, -2.0));
    }

    #[test]
    fn test_straight_corner_is_plain_line() {
        let mut path = Path::starting_at(p(0.0, 0.0));
        push_bend(&mut path, p(0.0, 0.0), p(1.0, 0.0), p(3.0, 0.0), 10.0);
        assert_eq!(path.segments(), &[Segment::line(p(0.0, 0.0), p(1.0, 0.0))]);
    }

    #[test]
    fn test_round_corners_segment_layout() {
        let points = [p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(20.0, 10.0)];
        let path = round_corners(&points, 1.0);
        // bend (line + quad), bend (line + quad), final line
        assert_eq!(path.len(), 5);
        assert_eq!(path.end_point(), Some(p(20.0, 10.0)));
    }

    #[test]
    fn test_round_corners_short_input() {
        assert!(round_corners(&[], 1.0).is_empty());
        assert!(round_corners(&[p(1.0, 1.0)], 1.0).is_empty());
        assert_eq!(round_corners(&[p(0.0, 0.0), p(1.0, 0.0)], 1.0).len(), 1);
    }

    #[test]
    fn test_coincident_endpoints_do_not_panic() {
        for source_side in AnchorSide::ALL {
            for target_side in AnchorSide::ALL {
                let req = request(p(1.0, 1.0), source_side, p(1.0, 1.0), target_side);
                let result = route_step(&req, &options(0.0, 5.0));
                let points = result.path.get_points(2);
                assert!(!points.is_empty());
                assert!(points.iter().all(|q| q.x.is_finite() && q.y.is_finite() && q.z.is_finite()));
            }
        }
    }
}
