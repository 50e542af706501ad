//! Curve segments that make up a path

use super::arc::EllipticalArc;
use super::types::Point3;

/// Step used for finite-difference tangents
const TANGENT_DELTA: f64 = 1e-4;

/// Upper bound on per-segment sample divisions
pub const MAX_DIVISIONS: usize = 1 << 16;

/// A single curve segment
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Straight line between two points
    Line { from: Point3, to: Point3 },
    /// Quadratic Bezier curve
    QuadraticBezier {
        from: Point3,
        control: Point3,
        to: Point3,
    },
    /// Cubic Bezier curve
    CubicBezier {
        from: Point3,
        control1: Point3,
        control2: Point3,
        to: Point3,
    },
    /// Elliptical arc
    EllipticalArc(EllipticalArc),
    /// Uniform Catmull-Rom spline passing through every point
    CatmullRom(Vec<Point3>),
}

impl Segment {
    pub fn line(from: Point3, to: Point3) -> Self {
        Segment::Line { from, to }
    }

    /// Point at parameter `t` in `[0, 1]`
    pub fn point_at(&self, t: f64) -> Point3 {
        match self {
            Segment::Line { from, to } => {
                // Exact endpoints, no interpolation round-off
                if t == 0.0 {
                    *from
                } else if t == 1.0 {
                    *to
                } else {
                    from.lerp(*to, t)
                }
            }
            Segment::QuadraticBezier { from, control, to } => {
                quadratic_bezier(*from, *control, *to, t)
            }
            Segment::CubicBezier {
                from,
                control1,
                control2,
                to,
            } => cubic_bezier(*from, *control1, *control2, *to, t),
            Segment::EllipticalArc(arc) => arc.point_at(t),
            Segment::CatmullRom(points) => catmull_rom_at(points, t),
        }
    }

    pub fn start(&self) -> Point3 {
        self.point_at(0.0)
    }

    pub fn end(&self) -> Point3 {
        self.point_at(1.0)
    }

    /// Unit tangent at `t`, estimated by a central difference
    ///
    /// Zero when the segment is degenerate around `t`.
    pub fn tangent_at(&self, t: f64) -> Point3 {
        let t0 = (t - TANGENT_DELTA).max(0.0);
        let t1 = (t + TANGENT_DELTA).min(1.0);
        self.point_at(t0).direction_to(self.point_at(t1))
    }

    /// `divisions + 1` samples evenly spaced in parameter space
    ///
    /// `divisions` is clamped to `1..=MAX_DIVISIONS`.
    pub fn sample(&self, divisions: usize) -> impl Iterator<Item = Point3> + '_ {
        let divisions = divisions.clamp(1, MAX_DIVISIONS);
        (0..=divisions).map(move |i| self.point_at(i as f64 / divisions as f64))
    }
}

fn quadratic_bezier(p0: Point3, p1: Point3, p2: Point3, t: f64) -> Point3 {
    let mt = 1.0 - t;
    p0 * (mt * mt) + p1 * (2.0 * mt * t) + p2 * (t * t)
}

fn cubic_bezier(p0: Point3, p1: Point3, p2: Point3, p3: Point3, t: f64) -> Point3 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let mt3 = mt2 * mt;

    p0 * mt3 + p1 * (3.0 * mt2 * t) + p2 * (3.0 * mt * t2) + p3 * t3
}

/// Uniform Catmull-Rom through `points`, clamping the phantom neighbours at
/// both ends to the end points themselves
fn catmull_rom_at(points: &[Point3], t: f64) -> Point3 {
    match points {
        [] => Point3::ZERO,
        [only] => *only,
        _ => {
            let last = points.len() - 1;
            let p = last as f64 * t;
            let index = (p.floor().max(0.0) as usize).min(last);
            let weight = p - index as f64;

            let p0 = points[index.saturating_sub(1)];
            let p1 = points[index];
            let p2 = points[(index + 1).min(last)];
            let p3 = points[(index + 2).min(last)];

            catmull_rom(weight, p0, p1, p2, p3)
        }
    }
}

fn catmull_rom(t: f64, p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> Point3 {
    let v0 = (p2 - p0) * 0.5;
    let v1 = (p3 - p1) * 0.5;
    let t2 = t * t;
    let t3 = t * t2;

    (p1 * 2.0 - p2 * 2.0 + v0 + v1) * t3 + (p1 * -3.0 + p2 * 3.0 - v0 * 2.0 - v1) * t2 + v0 * t + p1
}
