//! Piecewise curve paths
//!
//! A [`Path`] is built fluently from a cursor (`move_to`, `line_to`, ...) and
//! then sampled into a polyline for rendering. Sampling is uniform per segment
//! in parameter space, not in arc length.

pub mod arc;
pub mod segment;
pub mod types;

pub use arc::EllipticalArc;
pub use segment::{Segment, MAX_DIVISIONS};
pub use types::{Axis, Bounds3, Point3};

/// An ordered sequence of contiguous curve segments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Vec<Segment>,
    cursor: Point3,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty path with the cursor at `start`
    pub fn starting_at(start: Point3) -> Self {
        let mut path = Self::new();
        path.move_to(start);
        path
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The construction cursor: where the next segment will start
    pub fn current_point(&self) -> Point3 {
        self.cursor
    }

    pub fn start_point(&self) -> Option<Point3> {
        self.segments.first().map(Segment::start)
    }

    pub fn end_point(&self) -> Option<Point3> {
        self.segments.last().map(Segment::end)
    }

    /// Move the cursor without emitting a segment
    pub fn move_to(&mut self, point: Point3) -> &mut Self {
        self.cursor = point;
        self
    }

    pub fn line_to(&mut self, point: Point3) -> &mut Self {
        self.push(Segment::line(self.cursor, point))
    }

    pub fn quadratic_curve_to(&mut self, control: Point3, point: Point3) -> &mut Self {
        self.push(Segment::QuadraticBezier {
            from: self.cursor,
            control,
            to: point,
        })
    }

    pub fn bezier_curve_to(&mut self, control1: Point3, control2: Point3, point: Point3) -> &mut Self {
        self.push(Segment::CubicBezier {
            from: self.cursor,
            control1,
            control2,
            to: point,
        })
    }

    /// Append a Catmull-Rom spline from the cursor through `points`
    pub fn spline_thru(&mut self, points: &[Point3]) -> &mut Self {
        if points.is_empty() {
            return self;
        }
        let mut knots = Vec::with_capacity(points.len() + 1);
        knots.push(self.cursor);
        knots.extend_from_slice(points);
        self.push(Segment::CatmullRom(knots))
    }

    /// Append an elliptical arc with absolute center
    ///
    /// When the path already has segments and the arc does not start at the
    /// cursor, a line bridges the gap first.
    pub fn ellipse_to(
        &mut self,
        center: Point3,
        radii: Point3,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
        rotation: f64,
    ) -> &mut Self {
        let arc = EllipticalArc::new(center, radii, start_angle, end_angle, clockwise, rotation);
        self.push_arc(arc)
    }

    /// Append a circular arc with absolute center in the x/y plane
    pub fn arc_to(
        &mut self,
        center: Point3,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    ) -> &mut Self {
        self.push_arc(EllipticalArc::circle(center, radius, start_angle, end_angle, clockwise))
    }

    /// Close the path with a line back to its first point
    pub fn close_path(&mut self) -> &mut Self {
        if let (Some(start), Some(end)) = (self.start_point(), self.end_point()) {
            if start != end {
                self.push(Segment::line(end, start));
            }
        }
        self
    }

    fn push_arc(&mut self, arc: EllipticalArc) -> &mut Self {
        let arc_start = arc.point_at(0.0);
        if !self.segments.is_empty() && arc_start != self.cursor {
            self.line_to(arc_start);
        }
        self.push(Segment::EllipticalArc(arc))
    }

    fn push(&mut self, segment: Segment) -> &mut Self {
        self.cursor = segment.end();
        self.segments.push(segment);
        self
    }

    /// Sample every segment at `divisions + 1` evenly spaced parameters
    ///
    /// Samples are concatenated segment by segment, so shared joints appear
    /// twice. An empty path yields no points. `divisions` is clamped to
    /// `1..=MAX_DIVISIONS`.
    pub fn get_points(&self, divisions: usize) -> Vec<Point3> {
        let divisions = divisions.clamp(1, MAX_DIVISIONS);
        let mut points = Vec::with_capacity(self.segments.len().saturating_mul(divisions + 1));
        for segment in &self.segments {
            points.extend(segment.sample(divisions));
        }
        points
    }

    /// Position at fraction `t` of the path, counting every segment as equally long
    ///
    /// Returns `None` for an empty path.
    pub fn point_at_fraction(&self, t: f64) -> Option<Point3> {
        let (segment, local) = self.locate(t)?;
        Some(segment.point_at(local))
    }

    /// Unit tangent at fraction `t`, using the same per-segment convention
    pub fn tangent_at_fraction(&self, t: f64) -> Option<Point3> {
        let (segment, local) = self.locate(t)?;
        Some(segment.tangent_at(local))
    }

    fn locate(&self, t: f64) -> Option<(&Segment, f64)> {
        let count = self.segments.len();
        if count == 0 {
            return None;
        }
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let scaled = t * count as f64;
        let index = (scaled.floor() as usize).min(count - 1);
        let local = scaled - index as f64;
        Some((&self.segments[index], local))
    }

    /// Approximate length of the sampled polyline
    pub fn length(&self, divisions: usize) -> f64 {
        self.get_points(divisions)
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum()
    }

    /// Axis-aligned bounds of the sampled polyline
    pub fn bounds(&self, divisions: usize) -> Option<Bounds3> {
        Bounds3::from_points(&self.get_points(divisions))
    }
}
