//! Parametric elliptical arcs in 3D

use std::f64::consts::TAU;

use super::types::Point3;

/// An elliptical arc around `center`
///
/// The z coordinate follows the sine term, so an arc with a non-zero `radii.z`
/// tilts out of the x/y plane instead of needing a separate parametrization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipticalArc {
    pub center: Point3,
    pub radii: Point3,
    /// Start angle in radians
    pub start_angle: f64,
    /// End angle in radians
    pub end_angle: f64,
    pub clockwise: bool,
    /// Rotation about the local z axis, applied to x and y only
    pub rotation: f64,
}

impl EllipticalArc {
    pub fn new(
        center: Point3,
        radii: Point3,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
        rotation: f64,
    ) -> Self {
        Self {
            center,
            radii,
            start_angle,
            end_angle,
            clockwise,
            rotation,
        }
    }

    /// A circular arc in the x/y plane
    pub fn circle(center: Point3, radius: f64, start_angle: f64, end_angle: f64, clockwise: bool) -> Self {
        Self::new(
            center,
            Point3::new(radius, radius, 0.0),
            start_angle,
            end_angle,
            clockwise,
            0.0,
        )
    }

    /// Signed angular sweep covered by the arc
    ///
    /// Lies in `[0, 2π]`, or `[-2π, 0]` for clockwise arcs. Equal start and end
    /// angles sweep nothing; a difference that wraps to zero is a full turn.
    pub fn sweep(&self) -> f64 {
        let raw = self.end_angle - self.start_angle;
        if !raw.is_finite() {
            return 0.0;
        }
        let same_points = raw.abs() < f64::EPSILON;
        let mut delta = raw.rem_euclid(TAU);

        if delta < f64::EPSILON {
            delta = if same_points { 0.0 } else { TAU };
        }

        if self.clockwise && !same_points {
            delta = if delta == TAU { -TAU } else { delta - TAU };
        }

        delta
    }

    /// Point at parameter `t` in `[0, 1]`
    pub fn point_at(&self, t: f64) -> Point3 {
        let angle = self.start_angle + t * self.sweep();
        let (sin, cos) = angle.sin_cos();

        let mut x = self.center.x + self.radii.x * cos;
        let mut y = self.center.y + self.radii.y * sin;
        let z = self.center.z + self.radii.z * sin;

        if self.rotation != 0.0 {
            let (rot_sin, rot_cos) = self.rotation.sin_cos();
            let tx = x - self.center.x;
            let ty = y - self.center.y;
            x = tx * rot_cos - ty * rot_sin + self.center.x;
            y = tx * rot_sin + ty * rot_cos + self.center.y;
        }

        Point3::new(x, y, z)
    }
}
