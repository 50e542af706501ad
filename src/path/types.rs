//! Core value types shared by paths and routers

use std::ops::{Add, Mul, Neg, Sub};

use serde::Deserialize;

/// A point (or direction) in 3D space
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ZERO: Point3 = Point3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Coordinate along a single axis
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Copy of this point with one coordinate replaced
    pub fn with(mut self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
        self
    }

    pub fn dot(&self, other: Point3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn length(&self) -> f64 {
        self.dot(*self).sqrt()
    }

    pub fn distance(&self, other: Point3) -> f64 {
        (other - *self).length()
    }

    /// Unit vector from this point towards `other`, or zero when they coincide
    pub fn direction_to(&self, other: Point3) -> Point3 {
        let delta = other - *self;
        let len = delta.length();
        if len == 0.0 {
            Point3::ZERO
        } else {
            delta * (1.0 / len)
        }
    }

    pub fn lerp(&self, other: Point3, t: f64) -> Point3 {
        *self + (other - *self) * t
    }

    /// Component-wise absolute value
    pub fn abs(&self) -> Point3 {
        Point3::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    pub fn min(&self, other: Point3) -> Point3 {
        Point3::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    pub fn max(&self, other: Point3) -> Point3 {
        Point3::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    /// True when the two points agree on `axis`
    pub fn shares(&self, other: Point3, axis: Axis) -> bool {
        self.get(axis) == other.get(axis)
    }
}

impl Add for Point3 {
    type Output = Point3;

    fn add(self, rhs: Point3) -> Point3 {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Point3;

    fn sub(self, rhs: Point3) -> Point3 {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Point3 {
    type Output = Point3;

    fn mul(self, rhs: f64) -> Point3 {
        Point3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Point3 {
    type Output = Point3;

    fn neg(self) -> Point3 {
        Point3::new(-self.x, -self.y, -self.z)
    }
}

impl From<[f64; 3]> for Point3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Point3::new(x, y, z)
    }
}

/// One of the three coordinate axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

/// Axis-aligned bounds of a set of points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds3 {
    pub min: Point3,
    pub max: Point3,
}

impl Bounds3 {
    /// Smallest box containing every point, or `None` for an empty set
    pub fn from_points(points: &[Point3]) -> Option<Bounds3> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Bounds3 {
            min: *first,
            max: *first,
        };
        for p in rest {
            bounds.min = bounds.min.min(*p);
            bounds.max = bounds.max.max(*p);
        }
        Some(bounds)
    }

    pub fn size(&self) -> Point3 {
        self.max - self.min
    }

    pub fn center(&self) -> Point3 {
        self.min.lerp(self.max, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_accessors() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(p.get(Axis::X), 1.0);
        assert_eq!(p.get(Axis::Z), 3.0);
        assert_eq!(p.with(Axis::Y, 7.0), Point3::new(1.0, 7.0, 3.0));
    }

    #[test]
    fn test_direction_to_coincident_is_zero() {
        let p = Point3::new(1.0, 1.0, 1.0);
        assert_eq!(p.direction_to(p), Point3::ZERO);
    }

    #[test]
    fn test_direction_to_unit() {
        let d = Point3::ZERO.direction_to(Point3::new(0.0, 5.0, 0.0));
        assert_eq!(d, Point3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_bounds_from_points() {
        let bounds = Bounds3::from_points(&[
            Point3::new(1.0, -1.0, 0.0),
            Point3::new(-2.0, 3.0, 0.5),
        ])
        .unwrap();
        assert_eq!(bounds.min, Point3::new(-2.0, -1.0, 0.0));
        assert_eq!(bounds.max, Point3::new(1.0, 3.0, 0.5));
        assert_eq!(bounds.center(), Point3::new(-0.5, 1.0, 0.25));
        assert!(Bounds3::from_points(&[]).is_none());
    }
}
