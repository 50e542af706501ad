//! Anchor sides and their outward directions

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::path::{Axis, Point3};

/// Face of a node an edge endpoint attaches to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorSide {
    Left,
    Right,
    Top,
    Bottom,
    Front,
    Back,
    #[default]
    Center,
}

/// Outward unit directions, indexed like [`AnchorSide::ALL`]
const DIRECTIONS: [Point3; 7] = [
    Point3::new(-1.0, 0.0, 0.0),
    Point3::new(1.0, 0.0, 0.0),
    Point3::new(0.0, 1.0, 0.0),
    Point3::new(0.0, -1.0, 0.0),
    Point3::new(0.0, 0.0, 1.0),
    Point3::new(0.0, 0.0, -1.0),
    Point3::new(0.0, 0.0, 0.0),
];

impl AnchorSide {
    pub const ALL: [AnchorSide; 7] = [
        AnchorSide::Left,
        AnchorSide::Right,
        AnchorSide::Top,
        AnchorSide::Bottom,
        AnchorSide::Front,
        AnchorSide::Back,
        AnchorSide::Center,
    ];

    /// Outward unit direction; zero for `Center`
    pub fn direction(self) -> Point3 {
        DIRECTIONS[self as usize]
    }

    /// Axis the side faces along, `None` for `Center`
    pub fn axis(self) -> Option<Axis> {
        match self {
            AnchorSide::Left | AnchorSide::Right => Some(Axis::X),
            AnchorSide::Top | AnchorSide::Bottom => Some(Axis::Y),
            AnchorSide::Front | AnchorSide::Back => Some(Axis::Z),
            AnchorSide::Center => None,
        }
    }

    pub fn opposite(self) -> AnchorSide {
        match self {
            AnchorSide::Left => AnchorSide::Right,
            AnchorSide::Right => AnchorSide::Left,
            AnchorSide::Top => AnchorSide::Bottom,
            AnchorSide::Bottom => AnchorSide::Top,
            AnchorSide::Front => AnchorSide::Back,
            AnchorSide::Back => AnchorSide::Front,
            AnchorSide::Center => AnchorSide::Center,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AnchorSide::Left => "left",
            AnchorSide::Right => "right",
            AnchorSide::Top => "top",
            AnchorSide::Bottom => "bottom",
            AnchorSide::Front => "front",
            AnchorSide::Back => "back",
            AnchorSide::Center => "center",
        }
    }

    /// Endpoint pushed outward along this side's direction
    pub fn gapped(self, point: Point3, offset: f64) -> Point3 {
        point + self.direction() * offset
    }

    /// Pick concrete sides for a pair of endpoints facing each other
    ///
    /// The axis with the largest delta wins; ties prefer x, then y. Coincident
    /// endpoints fall back to right/left.
    pub fn facing_pair(source: Point3, target: Point3) -> (AnchorSide, AnchorSide) {
        let delta = target - source;
        let abs = delta.abs();

        let side = if abs.x >= abs.y && abs.x >= abs.z {
            if delta.x >= 0.0 {
                AnchorSide::Right
            } else {
                AnchorSide::Left
            }
        } else if abs.y >= abs.z {
            if delta.y >= 0.0 {
                AnchorSide::Top
            } else {
                AnchorSide::Bottom
            }
        } else if delta.z >= 0.0 {
            AnchorSide::Front
        } else {
            AnchorSide::Back
        };

        (side, side.opposite())
    }

    /// Replace `Center` sides with the facing pair for these endpoints
    pub fn resolve_center(
        source_side: AnchorSide,
        target_side: AnchorSide,
        source: Point3,
        target: Point3,
    ) -> (AnchorSide, AnchorSide) {
        let (facing_source, facing_target) = Self::facing_pair(source, target);
        let source_side = if source_side == AnchorSide::Center {
            facing_source
        } else {
            source_side
        };
        let target_side = if target_side == AnchorSide::Center {
            facing_target
        } else {
            target_side
        };
        (source_side, target_side)
    }
}

impl fmt::Display for AnchorSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognised anchor side name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown anchor side '{0}' (expected left, right, top, bottom, front, back or center)")]
pub struct ParseSideError(pub String);

impl FromStr for AnchorSide {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnchorSide::ALL
            .into_iter()
            .find(|side| side.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSideError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_table() {
        assert_eq!(AnchorSide::Left.direction(), Point3::new(-1.0, 0.0, 0.0));
        assert_eq!(AnchorSide::Right.direction(), Point3::new(1.0, 0.0, 0.0));
        assert_eq!(AnchorSide::Top.direction(), Point3::new(0.0, 1.0, 0.0));
        assert_eq!(AnchorSide::Bottom.direction(), Point3::new(0.0, -1.0, 0.0));
        assert_eq!(AnchorSide::Front.direction(), Point3::new(0.0, 0.0, 1.0));
        assert_eq!(AnchorSide::Back.direction(), Point3::new(0.0, 0.0, -1.0));
        assert_eq!(AnchorSide::Center.direction(), Point3::ZERO);
    }

    #[test]
    fn test_directions_are_unit_or_zero() {
        for side in AnchorSide::ALL {
            let len = side.direction().length();
            assert!(len == 1.0 || (side == AnchorSide::Center && len == 0.0));
        }
    }

    #[test]
    fn test_opposite_directions_cancel() {
        for side in AnchorSide::ALL {
            assert_eq!(side.direction() + side.opposite().direction(), Point3::ZERO);
        }
    }

    #[test]
    fn test_gapped_point() {
        let p = AnchorSide::Bottom.gapped(Point3::new(1.0, 1.0, 1.0), 0.5);
        assert_eq!(p, Point3::new(1.0, 0.5, 1.0));
        assert_eq!(AnchorSide::Center.gapped(p, 10.0), p);
    }

    #[test]
    fn test_facing_pair() {
        let origin = Point3::ZERO;
        assert_eq!(
            AnchorSide::facing_pair(origin, Point3::new(5.0, 1.0, 0.0)),
            (AnchorSide::Right, AnchorSide::Left)
        );
        assert_eq!(
            AnchorSide::facing_pair(origin, Point3::new(1.0, -5.0, 0.0)),
            (AnchorSide::Bottom, AnchorSide::Top)
        );
        assert_eq!(
            AnchorSide::facing_pair(origin, Point3::new(0.0, 1.0, -3.0)),
            (AnchorSide::Back, AnchorSide::Front)
        );
        assert_eq!(
            AnchorSide::facing_pair(origin, origin),
            (AnchorSide::Right, AnchorSide::Left)
        );
    }

    #[test]
    fn test_resolve_center_keeps_explicit_sides() {
        let (s, t) = AnchorSide::resolve_center(
            AnchorSide::Top,
            AnchorSide::Center,
            Point3::ZERO,
            Point3::new(-4.0, 0.0, 0.0),
        );
        assert_eq!(s, AnchorSide::Top);
        assert_eq!(t, AnchorSide::Right);
    }

    #[test]
    fn test_parse_side() {
        assert_eq!("Front".parse::<AnchorSide>(), Ok(AnchorSide::Front));
        assert!("diagonal".parse::<AnchorSide>().is_err());
    }
}
