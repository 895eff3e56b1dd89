//! Plain geometry values shared by every visual component.
//!
//! Coordinates are `f64`; the corner arithmetic performed during interface
//! translation must stay exact up to the numeric type's natural precision,
//! so nothing in here rounds or clamps.

use std::fmt;
use std::ops::Add;

/// Scalar coordinate type used across the visual layer.
pub type Coord = f64;

/// A point in the drawing plane.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width and height of a component.
///
/// An extent is only meaningful when both sides are non-negative, but the
/// type does not enforce that: pre-existing components are allowed to report
/// garbage, and it is the translation layer's job to surface it.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Extent {
    pub width: Coord,
    pub height: Coord,
}

impl Extent {
    pub const fn new(width: Coord, height: Coord) -> Self {
        Self { width, height }
    }

    /// Whether both sides are non-negative.
    pub fn is_valid(&self) -> bool {
        self.width >= 0.0 && self.height >= 0.0
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl Add<Extent> for Point {
    type Output = Point;

    /// Component-wise addition: the far corner of a box anchored at `self`.
    fn add(self, extent: Extent) -> Point {
        Point::new(self.x + extent.width, self.y + extent.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_plus_extent_is_exact() {
        let origin = Point::new(1.5, -2.25);
        let extent = Extent::new(4.25, 8.0);
        assert_eq!(origin + extent, Point::new(5.75, 5.75));
    }

    #[test]
    fn extent_validity() {
        assert!(Extent::new(0.0, 0.0).is_valid());
        assert!(Extent::new(10.0, 2.5).is_valid());
        assert!(!Extent::new(-1.0, 2.0).is_valid());
        assert!(!Extent::new(1.0, -0.5).is_valid());
    }
}
