//! Core geometry types: Axis, Offset, Size, Region, Spacing.
//!
//! All values are pixels stored as `f64`. Relative sizing produces fractional
//! pixel values and they are handed to the host unrounded.

use std::ops::Add;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Axis
// ---------------------------------------------------------------------------

/// A layout direction.
///
/// A container's *main* axis is the one it stacks children along; the *cross*
/// axis is the other one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Left to right (x / width).
    Horizontal,
    /// Top to bottom (y / height).
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    #[inline]
    pub const fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

// ---------------------------------------------------------------------------
// Offset
// ---------------------------------------------------------------------------

/// A 2D position or displacement in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    /// The origin.
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    /// Create a new offset.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The component along `axis`.
    #[inline]
    pub const fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Set the component along `axis`.
    #[inline]
    pub fn set_along(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::Horizontal => self.x = value,
            Axis::Vertical => self.y = value,
        }
    }
}

impl Add for Offset {
    type Output = Offset;
    #[inline]
    fn add(self, rhs: Offset) -> Offset {
        Offset { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A 2D size in pixels (width x height).
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The extent along `axis`.
    #[inline]
    pub const fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// A rectangle defined by position and size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Region {
    /// An empty region at the origin.
    pub const EMPTY: Region = Region { x: 0.0, y: 0.0, width: 0.0, height: 0.0 };

    /// Create a new region.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Build a region from its top-left corner and size.
    #[inline]
    pub const fn from_parts(offset: Offset, size: Size) -> Self {
        Self { x: offset.x, y: offset.y, width: size.width, height: size.height }
    }
}

// ---------------------------------------------------------------------------
// Spacing
// ---------------------------------------------------------------------------

/// Spacing around the four sides of a rectangle, used for margin and padding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Spacing {
    /// Zero spacing on all sides.
    pub const ZERO: Spacing = Spacing { top: 0.0, right: 0.0, bottom: 0.0, left: 0.0 };

    /// Create spacing with explicit values for each side (CSS order).
    #[inline]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    /// All four sides set to the same value.
    #[inline]
    pub const fn all(value: f64) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }

    /// Total horizontal extent: `left + right`.
    #[inline]
    pub fn width(self) -> f64 {
        self.left + self.right
    }

    /// Total vertical extent: `top + bottom`.
    #[inline]
    pub fn height(self) -> f64 {
        self.top + self.bottom
    }

    /// The side facing the start of `axis` (left or top).
    #[inline]
    pub const fn leading(self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// The side facing the end of `axis` (right or bottom).
    #[inline]
    pub const fn trailing(self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }

    /// `leading + trailing` along `axis`.
    #[inline]
    pub fn along(self, axis: Axis) -> f64 {
        self.leading(axis) + self.trailing(axis)
    }

    /// The gap between two neighbours along `axis` once their facing margins
    /// collapse: the larger of `self`'s trailing and `next`'s leading side.
    #[inline]
    pub fn collapse(self, next: Spacing, axis: Axis) -> f64 {
        self.trailing(axis).max(next.leading(axis))
    }
}

impl Add for Spacing {
    type Output = Spacing;
    #[inline]
    fn add(self, rhs: Spacing) -> Spacing {
        Spacing {
            top: self.top + rhs.top,
            right: self.right + rhs.right,
            bottom: self.bottom + rhs.bottom,
            left: self.left + rhs.left,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_cross() {
        assert_eq!(Axis::Horizontal.cross(), Axis::Vertical);
        assert_eq!(Axis::Vertical.cross(), Axis::Horizontal);
    }

    #[test]
    fn offset_along_and_set() {
        let mut o = Offset::new(3.0, 7.0);
        assert_eq!(o.along(Axis::Horizontal), 3.0);
        assert_eq!(o.along(Axis::Vertical), 7.0);
        o.set_along(Axis::Vertical, 1.5);
        assert_eq!(o, Offset::new(3.0, 1.5));
    }

    #[test]
    fn offset_add() {
        let a = Offset::new(1.0, 2.0);
        let b = Offset::new(3.0, 4.0);
        assert_eq!(a + b, Offset::new(4.0, 6.0));
    }

    #[test]
    fn size_along() {
        let s = Size::new(20.0, 10.0);
        assert_eq!(s.along(Axis::Horizontal), 20.0);
        assert_eq!(s.along(Axis::Vertical), 10.0);
    }

    #[test]
    fn region_from_parts() {
        let r = Region::from_parts(Offset::new(5.0, 10.0), Size::new(20.0, 30.0));
        assert_eq!(r, Region::new(5.0, 10.0, 20.0, 30.0));
    }

    #[test]
    fn spacing_constructors() {
        assert_eq!(Spacing::new(1.0, 2.0, 3.0, 4.0).left, 4.0);
        assert_eq!(Spacing::all(2.0), Spacing::new(2.0, 2.0, 2.0, 2.0));
        assert_eq!(Spacing::default(), Spacing::ZERO);
    }

    #[test]
    fn spacing_axis_sides() {
        let s = Spacing::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(s.leading(Axis::Horizontal), 4.0);
        assert_eq!(s.trailing(Axis::Horizontal), 2.0);
        assert_eq!(s.leading(Axis::Vertical), 1.0);
        assert_eq!(s.trailing(Axis::Vertical), 3.0);
        assert_eq!(s.along(Axis::Horizontal), s.width());
        assert_eq!(s.along(Axis::Vertical), s.height());
    }

    #[test]
    fn spacing_collapse_takes_larger_side() {
        let upper = Spacing::new(0.0, 0.0, 4.0, 0.0);
        let lower = Spacing::new(6.0, 0.0, 0.0, 0.0);
        assert_eq!(upper.collapse(lower, Axis::Vertical), 6.0);
        assert_eq!(lower.collapse(upper, Axis::Vertical), 0.0);
    }

    #[test]
    fn spacing_add() {
        let a = Spacing::new(3.0, 4.0, 3.0, 4.0);
        let b = Spacing::new(15.0, 0.0, 1.0, 0.0);
        assert_eq!(a + b, Spacing::new(18.0, 4.0, 4.0, 4.0));
    }
}
