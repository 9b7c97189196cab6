//! Core geometry types: Point, Size, Orientation.
//!
//! Scene-graph coordinates are floating point (display objects may sit at
//! fractional positions), so everything here is `f32`. [`Orientation`] doubles
//! as the axis selector used by the scrollable control to read and write one
//! component of a point or size without touching the other.

use std::ops::{Add, Mul, Neg, Sub};

// ---------------------------------------------------------------------------
// Orientation
// ---------------------------------------------------------------------------

/// Primary axis of a control.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Lowercase name, used to build orientation-qualified skin keys
    /// such as `"horizontal_track"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    /// The other axis.
    pub const fn cross(self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D position in container space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The component along `axis`.
    #[inline]
    pub const fn along(self, axis: Orientation) -> f32 {
        match axis {
            Orientation::Horizontal => self.x,
            Orientation::Vertical => self.y,
        }
    }

    /// Overwrite the component along `axis`, leaving the other untouched.
    #[inline]
    pub fn set_along(&mut self, axis: Orientation, value: f32) {
        match axis {
            Orientation::Horizontal => self.x = value,
            Orientation::Vertical => self.y = value,
        }
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point { x: -self.x, y: -self.y }
    }
}

impl Mul<f32> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f32) -> Point {
        Point { x: self.x * rhs, y: self.y * rhs }
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A 2D extent (width x height).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// A zero-sized size.
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The extent along `axis`.
    #[inline]
    pub const fn along(self, axis: Orientation) -> f32 {
        match axis {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }

    /// Overwrite the extent along `axis`.
    #[inline]
    pub fn set_along(&mut self, axis: Orientation, value: f32) {
        match axis {
            Orientation::Horizontal => self.width = value,
            Orientation::Vertical => self.height = value,
        }
    }

    /// Whether the point lies inside `0..width` and `0..height`.
    #[inline]
    pub fn contains(self, point: Point) -> bool {
        point.x >= 0.0 && point.x < self.width && point.y >= 0.0 && point.y < self.height
    }
}

impl From<(u16, u16)> for Size {
    /// Terminal dimensions (columns, rows).
    fn from((width, height): (u16, u16)) -> Self {
        Size::new(f32::from(width), f32::from(height))
    }
}

// ===========================================================================
// Tests
// ===========================================================================
