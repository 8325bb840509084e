// Copyright 2024 the Pixelpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A 2D pixel coordinate.

use core::fmt;

/// A 2D point on a pixel display.
///
/// Coordinates are signed 16-bit integers, the native addressing range of the
/// small displays this crate targets.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// The x coordinate.
    pub x: i16,
    /// The y coordinate.
    pub y: i16,
}

impl Point {
    /// The point (0, 0).
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new `Point` with the provided `x` and `y` coordinates.
    #[inline]
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Return this point translated by `(dx, dy)`.
    #[inline]
    pub const fn offset(self, dx: i16, dy: i16) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Manhattan distance to `other`.
    ///
    /// This is the cheap curve-length heuristic used to choose the number of
    /// interpolation steps when flattening a Bézier curve.
    #[inline]
    pub fn manhattan(self, other: Self) -> i32 {
        let dx = (i32::from(other.x) - i32::from(self.x)).abs();
        let dy = (i32::from(other.y) - i32::from(self.y)).abs();
        dx + dy
    }
}

impl From<(i16, i16)> for Point {
    #[inline]
    fn from(v: (i16, i16)) -> Self {
        Self { x: v.0, y: v.1 }
    }
}

impl From<Point> for (i16, i16) {
    #[inline]
    fn from(v: Point) -> (i16, i16) {
        (v.x, v.y)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}/{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset() {
        assert_eq!(Point::new(3, 4).offset(-3, 6), Point::new(0, 10));
    }

    #[test]
    fn manhattan() {
        assert_eq!(Point::ZERO.manhattan(Point::new(3, -4)), 7);
        assert_eq!(Point::new(5, 5).manhattan(Point::new(5, 5)), 0);
        assert_eq!(
            Point::new(-2, 9).manhattan(Point::new(7, 1)),
            Point::new(7, 1).manhattan(Point::new(-2, 9))
        );
    }
}
