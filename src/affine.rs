// Copyright 2024 the Pixelpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-point affine transforms.

use core::ops::{Mul, MulAssign};

use crate::common::{cos1000, sin1000};
use crate::Point;

/// A 2D affine transform as a 3×3 integer matrix with all entries ×1000.
///
/// The identity has 1000 on the diagonal. Combining transformations into one
/// matrix avoids the rounding drift of transforming pixel coordinates
/// repeatedly; the single truncating ÷1000 happens when the matrix is applied
/// to a point.
///
/// Multiplication follows matrix convention: in `a * b`, `b` is applied
/// first. Building up a transform step by step therefore reads
///
/// ```
/// use pixelpath::{Affine1000, Point};
///
/// // scale first, then translate
/// let t = Affine1000::translate(5, 0) * Affine1000::scale(200);
/// assert_eq!(t.apply(Point::new(10, 10)), Point::new(25, 20));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Affine1000([[i32; 3]; 3]);

impl Affine1000 {
    /// The identity transform.
    pub const IDENTITY: Self = Self([[1000, 0, 0], [0, 1000, 0], [0, 0, 1000]]);

    /// A translation by whole pixels.
    pub const fn translate(dx: i16, dy: i16) -> Self {
        Self([
            [1000, 0, dx as i32 * 1000],
            [0, 1000, dy as i32 * 1000],
            [0, 0, 1000],
        ])
    }

    /// A uniform scale in percent; 100 is the identity.
    pub const fn scale(s100: i16) -> Self {
        let s1000 = s100 as i32 * 10;
        Self([[s1000, 0, 0], [0, s1000, 0], [0, 0, 1000]])
    }

    /// A rotation around the origin in degrees, clockwise on a display whose
    /// y axis grows downward.
    pub fn rotate(degrees: i32) -> Self {
        let sin = sin1000(degrees);
        let cos = cos1000(degrees);
        Self([[cos, -sin, 0], [sin, cos, 0], [0, 0, 1000]])
    }

    /// Transform a point, truncating the fixed-point result to pixels.
    pub fn apply(&self, p: Point) -> Point {
        let m = &self.0;
        let x = i64::from(p.x);
        let y = i64::from(p.y);
        let tx = i64::from(m[0][0]) * x + i64::from(m[0][1]) * y + i64::from(m[0][2]);
        let ty = i64::from(m[1][0]) * x + i64::from(m[1][1]) * y + i64::from(m[1][2]);
        Point::new((tx / 1000) as i16, (ty / 1000) as i16)
    }
}

impl Default for Affine1000 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Affine1000 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut r = [[0i32; 3]; 3];
        for (i, row) in r.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                let mut acc = 0i64;
                for k in 0..3 {
                    acc += i64::from(self.0[i][k]) * i64::from(rhs.0[k][j]);
                }
                *cell = (acc / 1000) as i32;
            }
        }
        Self(r)
    }
}

impl MulAssign for Affine1000 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_leaves_points_alone() {
        let p = Point::new(-7, 13);
        assert_eq!(Affine1000::IDENTITY.apply(p), p);
        assert_eq!(Affine1000::scale(100), Affine1000::IDENTITY);
    }

    #[test]
    fn translate_moves() {
        let t = Affine1000::translate(3, -4);
        assert_eq!(t.apply(Point::new(10, 10)), Point::new(13, 6));
    }

    #[test]
    fn scale_percent() {
        let t = Affine1000::scale(200);
        assert_eq!(t.apply(Point::new(5, 7)), Point::new(10, 14));
        let t = Affine1000::scale(50);
        assert_eq!(t.apply(Point::new(10, 10)), Point::new(5, 5));
    }

    #[test]
    fn rotate_quarter_turns() {
        let t = Affine1000::rotate(90);
        assert_eq!(t.apply(Point::new(10, 0)), Point::new(0, 10));
        assert_eq!(t.apply(Point::new(0, 10)), Point::new(-10, 0));
        let t = Affine1000::rotate(180);
        assert_eq!(t.apply(Point::new(10, 5)), Point::new(-10, -5));
    }

    #[test]
    fn composition_applies_rhs_first() {
        let scale_then_move = Affine1000::translate(5, 0) * Affine1000::scale(200);
        assert_eq!(scale_then_move.apply(Point::new(10, 10)), Point::new(25, 20));

        let move_then_scale = Affine1000::scale(200) * Affine1000::translate(5, 0);
        assert_eq!(move_then_scale.apply(Point::new(10, 10)), Point::new(30, 20));
    }

    #[test]
    fn composition_matches_sequential_application() {
        let a = Affine1000::rotate(90);
        let b = Affine1000::translate(7, 3);
        let p = Point::new(4, 9);
        assert_eq!((b * a).apply(p), b.apply(a.apply(p)));
    }
}
