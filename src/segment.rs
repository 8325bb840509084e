// Copyright 2024 the Pixelpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path segments and whole-path transformations.

use crate::common::{cos1000, scale100, sin1000};
use crate::Point;

/// One command of a path.
///
/// All coordinates are absolute pixel positions; the parser resolves relative
/// commands and the horizontal/vertical shorthands while scanning, so
/// consumers never deal with deltas.
///
/// A valid path starts with a `MoveTo`, which establishes both the current
/// point and the start point that [`ClosePath`] returns to.
///
/// [`ClosePath`]: Segment::ClosePath
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Set the current point without emitting pixels.
    MoveTo(Point),
    /// A straight line from the current point.
    LineTo(Point),
    /// A cubic Bézier curve with two control points and an end point.
    CurveTo(Point, Point, Point),
    /// A straight line back to the start point of the subpath.
    ClosePath,
}

/// Apply a point transformation to every coordinate of every segment.
///
/// Control points of curves are transformed like end points.
pub fn transform_segments<F>(segments: &mut [Segment], mut f: F)
where
    F: FnMut(&mut Point),
{
    for seg in segments {
        match seg {
            Segment::MoveTo(p) | Segment::LineTo(p) => f(p),
            Segment::CurveTo(c1, c2, p) => {
                f(c1);
                f(c2);
                f(p);
            }
            Segment::ClosePath => {}
        }
    }
}

/// Scale all coordinates by `f100` percent, rounding to the nearest pixel.
///
/// A factor of 100 leaves the segments untouched.
pub fn scale_segments(segments: &mut [Segment], f100: i16) {
    if f100 != 100 {
        transform_segments(segments, |p| {
            p.x = scale100(p.x, f100);
            p.y = scale100(p.y, f100);
        });
    }
}

/// Move all coordinates by the given offset.
pub fn move_segments(segments: &mut [Segment], dx: i16, dy: i16) {
    if (dx, dy) != (0, 0) {
        transform_segments(segments, |p| *p = p.offset(dx, dy));
    }
}

/// Rotate all coordinates around the origin by `degrees` (clockwise in the
/// usual screen coordinate system where y grows downward).
///
/// Uses the table based ×1000 sine, truncating back to pixels, so repeated
/// rotation accumulates rounding error; prefer composing an [`Affine1000`]
/// when several transformations are combined.
///
/// [`Affine1000`]: crate::Affine1000
pub fn rotate_segments(segments: &mut [Segment], degrees: i32) {
    if degrees != 0 {
        let sin = sin1000(degrees);
        let cos = cos1000(degrees);
        transform_segments(segments, |p| {
            let x = i32::from(p.x);
            let y = i32::from(p.y);
            p.x = ((cos * x - sin * y) / 1000) as i16;
            p.y = ((sin * x + cos * y) / 1000) as i16;
        });
    }
}
