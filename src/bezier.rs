// Copyright 2024 the Pixelpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier rasterization with fixed-point arithmetic.

use smallvec::SmallVec;

use crate::common::round1000;
use crate::Point;

/// Draw a cubic Bézier curve from `p0` to `p3` with control points `p1`, `p2`.
///
/// The curve is evaluated by nested linear interpolation (De Casteljau) at a
/// number of parameter values equal to the summed Manhattan distances between
/// consecutive control points — a cheap stand-in for arc length that keeps
/// adjacent samples about one pixel apart. All interpolation runs in ×1000
/// fixed-point arithmetic and samples are rounded, not truncated, to pixels.
///
/// A post-pass drops duplicate consecutive pixels and single-pixel staircase
/// corners left by the rounding, so the emitted sequence is duplicate-free
/// and 8-connected. The first pixel is exactly `p0` and the last exactly
/// `p3`; there is no guarantee of a minimal pixel count beyond that.
pub fn draw_cubic_bezier<F>(p0: Point, p1: Point, p2: Point, p3: Point, mut px: F)
where
    F: FnMut(i16, i16),
{
    let steps = p0.manhattan(p1) + p1.manhattan(p2) + p2.manhattan(p3);
    if steps == 0 {
        px(p0.x, p0.y);
        return;
    }

    let cx = [p0.x, p1.x, p2.x, p3.x].map(|v| i64::from(v) * 1000);
    let cy = [p0.y, p1.y, p2.y, p3.y].map(|v| i64::from(v) * 1000);

    let mut pts: SmallVec<[Point; 32]> = SmallVec::new();
    for i in 0..=steps {
        let t = i64::from(i) * 1000 / i64::from(steps);
        let x = round1000(eval1000(cx, t)) as i16;
        let y = round1000(eval1000(cy, t)) as i16;
        pts.push(Point::new(x, y));
    }

    simplify(&mut pts);

    for p in &pts {
        px(p.x, p.y);
    }
}

/// One De Casteljau evaluation at parameter `t` (0..=1000), ×1000 scaled.
fn eval1000(c: [i64; 4], t: i64) -> i64 {
    let ab = lerp1000(c[0], c[1], t);
    let bc = lerp1000(c[1], c[2], t);
    let cd = lerp1000(c[2], c[3], t);
    let abc = lerp1000(ab, bc, t);
    let bcd = lerp1000(bc, cd, t);
    lerp1000(abc, bcd, t)
}

#[inline]
fn lerp1000(a: i64, b: i64, t: i64) -> i64 {
    a + (b - a) * t / 1000
}

/// Remove duplicate pixels and single-pixel staircase corners.
///
/// A corner is a pixel reached by a unit step along one axis and left by a
/// unit step along the other; dropping it turns the two axis steps into one
/// diagonal step. End points are never removed.
fn simplify(pts: &mut SmallVec<[Point; 32]>) {
    pts.dedup();
    let mut i = 1;
    while i + 1 < pts.len() {
        let (a, b, c) = (pts[i - 1], pts[i], pts[i + 1]);
        if unit_axis_step(a, b) && unit_axis_step(b, c) && a.x != c.x && a.y != c.y {
            pts.remove(i);
        } else {
            i += 1;
        }
    }
}

#[inline]
fn unit_axis_step(a: Point, b: Point) -> bool {
    (a.x == b.x && (i32::from(a.y) - i32::from(b.y)).abs() == 1)
        || (a.y == b.y && (i32::from(a.x) - i32::from(b.x)).abs() == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(p0: Point, p1: Point, p2: Point, p3: Point) -> Vec<(i16, i16)> {
        let mut v = Vec::new();
        draw_cubic_bezier(p0, p1, p2, p3, |x, y| v.push((x, y)));
        v
    }

    fn pt(x: i16, y: i16) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn endpoints_exact() {
        let pts = collect(pt(0, 0), pt(5, 0), pt(10, 5), pt(10, 10));
        assert_eq!(*pts.first().unwrap(), (0, 0));
        assert_eq!(*pts.last().unwrap(), (10, 10));
    }

    #[test]
    fn collinear_controls_give_a_line() {
        let pts = collect(pt(0, 0), pt(3, 3), pt(7, 7), pt(10, 10));
        assert_eq!(*pts.first().unwrap(), (0, 0));
        assert_eq!(*pts.last().unwrap(), (10, 10));
        for &(x, y) in &pts {
            assert_eq!(x, y);
        }
    }

    #[test]
    fn degenerate_point() {
        let p = pt(4, 4);
        assert_eq!(collect(p, p, p, p), [(4, 4)]);
    }

    #[test]
    fn no_consecutive_duplicates() {
        let pts = collect(pt(0, 0), pt(0, 10), pt(10, 0), pt(10, 10));
        for pair in pts.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn output_is_connected() {
        let pts = collect(pt(0, 0), pt(20, 0), pt(20, 20), pt(0, 20));
        for pair in pts.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!((b.0 - a.0).abs() <= 1, "{a:?} -> {b:?}");
            assert!((b.1 - a.1).abs() <= 1, "{a:?} -> {b:?}");
        }
    }

    #[test]
    fn stays_in_control_bounding_box() {
        let pts = collect(pt(2, 3), pt(8, 3), pt(8, 12), pt(2, 12));
        for &(x, y) in &pts {
            assert!((2..=8).contains(&x) && (3..=12).contains(&y));
        }
    }
}
