// Copyright 2024 the Pixelpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer line rasterization.

/// Draw a straight line, emitting every pixel through `px`.
///
/// Both end points are included, every step emits exactly one pixel, and the
/// output runs from `(x0, y0)` towards `(x1, y1)`. Axis-parallel lines take a
/// straight-run fast path; everything else is the classic Bresenham walk
/// with a doubled error term, entirely in integer arithmetic.
///
/// A zero-length line emits a single pixel.
///
/// # Examples
///
/// ```
/// use pixelpath::draw_line;
///
/// let mut pixels = Vec::new();
/// draw_line(0, 0, 3, 0, |x, y| pixels.push((x, y)));
/// assert_eq!(pixels, [(0, 0), (1, 0), (2, 0), (3, 0)]);
/// ```
pub fn draw_line<F>(x0: i16, y0: i16, x1: i16, y1: i16, mut px: F)
where
    F: FnMut(i16, i16),
{
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx: i16 = if x0 < x1 { 1 } else { -1 };
    let sy: i16 = if y0 < y1 { 1 } else { -1 };

    if x0 == x1 {
        // vertical run
        let end = y1 + sy;
        let mut y = y0;
        while y != end {
            px(x0, y);
            y += sy;
        }
    } else if y0 == y1 {
        // horizontal run
        let end = x1 + sx;
        let mut x = x0;
        while x != end {
            px(x, y0);
            x += sx;
        }
    } else {
        let mut err = dx - dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            px(x, y);
            if x == x1 && y == y1 {
                break;
            }
            let err2 = err << 1;
            if err2 > -dy {
                err -= dy;
                x += sx;
            }
            if err2 < dx {
                err += dx;
                y += sy;
            }
        }
    }
}

/// Draw a line of the given width in pixels.
///
/// The wide variant walks the same Bresenham path as [`draw_line`] and emits
/// a perpendicular run of `width` pixels at every step: spread across x for
/// steep slopes, across y for shallow ones. This is a cheap approximation of
/// a stroked line, not an exact offset outline; the ends are not capped.
///
/// A width of 1 or less falls back to [`draw_line`].
pub fn draw_wide_line<F>(x0: i16, y0: i16, x1: i16, y1: i16, width: i16, mut px: F)
where
    F: FnMut(i16, i16),
{
    let w = width.abs();
    if w <= 1 {
        return draw_line(x0, y0, x1, y1, px);
    }
    let w2 = w / 2;

    if x0 == x1 {
        let sy: i16 = if y0 < y1 { 1 } else { -1 };
        let end = y1 + sy;
        for x in (x0 - w2)..(x0 - w2 + w) {
            let mut y = y0;
            while y != end {
                px(x, y);
                y += sy;
            }
        }
    } else if y0 == y1 {
        let sx: i16 = if x0 < x1 { 1 } else { -1 };
        let end = x1 + sx;
        for y in (y0 - w2)..(y0 - w2 + w) {
            let mut x = x0;
            while x != end {
                px(x, y);
                x += sx;
            }
        }
    } else {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx: i16 = if x0 < x1 { 1 } else { -1 };
        let sy: i16 = if y0 < y1 { 1 } else { -1 };
        let steep = dx < dy;
        let mut err = dx - dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            for o in 0..w {
                if steep {
                    px(x - w2 + o, y);
                } else {
                    px(x, y - w2 + o);
                }
            }
            if x == x1 && y == y1 {
                break;
            }
            let err2 = err << 1;
            if err2 > -dy {
                err -= dy;
                x += sx;
            }
            if err2 < dx {
                err += dx;
                y += sy;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(x0: i16, y0: i16, x1: i16, y1: i16) -> Vec<(i16, i16)> {
        let mut v = Vec::new();
        draw_line(x0, y0, x1, y1, |x, y| v.push((x, y)));
        v
    }

    #[test]
    fn horizontal_exact() {
        let pts = collect(0, 0, 10, 0);
        assert_eq!(pts.len(), 11);
        for (i, &(x, y)) in pts.iter().enumerate() {
            assert_eq!((x, y), (i as i16, 0));
        }
    }

    #[test]
    fn vertical_exact() {
        let pts = collect(0, 0, 0, 10);
        assert_eq!(pts.len(), 11);
        for (i, &(x, y)) in pts.iter().enumerate() {
            assert_eq!((x, y), (0, i as i16));
        }
    }

    #[test]
    fn reversed_runs() {
        assert_eq!(collect(3, 0, 0, 0), [(3, 0), (2, 0), (1, 0), (0, 0)]);
        assert_eq!(collect(0, 3, 0, 0), [(0, 3), (0, 2), (0, 1), (0, 0)]);
    }

    #[test]
    fn diagonal_45_connected() {
        let pts = collect(0, 0, 10, 10);
        assert_eq!(pts.len(), 11);
        for (i, &(x, y)) in pts.iter().enumerate() {
            assert_eq!((x, y), (i as i16, i as i16));
        }
    }

    #[test]
    fn endpoints_inclusive_no_gaps() {
        let pts = collect(2, 1, 11, 5);
        assert_eq!(*pts.first().unwrap(), (2, 1));
        assert_eq!(*pts.last().unwrap(), (11, 5));
        for pair in pts.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!((b.0 - a.0).abs() <= 1 && (b.1 - a.1).abs() <= 1);
        }
    }

    #[test]
    fn degenerate_single_point() {
        assert_eq!(collect(5, 7, 5, 7), [(5, 7)]);
    }

    #[test]
    fn wide_horizontal() {
        let mut v = Vec::new();
        draw_wide_line(0, 5, 4, 5, 3, |x, y| v.push((x, y)));
        // three rows of five pixels, centered on y=5
        assert_eq!(v.len(), 15);
        assert!(v.iter().all(|&(x, y)| (0..=4).contains(&x) && (4..=6).contains(&y)));
    }

    #[test]
    fn wide_width_one_is_thin() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        draw_wide_line(0, 0, 7, 3, 1, |x, y| a.push((x, y)));
        draw_line(0, 0, 7, 3, |x, y| b.push((x, y)));
        assert_eq!(a, b);
    }
}
