// Copyright 2024 the Pixelpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walking a segment list and rasterizing its border.

use crate::{draw_cubic_bezier, draw_line, parse_path, PathParseError, Point, Segment};

/// Rasterize the border of a path, translated by `(dx, dy)`.
///
/// Walks the segments keeping track of the current point and of the subpath
/// start established by the most recent `MoveTo`. `MoveTo` emits no pixels;
/// lines and curves hand off to [`draw_line`] and [`draw_cubic_bezier`];
/// `ClosePath` draws the line back to the subpath start, but only when the
/// current point is not already there, and never changes the start point
/// itself, so several subpaths in one list are walked in sequence.
///
/// Shared corner pixels of adjacent segments are emitted once per segment;
/// the pixel sink must tolerate repeats.
pub fn draw_segments<F>(segments: &[Segment], dx: i16, dy: i16, mut px: F)
where
    F: FnMut(i16, i16),
{
    let mut start = Point::ZERO;
    let mut pos = Point::ZERO;

    for seg in segments {
        match *seg {
            Segment::MoveTo(p) => {
                start = p;
                pos = p;
            }
            Segment::LineTo(p) => {
                draw_line(pos.x + dx, pos.y + dy, p.x + dx, p.y + dy, &mut px);
                pos = p;
            }
            Segment::CurveTo(c1, c2, p) => {
                draw_cubic_bezier(
                    pos.offset(dx, dy),
                    c1.offset(dx, dy),
                    c2.offset(dx, dy),
                    p.offset(dx, dy),
                    &mut px,
                );
                pos = p;
            }
            Segment::ClosePath => {
                if pos != start {
                    draw_line(pos.x + dx, pos.y + dy, start.x + dx, start.y + dy, &mut px);
                }
                pos = start;
            }
        }
    }
}

/// Parse a path description and rasterize its border.
///
/// Convenience wrapper over [`parse_path`] and [`draw_segments`]; filling is
/// handled by [`fill_path`] and [`Shape`].
///
/// [`fill_path`]: crate::fill_path
/// [`Shape`]: crate::Shape
pub fn draw_path<F>(text: &str, dx: i16, dy: i16, px: F) -> Result<(), PathParseError>
where
    F: FnMut(i16, i16),
{
    let segments = parse_path(text)?;
    draw_segments(&segments, dx, dy, px);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn border_of(text: &str, dx: i16, dy: i16) -> HashSet<(i16, i16)> {
        let mut pts = HashSet::new();
        draw_path(text, dx, dy, |x, y| {
            pts.insert((x, y));
        })
        .unwrap();
        pts
    }

    #[test]
    fn square_border() {
        let pts = border_of("M0 0h4v4h-4z", 0, 0);
        let mut expected = HashSet::new();
        for i in 0..=4i16 {
            expected.insert((i, 0));
            expected.insert((i, 4));
            expected.insert((0, i));
            expected.insert((4, i));
        }
        assert_eq!(pts, expected);
    }

    #[test]
    fn offset_translates_output() {
        let a = border_of("M0 0h4v4h-4z", 0, 0);
        let b = border_of("M0 0h4v4h-4z", 7, -2);
        let shifted: HashSet<_> = a.iter().map(|&(x, y)| (x + 7, y - 2)).collect();
        assert_eq!(b, shifted);
    }

    #[test]
    fn close_skips_zero_length_line() {
        // The path returns to its start before the Z; no extra pixels appear.
        let mut count_closed = 0;
        let mut count_open = 0;
        draw_path("M0 0h4v4h-4v-4z", 0, 0, |_, _| count_closed += 1).unwrap();
        draw_path("M0 0h4v4h-4v-4", 0, 0, |_, _| count_open += 1).unwrap();
        assert_eq!(count_closed, count_open);
    }

    #[test]
    fn move_only_emits_nothing() {
        let mut n = 0;
        draw_segments(&[Segment::MoveTo(Point::new(3, 3))], 0, 0, |_, _| n += 1);
        assert_eq!(n, 0);
    }

    #[test]
    fn curve_segment_is_walked() {
        let segs = vec![
            Segment::MoveTo(Point::new(0, 0)),
            Segment::CurveTo(Point::new(5, 0), Point::new(10, 5), Point::new(10, 10)),
        ];
        let mut pts = Vec::new();
        draw_segments(&segs, 0, 0, |x, y| pts.push((x, y)));
        assert_eq!(*pts.first().unwrap(), (0, 0));
        assert_eq!(*pts.last().unwrap(), (10, 10));
    }
}
