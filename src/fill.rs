// Copyright 2024 the Pixelpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scanline filling of closed paths.
//!
//! The filler rasterizes the border of a path, classifies every border pixel
//! as scanline-crossing or not, sorts all of them by row, and fills the spans
//! between crossing pairs — the classic even-odd rule, with the degenerate
//! horizontal-edge cases resolved by the tagging pass.
//!
//! Filling assumes one simple closed contour. Open paths, self-intersecting
//! paths and multiple overlapping subpaths produce ill-defined spans; this is
//! a documented precondition, not a detected error.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::{draw_segments, parse_path, PathParseError, Segment};

/// Receives the pixels produced by [`fill_segments`].
///
/// The two methods mirror the two roles a pixel can have: part of the path
/// outline, or interior. Border pixels are always delivered, whatever the
/// parity state; interior pixels only between two crossings.
///
/// A pair of closures works as a sink: the first receives border pixels, the
/// second fill pixels.
pub trait FillSink {
    /// A border pixel of the path outline.
    fn border(&mut self, x: i16, y: i16);
    /// An interior pixel strictly between two border crossings.
    fn fill(&mut self, x: i16, y: i16);
}

impl<K: FillSink + ?Sized> FillSink for &mut K {
    fn border(&mut self, x: i16, y: i16) {
        (**self).border(x, y);
    }
    fn fill(&mut self, x: i16, y: i16) {
        (**self).fill(x, y);
    }
}

impl<S, F> FillSink for (S, F)
where
    S: FnMut(i16, i16),
    F: FnMut(i16, i16),
{
    fn border(&mut self, x: i16, y: i16) {
        (self.0)(x, y);
    }
    fn fill(&mut self, x: i16, y: i16) {
        (self.1)(x, y);
    }
}

/// The vertical direction of the border at a point.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Slope {
    Falling,
    Raising,
    Horizontal,
}

/// One border pixel, tagged with whether it toggles the scanline parity.
///
/// The explicit flag replaces the trick of negating `x` to mark a point,
/// which conflates data with metadata and cannot mark `x == 0`.
struct BorderPoint {
    x: i16,
    y: i16,
    crossing: bool,
}

/// Fill a closed path, translated by `(dx, dy)`.
///
/// The path border is rasterized exactly as [`draw_segments`] would and every
/// border pixel is reported through [`FillSink::border`]; the enclosed
/// interior, under the even-odd rule, is reported row by row through
/// [`FillSink::fill`]. No pixel is reported as both in one call, but border
/// pixels shared by two segments are reported once per segment.
///
/// Degenerate inputs (fewer than two border pixels, or a border confined to
/// one row) produce border output only.
pub fn fill_segments<K: FillSink>(segments: &[Segment], dx: i16, dy: i16, mut sink: K) {
    let mut border: Vec<BorderPoint> = Vec::new();
    draw_segments(segments, dx, dy, |x, y| {
        border.push(BorderPoint {
            x,
            y,
            crossing: true,
        })
    });
    log::trace!("fill: {} border pixels", border.len());

    if border.len() < 2 || !tag_horizontal_runs(&mut border) {
        for p in &border {
            sink.border(p.x, p.y);
        }
        return;
    }

    // Sort by row, then by column; the sweep below walks each row once.
    border.sort_unstable_by_key(|p| (p.y, p.x));

    let mut cur_y: Option<i16> = None;
    let mut x = 0i16;
    let mut inside = false;

    for p in &border {
        sink.border(p.x, p.y);

        if cur_y != Some(p.y) {
            cur_y = Some(p.y);
            inside = p.crossing;
        } else {
            if inside && p.x > x + 1 {
                for fx in (x + 1)..p.x {
                    sink.fill(fx, p.y);
                }
            }
            if p.crossing {
                inside = !inside;
            }
        }
        x = p.x;
    }
}

/// Mark the border pixels of horizontal runs as non-crossing.
///
/// Every pixel that shares its row with the previous border pixel is part of
/// a horizontal run and must not toggle the scanline parity — except at a
/// local extreme, where the border enters and leaves the run in the same
/// vertical direction: there the run's last pixel is turned back into a
/// crossing so the adjacent spans keep their parity.
///
/// The direction "before" the first pixel comes from scanning backwards over
/// the wrap-around, the border being a closed ring. Returns `false` when the
/// whole border lies on one row, in which case there is nothing to fill.
fn tag_horizontal_runs(border: &mut [BorderPoint]) -> bool {
    let size = border.len();
    let first_y = border[0].y;

    let mut n = size - 1;
    while border[n].y == first_y {
        if n == 0 {
            return false;
        }
        n -= 1;
    }
    let mut slope = if border[n].y < first_y {
        Slope::Raising
    } else {
        Slope::Falling
    };

    let mut last_y = border[size - 1].y;
    let mut last_slope = match last_y.cmp(&first_y) {
        Ordering::Less => Slope::Raising,
        Ordering::Greater => Slope::Falling,
        Ordering::Equal => Slope::Horizontal,
    };

    for n in 0..size {
        let y = border[n].y;
        match y.cmp(&last_y) {
            Ordering::Equal => {
                last_slope = Slope::Horizontal;
                border[n].crossing = false;
            }
            Ordering::Greater => {
                if last_slope == Slope::Horizontal && slope == Slope::Falling {
                    // The run reversed the border direction; its last pixel
                    // still counts as a crossing.
                    border[n - 1].crossing = true;
                }
                slope = Slope::Raising;
                last_slope = Slope::Raising;
            }
            Ordering::Less => {
                if last_slope == Slope::Horizontal && slope == Slope::Raising {
                    border[n - 1].crossing = true;
                }
                slope = Slope::Falling;
                last_slope = Slope::Falling;
            }
        }
        last_y = y;
    }
    true
}

/// Parse a path description and fill it.
///
/// Convenience wrapper over [`parse_path`] and [`fill_segments`].
pub fn fill_path<K: FillSink>(
    text: &str,
    dx: i16,
    dy: i16,
    sink: K,
) -> Result<(), PathParseError> {
    let segments = parse_path(text)?;
    fill_segments(&segments, dx, dy, sink);
    Ok(())
}
