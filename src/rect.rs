// Copyright 2024 the Pixelpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned rectangle drawing.

/// Draw the one-pixel border of a rectangle.
///
/// `w` and `h` are sizes in pixels, so a 10×10 rectangle at the origin covers
/// `[0..9] × [0..9]`. Negative sizes are normalized to extend leftwards or
/// upwards from the anchor; a zero size draws nothing. Pixels are emitted
/// clockwise starting at the top-left corner, with the corners emitted twice
/// where the edges meet.
pub fn draw_rect<F>(x0: i16, y0: i16, w: i16, h: i16, mut px: F)
where
    F: FnMut(i16, i16),
{
    let Some((x0, y0, w, h)) = normalize(x0, y0, w, h) else {
        return;
    };
    let end_x = x0 + w - 1;
    let end_y = y0 + h - 1;

    for x in x0..=end_x {
        px(x, y0);
    }
    for y in y0..=end_y {
        px(end_x, y);
    }
    for x in (x0..=end_x).rev() {
        px(x, end_y);
    }
    for y in (y0..=end_y).rev() {
        px(x0, y);
    }
}

/// Draw every pixel of a rectangle, row by row.
pub fn draw_solid_rect<F>(x0: i16, y0: i16, w: i16, h: i16, mut px: F)
where
    F: FnMut(i16, i16),
{
    let Some((x0, y0, w, h)) = normalize(x0, y0, w, h) else {
        return;
    };
    for y in y0..(y0 + h) {
        for x in x0..(x0 + w) {
            px(x, y);
        }
    }
}

/// Flip negative sizes so the rect always extends right and down.
fn normalize(x0: i16, y0: i16, w: i16, h: i16) -> Option<(i16, i16, i16, i16)> {
    if w == 0 || h == 0 {
        return None;
    }
    let (x0, w) = if w < 0 { (x0 + w + 1, -w) } else { (x0, w) };
    let (y0, h) = if h < 0 { (y0 + h + 1, -h) } else { (y0, h) };
    Some((x0, y0, w, h))
}
