// Copyright 2024 the Pixelpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A drawable object bundling a path, colors and a transform.

use alloc::vec::Vec;

use crate::fill::FillSink;
use crate::{
    draw_segments, fill_segments, parse_path, transform_segments, Affine1000, PathParseError,
    Point, Rgba, Segment,
};

/// How the interior of a [`Shape`] is colored.
#[derive(Clone, Copy, Debug)]
enum FillSpec {
    None,
    Solid(Rgba),
    Horizontal {
        from: Rgba,
        to: Rgba,
        x1: i16,
        dx: i16,
    },
    Vertical {
        from: Rgba,
        to: Rgba,
        y1: i16,
        dy: i16,
    },
    Linear {
        from: Rgba,
        to: Rgba,
        p1: Point,
        dx: i16,
        dy: i16,
    },
}

/// A stroke-and-fill drawing of one path.
///
/// A `Shape` owns a parsed path, a stroke color, a fill specification and an
/// accumulated [`Affine1000`] transform. It is configured once per UI widget
/// and drawn once per redraw frame; [`draw`] produces the full pixel/color
/// set through a callback and owns no raster buffer itself — the destination
/// buffer belongs to the display adapter.
///
/// [`draw`]: Shape::draw
///
/// # Examples
///
/// ```
/// use pixelpath::{Shape, Point, color};
///
/// let mut clock_face = Shape::new();
/// clock_face.set_path("M0 0h40v40h-40z").unwrap();
/// clock_face.set_stroke_color(color::BLACK);
/// clock_face.set_fill_color(color::SILVER);
/// clock_face.scale(150);
///
/// let mut pixels = Vec::new();
/// clock_face.draw(10, 10, |x, y, c| pixels.push((x, y, c)));
/// assert!(!pixels.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Shape {
    segments: Vec<Segment>,
    stroke: Rgba,
    fill: FillSpec,
    transform: Affine1000,
}

impl Shape {
    /// Create an empty shape with a black stroke and no fill.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            stroke: crate::color::BLACK,
            fill: FillSpec::None,
            transform: Affine1000::IDENTITY,
        }
    }

    /// Create a shape from a path description and its two colors.
    pub fn from_path(text: &str, stroke: Rgba, fill: Rgba) -> Result<Self, PathParseError> {
        let mut shape = Self::new();
        shape.set_path(text)?;
        shape.set_stroke_color(stroke);
        if !fill.is_transparent() {
            shape.set_fill_color(fill);
        }
        Ok(shape)
    }

    /// Set the path from a textual description, replacing any previous path.
    pub fn set_path(&mut self, text: &str) -> Result<(), PathParseError> {
        self.segments = parse_path(text)?;
        Ok(())
    }

    /// Set the path to a `w`×`h` pixel rectangle with its top-left corner at
    /// the origin, as a four-segment closed path.
    pub fn set_rect(&mut self, w: i16, h: i16) {
        self.segments = alloc::vec![
            Segment::MoveTo(Point::new(0, 0)),
            Segment::LineTo(Point::new(0, h - 1)),
            Segment::LineTo(Point::new(w - 1, h - 1)),
            Segment::LineTo(Point::new(w - 1, 0)),
            Segment::ClosePath,
        ];
    }

    /// The current segment list.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Set the border color; a transparent color disables the stroke.
    pub fn set_stroke_color(&mut self, stroke: Rgba) {
        self.stroke = stroke;
    }

    /// Fill with one solid color; a transparent color disables the fill.
    pub fn set_fill_color(&mut self, fill: Rgba) {
        self.fill = FillSpec::Solid(fill);
    }

    /// Fill with a linear gradient running from `from` at `p1` to `to` at
    /// `p2`.
    ///
    /// Axis-aligned gradients use a cheap one-axis interpolation; any other
    /// direction projects each pixel onto the gradient axis. Pixels before
    /// `p1` or past `p2` clamp to the respective end color.
    pub fn set_fill_gradient(&mut self, from: Rgba, p1: Point, to: Rgba, p2: Point) {
        let dx = p2.x - p1.x;
        let dy = p2.y - p1.y;
        self.fill = if (dx, dy) == (0, 0) {
            FillSpec::Solid(from)
        } else if dy == 0 {
            FillSpec::Horizontal {
                from,
                to,
                x1: p1.x,
                dx,
            }
        } else if dx == 0 {
            FillSpec::Vertical {
                from,
                to,
                y1: p1.y,
                dy,
            }
        } else {
            FillSpec::Linear {
                from,
                to,
                p1,
                dx,
                dy,
            }
        };
    }

    /// Append a translation to the transform.
    pub fn move_by(&mut self, dx: i16, dy: i16) {
        if (dx, dy) != (0, 0) {
            self.transform = Affine1000::translate(dx, dy) * self.transform;
        }
    }

    /// Append a uniform scale in percent to the transform.
    pub fn scale(&mut self, s100: i16) {
        if s100 != 100 {
            self.transform = Affine1000::scale(s100) * self.transform;
        }
    }

    /// Append a rotation around the origin in degrees to the transform.
    pub fn rotate(&mut self, degrees: i32) {
        if degrees != 0 {
            self.transform = Affine1000::rotate(degrees) * self.transform;
        }
    }

    /// Drop all accumulated transformations.
    pub fn reset_transform(&mut self) {
        self.transform = Affine1000::IDENTITY;
    }

    /// Draw the shape, translated by `(dx, dy)`, emitting colored pixels.
    ///
    /// The transform is applied to a transient copy of the segments, then one
    /// of three strategies runs: border only when the fill is invisible, fill
    /// plus colored border when both are visible, or fill with the border
    /// pixels taking the fill color when the stroke is invisible. When both
    /// colors are transparent nothing is emitted at all.
    pub fn draw<F>(&self, dx: i16, dy: i16, mut px: F)
    where
        F: FnMut(i16, i16, Rgba),
    {
        let stroke_visible = !self.stroke.is_transparent();
        let fill_visible = self.fill_visible();
        if !stroke_visible && !fill_visible {
            return;
        }
        log::trace!(
            "draw shape: stroke={:?} fill_visible={}",
            self.stroke,
            fill_visible
        );

        let mut segments = self.segments.clone();
        if self.transform != Affine1000::IDENTITY {
            transform_segments(&mut segments, |p| *p = self.transform.apply(*p));
        }

        if !fill_visible {
            draw_segments(&segments, dx, dy, |x, y| px(x, y, self.stroke));
        } else {
            fill_segments(
                &segments,
                dx,
                dy,
                ShapeSink {
                    shape: self,
                    px: &mut px,
                    stroke_visible,
                },
            );
        }
    }

    fn fill_visible(&self) -> bool {
        match self.fill {
            FillSpec::None => false,
            FillSpec::Solid(c) => !c.is_transparent(),
            FillSpec::Horizontal { from, .. }
            | FillSpec::Vertical { from, .. }
            | FillSpec::Linear { from, .. } => !from.is_transparent(),
        }
    }

    /// Resolve the fill color of one pixel.
    fn color_at(&self, x: i16, y: i16) -> Rgba {
        match self.fill {
            FillSpec::None => crate::color::TRANSPARENT,
            FillSpec::Solid(c) => c,
            FillSpec::Horizontal { from, to, x1, dx } => {
                let f100 = i32::from(x - x1) * 100 / i32::from(dx);
                from.mix(to, f100)
            }
            FillSpec::Vertical { from, to, y1, dy } => {
                let f100 = i32::from(y - y1) * 100 / i32::from(dy);
                from.mix(to, f100)
            }
            FillSpec::Linear {
                from,
                to,
                p1,
                dx,
                dy,
            } => {
                // project onto the gradient axis: t = (p - p1) · d / |d|²
                let px = i64::from(x - p1.x);
                let py = i64::from(y - p1.y);
                let (dx, dy) = (i64::from(dx), i64::from(dy));
                let f100 = 100 * (px * dx + py * dy) / (dx * dx + dy * dy);
                from.mix(to, f100 as i32)
            }
        }
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self::new()
    }
}

/// Routes fill pixels — and border pixels, when the stroke is invisible —
/// through the shape's color resolution.
struct ShapeSink<'a, F> {
    shape: &'a Shape,
    px: &'a mut F,
    stroke_visible: bool,
}

impl<F> FillSink for ShapeSink<'_, F>
where
    F: FnMut(i16, i16, Rgba),
{
    fn border(&mut self, x: i16, y: i16) {
        if self.stroke_visible {
            (self.px)(x, y, self.shape.stroke);
        } else {
            (self.px)(x, y, self.shape.color_at(x, y));
        }
    }

    fn fill(&mut self, x: i16, y: i16) {
        (self.px)(x, y, self.shape.color_at(x, y));
    }
}
