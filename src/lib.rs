// Copyright 2024 the Pixelpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel-exact vector drawing for small integer-coordinate displays.
//!
//! This crate rasterizes paths given in a compact SVG-like text notation onto
//! abstract pixels: every drawing routine takes a callback and reports the
//! `(x, y)` coordinates it covers, one pixel at a time. Nothing here touches a
//! framebuffer; binding the output to a concrete display is the caller's job,
//! which keeps the crate usable from a desktop test harness and a
//! microcontroller alike.
//!
//! All arithmetic is integer only. Fractional values are carried as ×100 or
//! ×1000 scaled integers, so results are bit-for-bit reproducible across
//! targets without an FPU.
//!
//! The low-level entry points are free functions: [`draw_line`],
//! [`draw_rect`], [`draw_cubic_bezier`], [`draw_path`] for outlines and
//! [`fill_path`] for filled polygons. The high-level [`Shape`] type bundles a
//! path with stroke and fill colors and an accumulated transform:
//!
//! ```
//! use pixelpath::{color, Shape};
//!
//! let mut marker = Shape::from_path("M1 1h6v6h-6z", color::BLACK, color::YELLOW)?;
//! marker.rotate(45);
//!
//! let mut pixels = Vec::new();
//! marker.draw(20, 20, |x, y, c| pixels.push((x, y, c)));
//! # Ok::<(), pixelpath::PathParseError>(())
//! ```
//!
//! # Features
//!
//! This crate is `no_std` (with `alloc`) when the default `std` feature is
//! disabled.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod affine;
mod bezier;
pub mod color;
mod common;
mod fill;
mod line;
mod parse;
mod point;
mod rect;
mod segment;
mod shape;
mod stroke;

pub use crate::affine::Affine1000;
pub use crate::bezier::draw_cubic_bezier;
pub use crate::color::Rgba;
pub use crate::common::{cos1000, sin1000};
pub use crate::fill::{fill_path, fill_segments, FillSink};
pub use crate::line::{draw_line, draw_wide_line};
pub use crate::parse::{parse_path, parse_path_lossy, PathParseError};
pub use crate::point::Point;
pub use crate::rect::{draw_rect, draw_solid_rect};
pub use crate::segment::{
    move_segments, rotate_segments, scale_segments, transform_segments, Segment,
};
pub use crate::shape::Shape;
pub use crate::stroke::{draw_path, draw_segments};
