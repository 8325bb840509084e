// Copyright 2024 the Pixelpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colors with opacity for abstract pixels.

use core::fmt;

/// The color and opacity of a single abstract pixel.
///
/// An alpha of 0 means fully transparent; drawing code treats such a color as
/// "do not draw". How the four channels map onto the wire format of a real
/// display is the business of the display adapter, not of this crate.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Rgba {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
    /// Opacity; 0 is fully transparent, 255 fully opaque.
    pub alpha: u8,
}

impl Rgba {
    /// Create a fully opaque color from the three color channels.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self::with_alpha(red, green, blue, 0xFF)
    }

    /// Create a color with an explicit alpha channel.
    #[inline]
    pub const fn with_alpha(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Whether this color is fully transparent and must not be drawn.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.alpha == 0
    }

    /// Pack into a 24-bit `0x00RRGGBB` value, dropping the alpha channel.
    #[inline]
    pub const fn to_color24(self) -> u32 {
        ((self.red as u32) << 16) | ((self.green as u32) << 8) | (self.blue as u32)
    }

    /// Mix this color towards `other` by `f100` percent.
    ///
    /// `f100 <= 0` yields `self`, `f100 >= 100` yields `other`; all four
    /// channels, including alpha, are interpolated linearly.
    pub fn mix(self, other: Self, f100: i32) -> Self {
        if f100 <= 0 {
            self
        } else if f100 >= 100 {
            other
        } else {
            let q100 = 100 - f100;
            let channel = |a: u8, b: u8| ((q100 * i32::from(a) + f100 * i32::from(b)) / 100) as u8;
            Self::with_alpha(
                channel(self.red, other.red),
                channel(self.green, other.green),
                channel(self.blue, other.blue),
                channel(self.alpha, other.alpha),
            )
        }
    }
}

/// Build a fully opaque color from a packed 24-bit `0x00RRGGBB` value.
impl From<u32> for Rgba {
    #[inline]
    fn from(col24: u32) -> Self {
        Self::new((col24 >> 16) as u8, (col24 >> 8) as u8, col24 as u8)
    }
}

impl fmt::Debug for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}.{:02x}.{:02x}.{:02x}",
            self.alpha, self.red, self.green, self.blue
        )
    }
}

/// Black.
pub const BLACK: Rgba = Rgba::new(0, 0, 0);
/// Silver.
pub const SILVER: Rgba = Rgba::new(0xDD, 0xDD, 0xDD);
/// Gray.
pub const GRAY: Rgba = Rgba::new(0xCC, 0xCC, 0xCC);
/// Red.
pub const RED: Rgba = Rgba::new(0xFF, 0, 0);
/// Orange.
pub const ORANGE: Rgba = Rgba::new(0xE9, 0x76, 0);
/// Yellow.
pub const YELLOW: Rgba = Rgba::new(0xF6, 0xC7, 0);
/// Green.
pub const GREEN: Rgba = Rgba::new(0, 0x80, 0);
/// Lime.
pub const LIME: Rgba = Rgba::new(0x32, 0xCD, 0x32);
/// Blue.
pub const BLUE: Rgba = Rgba::new(0, 0, 0xFF);
/// Cyan.
pub const CYAN: Rgba = Rgba::new(0, 0xFF, 0xFF);
/// Purple.
pub const PURPLE: Rgba = Rgba::new(0x99, 0x46, 0x80);
/// White.
pub const WHITE: Rgba = Rgba::new(0xFF, 0xFF, 0xFF);
/// The fully transparent sentinel color; never drawn.
pub const TRANSPARENT: Rgba = Rgba::with_alpha(0, 0, 0, 0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack24() {
        assert_eq!(ORANGE.to_color24(), 0x00E9_7600);
        assert_eq!(Rgba::from(0x0012_3456), Rgba::new(0x12, 0x34, 0x56));
        // packing drops alpha
        assert_eq!(TRANSPARENT.to_color24(), 0);
    }

    #[test]
    fn transparency() {
        assert!(TRANSPARENT.is_transparent());
        assert!(!BLACK.is_transparent());
    }

    #[test]
    fn mix_endpoints() {
        assert_eq!(RED.mix(BLUE, 0), RED);
        assert_eq!(RED.mix(BLUE, 100), BLUE);
        assert_eq!(RED.mix(BLUE, -40), RED);
        assert_eq!(RED.mix(BLUE, 250), BLUE);
    }

    #[test]
    fn mix_midpoint() {
        let mid = BLACK.mix(WHITE, 50);
        assert_eq!(mid, Rgba::new(127, 127, 127));
    }
}
