// Copyright 2024 the Pixelpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common integer math used by the rasterizers and transforms.
//!
//! Everything in this crate avoids floating point; fractional values are
//! represented as integers scaled by 100 or 1000.

/// sin(d°) × 1000 for d in 0..=90.
const SIN_TABLE_1000: [i32; 91] = [
    0, 17, 35, 52, 70, 87, 105, 122, 139, 156, 174, 191, 208, 225, 242, 259, 276, 292, 309, 326,
    342, 358, 375, 391, 407, 423, 438, 454, 469, 485, 500, 515, 530, 545, 559, 574, 588, 602, 616,
    629, 643, 656, 669, 682, 695, 707, 719, 731, 743, 755, 766, 777, 788, 799, 809, 819, 829, 839,
    848, 857, 866, 875, 883, 891, 899, 906, 914, 921, 927, 934, 940, 946, 951, 956, 961, 966, 970,
    974, 978, 982, 985, 988, 990, 993, 995, 996, 998, 999, 999, 1000, 1000,
];

/// sin of an angle in degrees, scaled by 1000.
///
/// Table based, so the whole crate stays free of floating point. Any angle is
/// accepted; it is reduced into 0..360 with a mathematical modulo first.
pub fn sin1000(degrees: i32) -> i32 {
    let d = ((degrees % 360) + 360) % 360;
    match d {
        0..=90 => SIN_TABLE_1000[d as usize],
        91..=180 => SIN_TABLE_1000[(180 - d) as usize],
        181..=270 => -SIN_TABLE_1000[(d - 180) as usize],
        _ => -SIN_TABLE_1000[(360 - d) as usize],
    }
}

/// cos of an angle in degrees, scaled by 1000.
#[inline]
pub fn cos1000(degrees: i32) -> i32 {
    sin1000(degrees + 90)
}

/// Scale `v` by `f100` percent, rounding to the nearest integer.
#[inline]
pub(crate) fn scale100(v: i16, f100: i16) -> i16 {
    ((i32::from(v) * i32::from(f100) + 50) / 100) as i16
}

/// Round a ×1000 fixed-point value to the nearest integer.
///
/// Matches the `(v + 500) / 1000` rounding of the incremental rasterizers so
/// their pixel output is reproducible.
#[inline]
pub(crate) fn round1000(v: i64) -> i64 {
    (v + 500) / 1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sin_quadrants() {
        assert_eq!(sin1000(0), 0);
        assert_eq!(sin1000(30), 500);
        assert_eq!(sin1000(90), 1000);
        assert_eq!(sin1000(150), 500);
        assert_eq!(sin1000(180), 0);
        assert_eq!(sin1000(270), -1000);
        assert_eq!(sin1000(360), 0);
        assert_eq!(sin1000(-90), -1000);
        assert_eq!(sin1000(450), 1000);
    }

    #[test]
    fn cos_quadrants() {
        assert_eq!(cos1000(0), 1000);
        assert_eq!(cos1000(60), 500);
        assert_eq!(cos1000(90), 0);
        assert_eq!(cos1000(180), -1000);
    }

    #[test]
    fn scale_rounding() {
        assert_eq!(scale100(10, 100), 10);
        assert_eq!(scale100(10, 150), 15);
        assert_eq!(scale100(3, 50), 2); // 1.5 + 0.5 rounds up
        assert_eq!(scale100(0, 200), 0);
    }

    #[test]
    fn fixed_rounding() {
        assert_eq!(round1000(1499), 1);
        assert_eq!(round1000(1500), 2);
        assert_eq!(round1000(0), 0);
    }
}
