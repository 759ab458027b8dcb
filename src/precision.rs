// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Decimal truncation of output epochs.
//!
//! Results are **truncated toward zero**, never rounded, so independent
//! implementations print identical digits for the same underlying value.
//! At six decimals one step is 0.0864 s, well above the conversion error.
//!
//! A value that is already truncated, like `2459430.287784`, is stored as
//! the nearest double, which may sit a hair *below* the decimal.  Scaling
//! it back up then lands at `2459430287783.9998…`, and a plain `trunc`
//! would lose a digit on every pass.  Scaled values within one rounding
//! error of an integer therefore snap to it, which makes truncation
//! idempotent.

/// Decimal places used for BJD_TDB outputs.
pub const DEFAULT_DECIMALS: u32 = 6;

/// Most decimal places an f64 carries (`f64::DIGITS`).
pub const MAX_DECIMALS: u32 = f64::DIGITS;

/// Truncate one value toward zero at `decimals` places.
///
/// `decimals` above [`MAX_DECIMALS`] behave as `MAX_DECIMALS`.  Non-finite
/// values pass through unchanged.
pub fn truncate_value(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals.min(MAX_DECIMALS) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    let nearest = scaled.round();
    let snapped = if (scaled - nearest).abs() <= scaled.abs() * f64::EPSILON {
        nearest
    } else {
        scaled.trunc()
    };
    snapped / factor
}

/// Truncate every value toward zero at `decimals` places, preserving order.
pub fn truncate(values: &[f64], decimals: u32) -> Vec<f64> {
    values.iter().map(|&v| truncate_value(v, decimals)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn truncates_instead_of_rounding() {
        assert_eq!(truncate_value(0.123_456_9, 6), 0.123_456);
        assert_eq!(truncate_value(2_459_430.287_784_949_4, 6), 2_459_430.287_784);
    }

    #[test]
    fn truncates_toward_zero_for_negatives() {
        assert_eq!(truncate_value(-1.234_567_8, 6), -1.234_567);
    }

    #[test]
    fn zero_decimals_is_integer_part() {
        assert_eq!(truncate_value(2_451_544.999_9, 0), 2_451_544.0);
    }

    #[test]
    fn exact_decimals_are_kept() {
        assert_eq!(truncate_value(2_451_544.999_335, 6), 2_451_544.999_335);
        assert_eq!(truncate_value(0.5, 6), 0.5);
    }

    #[test]
    fn non_finite_passes_through() {
        assert!(truncate_value(f64::NAN, 6).is_nan());
        assert_eq!(truncate_value(f64::INFINITY, 6), f64::INFINITY);
    }

    #[test]
    fn oversized_decimals_keep_the_value() {
        for decimals in [MAX_DECIMALS, 400, u32::MAX] {
            let out = truncate_value(2_459_430.5, decimals);
            assert!(out.is_finite(), "decimals={decimals}");
            assert!((out - 2_459_430.5).abs() <= 2_459_430.5 * 1e-15, "decimals={decimals}");
        }
        assert_eq!(truncate_value(1e300, 400), 1e300);
    }

    #[test]
    fn slice_preserves_order_and_handles_empty() {
        assert!(truncate(&[], 6).is_empty());
        assert_eq!(truncate(&[0.123_456_9, -0.000_000_9, 3.0], 6), vec![0.123_456, -0.0, 3.0]);
    }

    proptest! {
        #[test]
        fn truncation_is_idempotent(x in 2_400_000.0f64..2_500_000.0) {
            let once = truncate_value(x, DEFAULT_DECIMALS);
            prop_assert_eq!(truncate_value(once, DEFAULT_DECIMALS), once);
        }

        #[test]
        fn truncation_is_idempotent_near_zero(x in -1_000.0f64..1_000.0) {
            let once = truncate_value(x, DEFAULT_DECIMALS);
            prop_assert_eq!(truncate_value(once, DEFAULT_DECIMALS), once);
        }

        #[test]
        fn truncation_never_moves_away_from_zero(x in -3_000_000.0f64..3_000_000.0) {
            let once = truncate_value(x, DEFAULT_DECIMALS);
            prop_assert!(once.abs() <= x.abs() + x.abs() * f64::EPSILON);
            prop_assert!((x - once).abs() < 1e-6 + x.abs() * f64::EPSILON * 2.0);
        }
    }
}
