//! Fixed-precision rounding shared by validation and result formatting.
//!
//! Rounding operates on the exact binary value of the `f64` and breaks exact
//! ties towards the even digit. `0.1925` computed as `1 - 0.95 * 0.85` is
//! slightly above the tie in binary and therefore rounds up to `0.193`, while
//! an exactly representable tie such as `2.5` rounds to `2`.

/// Formats `value` with exactly `decimals` digits after the decimal point.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Rounds `value` to `decimals` digits after the decimal point.
pub fn round_half_even(value: f64, decimals: usize) -> f64 {
    format_fixed(value, decimals).parse().unwrap_or(value)
}
