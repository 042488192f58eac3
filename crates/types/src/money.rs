//! Display formatting for prices, balances and percentages.
//!
//! Values arrive as `f64` from the service. Formatting goes through
//! [`Decimal`] built from the shortest round-trip representation of the float,
//! then rounds half away from zero. `2.345` therefore shows as `2.35`, which
//! naive `{:.2}` formatting of the binary value would print as `2.34`.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Round `value` to `dp` decimal places, half away from zero.
///
/// Returns `None` for non-finite values or magnitudes a [`Decimal`] cannot hold.
pub fn round_half_away(value: f64, dp: u32) -> Option<Decimal> {
    to_decimal(value).map(|d| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
}

fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_str(&value.to_string()).ok()
}

/// Format `value` with exactly `dp` decimal digits.
///
/// Non-finite input is rendered verbatim (`NaN`, `inf`) rather than panicking.
/// Negative input that rounds to zero keeps its sign (`-0.004` -> `-0.00`) so
/// the text agrees with sign-based styling; `-0.0` itself prints as `0.00`.
pub fn format_fixed(value: f64, dp: u32) -> String {
    let width = dp as usize;
    match round_half_away(value, dp) {
        Some(rounded) if rounded.is_zero() => {
            let sign = if value < 0.0 { "-" } else { "" };
            format!("{}{:.width$}", sign, rounded.abs())
        }
        Some(rounded) => format!("{:.width$}", rounded),
        None => format!("{:.width$}", value),
    }
}

/// Format a money amount: `$` followed by two decimals (`$110.50`, `$-3.10`).
pub fn format_money(value: f64) -> String {
    format!("${}", format_fixed(value, 2))
}

/// Format a percentage value with two decimals (`10.50%`).
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_fixed(value, 2))
}

/// Format a fraction in `[0, 1]` as a whole percentage (`0.5` -> `50%`).
///
/// The fraction is scaled in `f64` before rounding, so `0.285` (which scales
/// to `28.499999999999996`) shows as `28%`.
pub fn format_whole_percent(fraction: f64) -> String {
    format!("{}%", format_fixed(fraction * 100.0, 0))
}
