//! Currency display formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as a currency string with two decimals and comma
/// thousands separators.
///
/// Rounds half away from zero. Negative amounts carry a leading minus sign
/// before the currency symbol.
///
/// # Example
///
/// ```
/// use payshare_engine::models::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(2667000, 2), "₱"), "₱26,670.00");
/// assert_eq!(format_currency(Decimal::new(-123450, 2), "₱"), "-₱1,234.50");
/// ```
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let fixed = format!("{:.2}", rounded.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}{}{}.{}", sign, symbol, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_formats_thousands_and_two_decimals() {
        assert_eq!(format_currency(dec("26670"), "₱"), "₱26,670.00");
        assert_eq!(format_currency(dec("1234567.891"), "₱"), "₱1,234,567.89");
        assert_eq!(format_currency(dec("999.5"), "₱"), "₱999.50");
    }

    #[test]
    fn test_formats_small_and_zero_amounts() {
        assert_eq!(format_currency(Decimal::ZERO, "₱"), "₱0.00");
        assert_eq!(format_currency(dec("0.004"), "₱"), "₱0.00");
        assert_eq!(format_currency(dec("-0.004"), "₱"), "₱0.00");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(format_currency(dec("0.005"), "₱"), "₱0.01");
        assert_eq!(format_currency(dec("-2.675"), "₱"), "-₱2.68");
    }

    #[test]
    fn test_negative_amount_keeps_sign_before_symbol() {
        assert_eq!(format_currency(dec("-1234.5"), "₱"), "-₱1,234.50");
    }

    #[test]
    fn test_repeating_decimal_is_rounded() {
        let amount = Decimal::from(30_000) / Decimal::from(22) / Decimal::from(8);
        assert_eq!(format_currency(amount, "₱"), "₱170.45");
    }
}
