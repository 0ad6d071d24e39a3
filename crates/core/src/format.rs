//! Display formatting for money and dates.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::types::CurrencyCode;

/// Format an amount with the currency symbol, thousands separators and
/// exactly two decimal places (e.g., `₦150,000.00`).
#[must_use]
pub fn format_currency(amount: Decimal, currency: CurrencyCode) -> String {
    let fixed = format!("{:.2}", amount.round_dp(2).abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount.is_sign_negative() && !amount.round_dp(2).is_zero() {
        "-"
    } else {
        ""
    };
    format!(
        "{sign}{}{}.{fraction}",
        currency.symbol(),
        group_thousands(whole)
    )
}

/// Insert a comma every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Short human date, e.g. `Oct 24, 2023`.
#[must_use]
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(
            format_currency(Decimal::new(150_000, 0), CurrencyCode::NGN),
            "₦150,000.00"
        );
        assert_eq!(
            format_currency(Decimal::new(1_500_000, 0), CurrencyCode::GHS),
            "GH₵1,500,000.00"
        );
    }

    #[test]
    fn test_format_currency_small_amounts() {
        assert_eq!(format_currency(Decimal::ZERO, CurrencyCode::USD), "$0.00");
        assert_eq!(
            format_currency(Decimal::new(999, 0), CurrencyCode::KES),
            "KSh999.00"
        );
    }

    #[test]
    fn test_format_currency_rounds_to_cents() {
        assert_eq!(
            format_currency(Decimal::new(12_345_678, 4), CurrencyCode::USD),
            "$1,234.57"
        );
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(
            format_currency(Decimal::new(-5_000, 0), CurrencyCode::NGN),
            "-₦5,000.00"
        );
    }

    #[test]
    fn test_format_date() {
        let date = DateTime::parse_from_rfc3339("2023-10-24T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_date(&date), "Oct 24, 2023");
    }
}
