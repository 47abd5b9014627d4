//! Amount parsing for captured money values.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Parse a captured amount such as `1,200.00`, `$ 500.00` or `1,200.00 MXP`.
///
/// Thousands-separator commas, currency symbols and suffixes are stripped;
/// the remaining digits and decimal point parse as a [`Decimal`] rescaled to
/// two fractional digits. Anything that still fails to parse (a
/// false-positive capture) yields `None`, never zero.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut amount = Decimal::from_str(&cleaned).ok()?;
    amount.rescale(2);
    Some(amount)
}
