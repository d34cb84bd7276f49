//! Lenient number parsing for form input.
//!
//! Form fields are free text. Anything that does not parse to a finite
//! number becomes zero instead of an error.

/// Parse a number, falling back to `0.0` for empty, invalid or non-finite input.
///
/// Surrounding whitespace is ignored.
pub fn parse_number_or_zero(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Parse a stock quantity: negatives clamp to zero, fractions are truncated.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_quantity(raw: &str) -> u64 {
    let value = parse_number_or_zero(raw);
    if value <= 0.0 { 0 } else { value.trunc() as u64 }
}

/// Parse a price: negatives clamp to zero.
pub fn parse_price(raw: &str) -> f64 {
    parse_number_or_zero(raw).max(0.0)
}
