//! Raw input sanitising.
//!
//! Presentation layers hand over whatever the user typed. These helpers turn
//! it into the non-negative numbers the engine expects.

/// Parses a user-typed amount such as `"$450,000"` or `" 12.5 "`.
///
/// Thousands separators, whitespace and a leading `$` are ignored. Parsing
/// stops at the first character that cannot continue a number, so `"12abc"`
/// reads as `12`. Text with no leading number, negative values and values
/// that overflow read as `0`.
#[must_use]
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();

    match leading_number(&cleaned).parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

/// Longest prefix of `s` shaped like `[+-]digits[.digits]`.
fn leading_number(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => end += 1,
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    &s[..end]
}
