//! Magnitude normalisation for benefit display strings.
//!
//! Plan fields arrive as human-readable strings ("$1,500", "20%",
//! "$0 after deductible", "Covered 100%", "Not Covered"). Comparison needs
//! a numeric magnitude per string, extracted uniformly so the same rule
//! applies to every plan in a row.
//!
//! # Display string conventions
//!
//! - Monetary: `"$450"`, `"$1,500"`, `"$0 after deductible"`
//! - Rate: `"20%"`, `"30% after deductible"`
//! - Descriptive: `"Covered 100%"`, `"Not Covered"`, `"Unlimited"`

/// Parse a display string into a numeric magnitude.
///
/// # Algorithm
///
/// 1. Strip `$`, `%`, and thousands-separator `,` characters
/// 2. Take the first numeric token (digits with at most one interior
///    decimal point) anywhere in the remainder
/// 3. Parse it as `f64`
///
/// A string with no digits yields `0.0`. That fallback is lossy on purpose:
/// a qualitative value ("Not Covered", "Unlimited") collapses to zero, which
/// means "no extractable value", not "free". Best-value selection depends on
/// this rule being applied identically to every plan in a row, so callers
/// that need to distinguish the two cases should use
/// [`parse_magnitude_checked`] instead of changing the fallback.
pub fn parse_magnitude(raw: &str) -> f64 {
    parse_magnitude_checked(raw).unwrap_or(0.0)
}

/// Parse a display string into a magnitude, or `None` when it has no digits.
///
/// Same extraction as [`parse_magnitude`] without the zero fallback, for
/// callers that must tell "no extractable value" apart from a true zero.
pub fn parse_magnitude_checked(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | '%' | ','))
        .collect();
    first_number(&cleaned)
}

/// Extract and parse the first numeric token in `s`.
fn first_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let start = bytes.iter().position(|b| b.is_ascii_digit())?;

    let mut end = start;
    let mut seen_point = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => end += 1,
            // A decimal point counts only once, and only with a digit after it
            // ("$5." is the amount 5, not 5-point-something).
            b'.' if !seen_point && bytes.get(end + 1).is_some_and(u8::is_ascii_digit) => {
                seen_point = true;
                end += 1;
            }
            _ => break,
        }
    }

    s[start..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_currency() {
        assert_eq!(parse_magnitude("$450"), 450.0);
        assert_eq!(parse_magnitude("$25"), 25.0);
        assert_eq!(parse_magnitude("$0"), 0.0);
    }

    #[test]
    fn thousands_separator_stripped() {
        assert_eq!(parse_magnitude("$1,500"), 1500.0);
        assert_eq!(parse_magnitude("$12,345,678"), 12_345_678.0);
    }

    #[test]
    fn percentage() {
        assert_eq!(parse_magnitude("20%"), 20.0);
        assert_eq!(parse_magnitude("0%"), 0.0);
    }

    #[test]
    fn decimal_amounts() {
        assert_eq!(parse_magnitude("$3.50"), 3.5);
        assert_eq!(parse_magnitude("$1,234.56"), 1234.56);
    }

    #[test]
    fn trailing_text_ignored() {
        assert_eq!(parse_magnitude("$0 after deductible"), 0.0);
        assert_eq!(parse_magnitude("30% after deductible"), 30.0);
        assert_eq!(parse_magnitude("$25 copay"), 25.0);
    }

    #[test]
    fn leading_text_skipped() {
        // The first numeric token counts wherever it sits.
        assert_eq!(parse_magnitude("Covered 100%"), 100.0);
        assert_eq!(parse_magnitude("Tier 2: $45"), 2.0);
    }

    #[test]
    fn no_digits_is_zero() {
        assert_eq!(parse_magnitude("Not Covered"), 0.0);
        assert_eq!(parse_magnitude("Unlimited"), 0.0);
        assert_eq!(parse_magnitude(""), 0.0);
        assert_eq!(parse_magnitude("$"), 0.0);
    }

    #[test]
    fn only_second_point_stops_token() {
        assert_eq!(parse_magnitude("1.2.3"), 1.2);
    }

    #[test]
    fn point_without_following_digit_stops_token() {
        assert_eq!(parse_magnitude("$5."), 5.0);
    }

    #[test]
    fn checked_distinguishes_missing_from_zero() {
        assert_eq!(parse_magnitude_checked("Not Covered"), None);
        assert_eq!(parse_magnitude_checked("Unlimited"), None);
        assert_eq!(parse_magnitude_checked("$0"), Some(0.0));
        assert_eq!(parse_magnitude_checked("0%"), Some(0.0));
    }
}
