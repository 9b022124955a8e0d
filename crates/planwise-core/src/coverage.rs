//! Coverage classification for benefit display strings.

/// Presentation classification of one plan's value for a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    /// Fully covered: "covered" appears in the text, or the value is
    /// exactly `"$0"` or `"0%"`.
    Full,
    /// The text says "not covered".
    NotCovered,
    /// Anything else: an ordinary copay, rate, or descriptive value.
    Neutral,
}

impl Coverage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::NotCovered => "not_covered",
            Self::Neutral => "neutral",
        }
    }
}

/// Classify a raw display string for presentation.
///
/// "not covered" is checked first: a string containing both substrings
/// ("not covered, generic alternative covered") is an exclusion, never full
/// coverage. Substring checks are case-insensitive; the `"$0"` / `"0%"`
/// checks are exact, since zero buried in longer text ("$0 after
/// deductible") is a conditional value, not blanket full coverage.
pub fn classify(raw: &str) -> Coverage {
    let lower = raw.to_lowercase();
    if lower.contains("not covered") {
        return Coverage::NotCovered;
    }
    if lower.contains("covered") || raw == "$0" || raw == "0%" {
        return Coverage::Full;
    }
    Coverage::Neutral
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covered_text_is_full() {
        assert_eq!(classify("Covered 100%"), Coverage::Full);
        assert_eq!(classify("Covered after deductible"), Coverage::Full);
        assert_eq!(classify("covered"), Coverage::Full);
    }

    #[test]
    fn zero_values_are_full() {
        assert_eq!(classify("$0"), Coverage::Full);
        assert_eq!(classify("0%"), Coverage::Full);
    }

    #[test]
    fn zero_with_qualifier_is_neutral() {
        assert_eq!(classify("$0 after deductible"), Coverage::Neutral);
    }

    #[test]
    fn not_covered_is_exclusion() {
        assert_eq!(classify("Not Covered"), Coverage::NotCovered);
        assert_eq!(classify("NOT COVERED"), Coverage::NotCovered);
    }

    #[test]
    fn not_covered_wins_over_covered_substring() {
        // "Not Covered" itself contains "covered"; the exclusion check runs first.
        assert_eq!(
            classify("Not covered, generic alternative covered"),
            Coverage::NotCovered
        );
    }

    #[test]
    fn ordinary_values_are_neutral() {
        assert_eq!(classify("$25"), Coverage::Neutral);
        assert_eq!(classify("20%"), Coverage::Neutral);
        assert_eq!(classify("$25 copay"), Coverage::Neutral);
        assert_eq!(classify("Unlimited"), Coverage::Neutral);
    }

    #[test]
    fn display_codes() {
        assert_eq!(Coverage::Full.as_str(), "full");
        assert_eq!(Coverage::NotCovered.as_str(), "not_covered");
        assert_eq!(Coverage::Neutral.as_str(), "neutral");
    }
}
