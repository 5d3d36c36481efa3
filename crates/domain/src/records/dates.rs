//! Sentinels and lenient `YYYY-MM-DD` parsing

use chrono::NaiveDate;

/// Placeholder the roster uses for an intentionally empty field
pub const SENTINEL: &str = "–";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// True when `value` marks an intentionally empty field.
pub fn is_sentinel(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value == SENTINEL || value == "-" || value.eq_ignore_ascii_case("none")
}

/// Parse a roster date. Sentinels and malformed text yield `None`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if is_sentinel(value) {
        return None;
    }
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels() {
        assert!(is_sentinel("–"));
        assert!(is_sentinel("-"));
        assert!(is_sentinel("None"));
        assert!(is_sentinel("  "));
        assert!(!is_sentinel("PRJ001"));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-06-01"),
            NaiveDate::from_ymd_opt(2025, 6, 1)
        );
        assert_eq!(
            parse_date(" 2025-06-01 "),
            NaiveDate::from_ymd_opt(2025, 6, 1)
        );
    }

    #[test]
    fn test_unparsable_dates_are_absent() {
        assert_eq!(parse_date("–"), None);
        assert_eq!(parse_date("next week"), None);
        assert_eq!(parse_date("01/06/2025"), None);
        assert_eq!(parse_date("2025-02-30"), None);
    }
}
