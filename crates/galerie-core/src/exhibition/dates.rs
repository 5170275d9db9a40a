use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Parse a Czech-formatted date like "15. 1. 2024".
///
/// The format is day, month, year separated by a period and a space.
/// Anything else is rejected: the tokens are ambiguous under a generic
/// date parser, so malformed input is a reportable error rather than a
/// guess.
pub fn parse_czech_date(text: &str) -> Result<NaiveDate> {
    let tokens: Vec<&str> = text.split(". ").collect();
    if tokens.len() != 3 {
        return Err(Error::Date(format!(
            "expected \"D. M. YYYY\", got {text:?}"
        )));
    }

    let mut parts = [0u32; 3];
    for (i, token) in tokens.iter().enumerate() {
        parts[i] = token
            .trim()
            .trim_end_matches('.')
            .parse::<u32>()
            .map_err(|_| Error::Date(format!("non-numeric token {token:?} in {text:?}")))?;
    }

    let [day, month, year] = parts;
    NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| Error::Date(format!("no such calendar date: {text:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_valid_dates() {
        assert_eq!(
            parse_czech_date("2. 2. 2026").unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 2).unwrap()
        );
        assert_eq!(
            parse_czech_date("20. 2. 2026").unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 20).unwrap()
        );
        assert_eq!(
            parse_czech_date("31. 12. 1999").unwrap(),
            NaiveDate::from_ymd_opt(1999, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_rejects_wrong_token_count() {
        assert!(parse_czech_date("2. 2026").is_err());
        assert!(parse_czech_date("2. 2. 2. 2026").is_err());
        assert!(parse_czech_date("").is_err());
    }

    #[test]
    fn test_rejects_non_numeric_tokens() {
        assert!(parse_czech_date("dva. 2. 2026").is_err());
        assert!(parse_czech_date("2. února. 2026").is_err());
    }

    #[test]
    fn test_rejects_impossible_dates() {
        assert!(parse_czech_date("31. 2. 2026").is_err());
        assert!(parse_czech_date("0. 1. 2026").is_err());
    }
}
