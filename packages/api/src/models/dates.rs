//! Lenient date decoding. The backend sends calendar dates either as
//! `YYYY-MM-DD` or as full RFC 3339 timestamps; both decode to the date part.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
        .or_else(|| value.get(..10).and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()))
}

pub fn option_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_both_forms() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 9);
        assert_eq!(parse_date("2024-03-09"), expected);
        assert_eq!(parse_date("2024-03-09T10:15:00.000Z"), expected);
        assert_eq!(parse_date("2024-03-09T10:15:00"), expected);
        assert_eq!(parse_date("soon"), None);
    }
}
