//! Conversions between HTML form input values and draft fields.
//!
//! Browsers hand every input back as a string: `type="date"` as
//! `YYYY-MM-DD`, `type="datetime-local"` as `YYYY-MM-DDTHH:MM` (seconds only
//! when the step allows them). Blank strings mean "not set".

use chrono::{NaiveDate, NaiveDateTime};

const DATETIME_LOCAL: &str = "%Y-%m-%dT%H:%M";
const DATETIME_LOCAL_SECS: &str = "%Y-%m-%dT%H:%M:%S";

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn format_date(value: Option<NaiveDate>) -> String {
    value.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, DATETIME_LOCAL)
        .or_else(|_| NaiveDateTime::parse_from_str(value, DATETIME_LOCAL_SECS))
        .ok()
}

pub fn format_datetime(value: Option<NaiveDateTime>) -> String {
    value
        .map(|d| d.format(DATETIME_LOCAL).to_string())
        .unwrap_or_default()
}

/// Numeric input; blank or unparsable becomes 0 so validation reports it.
pub fn parse_amount(value: &str) -> f64 {
    value.trim().parse().unwrap_or(0.0)
}

pub fn parse_optional_amount(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    Some(value.parse().unwrap_or(0.0))
}

/// Blank text becomes `None`.
pub fn optional_text(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// "2h 05m" style duration for minute totals.
pub fn format_minutes(minutes: i64) -> String {
    let minutes = minutes.max(0);
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m:02}m"),
    }
}

pub fn format_money(amount: f64) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datetime_local_with_and_without_seconds() {
        let a = parse_datetime("2024-06-03T09:30").unwrap();
        let b = parse_datetime("2024-06-03T09:30:00").unwrap();
        assert_eq!(a, b);
        assert_eq!(format_datetime(Some(a)), "2024-06-03T09:30");
        assert_eq!(parse_datetime(""), None);
    }

    #[test]
    fn test_date_round_trip_and_blank() {
        let d = parse_date("2024-02-29").unwrap();
        assert_eq!(format_date(Some(d)), "2024-02-29");
        assert_eq!(parse_date("  "), None);
        assert_eq!(format_date(None), "");
    }

    #[test]
    fn test_amounts() {
        assert_eq!(parse_amount("12.5"), 12.5);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_optional_amount(""), None);
        assert_eq!(parse_optional_amount(" 40 "), Some(40.0));
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(120), "2h");
        assert_eq!(format_minutes(125), "2h 05m");
        assert_eq!(format_minutes(-3), "0m");
    }
}
