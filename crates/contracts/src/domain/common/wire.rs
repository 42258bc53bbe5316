//! Serde and parsing helpers for the business fields of drafts.

use chrono::NaiveDate;
use serde::Serializer;

/// Blank optional text goes over the wire as `null`, not `""`.
pub fn blank_as_null<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: AsRef<str>,
    S: Serializer,
{
    let trimmed = value.as_ref().trim();
    if trimmed.is_empty() {
        serializer.serialize_none()
    } else {
        serializer.serialize_some(trimmed)
    }
}

/// Dates travel as `YYYY-MM-DD`; timestamps are cut to their date part.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().split('T').next().unwrap_or("");
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Optional date typed into a form: blank is fine, anything else must parse.
pub fn check_optional_date(value: &str, field_label: &str) -> Result<(), String> {
    if value.trim().is_empty() || parse_date(value).is_some() {
        Ok(())
    } else {
        Err(format!("{} must be a date (YYYY-MM-DD)", field_label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Body {
        #[serde(serialize_with = "blank_as_null")]
        notes: String,
    }

    #[test]
    fn test_blank_as_null() {
        let blank = serde_json::to_value(Body { notes: "  ".into() }).unwrap();
        assert_eq!(blank, serde_json::json!({"notes": null}));
        let filled = serde_json::to_value(Body { notes: " ok ".into() }).unwrap();
        assert_eq!(filled, serde_json::json!({"notes": "ok"}));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-03-15"), NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(parse_date("2024-03-15T10:00:00Z"), NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(parse_date("15.03.2024"), None);
        assert!(check_optional_date("", "Due date").is_ok());
        assert!(check_optional_date("soon", "Due date").is_err());
    }
}
