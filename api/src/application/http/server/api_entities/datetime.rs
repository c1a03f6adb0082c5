use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Accepts RFC3339, or ISO 8601 without an offset, which is taken as UTC.
pub fn parse_datetime_utc(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .map(|dt| dt.and_utc())
}

pub fn deserialize_datetime_utc<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;

    parse_datetime_utc(&s).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "Invalid datetime format: {}. Expected RFC3339 (e.g., '2025-12-02T02:08:23Z') or ISO 8601 without timezone (e.g., '2025-12-02T02:08:23')",
            s
        ))
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn parses_offset_and_naive_forms() {
        let expected = Utc.with_ymd_and_hms(2025, 12, 2, 2, 8, 23).unwrap();

        assert_eq!(parse_datetime_utc("2025-12-02T02:08:23Z"), Some(expected));
        assert_eq!(parse_datetime_utc("2025-12-02T04:08:23+02:00"), Some(expected));
        assert_eq!(parse_datetime_utc("2025-12-02T02:08:23"), Some(expected));
        assert!(parse_datetime_utc("2025-12-02T02:08:23.5").is_some());
        assert_eq!(parse_datetime_utc("yesterday"), None);
    }
}
