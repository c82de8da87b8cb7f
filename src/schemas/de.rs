use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, de::Error};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// For `#[serde(default, deserialize_with = "present")]` fields: a present
/// value becomes `Some`, `null` is rejected, and omission falls back to `None`.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

pub fn datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_datetime(&raw)
        .ok_or_else(|| D::Error::custom(format!("invalid datetime '{raw}'")))
}

pub fn present_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    datetime(deserializer).map(Some)
}

/// Accepts RFC 3339 (normalized to UTC), naive date-times and bare dates.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_utc());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::parse_datetime;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|date| date.and_hms_opt(h, m, s))
            .expect("valid timestamp")
    }

    #[test]
    fn parses_accepted_formats() {
        assert_eq!(parse_datetime("2024-05-01T09:30:00"), Some(at(9, 30, 0)));
        assert_eq!(parse_datetime("2024-05-01 09:30:15"), Some(at(9, 30, 15)));
        assert_eq!(parse_datetime("2024-05-01T09:30"), Some(at(9, 30, 0)));
        assert_eq!(parse_datetime("2024-05-01"), Some(at(0, 0, 0)));
    }

    #[test]
    fn offsets_are_normalized_to_utc() {
        assert_eq!(parse_datetime("2024-05-01T11:30:00+02:00"), Some(at(9, 30, 0)));
        assert_eq!(parse_datetime("2024-05-01T09:30:00Z"), Some(at(9, 30, 0)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_datetime("yesterday"), None);
        assert_eq!(parse_datetime("2024-13-01"), None);
    }
}
