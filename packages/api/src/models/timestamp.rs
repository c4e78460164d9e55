//! Serde adapter for optional server timestamps.
//!
//! Use as `#[serde(default, with = "crate::models::timestamp")]` on an
//! `Option<DateTime<Utc>>`. Naive timestamps are read as UTC; anything
//! unparseable reads as `None` rather than failing the whole body.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S: Serializer>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(ts) => serializer.serialize_str(&ts.to_rfc3339()),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse))
}

/// Parse RFC 3339, falling back to a naive timestamp taken as UTC.
pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_forms() {
        let aware = parse("2024-03-01T10:30:00+02:00").unwrap();
        assert_eq!(aware.hour(), 8);

        let naive = parse("2024-03-01T10:30:00.123456").unwrap();
        assert_eq!((naive.day(), naive.hour()), (1, 10));

        assert!(parse("2024-03-01 10:30:00").is_some());
        assert!(parse("yesterday").is_none());
    }
}
