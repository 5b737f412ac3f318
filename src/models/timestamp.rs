//! Serde adapters that write timestamps as RFC 3339 UTC with millisecond
//! precision (`2026-10-16T09:30:00.000Z`), the shape already present in
//! stored collections. Keeping the exact shape makes save-after-load
//! byte-stable.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

pub fn format(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse<E: serde::de::Error>(raw: &str) -> Result<DateTime<Utc>, E> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| E::custom(format!("invalid timestamp {raw:?}: {e}")))
}

pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(dt))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw)
}

pub mod option {
    use super::*;

    pub fn serialize<S: Serializer>(
        dt: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match dt {
            Some(dt) => serializer.serialize_str(&format(dt)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse(&raw).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_has_millis() {
        let dt = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();
        assert_eq!(format(&dt), "2026-10-16T09:30:00.000Z");
    }

    #[test]
    fn test_parse_accepts_offsets() {
        let dt: DateTime<Utc> = parse::<serde_json::Error>("2026-10-16T15:00:00.250+05:30").unwrap();
        assert_eq!(format(&dt), "2026-10-16T09:30:00.250Z");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse::<serde_json::Error>("yesterday").is_err());
    }
}
