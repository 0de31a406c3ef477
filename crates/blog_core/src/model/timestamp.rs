//! ISO 8601 timestamp encoding for persisted records.
//!
//! Writes always use millisecond precision with a `Z` suffix
//! (`2024-05-01T10:00:00.000Z`); reads accept any RFC 3339 value.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_iso(value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|err| D::Error::custom(format!("invalid ISO 8601 timestamp `{raw}`: {err}")))
}

/// Formats a timestamp the way it is persisted.
pub fn to_iso(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::to_iso;
    use chrono::{TimeZone, Utc};

    #[test]
    fn iso_uses_millis_and_zulu_suffix() {
        let value = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        assert_eq!(to_iso(&value), "2024-05-01T10:00:00.000Z");
    }
}
