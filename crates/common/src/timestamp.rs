//! `createdAt` wire format: RFC 3339, millisecond precision, `Z` suffix.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

pub fn format(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(ts))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_with_millis_and_z() {
        let ts = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format(&ts), "2026-01-02T03:04:05.000Z");
    }

    #[test]
    fn accepts_offset_timestamps() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            #[serde(with = "super")]
            at: DateTime<Utc>,
        }
        let w: Wrapper = serde_json::from_str(r#"{"at":"2026-01-02T05:04:05+02:00"}"#).unwrap();
        assert_eq!(format(&w.at), "2026-01-02T03:04:05.000Z");
    }
}
