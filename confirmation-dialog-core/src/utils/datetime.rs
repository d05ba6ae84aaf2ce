//! Serde helpers for the timestamps stored alongside pending confirmations.
//!
//! Written as RFC3339; read back from RFC3339 or from a Unix timestamp in seconds,
//! since some session backends rewrite values they store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Serializes `DateTime<Utc>` as an RFC3339 string.
pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&dt.to_rfc3339())
}

/// Deserializes `DateTime<Utc>` from RFC3339 or Unix seconds.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StoredTimestamp {
        Rfc3339(String),
        Seconds(i64),
    }

    match StoredTimestamp::deserialize(deserializer)? {
        StoredTimestamp::Rfc3339(s) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| Error::custom(format!("Invalid RFC3339 timestamp: {e}"))),
        StoredTimestamp::Seconds(ts) => {
            DateTime::from_timestamp(ts, 0).ok_or_else(|| Error::custom("Invalid Unix timestamp"))
        }
    }
}
