//! Timestamp codecs for product records.
//!
//! The product store hands out timestamps either as RFC 3339 strings or as
//! `{ "seconds": .., "nanoseconds": .. }` objects. Both decode to
//! `DateTime<Utc>`; encoding always uses RFC 3339 (chrono's default).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Rfc3339(DateTime<Utc>),
    Store {
        #[serde(alias = "_seconds")]
        seconds: i64,
        #[serde(alias = "_nanoseconds", default)]
        nanoseconds: u32,
    },
}

impl RawTimestamp {
    fn resolve<E: serde::de::Error>(self) -> Result<DateTime<Utc>, E> {
        match self {
            RawTimestamp::Rfc3339(at) => Ok(at),
            RawTimestamp::Store { seconds, nanoseconds } => {
                DateTime::from_timestamp(seconds, nanoseconds).ok_or_else(|| {
                    E::custom(format!(
                        "timestamp out of range (seconds={seconds}, nanoseconds={nanoseconds})"
                    ))
                })
            }
        }
    }
}

/// Decode a required timestamp.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    RawTimestamp::deserialize(deserializer)?.resolve()
}

/// Decode an optional timestamp; `null` maps to `None`.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawTimestamp>::deserialize(deserializer)?
        .map(RawTimestamp::resolve)
        .transpose()
}

/// Render a timestamp as the short US date shown in product listings (`M/D/YYYY`, UTC).
pub fn display_date(at: DateTime<Utc>) -> String {
    at.format("%-m/%-d/%Y").to_string()
}
