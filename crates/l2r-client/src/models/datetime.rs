//! Lenient timestamp deserializers
//!
//! The backend serializes naive datetimes without an offset; these accept
//! that as well as RFC 3339.

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    l2r_core::parse_timestamp(&raw).map_err(D::Error::custom)
}

pub mod option {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| l2r_core::parse_timestamp(&raw).map_err(D::Error::custom))
            .transpose()
    }
}
