use jiff::{Timestamp, civil::Date, tz::TimeZone};
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};

/// Backend identifier of a record.
///
/// Mock backends send ids as either numbers or numeric strings; both are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Self(n)),
            Raw::Text(s) => s
                .trim()
                .parse()
                .map(Self)
                .map_err(|_| serde::de::Error::custom(format!("invalid record id: {s:?}"))),
        }
    }
}

/// A record type exchanged with the REST backend.
pub trait Resource: Clone + PartialEq + Serialize + DeserializeOwned + 'static {
    /// Collection path, e.g. `/users`.
    const PATH: &'static str;

    /// Singular display name, e.g. `User`.
    const NOUN: &'static str;

    /// Partial body sent on create and update.
    type Draft: Clone + PartialEq + Serialize + 'static;

    fn id(&self) -> RecordId;

    /// Human readable name used in notifications.
    fn label(&self) -> &str;

    fn item_path(id: RecordId) -> String {
        format!("{}/{}", Self::PATH, id)
    }
}

/// Accepts an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (taken as UTC midnight).
///
/// Anything else becomes `None` so one odd row cannot fail a whole listing.
pub fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    if let Ok(ts) = raw.parse::<Timestamp>() {
        return Ok(Some(ts));
    }

    Ok(raw
        .parse::<Date>()
        .ok()
        .and_then(|date| date.to_zoned(TimeZone::UTC).ok())
        .map(|zoned| zoned.timestamp()))
}
