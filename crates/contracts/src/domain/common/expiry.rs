use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Момент истечения предмета инвентаря.
///
/// Wire format is epoch milliseconds (the backend sometimes emits them as a
/// float); RFC 3339 strings are accepted as well. Serialized back as integer
/// milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawExpiry", into = "i64")]
pub struct ExpiryInstant(DateTime<Utc>);

impl ExpiryInstant {
    pub fn from_millis(millis: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp_millis(millis).map(Self)
    }

    pub fn at(&self) -> DateTime<Utc> {
        self.0
    }

    pub fn millis(&self) -> i64 {
        self.0.timestamp_millis()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawExpiry {
    Millis(i64),
    Fractional(f64),
    Text(String),
}

impl TryFrom<RawExpiry> for ExpiryInstant {
    type Error = String;

    fn try_from(raw: RawExpiry) -> Result<Self, Self::Error> {
        match raw {
            RawExpiry::Millis(ms) => {
                Self::from_millis(ms).ok_or_else(|| format!("expiry out of range: {}", ms))
            }
            RawExpiry::Fractional(ms) if ms.is_finite() => Self::from_millis(ms.floor() as i64)
                .ok_or_else(|| format!("expiry out of range: {}", ms)),
            RawExpiry::Fractional(ms) => Err(format!("expiry is not a number: {}", ms)),
            RawExpiry::Text(s) => DateTime::parse_from_rfc3339(&s)
                .map(|dt| Self(dt.with_timezone(&Utc)))
                .map_err(|e| format!("invalid expiry '{}': {}", s, e)),
        }
    }
}

impl From<ExpiryInstant> for i64 {
    fn from(value: ExpiryInstant) -> Self {
        value.millis()
    }
}
