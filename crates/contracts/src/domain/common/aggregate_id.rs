use serde::{Deserialize, Serialize};
use std::fmt;

// The backend is not consistent about id types: Telegram user ids arrive as
// numbers, item ids may be either. Every id is carried as a string.

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

macro_rules! aggregate_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(from = "RawId")]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<RawId> for $name {
            fn from(raw: RawId) -> Self {
                match raw {
                    RawId::Number(n) => Self(n.to_string()),
                    RawId::Text(s) => Self(s),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

aggregate_id!(
    /// Catalog / inventory item id
    ItemId
);
aggregate_id!(
    /// Telegram user id
    UserId
);
aggregate_id!(
    /// Marketplace listing id (distinct from the listed item's id)
    MarketId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_text_ids() {
        let numeric: UserId = serde_json::from_str("123456789").unwrap();
        let text: UserId = serde_json::from_str("\"b\"").unwrap();
        assert_eq!(numeric.as_str(), "123456789");
        assert_eq!(text, UserId::from("b"));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = MarketId::new("42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
    }
}
