use crate::domain::a001_catalog::CatalogItem;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Response of `POST /daily/claim`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReward {
    pub item: RewardItem,
}

/// The reward is sometimes just a name and sometimes a full catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RewardItem {
    Named(String),
    Item(CatalogItem),
    Other(serde_json::Value),
}

impl fmt::Display for RewardItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewardItem::Named(name) => f.write_str(name),
            RewardItem::Item(item) => f.write_str(&item.name),
            RewardItem::Other(value) => write!(f, "{}", value),
        }
    }
}
