use crate::domain::common::UserId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: UserId,
    /// Not guaranteed to be whole
    pub score: f64,
}
