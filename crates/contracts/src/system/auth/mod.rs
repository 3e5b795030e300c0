use crate::domain::common::UserId;
use serde::{Deserialize, Serialize};

/// Header carrying the Telegram init data on `POST /auth/verify`
pub const INIT_DATA_HEADER: &str = "X-Telegram-Init-Data";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyResponse {
    #[serde(default)]
    pub status: Option<String>,
    pub user_id: UserId,
}
