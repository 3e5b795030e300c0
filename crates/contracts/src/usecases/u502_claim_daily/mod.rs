pub mod response;

pub use response::{DailyReward, RewardItem};
