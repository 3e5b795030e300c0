mod aggregate_id;
mod expiry;

pub use aggregate_id::{ItemId, MarketId, UserId};
pub use expiry::ExpiryInstant;
