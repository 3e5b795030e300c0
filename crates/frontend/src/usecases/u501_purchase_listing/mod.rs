//! u501: покупка лота маркетплейса за Telegram Stars.

pub mod flow;
pub mod validation;

pub use flow::{ListingPurchase, PurchaseOutcome};
pub use validation::{validate_purchase, INVALID_ITEM_DATA};
