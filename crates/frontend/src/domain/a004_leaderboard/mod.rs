pub mod api;
pub mod ranking;
pub mod ui;

pub use ranking::{rank_entries, RankedEntry};
