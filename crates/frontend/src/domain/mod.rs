pub mod a001_catalog;
pub mod a002_inventory;
pub mod a003_market;
pub mod a004_leaderboard;
