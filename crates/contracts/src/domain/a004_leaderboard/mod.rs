pub mod aggregate;

pub use aggregate::LeaderboardEntry;
