pub mod aggregate;

pub use aggregate::MarketListing;
