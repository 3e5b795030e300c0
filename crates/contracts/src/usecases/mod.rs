pub mod u501_purchase_listing;
pub mod u502_claim_daily;
