use crate::shared::api_utils::{paged_path, path_segment, Page};
use crate::shared::http::{ApiClient, FetchError};
use contracts::domain::a003_market::MarketListing;
use contracts::domain::common::MarketId;
use contracts::usecases::u501_purchase_listing::InvoiceResponse;

/// Fetch a page of marketplace listings
pub async fn fetch_listings(api: &ApiClient, page: Page) -> Result<Vec<MarketListing>, FetchError> {
    api.get(&paged_path("/market", page)).await
}

/// Ask the backend for a Stars invoice for a listing
pub async fn create_invoice(api: &ApiClient, market_id: &MarketId) -> Result<InvoiceResponse, FetchError> {
    api.post(&format!("/market/create_invoice/{}", path_segment(market_id.as_str())))
        .await
}
