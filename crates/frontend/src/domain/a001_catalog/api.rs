use crate::shared::http::{ApiClient, FetchError};
use contracts::domain::a001_catalog::CatalogSections;

/// Fetch the catalog grouped by category
pub async fn fetch_collections(api: &ApiClient) -> Result<CatalogSections, FetchError> {
    api.get("/collections").await
}
