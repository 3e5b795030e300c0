use crate::shared::api_utils::{paged_path, Page};
use crate::shared::http::{ApiClient, FetchError};
use contracts::domain::a002_inventory::InventoryItem;

/// Fetch a page of the current user's inventory
pub async fn fetch_inventory(api: &ApiClient, page: Page) -> Result<Vec<InventoryItem>, FetchError> {
    api.get(&paged_path("/inventory", page)).await
}
