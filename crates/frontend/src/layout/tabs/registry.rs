//! Tab content registry - единственный источник правды для маппинга таба на endpoint.
//!
//! `ContentLoader::load` по табу вызывает нужный endpoint и возвращает
//! типизированный `TabData`. Ретраев здесь нет: всё делает `ApiClient`.

use super::tab_labels::Tab;
use crate::domain::a001_catalog::api::fetch_collections;
use crate::domain::a002_inventory::api::fetch_inventory;
use crate::domain::a003_market::api::fetch_listings;
use crate::domain::a004_leaderboard::api::fetch_ranking;
use crate::domain::a004_leaderboard::RankedEntry;
use crate::shared::api_utils::Page;
use crate::shared::http::{ApiClient, FetchError};
use contracts::domain::a001_catalog::CatalogSections;
use contracts::domain::a002_inventory::InventoryItem;
use contracts::domain::a003_market::MarketListing;
use std::rc::Rc;

/// Loaded content, one variant per tab.
#[derive(Debug, Clone, PartialEq)]
pub enum TabData {
    Collections(CatalogSections),
    Inventory(Vec<InventoryItem>),
    Market(Vec<MarketListing>),
    Leaderboard(Vec<RankedEntry>),
}

impl TabData {
    pub fn tab(&self) -> Tab {
        match self {
            TabData::Collections(_) => Tab::Collections,
            TabData::Inventory(_) => Tab::Inventory,
            TabData::Market(_) => Tab::Market,
            TabData::Leaderboard(_) => Tab::Leaderboard,
        }
    }
}

#[derive(Clone)]
pub struct ContentLoader {
    api: Rc<ApiClient>,
}

impl ContentLoader {
    pub fn new(api: Rc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn load(&self, tab: Tab, offset: u32, limit: u32) -> Result<TabData, FetchError> {
        let page = Page::new(offset, limit);
        let api = self.api.as_ref();
        Ok(match tab {
            // collections are not paginated
            Tab::Collections => TabData::Collections(fetch_collections(api).await?),
            Tab::Inventory => TabData::Inventory(fetch_inventory(api, page).await?),
            Tab::Market => TabData::Market(fetch_listings(api, page).await?),
            Tab::Leaderboard => TabData::Leaderboard(fetch_ranking(api, page).await?),
        })
    }
}
