use super::ranking::{rank_entries, RankedEntry};
use crate::shared::api_utils::{paged_path, Page};
use crate::shared::http::{ApiClient, FetchError};
use contracts::domain::a004_leaderboard::LeaderboardEntry;

/// Fetch a page of the leaderboard, ranked client-side
pub async fn fetch_ranking(api: &ApiClient, page: Page) -> Result<Vec<RankedEntry>, FetchError> {
    let entries: Vec<LeaderboardEntry> = api.get(&paged_path("/leaderboard", page)).await?;
    Ok(rank_entries(entries, page.offset))
}
