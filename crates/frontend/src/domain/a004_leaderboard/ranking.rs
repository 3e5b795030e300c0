use contracts::domain::a004_leaderboard::LeaderboardEntry;
use contracts::domain::common::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    /// 1-based, continues across pages
    pub rank: u64,
    pub user_id: UserId,
    pub score: f64,
}

/// Orders by score, highest first. Equal scores keep the order the backend
/// returned them in.
pub fn rank_entries(mut entries: Vec<LeaderboardEntry>, offset: u32) -> Vec<RankedEntry> {
    entries.sort_by(|a, b| b.score.total_cmp(&a.score));
    entries
        .into_iter()
        .zip(u64::from(offset) + 1..)
        .map(|(entry, rank)| RankedEntry {
            rank,
            user_id: entry.user_id,
            score: entry.score,
        })
        .collect()
}
