use super::ranking::RankedEntry;
use leptos::prelude::*;

#[component]
pub fn LeaderboardView(entries: Vec<RankedEntry>) -> impl IntoView {
    view! {
        <ul class="leaderboard">
            {entries
                .into_iter()
                .map(|entry| {
                    view! {
                        <li>
                            <span>{format!("#{}", entry.rank)}</span>
                            {format!(" User {}: {} points", entry.user_id, entry.score)}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
