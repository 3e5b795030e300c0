use crate::domain::a001_catalog::ui::CollectionsView;
use crate::domain::a002_inventory::ui::InventoryView;
use crate::domain::a003_market::ui::MarketView;
use crate::domain::a004_leaderboard::ui::LeaderboardView;
use crate::layout::global_context::{use_app_context, RenderedContent, ViewState};
use leptos::prelude::*;

/// Содержимое активного таба
#[component]
pub fn TabContent() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div id="content">
            {move || match ctx.view.get() {
                ViewState::Idle => view! { <div class="loader">"Connecting..."</div> }.into_any(),
                ViewState::Loading(_) => view! { <div class="loader">"Loading..."</div> }.into_any(),
                ViewState::Ready(RenderedContent::Collections(sections)) => {
                    view! { <CollectionsView sections=sections /> }.into_any()
                }
                ViewState::Ready(RenderedContent::Inventory(cards)) => {
                    view! { <InventoryView cards=cards /> }.into_any()
                }
                ViewState::Ready(RenderedContent::Market(listings)) => {
                    view! { <MarketView listings=listings /> }.into_any()
                }
                ViewState::Ready(RenderedContent::Leaderboard(entries)) => {
                    view! { <LeaderboardView entries=entries /> }.into_any()
                }
            }}
        </div>
    }
}
