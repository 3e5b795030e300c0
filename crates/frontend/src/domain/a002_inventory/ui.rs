use crate::layout::global_context::InventoryCard;
use leptos::prelude::*;

#[component]
pub fn InventoryView(cards: Vec<InventoryCard>) -> impl IntoView {
    if cards.is_empty() {
        return view! { <div class="empty">"Inventory is empty"</div> }.into_any();
    }

    view! {
        <div class="grid">
            {cards.into_iter().map(inventory_card).collect_view()}
        </div>
    }
    .into_any()
}

fn inventory_card(card: InventoryCard) -> impl IntoView {
    let InventoryCard { item, countdown } = card;
    let class_signal = countdown.clone();
    view! {
        <div class=format!("card {}", item.rarity)>
            <img src=item.img alt=item.name.clone() />
            <div class="rarity">{item.rarity.clone()}</div>
            <div class=move || class_signal.get().css_class()>
                {move || countdown.get().label()}
            </div>
        </div>
    }
}
