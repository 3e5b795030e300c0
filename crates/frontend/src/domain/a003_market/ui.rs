use crate::layout::global_context::use_hub;
use contracts::domain::a003_market::MarketListing;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn MarketView(listings: Vec<MarketListing>) -> impl IntoView {
    if listings.is_empty() {
        return view! { <div class="empty">"Nothing for sale right now"</div> }.into_any();
    }

    view! {
        <div class="grid">
            {listings.into_iter().map(market_card).collect_view()}
        </div>
    }
    .into_any()
}

fn market_card(listing: MarketListing) -> impl IntoView {
    let hub = use_hub();
    let on_buy = {
        let listing = listing.clone();
        move |_| {
            let listing = listing.clone();
            let hub = hub.get_value();
            spawn_local(async move {
                // ошибки уже показаны пользователю
                if let Err(e) = hub.purchases.buy(&listing).await {
                    log::warn!("purchase of {} failed: {}", listing.market_id, e);
                }
            });
        }
    };

    let price = if listing.has_price() {
        format!("{} Stars", listing.price)
    } else {
        "Price unavailable".to_string()
    };

    view! {
        <div class=format!("card {}", listing.rarity)>
            <img src=listing.img.clone() alt=listing.name.clone() />
            <div class="rarity">{listing.rarity.clone()}</div>
            <div class="price">{price}</div>
            <button class="btn buy" on:click=on_buy>"Buy"</button>
        </div>
    }
}
