use crate::layout::global_context::{use_app_context, use_hub};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let hub = use_hub();

    let claim_daily = move |_| {
        let hub = hub.get_value();
        spawn_local(async move {
            if let Err(e) = hub.daily.claim().await {
                log::warn!("daily claim failed: {}", e);
            }
        });
    };

    view! {
        <header data-zone="header" class="header">
            <h1 class="header__title">"ChaosMeme Hub"</h1>
            {move || {
                ctx.user
                    .get()
                    .map(|id| view! { <p class="header__user">{format!("ID: {}", id)}</p> })
            }}
            <button class="btn" on:click=claim_daily>"Claim daily reward"</button>
        </header>
    }
}
