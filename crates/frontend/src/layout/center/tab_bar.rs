use crate::layout::global_context::{use_app_context, use_hub};
use crate::layout::tabs::Tab;
use leptos::prelude::*;

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_app_context();
    let hub = use_hub();

    view! {
        <nav class="tabs">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    let is_active = move || ctx.active.get() == tab;
                    view! {
                        <div
                            class="tab"
                            class:active=is_active
                            data-tab=tab.key()
                            on:click=move |_| hub.get_value().tabs.select_tab(tab)
                        >
                            {tab.label()}
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
