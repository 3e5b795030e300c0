pub mod content;
pub mod tab_bar;

pub use content::TabContent;
pub use tab_bar::TabBar;

use leptos::prelude::*;

#[component]
pub fn Center() -> impl IntoView {
    view! {
        <div data-zone="center" class="app-tabs">
            <TabBar />
            <TabContent />
        </div>
    }
}
