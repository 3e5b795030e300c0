pub mod center;
pub mod global_context;
pub mod header;
pub mod tabs;

use leptos::prelude::*;

/// Каркас приложения: шапка с наградой, табы и контент.
///
/// ```text
/// +------------------------------+
/// |  Header (title, ID, daily)   |
/// +------------------------------+
/// |  TabBar                      |
/// |  TabContent                  |
/// +------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <center::Center />
        </div>
    }
}
