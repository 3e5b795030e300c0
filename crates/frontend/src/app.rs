use crate::hub::Hub;
use crate::layout::global_context::{AppGlobalContext, HubHandle, SignalRenderer};
use crate::layout::Shell;
use crate::shared::config::load_browser_config;
use crate::shared::http::GlooExecutor;
use crate::shared::runtime::BrowserRuntime;
use crate::system::host::TelegramWebApp;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    let config = load_browser_config();
    let webapp = Rc::new(TelegramWebApp::attach());
    webapp.apply_theme();

    let hub = Hub::new(
        &config,
        Rc::new(BrowserRuntime),
        Rc::new(GlooExecutor),
        webapp.clone(),
        webapp,
        Rc::new(SignalRenderer::new(ctx)),
    );
    let handle: HubHandle = StoredValue::new_local(hub);
    provide_context(handle);

    spawn_local(async move {
        match handle.get_value().start().await {
            Ok(user) => ctx.user.set(Some(user)),
            Err(e) => log::error!("session verification failed: {}", e),
        }
    });

    view! { <Shell /> }
}
