use super::{theme_css_vars, HostShell, Notifier, ThemeParams};
use async_trait::async_trait;
use futures::channel::oneshot;
use js_sys::{Function, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// `window.Telegram.WebApp`, with plain browser fallbacks when the page is
/// opened outside Telegram.
#[derive(Debug, Clone)]
pub struct TelegramWebApp {
    app: Option<JsValue>,
}

fn property(target: &JsValue, name: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn method(target: &JsValue, name: &str) -> Option<Function> {
    property(target, name).and_then(|f| f.dyn_into::<Function>().ok())
}

impl TelegramWebApp {
    /// Looks the WebApp object up and signals readiness to the host.
    pub fn attach() -> Self {
        let app = web_sys::window()
            .and_then(|w| property(&JsValue::from(w), "Telegram"))
            .and_then(|tg| property(&tg, "WebApp"));

        let this = Self { app };
        match &this.app {
            Some(_) => {
                this.call("ready", &[]);
                this.call("expand", &[]);
                log::info!("attached to Telegram WebApp");
            }
            None => log::warn!("Telegram WebApp not found, using browser fallbacks"),
        }
        this
    }

    fn call(&self, name: &str, args: &[JsValue]) -> bool {
        let Some(app) = &self.app else {
            return false;
        };
        let Some(f) = method(app, name) else {
            return false;
        };
        let result = match args {
            [] => f.call0(app),
            [a] => f.call1(app, a),
            [a, b] => f.call2(app, a, b),
            _ => return false,
        };
        if let Err(e) = result {
            log::warn!("WebApp.{} failed: {:?}", name, e);
            return false;
        }
        true
    }

    pub fn theme(&self) -> ThemeParams {
        self.app
            .as_ref()
            .and_then(|app| property(app, "themeParams"))
            .and_then(|params| serde_wasm_bindgen::from_value(params).ok())
            .unwrap_or_default()
    }

    /// Publishes the host palette as CSS custom properties on `<html>`.
    pub fn apply_theme(&self) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        let style = root.style();
        for (name, value) in theme_css_vars(&self.theme()) {
            let _ = style.set_property(name, &value);
        }
    }
}

impl Notifier for TelegramWebApp {
    fn notify(&self, message: &str) {
        if self.call("showAlert", &[JsValue::from_str(message)]) {
            return;
        }
        if let Some(w) = web_sys::window() {
            let _ = w.alert_with_message(message);
        }
    }
}

#[async_trait(?Send)]
impl HostShell for TelegramWebApp {
    fn init_data(&self) -> String {
        self.app
            .as_ref()
            .and_then(|app| property(app, "initData"))
            .and_then(|v| v.as_string())
            .unwrap_or_default()
    }

    fn open_link(&self, url: &str) {
        if self.call("openLink", &[JsValue::from_str(url)]) {
            return;
        }
        if let Some(w) = web_sys::window() {
            let _ = w.open_with_url(url);
        }
    }

    async fn confirm(&self, message: &str) -> bool {
        if self.app.is_some() {
            let (tx, rx) = oneshot::channel::<bool>();
            let callback = Closure::once_into_js(move |ok: JsValue| {
                let _ = tx.send(ok.as_bool().unwrap_or(false));
            });
            if self.call("showConfirm", &[JsValue::from_str(message), callback]) {
                return rx.await.unwrap_or(false);
            }
        }
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
