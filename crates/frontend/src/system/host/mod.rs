//! Host container seam (Telegram WebApp).

pub mod telegram;

use async_trait::async_trait;
use serde::Deserialize;

pub use telegram::TelegramWebApp;

/// Shows a message to the user.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Identity and navigation services of the host webview.
#[async_trait(?Send)]
pub trait HostShell {
    /// Signed init data proving the user's identity to the backend.
    fn init_data(&self) -> String;

    fn open_link(&self, url: &str);

    async fn confirm(&self, message: &str) -> bool;
}

/// Subset of `WebApp.themeParams` the stylesheet reacts to.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ThemeParams {
    pub bg_color: Option<String>,
    pub section_bg_color: Option<String>,
    pub button_color: Option<String>,
    pub button_text_color: Option<String>,
}

/// CSS custom properties derived from the host theme, with the neon defaults
/// for anything the host leaves unset.
pub fn theme_css_vars(theme: &ThemeParams) -> [(&'static str, String); 4] {
    fn pick(value: &Option<String>, fallback: &str) -> String {
        value
            .as_deref()
            .filter(|v| !v.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }

    [
        ("--bg-start", pick(&theme.bg_color, "#0a0015")),
        ("--bg-end", pick(&theme.section_bg_color, "#1a0033")),
        ("--neon", pick(&theme.button_color, "#00ffea")),
        ("--pink", pick(&theme.button_text_color, "#ff00aa")),
    ]
}
