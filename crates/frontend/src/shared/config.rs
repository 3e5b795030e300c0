use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub polling: PollingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub request_timeout_ms: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PollingConfig {
    /// Re-fetch period for inventory and market
    pub interval_secs: u64,
    /// Recompute period for inventory expiry timers
    pub countdown_tick_secs: u64,
    pub page_size: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:8000"
request_timeout_ms = 15000

[polling]
interval_secs = 45
countdown_tick_secs = 60
page_size = 20
"#;

/// Overrides accepted from the page URL, e.g. `?api=https://hub.example.com`
#[derive(Debug, Default, Deserialize)]
struct QueryOverrides {
    api: Option<String>,
    timeout_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8000".to_string(),
                request_timeout_ms: 15_000,
            },
            polling: PollingConfig {
                interval_secs: 45,
                countdown_tick_secs: 60,
                page_size: 20,
            },
        }
    }
}

impl ClientConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.api.request_timeout_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.polling.interval_secs)
    }

    pub fn countdown_tick(&self) -> Duration {
        Duration::from_secs(self.polling.countdown_tick_secs)
    }
}

/// Load configuration
///
/// Starts from the embedded defaults and applies overrides from the
/// location query string (leading `?` optional).
pub fn load_config(search: &str) -> anyhow::Result<ClientConfig> {
    let mut config: ClientConfig = toml::from_str(DEFAULT_CONFIG)?;

    let query = search.trim_start_matches('?');
    if query.is_empty() {
        return Ok(config);
    }

    let overrides: QueryOverrides = serde_qs::from_str(query)?;
    if let Some(api) = overrides.api.filter(|a| !a.trim().is_empty()) {
        log::info!("API base overridden from URL: {}", api);
        config.api.base_url = api;
    }
    if let Some(timeout) = overrides.timeout_ms.filter(|t| *t > 0) {
        config.api.request_timeout_ms = timeout;
    }
    Ok(config)
}

/// [`load_config`] against `window.location.search`, never failing
pub fn load_browser_config() -> ClientConfig {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    load_config(&search).unwrap_or_else(|e| {
        log::warn!("Ignoring invalid config overrides: {}", e);
        ClientConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<ClientConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_durations() {
        let config = ClientConfig::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
        assert_eq!(config.poll_interval(), Duration::from_secs(45));
        assert_eq!(config.countdown_tick(), Duration::from_secs(60));
    }

    #[test]
    fn test_query_overrides() {
        let config = load_config("?api=https%3A%2F%2Fhub.example.com&timeout_ms=5000").unwrap();
        assert_eq!(config.api.base_url, "https://hub.example.com");
        assert_eq!(config.api.request_timeout_ms, 5000);
        assert_eq!(config.polling.page_size, 20);
    }

    #[test]
    fn test_unknown_params_ignored() {
        let config = load_config("tgWebAppStartParam=abc").unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_bad_override_is_error() {
        assert!(load_config("?timeout_ms=soon").is_err());
    }
}
