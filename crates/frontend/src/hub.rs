//! Composition root: wires the HTTP client, tabs, countdowns and use cases
//! around one host shell.

use crate::layout::tabs::{ContentLoader, ContentRenderer, PollSettings, Tab, TabController};
use crate::shared::config::ClientConfig;
use crate::shared::countdown::CountdownRegistry;
use crate::shared::http::{ApiClient, FetchError, HttpExecutor};
use crate::shared::runtime::Runtime;
use crate::system::host::{HostShell, Notifier};
use crate::usecases::u501_purchase_listing::ListingPurchase;
use crate::usecases::u502_claim_daily::DailyClaim;
use contracts::domain::common::UserId;
use std::rc::Rc;

pub struct Hub {
    pub api: Rc<ApiClient>,
    pub tabs: Rc<TabController>,
    pub countdowns: Rc<CountdownRegistry>,
    pub purchases: ListingPurchase,
    pub daily: DailyClaim,
    host: Rc<dyn HostShell>,
}

impl Hub {
    pub fn new(
        config: &ClientConfig,
        runtime: Rc<dyn Runtime>,
        executor: Rc<dyn HttpExecutor>,
        notifier: Rc<dyn Notifier>,
        host: Rc<dyn HostShell>,
        renderer: Rc<dyn ContentRenderer>,
    ) -> Rc<Self> {
        let api = Rc::new(ApiClient::new(
            &config.api.base_url,
            config.request_timeout(),
            executor,
            runtime.clone(),
            notifier.clone(),
        ));
        let countdowns = CountdownRegistry::new(runtime.clone(), config.countdown_tick());
        let tabs = TabController::new(
            ContentLoader::new(api.clone()),
            renderer,
            runtime,
            countdowns.clone(),
            PollSettings {
                interval: config.poll_interval(),
                page_size: config.polling.page_size,
            },
        );
        let purchases = ListingPurchase::new(api.clone(), host.clone(), notifier.clone());
        let daily = DailyClaim::new(api.clone(), notifier, tabs.clone());

        Rc::new(Self {
            api,
            tabs,
            countdowns,
            purchases,
            daily,
            host,
        })
    }

    /// Verifies the host identity, then opens collections and starts polling.
    pub async fn start(&self) -> Result<UserId, FetchError> {
        let init_data = self.host.init_data();
        if init_data.is_empty() {
            log::warn!("host supplied no init data");
        }
        let verified = self.api.verify(&init_data).await?;
        log::info!("verified as user {}", verified.user_id);
        self.tabs.select_tab(Tab::Collections);
        self.tabs.start_polling();
        Ok(verified.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::{epoch, FakeExecutor, FakeHost, ManualRuntime, RecordingNotifier, RecordingRenderer};
    use futures::executor::block_on;

    struct World {
        runtime: Rc<ManualRuntime>,
        executor: Rc<FakeExecutor>,
        notifier: Rc<RecordingNotifier>,
        renderer: Rc<RecordingRenderer>,
        hub: Rc<Hub>,
    }

    fn world() -> World {
        let runtime = Rc::new(ManualRuntime::new(epoch()));
        let executor = Rc::new(FakeExecutor::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let renderer = Rc::new(RecordingRenderer::default());
        let mut config = ClientConfig::default();
        config.api.base_url = "http://api.test".to_string();
        let hub = Hub::new(
            &config,
            runtime.clone(),
            executor.clone(),
            notifier.clone(),
            Rc::new(FakeHost::default()),
            renderer.clone(),
        );
        World {
            runtime,
            executor,
            notifier,
            renderer,
            hub,
        }
    }

    #[test]
    fn test_start_verifies_then_opens_collections() {
        let w = world();
        w.executor.reply("/auth/verify", 200, r#"{"status": "ok", "user_id": 777}"#);
        w.executor.reply("/collections", 200, r#"{"memes": []}"#);

        let user = block_on(w.hub.start()).unwrap();
        w.runtime.run_until_stalled();

        assert_eq!(user.as_str(), "777");
        assert!(w.hub.api.session().is_valid());
        assert_eq!(w.hub.tabs.current_tab(), Tab::Collections);
        assert!(w.hub.tabs.is_polling());
        assert_eq!(w.renderer.rendered_tabs(), vec![Tab::Collections]);
        assert_eq!(w.executor.paths(), vec!["/auth/verify", "/collections"]);
    }

    #[test]
    fn test_failed_verify_stops_there() {
        let w = world();
        w.executor.reply("/auth/verify", 403, "bad hash");

        let err = block_on(w.hub.start()).unwrap_err();
        w.runtime.run_until_stalled();

        assert!(matches!(err, FetchError::Api { status: 403, .. }));
        assert!(!w.hub.tabs.is_polling());
        assert!(w.renderer.loading.borrow().is_empty());
        assert_eq!(w.notifier.messages(), vec!["API error 403: bad hash"]);
        assert_eq!(w.executor.paths(), vec!["/auth/verify"]);
    }
}
