//! u502: ежедневная награда.

use crate::layout::tabs::TabController;
use crate::shared::http::{ApiClient, FetchError};
use crate::system::host::Notifier;
use contracts::usecases::u502_claim_daily::DailyReward;
use std::rc::Rc;

const CLAIM_PATH: &str = "/daily/claim";

pub struct DailyClaim {
    api: Rc<ApiClient>,
    notifier: Rc<dyn Notifier>,
    tabs: Rc<TabController>,
}

impl DailyClaim {
    pub fn new(api: Rc<ApiClient>, notifier: Rc<dyn Notifier>, tabs: Rc<TabController>) -> Self {
        Self { api, notifier, tabs }
    }

    /// Claims the reward, announces it and refreshes whatever tab is open.
    pub async fn claim(&self) -> Result<DailyReward, FetchError> {
        let reward: DailyReward = self.api.post(CLAIM_PATH).await?;
        log::info!("daily reward claimed: {}", reward.item);
        self.notifier.notify(&format!("Claimed: {}", reward.item));
        self.tabs.reload();
        Ok(reward)
    }
}
