use super::validation::validate_purchase;
use crate::domain::a003_market::api::create_invoice;
use crate::shared::http::{ApiClient, FetchError};
use crate::system::host::{HostShell, Notifier};
use contracts::domain::a003_market::MarketListing;
use contracts::domain::common::MarketId;
use std::rc::Rc;

pub const PAYMENT_OPENED: &str = "Payment interface opened";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// Пользователь отказался в диалоге подтверждения
    Declined,
    Opened { invoice_link: String },
}

pub struct ListingPurchase {
    api: Rc<ApiClient>,
    host: Rc<dyn HostShell>,
    notifier: Rc<dyn Notifier>,
}

impl ListingPurchase {
    pub fn new(api: Rc<ApiClient>, host: Rc<dyn HostShell>, notifier: Rc<dyn Notifier>) -> Self {
        Self { api, host, notifier }
    }

    pub async fn buy(&self, listing: &MarketListing) -> Result<PurchaseOutcome, FetchError> {
        self.buy_raw(&listing.market_id, &listing.name, listing.price)
            .await
    }

    /// validate → confirm → create invoice → open the invoice in the host.
    pub async fn buy_raw(
        &self,
        market_id: &MarketId,
        name: &str,
        price: f64,
    ) -> Result<PurchaseOutcome, FetchError> {
        if let Err(err) = validate_purchase(name, price) {
            log::warn!("purchase of {} rejected: {}", market_id, err);
            self.notifier.notify(&err.to_string());
            return Err(err);
        }

        let question = format!("Buy \"{}\" for {} Stars?", name, price);
        if !self.host.confirm(&question).await {
            log::debug!("purchase of {} declined", market_id);
            return Ok(PurchaseOutcome::Declined);
        }

        let invoice = create_invoice(&self.api, market_id).await?;
        log::info!("invoice created for listing {}", market_id);
        self.host.open_link(&invoice.invoice_link);
        self.notifier.notify(PAYMENT_OPENED);
        Ok(PurchaseOutcome::Opened {
            invoice_link: invoice.invoice_link,
        })
    }
}
