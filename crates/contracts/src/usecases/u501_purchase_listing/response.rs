use serde::{Deserialize, Serialize};

/// Response of `POST /market/create_invoice/{market_id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceResponse {
    pub invoice_link: String,
}
