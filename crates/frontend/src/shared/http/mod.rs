//! HTTP access layer: request shaping, the executor seam and the
//! authenticated client with the refresh-and-retry-once protocol.

pub mod client;
pub mod error;
pub mod executor;
pub mod request;

pub use client::ApiClient;
pub use error::{FetchError, NetworkError};
pub use executor::{GlooExecutor, HttpExecutor, TransportError};
pub use request::{ApiRequest, Method, PreparedRequest, RawResponse};
