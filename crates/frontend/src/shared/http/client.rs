use super::error::{FetchError, NetworkError, UNKNOWN_ERROR_BODY};
use super::executor::HttpExecutor;
use super::request::{ApiRequest, PreparedRequest, RawResponse};
use crate::shared::runtime::Runtime;
use crate::system::auth::session::SessionStore;
use crate::system::host::Notifier;
use contracts::system::auth::{VerifyResponse, INIT_DATA_HEADER};
use futures::future::{self, Either};
use serde::de::DeserializeOwned;
use std::rc::Rc;
use std::time::Duration;

pub const VERIFY_PATH: &str = "/auth/verify";
pub const REFRESH_PATH: &str = "/auth/refresh";

/// Authenticated fetch.
///
/// Every call goes through [`ApiClient::request`]: attempt, and on 401 one
/// refresh followed by exactly one more attempt. Failures are reported to the
/// [`Notifier`] here, once, before being returned to the caller.
pub struct ApiClient {
    base_url: String,
    timeout: Duration,
    executor: Rc<dyn HttpExecutor>,
    runtime: Rc<dyn Runtime>,
    notifier: Rc<dyn Notifier>,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        executor: Rc<dyn HttpExecutor>,
        runtime: Rc<dyn Runtime>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
            executor,
            runtime,
            notifier,
            session: SessionStore::new(),
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        self.request(ApiRequest::get(path)).await
    }

    pub async fn post<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        self.request(ApiRequest::post(path)).await
    }

    /// Exchanges the host-supplied init data for a session cookie.
    pub async fn verify(&self, init_data: &str) -> Result<VerifyResponse, FetchError> {
        let request = ApiRequest::post(VERIFY_PATH).header(INIT_DATA_HEADER, init_data);
        let verified: VerifyResponse = self.request(request).await?;
        self.session.establish(verified.user_id.clone());
        Ok(verified)
    }

    pub async fn request<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, FetchError> {
        let result = self
            .exchange(&request)
            .await
            .and_then(|response| decode(&request, response));
        if let Err(err) = &result {
            log::warn!("{} {} failed: {}", request.method, request.path, err);
            self.notifier.notify(&err.to_string());
        }
        result
    }

    /// attempt → (401) refresh → attempt. Never more than one cycle.
    async fn exchange(&self, request: &ApiRequest) -> Result<RawResponse, FetchError> {
        let prepared = request.prepare(&self.base_url);

        let first = self.send(&prepared).await?;
        if !first.is_unauthorized() {
            return check_status(first);
        }

        log::warn!("{} returned 401, refreshing session", request.path);
        if !self.refresh().await? {
            return Err(self.expire());
        }

        let retried = self.send(&prepared).await?;
        if retried.is_unauthorized() {
            return Err(self.expire());
        }
        check_status(retried)
    }

    /// `Ok(false)` when the backend refused to refresh.
    async fn refresh(&self) -> Result<bool, FetchError> {
        let prepared = ApiRequest::post(REFRESH_PATH).prepare(&self.base_url);
        let response = self.send(&prepared).await?;
        if response.is_success() {
            log::debug!("session refreshed");
            self.session.refreshed();
            Ok(true)
        } else {
            log::warn!("session refresh rejected with {}", response.status);
            Ok(false)
        }
    }

    fn expire(&self) -> FetchError {
        self.session.invalidate();
        FetchError::SessionExpired
    }

    /// One bounded HTTP exchange.
    async fn send(&self, prepared: &PreparedRequest) -> Result<RawResponse, FetchError> {
        let exchange = self.executor.execute(prepared);
        let deadline = self.runtime.sleep(self.timeout);
        match future::select(exchange, deadline).await {
            Either::Left((result, _)) => {
                let response = result.map_err(|e| NetworkError::Transport(e.0))?;
                log::debug!("{} {} -> {}", prepared.method, prepared.url, response.status);
                Ok(response)
            }
            Either::Right(((), _)) => Err(NetworkError::Timeout(self.timeout).into()),
        }
    }
}

fn check_status(response: RawResponse) -> Result<RawResponse, FetchError> {
    if response.is_success() {
        return Ok(response);
    }
    Err(FetchError::Api {
        status: response.status,
        body: response
            .body
            .unwrap_or_else(|| UNKNOWN_ERROR_BODY.to_string()),
    })
}

fn decode<T: DeserializeOwned>(request: &ApiRequest, response: RawResponse) -> Result<T, FetchError> {
    let body = response.body.ok_or_else(|| {
        FetchError::MalformedResponse(format!("unreadable body from {}", request.path))
    })?;
    serde_json::from_str(&body)
        .map_err(|e| FetchError::MalformedResponse(format!("{}: {}", request.path, e)))
}
