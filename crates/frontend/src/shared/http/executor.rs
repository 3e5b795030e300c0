use super::request::{Method, PreparedRequest, RawResponse};
use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use thiserror::Error;
use web_sys::RequestCredentials;

/// Transport-level failure (DNS, refused connection, CORS, aborted fetch)
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Issues exactly one HTTP exchange. No retries, no status interpretation.
#[async_trait(?Send)]
pub trait HttpExecutor {
    async fn execute(&self, request: &PreparedRequest) -> Result<RawResponse, TransportError>;
}

/// `fetch()` through gloo-net, cookies included.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlooExecutor;

fn builder_for(method: Method, url: &str) -> RequestBuilder {
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Patch => Request::patch(url),
        Method::Delete => Request::delete(url),
    }
}

#[async_trait(?Send)]
impl HttpExecutor for GlooExecutor {
    async fn execute(&self, request: &PreparedRequest) -> Result<RawResponse, TransportError> {
        let mut builder = builder_for(request.method, &request.url);
        if request.include_credentials {
            builder = builder.credentials(RequestCredentials::Include);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let built = match &request.body {
            Some(body) => builder.body(body.clone()),
            None => builder.build(),
        }
        .map_err(|e| TransportError(format!("Failed to build request: {}", e)))?;

        let response = built
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.ok();
        Ok(RawResponse { status, body })
    }
}
