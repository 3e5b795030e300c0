use std::fmt;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_MIME: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        })
    }
}

/// What a caller asks for: a path relative to the API base plus options.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Headers actually sent: `Content-Type: application/json` always comes
    /// first and caller headers may add to it but never replace it.
    pub fn effective_headers(&self) -> Vec<(String, String)> {
        let mut headers = Vec::with_capacity(self.headers.len() + 1);
        headers.push((CONTENT_TYPE.to_string(), JSON_MIME.to_string()));
        headers.extend(
            self.headers
                .iter()
                .filter(|(name, _)| !name.eq_ignore_ascii_case(CONTENT_TYPE))
                .cloned(),
        );
        headers
    }

    pub(crate) fn prepare(&self, base_url: &str) -> PreparedRequest {
        PreparedRequest {
            method: self.method,
            url: crate::shared::api_utils::join_url(base_url, &self.path),
            headers: self.effective_headers(),
            body: self.body.clone(),
            include_credentials: true,
        }
    }
}

/// Fully resolved request handed to the executor.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    /// Cookies travel with every call; there is no way to turn this off.
    pub include_credentials: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    /// `None` when the body could not be read as text
    pub body: Option<String>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: Some(body.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}
