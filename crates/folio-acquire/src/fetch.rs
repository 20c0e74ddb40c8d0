use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use crate::error::{AcquireError, Result};

const USER_AGENT: &str = "folio/0.1 (shakespeare catalog tool)";

/// A completed GET: status plus raw body.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub url: String,
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl FetchResponse {
    /// Map the status onto the error taxonomy. 404 and 5xx are distinct;
    /// any other non-success status is unexpected.
    pub fn error_for_status(self) -> Result<Self> {
        let status = self.status;
        if status == StatusCode::NOT_FOUND {
            Err(AcquireError::RemoteNotFound { url: self.url })
        } else if status.is_server_error() {
            Err(AcquireError::RemoteServerError { url: self.url, status })
        } else if !status.is_success() {
            Err(AcquireError::UnexpectedStatus { url: self.url, status })
        } else {
            Ok(self)
        }
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|source| AcquireError::Json {
            url: self.url.clone(),
            source,
        })
    }
}

/// Issue a single GET and hand back the status and body, whatever the status.
pub trait Fetch {
    fn get(&self, url: &str) -> impl Future<Output = Result<FetchResponse>>;
}

/// Live fetcher backed by a reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    async fn get(&self, url: &str) -> Result<FetchResponse> {
        tracing::debug!(url = %url, "GET");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        tracing::debug!(url = %url, status = %status, bytes = body.len(), "Received response");
        Ok(FetchResponse {
            url: url.to_string(),
            status,
            body,
        })
    }
}

/// Replays a fixed snapshot of responses keyed by URL.
///
/// URLs without a stored response answer 404. Every request is recorded.
#[derive(Debug, Default)]
pub struct StaticFetcher {
    routes: HashMap<String, (StatusCode, Vec<u8>)>,
    requested: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: impl Into<String>, status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        self.routes.insert(url.into(), (status, body.into()));
        self
    }

    pub fn with_ok(self, url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.with(url, StatusCode::OK, body)
    }

    /// URLs requested so far, in order.
    pub fn requested(&self) -> Vec<String> {
        self.requested
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Fetch for StaticFetcher {
    async fn get(&self, url: &str) -> Result<FetchResponse> {
        self.requested
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(url.to_string());

        let (status, body) = self
            .routes
            .get(url)
            .cloned()
            .unwrap_or((StatusCode::NOT_FOUND, Vec::new()));
        Ok(FetchResponse {
            url: url.to_string(),
            status,
            body,
        })
    }
}
