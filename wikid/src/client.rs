use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::time::timeout;
use tracing::debug;

use wiki_api::limits::{enforce_max_response_size, CappedBody, LimitError, MAX_RESPONSE_BYTES};
use wiki_api::WikiError;

use crate::config::WikiConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    InvalidUrl,
    Connection(String),
    /// Carries the timeout that was exceeded, in milliseconds.
    Timeout(u64),
    Io(String),
    TooLarge(usize),
}

impl From<ClientError> for WikiError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::InvalidUrl => WikiError::Network("invalid request url".into()),
            ClientError::Connection(msg) | ClientError::Io(msg) => WikiError::Network(msg),
            ClientError::Timeout(ms) => WikiError::Timeout(ms),
            ClientError::TooLarge(actual) => LimitError::TooLarge {
                max: MAX_RESPONSE_BYTES,
                actual,
            }
            .into(),
        }
    }
}

impl From<LimitError> for ClientError {
    fn from(e: LimitError) -> Self {
        match e {
            LimitError::TooLarge { actual, .. } => ClientError::TooLarge(actual),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientResponse {
    pub code: u16,
    pub body: Vec<u8>,
}

pub type FetchFuture = Pin<Box<dyn Future<Output = Result<ClientResponse, ClientError>> + Send>>;

pub type FetcherFn = dyn Fn(FetchRequest) -> FetchFuture + Send + Sync;

/// HTTP GET client for the wiki API. Transport is pluggable so tests can
/// answer requests without touching the network.
#[derive(Clone)]
pub struct WikiClient {
    fetcher: Arc<FetcherFn>,
    pub api_url: String,
    pub user_agent: String,
    pub req_timeout: Duration,
}

impl WikiClient {
    pub fn new_with_fetcher(fetcher: Arc<FetcherFn>, cfg: &WikiConfig) -> Self {
        Self {
            fetcher,
            api_url: cfg.api_url.clone(),
            user_agent: cfg.user_agent.clone(),
            req_timeout: Duration::from_millis(cfg.timeout_ms),
        }
    }

    /// Client with default settings and a caller-supplied transport.
    pub fn new_test(fetcher: Arc<FetcherFn>) -> Self {
        Self::new_with_fetcher(fetcher, &WikiConfig::default())
    }

    /// Client backed by `reqwest` over rustls.
    pub fn from_config(cfg: &WikiConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().build()?;
        let fetcher: Arc<FetcherFn> = Arc::new(move |req: FetchRequest| -> FetchFuture {
            let http = http.clone();
            Box::pin(async move { reqwest_fetch(&http, req).await })
        });
        Ok(Self::new_with_fetcher(fetcher, cfg))
    }

    /// Single GET bounded by `req_timeout`. No retries.
    pub async fn get(&self, url: &str) -> Result<ClientResponse, ClientError> {
        let parsed = url::Url::parse(url).map_err(|_| ClientError::InvalidUrl)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl);
        }

        let started = Instant::now();
        let req = FetchRequest {
            url: url.to_string(),
            user_agent: self.user_agent.clone(),
        };
        let resp = timeout(self.req_timeout, (self.fetcher)(req))
            .await
            .map_err(|_| ClientError::Timeout(self.req_timeout.as_millis() as u64))??;

        enforce_max_response_size(resp.body.len())?;
        debug!(
            target: "wikid::client",
            code = resp.code,
            bytes = resp.body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "fetch complete"
        );
        Ok(resp)
    }
}

async fn reqwest_fetch(
    http: &reqwest::Client,
    req: FetchRequest,
) -> Result<ClientResponse, ClientError> {
    let mut resp = http
        .get(&req.url)
        .header(reqwest::header::USER_AGENT, req.user_agent)
        .send()
        .await
        .map_err(map_reqwest_err)?;

    let code = resp.status().as_u16();
    let mut body = CappedBody::new(MAX_RESPONSE_BYTES);
    if let Some(len) = resp.content_length() {
        body.expect_len(len)?;
    }
    // chunked bodies carry no length; the cap is checked on every chunk
    while let Some(chunk) = resp.chunk().await.map_err(map_reqwest_err)? {
        body.push(&chunk)?;
    }
    Ok(ClientResponse {
        code,
        body: body.into_bytes(),
    })
}

fn map_reqwest_err(e: reqwest::Error) -> ClientError {
    if e.is_connect() {
        ClientError::Connection(e.to_string())
    } else {
        ClientError::Io(e.to_string())
    }
}
