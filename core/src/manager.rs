//! Orchestrator: URL validation, then fetch, then decode.
//!
//! # Design
//! `NetworkManager` holds its two collaborators and nothing else. Calls take
//! `&self`, so one manager can serve any number of concurrent requests; each
//! call owns its URL, body and decoded value. The only await point is inside
//! the fetcher. An invalid URL returns before the fetcher is touched.

use log::debug;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::TransportConfig;
use crate::decoder::{Decoder, JsonDecoder};
use crate::error::{FetchError, Result};
use crate::fetcher::{Fetcher, HttpFetcher};
use crate::http::ReqwestTransport;
use crate::shape::{Record, Shape};

/// Parse `input` into an absolute `http`/`https` URL with a host.
pub fn parse_url(input: &str) -> Result<Url> {
    let invalid = |reason: String| FetchError::InvalidUrl {
        input: input.to_string(),
        reason,
    };

    if input.trim().is_empty() {
        return Err(invalid("empty input".to_string()));
    }
    let url = Url::parse(input).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme `{other}`"))),
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }
    Ok(url)
}

/// Fetch-and-decode pipeline over an injected fetcher and decoder.
#[derive(Debug, Clone)]
pub struct NetworkManager<F, D = JsonDecoder> {
    fetcher: F,
    decoder: D,
}

impl<F: Fetcher> NetworkManager<F> {
    pub fn with_fetcher(fetcher: F) -> Self {
        Self::new(fetcher, JsonDecoder)
    }
}

impl NetworkManager<HttpFetcher<ReqwestTransport>> {
    /// Manager backed by a live `reqwest` client.
    pub fn live(config: &TransportConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::with_fetcher(HttpFetcher::new(transport)))
    }
}

impl<F: Fetcher, D: Decoder> NetworkManager<F, D> {
    pub fn new(fetcher: F, decoder: D) -> Self {
        Self { fetcher, decoder }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch `url` and decode the body into `T`.
    pub async fn get_data<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let bytes = self.get_bytes(url).await?;
        self.decoder.decode(&bytes)
    }

    /// Fetch `url` and validate the body against a runtime `Shape`.
    pub async fn get_shaped(&self, url: &str, shape: &Shape) -> Result<Record> {
        let bytes = self.get_bytes(url).await?;
        shape.decode(&bytes)
    }

    async fn get_bytes(&self, url: &str) -> Result<bytes::Bytes> {
        let url = parse_url(url)?;
        debug!("GET {url}");
        self.fetcher.fetch(&url).await
    }
}

/// One-shot fetch and decode with a live client configured from the
/// environment.
pub async fn fetch_and_decode<T: DeserializeOwned>(url: &str) -> Result<T> {
    parse_url(url)?;
    NetworkManager::live(&TransportConfig::from_env())?
        .get_data(url)
        .await
}
