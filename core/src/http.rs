//! Transport provider: a single async GET that yields a status and a body.
//!
//! # Design
//! `HttpResponse` is plain data. A `Transport` only reports whether a
//! response was obtained at all; it never interprets the status code. That
//! classification belongs to the fetcher, so every transport (live or fake)
//! is judged by the same rules.

use std::future::Future;

use bytes::Bytes;
use log::debug;
use thiserror::Error;
use url::Url;

use crate::config::TransportConfig;
use crate::error::FetchError;

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }
}

/// No response could be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        let what = if e.is_timeout() {
            "request timed out"
        } else if e.is_connect() {
            "connection failed"
        } else if e.is_body() || e.is_decode() {
            "failed to read response body"
        } else {
            "request failed"
        };
        TransportError(format!("{what}: {e}"))
    }
}

impl From<TransportError> for FetchError {
    fn from(e: TransportError) -> Self {
        FetchError::Transport(e.0)
    }
}

/// Performs one GET and hands back whatever the server said.
pub trait Transport: Send + Sync {
    fn get(&self, url: &Url) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// Live transport over `reqwest`.
///
/// Redirects follow reqwest's default policy. Status codes are never turned
/// into errors here.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    pub fn from_reqwest(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.bytes().await?;
        debug!("GET {url} -> {status} ({} bytes)", body.len());

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
