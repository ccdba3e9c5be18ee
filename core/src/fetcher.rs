//! Fetch stage: one GET, status classification, raw body out.

use std::future::Future;

use bytes::Bytes;
use log::debug;
use url::Url;

use crate::error::{FetchError, Result};
use crate::http::Transport;

/// Yields the body of a successful response, or the failure that stopped it.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<Bytes>> + Send;
}

/// Map a status code to success or the matching `FetchError`.
pub fn classify_status(status: u16) -> Result<()> {
    match status {
        200..=299 => Ok(()),
        400..=599 => Err(FetchError::Server { status }),
        _ => Err(FetchError::Unknown { status }),
    }
}

/// Fetcher backed by a real `Transport`.
#[derive(Debug, Clone)]
pub struct HttpFetcher<T> {
    transport: T,
}

impl<T: Transport> HttpFetcher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport> Fetcher for HttpFetcher<T> {
    async fn fetch(&self, url: &Url) -> Result<Bytes> {
        let response = self.transport.get(url).await?;
        classify_status(response.status)?;
        debug!("fetched {} bytes from {url}", response.body.len());
        Ok(response.body)
    }
}
