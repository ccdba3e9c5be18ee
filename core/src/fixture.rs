//! Fixture-backed fetcher for deterministic tests.
//!
//! Stands in for `HttpFetcher` without touching the network: every call
//! answers with the same canned status and body, classified by the same
//! `classify_status` the live fetcher uses.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use log::debug;
use url::Url;

use crate::error::{FetchError, Result};
use crate::fetcher::{classify_status, Fetcher};

/// Directory holding the JSON fixtures bundled with this repository.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../fixtures")
}

#[derive(Debug, Clone)]
enum Canned {
    Response { status: u16, body: Bytes },
    Failure(FetchError),
}

#[derive(Debug, Clone)]
pub struct FixtureFetcher {
    canned: Canned,
}

impl FixtureFetcher {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            canned: Canned::Response {
                status,
                body: body.into(),
            },
        }
    }

    /// 200 with `body`.
    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self::new(200, body)
    }

    /// Given status and an empty body.
    pub fn status(status: u16) -> Self {
        Self::new(status, Bytes::new())
    }

    /// Every fetch fails with `error`, as if no response was obtained.
    pub fn failing(error: FetchError) -> Self {
        Self {
            canned: Canned::Failure(error),
        }
    }

    /// 200 with the contents of `path`.
    pub fn from_file(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let body = std::fs::read(path.as_ref())?;
        debug!("loaded fixture {} ({} bytes)", path.as_ref().display(), body.len());
        Ok(Self::ok(body))
    }

    /// 200 with the bundled fixture `<name>.json`.
    pub fn bundled(name: &str) -> std::io::Result<Self> {
        Self::from_file(fixtures_dir().join(format!("{name}.json")))
    }
}

impl Fetcher for FixtureFetcher {
    async fn fetch(&self, url: &Url) -> Result<Bytes> {
        debug!("serving fixture for {url}");
        match &self.canned {
            Canned::Response { status, body } => {
                classify_status(*status)?;
                Ok(body.clone())
            }
            Canned::Failure(error) => Err(error.clone()),
        }
    }
}
