//! Async HTTP GET-and-decode client.
//!
//! # Overview
//! A three-stage pipeline behind one call: parse the URL, fetch the body,
//! decode it into the caller's type. The first stage to fail decides the
//! error; nothing is retried, cached or shared between calls.
//!
//! ```no_run
//! # async fn run() -> fetch_core::Result<()> {
//! use fetch_core::{NetworkManager, TransportConfig};
//!
//! #[derive(serde::Deserialize)]
//! struct Product {
//!     id: i64,
//!     title: String,
//!     price: Option<i64>,
//! }
//!
//! let manager = NetworkManager::live(&TransportConfig::from_env())?;
//! let product: Product = manager.get_data("https://dummyjson.com/products/1").await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Design
//! - `Fetcher` and `Decoder` are traits injected into `NetworkManager`, so
//!   the pipeline runs against `FixtureFetcher` in tests and `HttpFetcher`
//!   over `reqwest` in production.
//! - Status classification lives in `classify_status`, shared by every
//!   fetcher.
//! - Targets are either serde types (`get_data::<T>`) or a runtime `Shape`
//!   (`get_shaped`).

pub mod config;
pub mod decoder;
pub mod error;
pub mod fetcher;
pub mod fixture;
pub mod http;
pub mod manager;
pub mod shape;

pub use config::TransportConfig;
pub use decoder::{decode_json, Decoder, JsonDecoder};
pub use error::{ErrorKind, FetchError, Result};
pub use fetcher::{classify_status, Fetcher, HttpFetcher};
pub use fixture::FixtureFetcher;
pub use http::{HttpResponse, ReqwestTransport, Transport, TransportError};
pub use manager::{fetch_and_decode, parse_url, NetworkManager};
pub use shape::{Field, FieldType, Record, Shape};
