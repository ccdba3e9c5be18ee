//! Shared test doubles.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use bytes::Bytes;
use fetch_core::{Fetcher, FixtureFetcher, Result};
use serde::Deserialize;
use url::Url;

/// Wraps a fetcher and counts how often the pipeline reached it.
pub struct CountingFetcher<F> {
    inner: F,
    calls: AtomicUsize,
}

impl<F> CountingFetcher<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CountingFetcher<FixtureFetcher> {
    pub fn responding(status: u16, body: &str) -> Self {
        Self::new(FixtureFetcher::new(status, body.to_string()))
    }
}

impl<F: Fetcher> Fetcher for CountingFetcher<F> {
    async fn fetch(&self, url: &Url) -> Result<Bytes> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch(url).await
    }
}

/// The product summary used throughout the pipeline tests.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub price: Option<i64>,
    pub description: Option<String>,
}

/// Full dummyjson product; everything optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProduct {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub discount_percentage: Option<f64>,
    pub rating: Option<f64>,
    pub stock: Option<i64>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub thumbnail: Option<String>,
    pub images: Option<Vec<String>>,
}

pub const PRODUCT_URL: &str = "https://example.test/products/1";
