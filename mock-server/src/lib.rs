//! Fixture HTTP server for end-to-end tests of the fetch client.
//!
//! Serves product fixtures read-only, plus routes that answer with an
//! arbitrary status or a body that is not JSON.

use std::{io, path::Path, sync::Arc};

use axum::{
    extract::{Path as UrlPath, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

pub const BUNDLED_PRODUCT: &str = include_str!("../../fixtures/product.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

pub type Catalog = Arc<Vec<Product>>;

pub fn bundled_products() -> Result<Vec<Product>, serde_json::Error> {
    Ok(vec![serde_json::from_str(BUNDLED_PRODUCT)?])
}

/// Load every `*.json` file in `dir` as a product, sorted by id.
pub fn load_products(dir: &Path) -> io::Result<Vec<Product>> {
    let mut products = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            let raw = std::fs::read(&path)?;
            let product: Product = serde_json::from_slice(&raw)?;
            log::debug!("loaded product {} from {}", product.id, path.display());
            products.push(product);
        }
    }
    products.sort_by_key(|p| p.id);
    Ok(products)
}

pub fn app(products: Vec<Product>) -> Router {
    let catalog: Catalog = Arc::new(products);
    Router::new()
        .route("/products", get(list_products))
        .route("/products/{id}", get(get_product))
        .route("/status/{code}", get(respond_with_status))
        .route("/malformed", get(malformed))
        .with_state(catalog)
}

pub async fn run(listener: TcpListener, products: Vec<Product>) -> Result<(), io::Error> {
    axum::serve(listener, app(products)).await
}

async fn list_products(State(catalog): State<Catalog>) -> Json<Vec<Product>> {
    Json(catalog.as_ref().clone())
}

async fn get_product(
    State(catalog): State<Catalog>,
    UrlPath(id): UrlPath<u64>,
) -> Result<Json<Product>, StatusCode> {
    catalog
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Answer with `code` and an empty JSON object. Informational codes cannot
/// be a final response, so anything below 200 is a bad request.
async fn respond_with_status(UrlPath(code): UrlPath<u16>) -> Response {
    match StatusCode::from_u16(code) {
        Ok(status) if code >= 200 => (status, Json(serde_json::json!({}))).into_response(),
        _ => StatusCode::BAD_REQUEST.into_response(),
    }
}

async fn malformed() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        "{\"id\": 1, \"title\": ",
    )
}
