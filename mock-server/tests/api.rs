use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, bundled_products, load_products, Product};
use tower::ServiceExt;

fn fixture_app() -> axum::Router {
    app(bundled_products().unwrap())
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- products ---

#[tokio::test]
async fn get_bundled_product() {
    let resp = fixture_app().oneshot(get("/products/1")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let product: Product = body_json(resp).await;
    assert_eq!(product.id, 1);
    assert_eq!(product.title.as_deref(), Some("iPhone 9"));
    assert_eq!(product.price, Some(549));
    assert_eq!(product.images.map(|i| i.len()), Some(5));
}

#[tokio::test]
async fn product_json_keeps_fixture_field_names() {
    let resp = fixture_app().oneshot(get("/products/1")).await.unwrap();
    let value: serde_json::Value = body_json(resp).await;
    assert_eq!(value["discountPercentage"], 12.96);
    assert!(value.get("discount_percentage").is_none());
}

#[tokio::test]
async fn absent_fields_stay_absent() {
    let sparse = Product {
        id: 9,
        title: Some("Sparse".into()),
        description: None,
        price: None,
        discount_percentage: None,
        rating: None,
        stock: None,
        brand: None,
        category: None,
        thumbnail: None,
        images: None,
    };
    let resp = app(vec![sparse]).oneshot(get("/products/9")).await.unwrap();
    let value: serde_json::Value = body_json(resp).await;
    assert_eq!(value, serde_json::json!({ "id": 9, "title": "Sparse" }));
}

#[tokio::test]
async fn get_product_not_found() {
    let resp = fixture_app().oneshot(get("/products/42")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_product_bad_id_returns_400() {
    let resp = fixture_app().oneshot(get("/products/first")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_products() {
    let resp = fixture_app().oneshot(get("/products")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let products: Vec<Product> = body_json(resp).await;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, 1);
}

#[tokio::test]
async fn list_products_empty_catalog() {
    let resp = app(Vec::new()).oneshot(get("/products")).await.unwrap();
    let products: Vec<Product> = body_json(resp).await;
    assert!(products.is_empty());
}

// --- status ---

#[tokio::test]
async fn status_route_echoes_code() {
    for code in [200u16, 404, 418, 500, 503] {
        let resp = fixture_app()
            .oneshot(get(&format!("/status/{code}")))
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), code);
    }
}

#[tokio::test]
async fn status_route_rejects_informational_and_out_of_range() {
    for code in ["100", "1000", "abc"] {
        let resp = fixture_app()
            .oneshot(get(&format!("/status/{code}")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "/status/{code}");
    }
}

// --- malformed ---

#[tokio::test]
async fn malformed_body_is_not_json() {
    let resp = fixture_app().oneshot(get("/malformed")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    assert!(serde_json::from_slice::<serde_json::Value>(&body).is_err());
}

// --- loading ---

#[test]
fn load_products_from_fixture_dir() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../fixtures");
    let products = load_products(&dir).unwrap();
    let ids: Vec<u64> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2]);
}
