use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use storefront::catalog::{CatalogApi, CatalogError, HttpCatalog};
use storefront::config::StorefrontConfig;
use storefront::grid::LoadStatus;
use storefront::lifecycle::StorefrontSystem;

fn catalog_for(server: &MockServer) -> HttpCatalog {
    let config = StorefrontConfig::default()
        .with_base_url(&server.base_url())
        .unwrap()
        .with_request_timeout(Duration::from_millis(500));
    HttpCatalog::new(&config).unwrap()
}

fn backpack() -> serde_json::Value {
    json!({
        "id": 1,
        "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
        "price": 109.95,
        "description": "Your perfect pack for everyday use and walks in the forest.",
        "category": "men's clothing",
        "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
        "rating": { "rate": 3.9, "count": 120 }
    })
}

#[tokio::test]
async fn test_fetch_all_decodes_products() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/products");
            then.status(200).json_body(json!([backpack()]));
        })
        .await;

    let products = catalog_for(&server).fetch_all().await.unwrap();

    mock.assert_async().await;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id.0, 1);
    assert_eq!(products[0].price, 109.95);
    assert_eq!(products[0].rating.count, 120);
}

#[tokio::test]
async fn test_fetch_by_category_uses_scoped_path() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/products/category/electronics");
            then.status(200).json_body(json!([]));
        })
        .await;

    let products = catalog_for(&server)
        .fetch_by_category("electronics")
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_fetch_categories() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/products/categories");
            then.status(200)
                .json_body(json!(["electronics", "jewelery", "men's clothing"]));
        })
        .await;

    let categories = catalog_for(&server).fetch_categories().await.unwrap();

    assert_eq!(categories, vec!["electronics", "jewelery", "men's clothing"]);
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/products");
            then.status(500);
        })
        .await;

    let error = catalog_for(&server).fetch_all().await.unwrap_err();

    assert!(matches!(error, CatalogError::HttpStatus { status: 500, .. }));
    assert_eq!(error.to_string(), "HTTP error! status: 500");
}

#[tokio::test]
async fn test_non_array_body_is_malformed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/products");
            then.status(200).json_body(json!({ "products": [] }));
        })
        .await;

    let error = catalog_for(&server).fetch_all().await.unwrap_err();

    assert!(matches!(error, CatalogError::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_empty_body_is_malformed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/products/category/electronics");
            then.status(200);
        })
        .await;

    let error = catalog_for(&server)
        .fetch_by_category("electronics")
        .await
        .unwrap_err();

    assert!(matches!(error, CatalogError::MalformedResponse { .. }));
    assert!(error.to_string().starts_with("Invalid data format received"));
}

#[tokio::test]
async fn test_empty_category_response_shows_retry_and_recovers() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/products");
            then.status(200).json_body(json!([backpack()]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/products/categories");
            then.status(200).json_body(json!(["electronics"]));
        })
        .await;
    let empty = server
        .mock_async(|when, then| {
            when.method(GET).path("/products/category/electronics");
            then.status(200);
        })
        .await;

    let config = StorefrontConfig::default()
        .with_base_url(&server.base_url())
        .unwrap();
    let system = StorefrontSystem::new(&config).unwrap();
    system.page_client.wait_until_settled().await.unwrap();

    system
        .page_client
        .select_category(Some("electronics"))
        .await
        .unwrap();
    let page = system.page_client.wait_until_settled().await.unwrap();
    assert!(matches!(page.grid().status(), LoadStatus::Failed { .. }));
    let rendered = system.render().await.unwrap().to_string();
    assert!(rendered.contains("Error: Invalid data format received"));
    assert!(rendered.contains("[Try Again]"));
    empty.assert_async().await;

    empty.delete_async().await;
    let mut monitor = backpack();
    monitor["id"] = json!(9);
    monitor["title"] = json!("Monitor 27in");
    monitor["category"] = json!("electronics");
    server
        .mock_async(|when, then| {
            when.method(GET).path("/products/category/electronics");
            then.status(200).json_body(json!([monitor]));
        })
        .await;

    system.page_client.retry().await.unwrap();
    let page = system.page_client.wait_until_settled().await.unwrap();
    assert_eq!(page.grid().status(), &LoadStatus::Ready);
    assert_eq!(page.grid().visible().len(), 1);
    assert_eq!(page.grid().visible()[0].title, "Monitor 27in");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_missing_field_is_malformed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/products");
            then.status(200)
                .json_body(json!([{ "id": 2, "title": "No price", "category": "misc" }]));
        })
        .await;

    let error = catalog_for(&server).fetch_all().await.unwrap_err();

    assert!(matches!(error, CatalogError::MalformedResponse { .. }));
    assert!(error.to_string().starts_with("Invalid data format received"));
}

#[tokio::test]
async fn test_out_of_range_rating_is_malformed() {
    let server = MockServer::start_async().await;
    let mut product = backpack();
    product["rating"]["rate"] = json!(7.5);
    server
        .mock_async(|when, then| {
            when.method(GET).path("/products");
            then.status(200).json_body(json!([product]));
        })
        .await;

    let error = catalog_for(&server).fetch_all().await.unwrap_err();

    assert!(matches!(error, CatalogError::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/products");
            then.status(200)
                .delay(Duration::from_secs(3))
                .json_body(json!([]));
        })
        .await;

    let error = catalog_for(&server).fetch_all().await.unwrap_err();

    assert_eq!(
        error,
        CatalogError::Timeout {
            url: format!("{}/products", server.base_url()),
            after: Duration::from_millis(500),
        }
    );
    assert_eq!(error.to_string(), "Request timed out after 500ms");
}

#[tokio::test]
async fn test_refused_connection_is_transport_error() {
    let config = StorefrontConfig::default()
        .with_base_url("http://127.0.0.1:1")
        .unwrap()
        .with_request_timeout(Duration::from_secs(2));
    let catalog = HttpCatalog::new(&config).unwrap();

    let error = catalog.fetch_all().await.unwrap_err();

    assert!(matches!(error, CatalogError::Transport { .. }));
    assert_eq!(error.url(), "http://127.0.0.1:1/products");
}
