use ecom_order_service::routes::{doc::ApiDoc, health::health_check};
use utoipa::OpenApi;

#[tokio::test]
async fn health_check_returns_ok() {
    let response = health_check().await;
    assert_eq!(response.0.message, "Health check");

    let data = response.0.data.expect("health data");
    assert_eq!(data.status, "ok");
}

#[test]
fn openapi_lists_order_routes() {
    let doc = ApiDoc::openapi();
    assert!(doc.paths.paths.contains_key("/api/order/"));
    assert!(doc.paths.paths.contains_key("/api/orders/"));
}
