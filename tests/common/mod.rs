#![allow(dead_code)]

use std::time::Duration;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use ecom_order_service::{
    dto::orders::NewOrder,
    entity::Orders,
    middleware::auth::AccountClient,
    routes::create_api_router,
    services::{order_number::OrderNumberAllocator, order_store::OrderStore},
    state::AppState,
};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use serde_json::json;

pub const BUYER_TOKEN: &str = "buyer-token";
pub const SELLER_TOKEN: &str = "seller-token";
/// Accepted by the stub, which then answers 200 with a body that is not a user.
pub const GARBLED_TOKEN: &str = "garbled-token";
pub const BUYER_ID: i32 = 7;
pub const SELLER_ID: i32 = 10;

/// In-memory SQLite with the `orders` table built from the entity, unique index included.
pub async fn memory_db() -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    // one connection, otherwise every pooled connection gets its own empty database
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let conn = Database::connect(opt).await?;

    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);
    conn.execute(backend.build(&schema.create_table_from_entity(Orders)))
        .await?;
    Ok(conn)
}

pub async fn memory_store() -> anyhow::Result<OrderStore> {
    let conn = memory_db().await?;
    Ok(OrderStore::with_allocator(
        conn,
        OrderNumberAllocator::new(5, Duration::ZERO),
    ))
}

pub fn sample_order(buyer_id: i32, status: &str, product_user_id: i32) -> NewOrder {
    NewOrder {
        status: status.to_string(),
        qty: 2,
        total_price: 2000001.0,
        buyer_id,
        buyer_full_name: "George Marcus".into(),
        buyer_address: "Buyer Street".into(),
        product_id: product_user_id + 1,
        product_sku: format!("sku-{product_user_id}"),
        product_name: "product name".into(),
        product_price: 1000000.5,
        product_weight: 1.5,
        product_description: "product description".into(),
        product_stock: 100,
        product_user_id,
        product_user_full_name: "Seller".into(),
        product_images_path: vec!["product 1.1.jpg".into(), "product 1.2.jpg".into()],
    }
}

async fn authorize(body: String) -> Response {
    if body.contains(BUYER_TOKEN) {
        Json(json!({
            "id": BUYER_ID,
            "email": "buyer@example.com",
            "full_name": "George Marcus",
            "address": "Buyer Street",
            "phone_number": "0800",
            "role": "buyer"
        }))
        .into_response()
    } else if body.contains(SELLER_TOKEN) {
        Json(json!({
            "id": SELLER_ID,
            "email": "seller@example.com",
            "full_name": "Seller",
            "address": "Seller Street",
            "phone_number": "0801",
            "role": "seller"
        }))
        .into_response()
    } else if body.contains(GARBLED_TOKEN) {
        (StatusCode::OK, "not json").into_response()
    } else {
        StatusCode::UNAUTHORIZED.into_response()
    }
}

/// Stand-in for the account service, served on an ephemeral port.
pub async fn spawn_account_service() -> anyhow::Result<String> {
    let app = Router::new().route("/api/authorize/", post(authorize));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    Ok(format!("http://{addr}"))
}

pub async fn test_app() -> anyhow::Result<(Router, OrderStore)> {
    let accounts = AccountClient::new(&spawn_account_service().await?, Duration::from_secs(5))?;
    test_app_with_accounts(accounts).await
}

pub async fn test_app_with_accounts(
    accounts: AccountClient,
) -> anyhow::Result<(Router, OrderStore)> {
    let store = memory_store().await?;
    let state = AppState {
        orders: store.clone(),
        accounts,
    };
    let app = Router::new()
        .nest("/api", create_api_router())
        .with_state(state);
    Ok((app, store))
}
