use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::orders::{NewOrder, OrderChange, OrderList, OrderListQuery, OrderNumberQuery, OrderPatch},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Order,
    response::ApiResponse,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/order/",
            post(create_order)
                .get(get_order)
                .put(update_order)
                .delete(delete_order),
        )
        .route("/orders/", get(list_orders))
}

#[utoipa::path(
    post,
    path = "/api/order/",
    request_body = NewOrder,
    responses(
        (status = 201, description = "Order created", body = ApiResponse<Order>),
        (status = 400, description = "Mandatory field missing or body invalid"),
        (status = 403, description = "Caller is not a buyer or token invalid"),
        (status = 502, description = "Account service unavailable")
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    user: AuthUser,
    payload: Result<Json<NewOrder>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ApiResponse<Order>>)> {
    let Json(payload) = payload?;
    let resp = order_service::create_order(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/api/orders/",
    params(OrderListQuery),
    responses(
        (status = 200, description = "Matching orders", body = ApiResponse<OrderList>),
        (status = 502, description = "Account service unavailable")
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    let resp = order_service::list_orders(&state, &query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/order/",
    params(OrderNumberQuery),
    responses(
        (status = 200, description = "Order", body = ApiResponse<Order>),
        (status = 400, description = "order_number missing"),
        (status = 502, description = "Account service unavailable")
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<OrderNumberQuery>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = order_service::get_order(&state, query.order_number).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/order/",
    params(OrderNumberQuery),
    request_body = OrderPatch,
    responses(
        (status = 200, description = "Order updated", body = ApiResponse<OrderChange>),
        (status = 400, description = "order_number missing"),
        (status = 502, description = "Account service unavailable")
    ),
    tag = "Orders"
)]
pub async fn update_order(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<OrderNumberQuery>,
    patch: Result<Json<OrderPatch>, JsonRejection>,
) -> AppResult<Json<ApiResponse<OrderChange>>> {
    let Json(patch) = patch?;
    let resp = order_service::update_order(&state, &user, query.order_number, patch).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/order/",
    params(OrderNumberQuery),
    responses(
        (status = 200, description = "Order deleted", body = ApiResponse<OrderChange>),
        (status = 400, description = "order_number missing"),
        (status = 502, description = "Account service unavailable")
    ),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<OrderNumberQuery>,
) -> AppResult<Json<ApiResponse<OrderChange>>> {
    let resp = order_service::delete_order(&state, &user, query.order_number).await?;
    Ok(Json(resp))
}
