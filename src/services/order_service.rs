use crate::{
    dto::orders::{NewOrder, OrderChange, OrderList, OrderListQuery, OrderPatch},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_buyer},
    models::Order,
    response::ApiResponse,
    services::{filter::OrderFilter, validation::validate_order},
    state::AppState,
};

pub async fn create_order(
    state: &AppState,
    user: &AuthUser,
    mut payload: NewOrder,
) -> AppResult<ApiResponse<Order>> {
    ensure_buyer(user)?;
    payload.buyer_id = user.id;
    validate_order(&payload)?;

    let order = state.orders.insert(payload).await?;
    Ok(ApiResponse::success("Order created", order))
}

pub async fn list_orders(
    state: &AppState,
    query: &OrderListQuery,
) -> AppResult<ApiResponse<OrderList>> {
    let filter = OrderFilter::from_query(query);
    let items = state.orders.list(&filter).await?;
    Ok(ApiResponse::success("Ok", OrderList { items }))
}

pub async fn get_order(
    state: &AppState,
    order_number: Option<String>,
) -> AppResult<ApiResponse<Order>> {
    let filter = order_number_filter(order_number)?;
    let order = state.orders.get(&filter).await?;
    Ok(ApiResponse::success("Ok", order))
}

pub async fn update_order(
    state: &AppState,
    user: &AuthUser,
    order_number: Option<String>,
    patch: OrderPatch,
) -> AppResult<ApiResponse<OrderChange>> {
    let filter = order_number_filter(order_number)?;
    let affected = state.orders.update(&filter, patch).await?;
    tracing::debug!(user_id = user.id, order_number = ?filter.order_number, "order updated");

    Ok(ApiResponse::success(
        "Update order success!",
        OrderChange {
            order_number: filter.order_number.unwrap_or_default(),
            affected,
        },
    ))
}

pub async fn delete_order(
    state: &AppState,
    user: &AuthUser,
    order_number: Option<String>,
) -> AppResult<ApiResponse<OrderChange>> {
    let filter = order_number_filter(order_number)?;
    let affected = state.orders.delete(&filter).await?;
    tracing::debug!(user_id = user.id, order_number = ?filter.order_number, "order deleted");

    Ok(ApiResponse::success(
        "Delete order success!",
        OrderChange {
            order_number: filter.order_number.unwrap_or_default(),
            affected,
        },
    ))
}

fn order_number_filter(order_number: Option<String>) -> AppResult<OrderFilter> {
    match order_number.filter(|n| !n.trim().is_empty()) {
        Some(n) => Ok(OrderFilter::by_order_number(n)),
        None => Err(AppError::BadRequest("order_number empty/not found".into())),
    }
}
