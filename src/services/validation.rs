use crate::{
    dto::orders::NewOrder,
    error::{AppError, AppResult},
};

/// Check the mandatory business fields of a new order.
///
/// Reports only the first missing field, checked in this order: status, qty,
/// total_price, product_name, product_price, product_weight.
pub fn validate_order(order: &NewOrder) -> AppResult<()> {
    if order.status.trim().is_empty() {
        return Err(AppError::MissingField("status"));
    }
    if order.qty == 0 {
        return Err(AppError::MissingField("qty"));
    }
    if order.total_price == 0.0 {
        return Err(AppError::MissingField("total_price"));
    }
    if order.product_name.trim().is_empty() {
        return Err(AppError::MissingField("product_name"));
    }
    if order.product_price == 0.0 {
        return Err(AppError::MissingField("product_price"));
    }
    if order.product_weight == 0.0 {
        return Err(AppError::MissingField("product_weight"));
    }
    Ok(())
}
