use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::Order;

/// Payload for creating an order.
///
/// There is no field for the id or the order number: both are assigned by the
/// store, and any such keys sent by a client are dropped during deserialization.
/// Missing fields default to empty/zero so validation can name the first one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
#[serde(default)]
pub struct NewOrder {
    pub status: String,
    pub qty: i32,
    pub total_price: f64,
    pub buyer_id: i32,
    pub buyer_full_name: String,
    pub buyer_address: String,
    pub product_id: i32,
    pub product_sku: String,
    pub product_name: String,
    pub product_price: f64,
    pub product_weight: f32,
    pub product_description: String,
    pub product_stock: i32,
    pub product_user_id: i32,
    pub product_user_full_name: String,
    pub product_images_path: Vec<String>,
}

/// Partial update payload. Only fields that are present are merged.
///
/// Blank text values count as absent. Numbers and the image list are applied
/// as given, so `product_stock: 0` does set the stock to zero.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
#[serde(default)]
pub struct OrderPatch {
    pub status: Option<String>,
    pub qty: Option<i32>,
    pub total_price: Option<f64>,
    pub buyer_id: Option<i32>,
    pub buyer_full_name: Option<String>,
    pub buyer_address: Option<String>,
    pub product_id: Option<i32>,
    pub product_sku: Option<String>,
    pub product_name: Option<String>,
    pub product_price: Option<f64>,
    pub product_weight: Option<f32>,
    pub product_description: Option<String>,
    pub product_stock: Option<i32>,
    pub product_user_id: Option<i32>,
    pub product_user_full_name: Option<String>,
    pub product_images_path: Option<Vec<String>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<Order>,
}

/// Result of an update or delete addressed by order number.
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderChange {
    pub order_number: String,
    pub affected: u64,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderNumberQuery {
    /// Order number of the target order
    pub order_number: Option<String>,
}

/// Raw list query parameters; any other key is ignored.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderListQuery {
    /// Only orders of this buyer
    pub buyer_id: Option<String>,
    /// Only orders with this status
    pub status: Option<String>,
    /// Only orders of this product owner
    pub product_user_id: Option<String>,
}
