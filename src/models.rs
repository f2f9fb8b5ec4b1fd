use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A stored order: buyer and product snapshots taken when the order was placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: Uuid,
    pub order_number: String,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
