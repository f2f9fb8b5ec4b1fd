use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product image paths, kept in order, stored as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct ImagePaths(pub Vec<String>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
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
    #[sea_orm(column_type = "Json")]
    pub product_images_path: ImagePaths,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
