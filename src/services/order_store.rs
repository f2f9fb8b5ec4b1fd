use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    Iterable, PaginatorTrait, QueryFilter, Set, SqlErr,
};
use uuid::Uuid;

use crate::{
    dto::orders::{NewOrder, OrderPatch},
    entity::orders::{
        ActiveModel as OrderActive, Column as OrderCol, Entity as Orders, ImagePaths,
        Model as OrderModel,
    },
    error::{AppError, AppResult},
    models::Order,
    services::{filter::OrderFilter, order_number::OrderNumberAllocator},
};

/// Attempts at inserting when a concurrent insert grabbed the same order number.
const INSERT_ATTEMPTS: u32 = 3;

/// Persistence for orders, backed by the `orders` table.
#[derive(Clone)]
pub struct OrderStore {
    conn: DatabaseConnection,
    allocator: OrderNumberAllocator,
}

impl OrderStore {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self::with_allocator(conn, OrderNumberAllocator::default())
    }

    pub fn with_allocator(conn: DatabaseConnection, allocator: OrderNumberAllocator) -> Self {
        Self { conn, allocator }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Store a new order under a freshly allocated order number and id.
    pub async fn insert(&self, order: NewOrder) -> AppResult<Order> {
        let mut attempt = 1;
        loop {
            let order_number = self.allocate_order_number().await?;
            let active = new_order_active(order.clone(), Uuid::new_v4(), order_number, Utc::now());

            match active.insert(&self.conn).await {
                Ok(model) => {
                    tracing::info!(order_number = %model.order_number, "order created");
                    return Ok(order_from_entity(model));
                }
                Err(err) if attempt < INSERT_ATTEMPTS && is_unique_violation(&err) => {
                    tracing::warn!(attempt, error = %err, "order number taken at insert, retrying");
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Fetch one order matching `filter`.
    pub async fn get(&self, filter: &OrderFilter) -> AppResult<Order> {
        let order = Orders::find()
            .filter(filter.condition())
            .one(&self.conn)
            .await?;
        match order {
            Some(o) => Ok(order_from_entity(o)),
            None => Err(AppError::NotFound),
        }
    }

    /// Merge `patch` into every order matching `filter`, returning the match count.
    pub async fn update(&self, filter: &OrderFilter, patch: OrderPatch) -> AppResult<u64> {
        if filter.is_empty() {
            return Err(AppError::MissingFilter);
        }

        let mut changes = patch_active(patch);
        if !OrderCol::iter().any(|col| changes.get(col).is_set()) {
            // nothing to write, but the target must still exist
            let matched = Orders::find()
                .filter(filter.condition())
                .count(&self.conn)
                .await?;
            if matched == 0 {
                return Err(AppError::NoMatch);
            }
            return Ok(matched);
        }

        changes.updated_at = Set(Utc::now().into());
        let result = Orders::update_many()
            .set(changes)
            .filter(filter.condition())
            .exec(&self.conn)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NoMatch);
        }
        tracing::info!(matched = result.rows_affected, "orders updated");
        Ok(result.rows_affected)
    }

    /// Remove every order matching `filter`. Removing nothing is not an error.
    pub async fn delete(&self, filter: &OrderFilter) -> AppResult<u64> {
        if filter.is_empty() {
            return Err(AppError::MissingFilter);
        }

        let result = Orders::delete_many()
            .filter(filter.condition())
            .exec(&self.conn)
            .await?;
        tracing::info!(deleted = result.rows_affected, "orders deleted");
        Ok(result.rows_affected)
    }

    /// All orders matching `filter`, in no particular order.
    pub async fn list(&self, filter: &OrderFilter) -> AppResult<Vec<Order>> {
        let orders = Orders::find()
            .filter(filter.condition())
            .all(&self.conn)
            .await?
            .into_iter()
            .map(order_from_entity)
            .collect();
        Ok(orders)
    }

    async fn allocate_order_number(&self) -> AppResult<String> {
        let conn = &self.conn;
        self.allocator
            .allocate(move |candidate| async move {
                let existing = Orders::find()
                    .filter(OrderCol::OrderNumber.eq(candidate))
                    .count(conn)
                    .await?;
                Ok::<_, AppError>(existing > 0)
            })
            .await
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

fn new_order_active(
    order: NewOrder,
    id: Uuid,
    order_number: String,
    now: DateTime<Utc>,
) -> OrderActive {
    OrderActive {
        id: Set(id),
        order_number: Set(order_number),
        status: Set(order.status),
        qty: Set(order.qty),
        total_price: Set(order.total_price),
        buyer_id: Set(order.buyer_id),
        buyer_full_name: Set(order.buyer_full_name),
        buyer_address: Set(order.buyer_address),
        product_id: Set(order.product_id),
        product_sku: Set(order.product_sku),
        product_name: Set(order.product_name),
        product_price: Set(order.product_price),
        product_weight: Set(order.product_weight),
        product_description: Set(order.product_description),
        product_stock: Set(order.product_stock),
        product_user_id: Set(order.product_user_id),
        product_user_full_name: Set(order.product_user_full_name),
        product_images_path: Set(ImagePaths(order.product_images_path)),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn patch_active(patch: OrderPatch) -> OrderActive {
    let mut active = OrderActive::new();

    if let Some(v) = non_blank(patch.status) {
        active.status = Set(v);
    }
    if let Some(v) = patch.qty {
        active.qty = Set(v);
    }
    if let Some(v) = patch.total_price {
        active.total_price = Set(v);
    }
    if let Some(v) = patch.buyer_id {
        active.buyer_id = Set(v);
    }
    if let Some(v) = non_blank(patch.buyer_full_name) {
        active.buyer_full_name = Set(v);
    }
    if let Some(v) = non_blank(patch.buyer_address) {
        active.buyer_address = Set(v);
    }
    if let Some(v) = patch.product_id {
        active.product_id = Set(v);
    }
    if let Some(v) = non_blank(patch.product_sku) {
        active.product_sku = Set(v);
    }
    if let Some(v) = non_blank(patch.product_name) {
        active.product_name = Set(v);
    }
    if let Some(v) = patch.product_price {
        active.product_price = Set(v);
    }
    if let Some(v) = patch.product_weight {
        active.product_weight = Set(v);
    }
    if let Some(v) = non_blank(patch.product_description) {
        active.product_description = Set(v);
    }
    if let Some(v) = patch.product_stock {
        active.product_stock = Set(v);
    }
    if let Some(v) = patch.product_user_id {
        active.product_user_id = Set(v);
    }
    if let Some(v) = non_blank(patch.product_user_full_name) {
        active.product_user_full_name = Set(v);
    }
    if let Some(v) = patch.product_images_path {
        active.product_images_path = Set(ImagePaths(v));
    }

    active
}

fn order_from_entity(model: OrderModel) -> Order {
    Order {
        id: model.id,
        order_number: model.order_number,
        status: model.status,
        qty: model.qty,
        total_price: model.total_price,
        buyer_id: model.buyer_id,
        buyer_full_name: model.buyer_full_name,
        buyer_address: model.buyer_address,
        product_id: model.product_id,
        product_sku: model.product_sku,
        product_name: model.product_name,
        product_price: model.product_price,
        product_weight: model.product_weight,
        product_description: model.product_description,
        product_stock: model.product_stock,
        product_user_id: model.product_user_id,
        product_user_full_name: model.product_user_full_name,
        product_images_path: model.product_images_path.0,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}
