use sea_orm::{ColumnTrait, Condition};

use crate::{dto::orders::OrderListQuery, entity::orders::Column as OrderCol};

/// Conjunction of equality predicates over order columns.
///
/// An empty filter matches every order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub order_number: Option<String>,
    pub buyer_id: Option<i32>,
    pub status: Option<String>,
    pub product_user_id: Option<i32>,
}

impl OrderFilter {
    /// Build a filter from list query parameters.
    ///
    /// Ids that do not parse as integers and an empty status are left out,
    /// not rejected.
    pub fn from_query(query: &OrderListQuery) -> Self {
        Self {
            order_number: None,
            buyer_id: query.buyer_id.as_deref().and_then(|v| v.parse().ok()),
            status: query.status.clone().filter(|v| !v.is_empty()),
            product_user_id: query.product_user_id.as_deref().and_then(|v| v.parse().ok()),
        }
    }

    pub fn by_order_number(order_number: impl Into<String>) -> Self {
        Self {
            order_number: Some(order_number.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.order_number.is_none()
            && self.buyer_id.is_none()
            && self.status.is_none()
            && self.product_user_id.is_none()
    }

    pub fn condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(order_number) = &self.order_number {
            condition = condition.add(OrderCol::OrderNumber.eq(order_number.clone()));
        }
        if let Some(buyer_id) = self.buyer_id {
            condition = condition.add(OrderCol::BuyerId.eq(buyer_id));
        }
        if let Some(status) = &self.status {
            condition = condition.add(OrderCol::Status.eq(status.clone()));
        }
        if let Some(product_user_id) = self.product_user_id {
            condition = condition.add(OrderCol::ProductUserId.eq(product_user_id));
        }
        condition
    }
}
