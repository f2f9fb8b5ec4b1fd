use crate::{middleware::auth::AccountClient, services::order_store::OrderStore};

#[derive(Clone)]
pub struct AppState {
    pub orders: OrderStore,
    pub accounts: AccountClient,
}
