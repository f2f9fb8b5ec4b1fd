pub mod filter;
pub mod order_number;
pub mod order_service;
pub mod order_store;
pub mod validation;
