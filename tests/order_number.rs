mod common;

use std::{collections::HashSet, time::Duration};

use ecom_order_service::{
    error::AppError,
    services::order_number::{
        FALLBACK_ORDER_NUMBER_LEN, ORDER_NUMBER_LEN, OrderNumberAllocator, random_order_number,
    },
};

fn is_order_number(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_alphanumeric())
}

#[test]
fn random_numbers_use_the_alphanumeric_alphabet() {
    for _ in 0..200 {
        let number = random_order_number(ORDER_NUMBER_LEN);
        assert!(is_order_number(&number, ORDER_NUMBER_LEN), "bad number {number}");
    }
}

#[tokio::test]
async fn allocations_against_a_populated_store_are_distinct() -> anyhow::Result<()> {
    let store = common::memory_store().await?;

    let mut seen = HashSet::new();
    for i in 0..25 {
        let order = store
            .insert(common::sample_order(1 + i % 3, "in-cart", 10))
            .await?;
        assert!(is_order_number(&order.order_number, ORDER_NUMBER_LEN));
        assert!(seen.insert(order.order_number), "duplicate order number");
    }
    assert_eq!(seen.len(), 25);
    Ok(())
}

#[tokio::test]
async fn collisions_are_retried() -> anyhow::Result<()> {
    let allocator = OrderNumberAllocator::new(5, Duration::ZERO);
    let mut calls = 0;

    let number = allocator
        .allocate(|_candidate| {
            calls += 1;
            let taken = calls <= 2;
            async move { Ok::<_, AppError>(taken) }
        })
        .await?;

    assert_eq!(calls, 3);
    assert!(is_order_number(&number, ORDER_NUMBER_LEN));
    Ok(())
}

#[tokio::test]
async fn exhausted_attempts_fall_back_to_long_token() -> anyhow::Result<()> {
    let allocator = OrderNumberAllocator::new(4, Duration::ZERO);
    let mut calls = 0;

    let number = allocator
        .allocate(|_candidate| {
            calls += 1;
            async { Ok::<_, AppError>(true) }
        })
        .await?;

    assert_eq!(calls, allocator.max_attempts());
    assert!(is_order_number(&number, FALLBACK_ORDER_NUMBER_LEN));
    Ok(())
}

#[tokio::test]
async fn lookup_errors_are_propagated() {
    let allocator = OrderNumberAllocator::new(3, Duration::ZERO);

    let result = allocator
        .allocate(|_candidate| async { Err::<bool, _>(AppError::NoMatch) })
        .await;

    assert!(matches!(result, Err(AppError::NoMatch)));
}

#[test]
fn at_least_one_attempt_is_made() {
    assert_eq!(OrderNumberAllocator::new(0, Duration::ZERO).max_attempts(), 1);
}
