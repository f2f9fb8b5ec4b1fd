use ecom_order_service::{dto::orders::OrderListQuery, services::filter::OrderFilter};

fn query(buyer_id: Option<&str>, status: Option<&str>, product_user_id: Option<&str>) -> OrderListQuery {
    OrderListQuery {
        buyer_id: buyer_id.map(String::from),
        status: status.map(String::from),
        product_user_id: product_user_id.map(String::from),
    }
}

#[test]
fn no_parameters_match_everything() {
    let filter = OrderFilter::from_query(&OrderListQuery::default());
    assert!(filter.is_empty());
    assert_eq!(filter, OrderFilter::default());
}

#[test]
fn recognized_parameters_are_combined() {
    let filter = OrderFilter::from_query(&query(Some("1"), Some("in-cart"), Some("30")));
    assert_eq!(
        filter,
        OrderFilter {
            order_number: None,
            buyer_id: Some(1),
            status: Some("in-cart".into()),
            product_user_id: Some(30),
        }
    );
}

#[test]
fn unparsable_ids_are_omitted() {
    let filter = OrderFilter::from_query(&query(Some("abc"), None, Some("")));
    assert!(filter.is_empty());
}

#[test]
fn empty_status_is_omitted() {
    let filter = OrderFilter::from_query(&query(Some("2"), Some(""), None));
    assert_eq!(filter.buyer_id, Some(2));
    assert_eq!(filter.status, None);
}

#[test]
fn unknown_keys_are_ignored() {
    let parsed: OrderListQuery =
        serde_json::from_value(serde_json::json!({ "order_number": "abc", "status": "done" }))
            .expect("query");
    let filter = OrderFilter::from_query(&parsed);
    assert_eq!(filter.order_number, None);
    assert_eq!(filter.status.as_deref(), Some("done"));
}

#[test]
fn order_number_filter() {
    let filter = OrderFilter::by_order_number("abcDEF123456789");
    assert!(!filter.is_empty());
    assert_eq!(filter.order_number.as_deref(), Some("abcDEF123456789"));
    assert_eq!(filter.buyer_id, None);
}
