//! Session tests against a scripted backend: the real actor runs, the
//! network does not.

use myshop_backend::mock::MockBackend;
use myshop_backend::model::{OrderId, OrderReceipt, Product, ProductId, SeedOutcome};
use myshop_backend::{ApiError, StatusCode};
use myshop_storefront::clients::StorefrontClient;
use myshop_storefront::model::OrderOutcome;
use myshop_storefront::session;
use myshop_storefront::session::SessionError;
use std::sync::Arc;

fn spawn_session(mock: &MockBackend) -> (StorefrontClient, tokio::task::JoinHandle<()>) {
    let (session, client) = session::new(8);
    let handle = tokio::spawn(session.run(Arc::new(mock.clone())));
    (client, handle)
}

#[tokio::test]
async fn load_replaces_the_catalog_on_success() {
    let mock = MockBackend::new();
    mock.expect_fetch_products().return_ok(vec![
        Product::new(1u64, "Widget", 10.0),
        Product::new(2u64, "Gadget", 5.0),
    ]);

    let (client, handle) = spawn_session(&mock);

    let view = client.load_catalog().await.unwrap();
    assert_eq!(view.products.len(), 2);
    assert_eq!(view.error, None);
    assert!(!view.loading, "load must settle before the command answers");

    mock.verify();
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn load_failure_records_the_error_and_keeps_the_previous_catalog() {
    let mock = MockBackend::new();
    mock.expect_fetch_products()
        .return_ok(vec![Product::new(1u64, "Widget", 10.0)]);
    mock.expect_fetch_products()
        .return_err(ApiError::Status(StatusCode::SERVICE_UNAVAILABLE));

    let (client, _handle) = spawn_session(&mock);

    let view = client.load_catalog().await.unwrap();
    assert_eq!(view.products.len(), 1);

    let view = client.load_catalog().await.unwrap();
    assert!(view.error.is_some(), "failure must surface a message");
    assert_eq!(
        view.products.len(),
        1,
        "a failed load must not clobber the catalog"
    );

    mock.verify();
}

#[tokio::test]
async fn reseed_refreshes_the_catalog_on_success() {
    let mock = MockBackend::new();
    mock.expect_seed_products().return_ok(SeedOutcome {
        status: "seeded".to_string(),
    });
    mock.expect_fetch_products()
        .return_ok(vec![Product::new(1u64, "Widget", 10.0)]);

    let (client, _handle) = spawn_session(&mock);

    let report = client.reseed_catalog().await.unwrap();
    assert_eq!(report.outcome.unwrap().status, "seeded");
    assert_eq!(report.view.products.len(), 1);

    mock.verify();
}

#[tokio::test]
async fn reseed_failure_is_swallowed_and_skips_the_refresh() {
    let mock = MockBackend::new();
    mock.expect_seed_products()
        .return_err(ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR));

    let (client, _handle) = spawn_session(&mock);

    let report = client.reseed_catalog().await.unwrap();
    assert_eq!(report.outcome, None);
    assert!(report.view.products.is_empty());

    // No fetch_products expectation was scripted: reaching here without a
    // panic proves the failed seed did not trigger a refresh.
    mock.verify();
}

#[tokio::test]
async fn successful_order_empties_the_cart() {
    let mock = MockBackend::new();
    mock.expect_submit_order()
        .return_ok(OrderReceipt { id: OrderId(42) });

    let (client, _handle) = spawn_session(&mock);

    client
        .add_to_cart(Product::new(1u64, "Widget", 10.0))
        .await
        .unwrap();
    client
        .add_to_cart(Product::new(2u64, "Gadget", 5.0))
        .await
        .unwrap();

    let outcome = client.place_order().await.unwrap();
    assert_eq!(outcome, OrderOutcome::Placed(OrderReceipt { id: OrderId(42) }));

    let view = client.snapshot().await.unwrap();
    assert!(view.cart.is_empty());
    assert_eq!(view.total, 0.0);

    mock.verify();
}

#[tokio::test]
async fn rejected_order_keeps_the_cart_for_retry() {
    let mock = MockBackend::new();
    mock.expect_submit_order()
        .return_err(ApiError::Status(StatusCode::BAD_GATEWAY));

    let (client, _handle) = spawn_session(&mock);

    client
        .add_to_cart(Product::new(1u64, "Widget", 10.0))
        .await
        .unwrap();
    client
        .add_to_cart(Product::new(1u64, "Widget", 10.0))
        .await
        .unwrap();

    let result = client.place_order().await;
    assert!(matches!(result, Err(SessionError::OrderRejected(_))));

    let view = client.snapshot().await.unwrap();
    assert_eq!(view.cart_len(), 1);
    assert_eq!(view.cart[0].qty, 2);
    assert_eq!(view.total, 20.0);

    mock.verify();
}

#[tokio::test]
async fn placing_an_empty_cart_makes_no_backend_call() {
    // Nothing is scripted: any backend call would panic the session.
    let mock = MockBackend::new();

    let (client, _handle) = spawn_session(&mock);

    let outcome = client.place_order().await.unwrap();
    assert_eq!(outcome, OrderOutcome::EmptyCart);

    let view = client.snapshot().await.unwrap();
    assert!(view.cart.is_empty());

    mock.verify();
}

#[tokio::test]
async fn removing_an_unknown_product_is_a_noop() {
    let mock = MockBackend::new();

    let (client, _handle) = spawn_session(&mock);

    client
        .add_to_cart(Product::new(1u64, "Widget", 10.0))
        .await
        .unwrap();

    let view = client.remove_from_cart(ProductId(99)).await.unwrap();
    assert_eq!(view.cart_len(), 1);

    let view = client.remove_from_cart(ProductId(1)).await.unwrap();
    assert!(view.cart.is_empty());

    mock.verify();
}
