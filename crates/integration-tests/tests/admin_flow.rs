//! Admin surface: order status transitions and availability toggles.

#![allow(clippy::unwrap_used)]

use soycart_core::{DeliveryOption, OrderId, OrderStatus};
use soycart_integration_tests::TestContext;
use soycart_server::db::RepositoryError;
use soycart_server::models::cart::Cart;
use soycart_server::services::orders::OrderError;

#[tokio::test]
async fn status_change_shows_in_both_views() {
    let ctx = TestContext::new().await;
    let products = ctx.seed_catalog().await;
    let user = ctx.sign_up("aling_nena").await;

    let mut cart = Cart::new();
    cart.add(&products[0]).unwrap();
    let order = ctx
        .orders()
        .checkout(&user, &cart, DeliveryOption::Pickup)
        .await
        .unwrap();

    ctx.orders()
        .set_status(order.id, OrderStatus::Delivered)
        .await
        .unwrap();

    // Shopper view and admin view read the same row
    let mine = ctx.orders().list_for_user(user.id).await.unwrap();
    assert_eq!(mine[0].status, OrderStatus::Delivered);

    let all = ctx.orders().list_all().await.unwrap();
    assert_eq!(all[0].status, OrderStatus::Delivered);
}

#[tokio::test]
async fn status_flips_both_directions() {
    let ctx = TestContext::new().await;
    let products = ctx.seed_catalog().await;
    let user = ctx.sign_up("aling_nena").await;

    let mut cart = Cart::new();
    cart.add(&products[0]).unwrap();
    let order = ctx
        .orders()
        .checkout(&user, &cart, DeliveryOption::Pickup)
        .await
        .unwrap();

    let orders = ctx.orders();
    orders
        .set_status(order.id, OrderStatus::Delivered)
        .await
        .unwrap();
    orders
        .set_status(order.id, OrderStatus::Pending)
        .await
        .unwrap();

    let fetched = orders.get(order.id).await.unwrap().unwrap();
    assert_eq!(fetched.status, OrderStatus::Pending);
}

#[tokio::test]
async fn status_change_on_missing_order_is_not_found() {
    let ctx = TestContext::new().await;

    let result = ctx
        .orders()
        .set_status(OrderId::new(999), OrderStatus::Delivered)
        .await;

    assert!(matches!(
        result,
        Err(OrderError::Repository(RepositoryError::NotFound))
    ));
}

#[tokio::test]
async fn availability_toggle_is_idempotent_and_immediate() {
    let ctx = TestContext::new().await;
    let products = ctx.seed_catalog().await;
    let catalog = ctx.catalog();

    catalog.set_availability(products[0].id, false).await.unwrap();
    catalog.set_availability(products[0].id, false).await.unwrap();

    let listed = catalog.list().await.unwrap();
    let classic = listed.iter().find(|p| p.id == products[0].id).unwrap();
    assert!(!classic.available);

    catalog.set_availability(products[0].id, true).await.unwrap();
    let listed = catalog.list().await.unwrap();
    let classic = listed.iter().find(|p| p.id == products[0].id).unwrap();
    assert!(classic.available);
}

#[tokio::test]
async fn availability_toggle_on_missing_product_is_not_found() {
    let ctx = TestContext::new().await;

    let result = ctx
        .catalog()
        .set_availability(soycart_core::ProductId::new(999), true)
        .await;

    assert!(matches!(result, Err(RepositoryError::NotFound)));
}
