//! Cart-to-order checkout flows.

#![allow(clippy::unwrap_used)]

use soycart_core::{DeliveryOption, Money, OrderStatus};
use soycart_integration_tests::{DELIVERY_FEE, TestContext};
use soycart_server::models::cart::Cart;
use soycart_server::services::orders::OrderError;

#[tokio::test]
async fn delivery_checkout_prices_each_item_with_fee() {
    let ctx = TestContext::new().await;
    let products = ctx.seed_catalog().await;
    let user = ctx.sign_up("aling_nena").await;

    let mut cart = Cart::new();
    cart.add(&products[0]).unwrap(); // Classic ₱20
    cart.set_quantity(products[0].id, 2);
    cart.add(&products[1]).unwrap(); // Mango ₱25

    let order = ctx
        .orders()
        .checkout(&user, &cart, DeliveryOption::Delivery)
        .await
        .unwrap();

    // 2 × (20 + 5) + 1 × (25 + 5)
    assert_eq!(order.total, Money::from_pesos(80));
    assert_eq!(order.delivery_fee, DELIVERY_FEE);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.campus, user.campus);
    assert_eq!(order.contact, user.contact);
}

#[tokio::test]
async fn pickup_checkout_has_no_fee() {
    let ctx = TestContext::new().await;
    let products = ctx.seed_catalog().await;
    let user = ctx.sign_up("aling_nena").await;

    let mut cart = Cart::new();
    cart.add(&products[0]).unwrap();
    cart.set_quantity(products[0].id, 3);

    let order = ctx
        .orders()
        .checkout(&user, &cart, DeliveryOption::Pickup)
        .await
        .unwrap();

    assert_eq!(order.total, Money::from_pesos(60));
    assert_eq!(order.delivery_fee, Money::ZERO);
}

#[tokio::test]
async fn empty_cart_checkout_writes_nothing() {
    let ctx = TestContext::new().await;
    ctx.seed_catalog().await;
    let user = ctx.sign_up("aling_nena").await;

    let result = ctx
        .orders()
        .checkout(&user, &Cart::new(), DeliveryOption::Pickup)
        .await;

    assert!(matches!(result, Err(OrderError::EmptyCart)));
    assert!(ctx.orders().list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn stale_unavailable_product_aborts_checkout() {
    let ctx = TestContext::new().await;
    let products = ctx.seed_catalog().await;
    let user = ctx.sign_up("aling_nena").await;

    // Added while still available...
    let mut cart = Cart::new();
    cart.add(&products[0]).unwrap();

    // ...then pulled from the catalog before checkout
    ctx.catalog()
        .set_availability(products[0].id, false)
        .await
        .unwrap();

    let result = ctx
        .orders()
        .checkout(&user, &cart, DeliveryOption::Pickup)
        .await;

    assert!(matches!(result, Err(OrderError::ProductUnavailable(_))));
    assert!(ctx.orders().list_all().await.unwrap().is_empty());
    // The cart is untouched, so the shopper can edit and retry
    assert_eq!(cart.item_count(), 1);
}

#[tokio::test]
async fn unavailable_product_cannot_be_added() {
    let ctx = TestContext::new().await;
    let products = ctx.seed_catalog().await;

    ctx.catalog()
        .set_availability(products[1].id, false)
        .await
        .unwrap();
    let unavailable = ctx.catalog().get(products[1].id).await.unwrap().unwrap();

    let mut cart = Cart::new();
    assert!(cart.add(&unavailable).is_err());
    assert_eq!(cart.item_count(), 0);
}

#[tokio::test]
async fn order_history_is_newest_first_and_per_user() {
    let ctx = TestContext::new().await;
    let products = ctx.seed_catalog().await;
    let nena = ctx.sign_up("aling_nena").await;
    let ely = ctx.sign_up("mang_ely").await;

    let mut cart = Cart::new();
    cart.add(&products[0]).unwrap();

    let first = ctx
        .orders()
        .checkout(&nena, &cart, DeliveryOption::Pickup)
        .await
        .unwrap();
    let second = ctx
        .orders()
        .checkout(&nena, &cart, DeliveryOption::Delivery)
        .await
        .unwrap();
    let other = ctx
        .orders()
        .checkout(&ely, &cart, DeliveryOption::Pickup)
        .await
        .unwrap();

    let history = ctx.orders().list_for_user(nena.id).await.unwrap();
    let ids: Vec<_> = history.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
    assert!(history.iter().all(|o| o.user_id == nena.id));

    // Line items come back attached
    assert_eq!(history[0].items.len(), 1);
    assert_eq!(history[0].items[0].product_name, "Classic");

    let everything = ctx.orders().list_all().await.unwrap();
    let ids: Vec<_> = everything.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![other.id, second.id, first.id]);
}
