//! End-to-end storefront flows against a mocked backend.

use std::collections::VecDeque;

use rusty_money::iso::USD;
use testresult::TestResult;

use storefront_client::{
    Notification, Storefront,
    api::{ApiError, MockStorefrontApi, requests::ProductsResponse},
    domain::{Cart, CheckoutOutcome, CheckoutReceipt, DiscountApplied, DiscountKind, PaymentMethod, ProductId},
    forms::{CheckoutForm, DiscountForm},
    render::{CheckoutView, Renderer},
};

const PRODUCTS: &str = include_str!("fixtures/products.json");
const CART: &str = include_str!("fixtures/cart.json");

fn products_fixture() -> TestResult<ProductsResponse> {
    Ok(serde_json::from_str(PRODUCTS)?)
}

fn cart_fixture() -> TestResult<Cart> {
    Ok(serde_json::from_str(CART)?)
}

fn checkout_form() -> CheckoutForm {
    CheckoutForm {
        email: "ada@example.com".to_string(),
        payment_method: PaymentMethod::CreditCard,
        payment_details: "4111111111111111".to_string(),
    }
}

#[tokio::test]
async fn page_load_renders_catalog_and_cart() -> TestResult {
    let products = products_fixture()?.products;
    let cart = cart_fixture()?;
    let mut api = MockStorefrontApi::new();

    api.expect_list_products()
        .once()
        .return_once(move || Ok(products));
    api.expect_get_cart().once().return_once(move || Ok(cart));

    let storefront = Storefront::new(api);

    storefront.initialize().await;

    let renderer = Renderer::new(USD);
    let state = storefront.state();
    let cards = renderer.product_cards(&state.products);

    assert_eq!(cards.len(), 3);
    assert_eq!(
        cards.iter().map(|card| card.name.as_str()).collect::<Vec<_>>(),
        ["Smartphone", "T-Shirt", "Java Design Patterns"]
    );
    assert_eq!(
        cards.first().and_then(|card| card.configuration.as_deref()),
        Some("color: Black, memory: 256GB")
    );
    assert!(cards.last().is_some_and(|card| !card.add_enabled));

    let view = renderer.cart(&state.cart);

    assert_eq!(view.lines.len(), 2);
    assert_eq!(
        view.lines.first().map(|line| line.details.as_str()),
        Some("$29.99 × 2 = $59.98")
    );
    assert_eq!(view.subtotal, "$659.97");
    assert_eq!(view.discount, "$66.00");
    assert_eq!(view.total, "$593.97");

    Ok(())
}

#[tokio::test]
async fn shopper_adds_discounts_and_checks_out() -> TestResult {
    let products = products_fixture()?.products;
    let cart = cart_fixture()?;
    let mut api = MockStorefrontApi::new();

    let mut carts = VecDeque::from([cart.clone(), cart.clone(), cart, Cart::default()]);

    api.expect_get_cart()
        .times(4)
        .returning(move || Ok(carts.pop_front().unwrap_or_default()));
    api.expect_list_products()
        .times(2)
        .returning(move || Ok(products.clone()));
    api.expect_add_to_cart()
        .once()
        .withf(|line| line.product_id.as_str() == "P001" && line.quantity == 1)
        .return_once(|_| Ok(()));
    api.expect_apply_discount()
        .once()
        .withf(|request| {
            request.kind == DiscountKind::Bulk
                && request.value.to_string() == "10"
                && request.threshold == Some(3)
        })
        .return_once(|_| {
            Ok(DiscountApplied {
                description: "Bulk discount: 10% off when buying 3 or more items".to_string(),
            })
        });
    api.expect_checkout()
        .once()
        .withf(|request| {
            request.email == "ada@example.com" && request.payment_method == PaymentMethod::CreditCard
        })
        .return_once(|_| {
            Ok(CheckoutReceipt {
                order_id: "ORD-1700000000000".to_string(),
                message: "Order confirmed! Check your email for confirmation.".to_string(),
            })
        });

    let storefront = Storefront::new(api);

    storefront.initialize().await;

    let added = storefront.add_to_cart(&ProductId::new("P001")).await?;

    assert_eq!(added, Some(Notification::success("Product added to cart!")));

    let discount = DiscountForm {
        kind: DiscountKind::Bulk,
        value: "10".to_string(),
        threshold: "3".to_string(),
    };

    let applied = storefront.apply_discount(&discount).await?;

    assert_eq!(
        applied.map(|notification| notification.message),
        Some("Discount applied: Bulk discount: 10% off when buying 3 or more items".to_string())
    );

    let confirmed = storefront.checkout(&checkout_form()).await?;

    assert_eq!(
        confirmed,
        Some(Notification::success("Order confirmed! Check your email."))
    );

    let state = storefront.state();

    assert!(state.cart.is_empty());
    assert_eq!(
        Renderer::new(USD).checkout(state.checkout.as_ref()),
        Some(CheckoutView::Confirmed {
            title: "Order Confirmed!",
            order_id: "ORD-1700000000000".to_string(),
            message: "Order confirmed! Check your email for confirmation.".to_string(),
            email_note: "A confirmation email has been sent to ada@example.com".to_string(),
        })
    );

    Ok(())
}

#[tokio::test]
async fn rejected_checkout_keeps_cart_and_shows_reason() -> TestResult {
    let cart = cart_fixture()?;
    let mut api = MockStorefrontApi::new();

    api.expect_get_cart().once().return_once(move || Ok(cart));
    api.expect_checkout().once().return_once(|_| {
        Err(ApiError::Rejected {
            status: 400,
            message: Some("Insufficient stock for Smartphone".to_string()),
        })
    });

    let storefront = Storefront::new(api);

    storefront.load_cart().await;

    let error = storefront
        .checkout(&checkout_form())
        .await
        .err()
        .ok_or("checkout should fail")?;

    assert_eq!(
        error.notification(),
        Notification::error("Insufficient stock for Smartphone")
    );

    let state = storefront.state();

    assert_eq!(state.cart.items.len(), 2);
    assert_eq!(
        state.checkout,
        Some(CheckoutOutcome::Failed {
            message: "Insufficient stock for Smartphone".to_string(),
        })
    );

    Ok(())
}

#[tokio::test]
async fn invalid_forms_never_reach_the_backend() -> TestResult {
    let mut api = MockStorefrontApi::new();

    api.expect_apply_discount().never();
    api.expect_checkout().never();

    let storefront = Storefront::new(api);

    let discount = DiscountForm {
        kind: DiscountKind::Bulk,
        value: "10".to_string(),
        threshold: String::new(),
    };

    let error = storefront
        .apply_discount(&discount)
        .await
        .err()
        .ok_or("discount should fail validation")?;

    assert!(error.is_validation());
    assert_eq!(
        error.notification(),
        Notification::error("Please enter valid discount values")
    );

    let error = storefront
        .checkout(&checkout_form())
        .await
        .err()
        .ok_or("checkout of an empty cart should fail")?;

    assert_eq!(error.notification(), Notification::error("Your cart is empty"));
    assert_eq!(storefront.state().checkout, None);

    Ok(())
}
