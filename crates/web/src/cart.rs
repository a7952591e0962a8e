use leptos::{ev::SubmitEvent, prelude::*};

use storefront_client::{
    domain::{DiscountKind, ProductId},
    forms::{DiscountForm, parse_quantity},
    render::{CartLineView, CartView, EMPTY_CART_MESSAGE},
};

use crate::AppContext;

fn set_quantity(app: AppContext, product_id: ProductId, quantity: i64) {
    app.dispatch(move |storefront| async move {
        storefront.update_quantity(&product_id, quantity).await
    });
}

fn remove(app: AppContext, product_id: ProductId) {
    app.dispatch(move |storefront| async move { storefront.remove_from_cart(&product_id).await });
}

#[component]
fn CartLine(line: CartLineView, app: AppContext) -> impl IntoView {
    let CartLineView {
        product_id,
        name,
        details,
        quantity,
        decrement_to,
        increment_to,
        ..
    } = line;

    let decrement_id = product_id.clone();
    let increment_id = product_id.clone();
    let input_id = product_id.clone();
    let remove_id = product_id;

    view! {
        <div class="cart-item">
            <div class="cart-item-info">
                <p class="cart-item-name">{name}</p>
                <p class="cart-item-details">{details}</p>
            </div>
            <div class="cart-item-controls">
                <button
                    type="button"
                    class="button button-compact"
                    on:click=move |_| set_quantity(app, decrement_id.clone(), decrement_to)
                >
                    "-"
                </button>
                <input
                    type="number"
                    min="0"
                    class="quantity-input"
                    prop:value=quantity.to_string()
                    on:change=move |event| {
                        if let Some(quantity) = parse_quantity(&event_target_value(&event)) {
                            set_quantity(app, input_id.clone(), quantity);
                        }
                    }
                />
                <button
                    type="button"
                    class="button button-compact"
                    on:click=move |_| set_quantity(app, increment_id.clone(), increment_to)
                >
                    "+"
                </button>
                <button
                    type="button"
                    class="button button-danger button-compact"
                    on:click=move |_| remove(app, remove_id.clone())
                >
                    "Remove"
                </button>
            </div>
        </div>
    }
}

#[component]
fn CartSummary(cart: Memo<CartView>) -> impl IntoView {
    view! {
        <div class="cart-summary">
            <p class="cart-summary-row">
                <span>"Subtotal:"</span>
                <span>{move || cart.with(|cart| cart.subtotal.clone())}</span>
            </p>
            <p class="cart-summary-row">
                <span>"Discount:"</span>
                <span>{move || cart.with(|cart| cart.discount.clone())}</span>
            </p>
            <p class="cart-summary-row cart-summary-total">
                <span>"Total:"</span>
                <span>{move || cart.with(|cart| cart.total.clone())}</span>
            </p>
        </div>
    }
}

#[component]
fn DiscountPanel(app: AppContext) -> impl IntoView {
    let kind = RwSignal::new(DiscountKind::default());
    let value = RwSignal::new(String::new());
    let threshold = RwSignal::new(String::new());

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let form = DiscountForm {
            kind: kind.get_untracked(),
            value: value.get_untracked(),
            threshold: threshold.get_untracked(),
        };

        app.dispatch(move |storefront| async move { storefront.apply_discount(&form).await });
    };

    view! {
        <form class="form discount-form" on:submit=on_submit>
            <h3>"Apply Discount"</h3>
            <select on:change=move |event| {
                if let Some(parsed) = DiscountKind::parse(&event_target_value(&event)) {
                    kind.set(parsed);
                }
            }>
                {DiscountKind::ALL
                    .into_iter()
                    .map(|option| view! { <option value=option.as_str()>{option.label()}</option> })
                    .collect_view()}
            </select>
            <input
                type="number"
                step="0.01"
                placeholder="Discount value"
                prop:value=move || value.get()
                on:input=move |event| value.set(event_target_value(&event))
            />
            {move || {
                kind.get()
                    .requires_threshold()
                    .then(|| {
                        view! {
                            <input
                                type="number"
                                min="1"
                                placeholder="Minimum quantity"
                                prop:value=move || threshold.get()
                                on:input=move |event| threshold.set(event_target_value(&event))
                            />
                        }
                    })
            }}
            <button type="submit" class="button">"Apply Discount"</button>
        </form>
    }
}

/// Cart lines, totals and the discount form.
#[component]
pub(crate) fn CartPanel(app: AppContext) -> impl IntoView {
    let cart = Memo::new(move |_| app.state.with(|state| app.renderer.cart(&state.cart)));

    view! {
        <section class="panel cart-panel">
            <h2 class="panel-title">"Cart"</h2>
            <div class="cart-items">
                {move || {
                    let view_model = cart.get();

                    if view_model.is_empty() {
                        view! { <p class="cart-empty">{EMPTY_CART_MESSAGE}</p> }.into_any()
                    } else {
                        view_model
                            .lines
                            .into_iter()
                            .map(|line| view! { <CartLine line=line app=app /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
            <CartSummary cart=cart />
            <DiscountPanel app=app />
        </section>
    }
}
