use leptos::{ev::SubmitEvent, prelude::*};

use storefront_client::{domain::PaymentMethod, forms::CheckoutForm, render::CheckoutView};

use crate::AppContext;

fn details_placeholder(method: PaymentMethod) -> &'static str {
    match method {
        PaymentMethod::CreditCard => "Card number",
        PaymentMethod::PayPal => "PayPal email",
    }
}

#[component]
fn CheckoutResult(outcome: CheckoutView) -> impl IntoView {
    match outcome {
        CheckoutView::Confirmed {
            title,
            order_id,
            message,
            email_note,
        } => view! {
            <div class="checkout-result checkout-success">
                <h3>{title}</h3>
                <p>"Order ID: " <strong>{order_id}</strong></p>
                <p>{message}</p>
                <p>{email_note}</p>
            </div>
        }
        .into_any(),
        CheckoutView::Failed { message } => view! {
            <div class="checkout-result checkout-error">
                <p>{message}</p>
            </div>
        }
        .into_any(),
    }
}

/// Checkout form and the inline result of the last attempt.
#[component]
pub(crate) fn CheckoutPanel(app: AppContext) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let payment_method = RwSignal::new(PaymentMethod::default());
    let payment_details = RwSignal::new(String::new());

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let form = CheckoutForm {
            email: email.get_untracked(),
            payment_method: payment_method.get_untracked(),
            payment_details: payment_details.get_untracked(),
        };

        app.dispatch(move |storefront| async move { storefront.checkout(&form).await });
    };

    view! {
        <section class="panel checkout-panel">
            <h2 class="panel-title">"Checkout"</h2>
            <form class="form" on:submit=on_submit>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |event| email.set(event_target_value(&event))
                />
                <select on:change=move |event| {
                    payment_method.set(PaymentMethod::parse(&event_target_value(&event)));
                }>
                    {PaymentMethod::ALL
                        .into_iter()
                        .map(|method| view! { <option value=method.as_str()>{method.label()}</option> })
                        .collect_view()}
                </select>
                <input
                    type="text"
                    placeholder=move || details_placeholder(payment_method.get())
                    prop:value=move || payment_details.get()
                    on:input=move |event| payment_details.set(event_target_value(&event))
                />
                <button type="submit" class="button button-primary">"Place Order"</button>
            </form>
            {move || {
                app.state
                    .with(|state| app.renderer.checkout(state.checkout.as_ref()))
                    .map(|outcome| view! { <CheckoutResult outcome=outcome /> })
            }}
        </section>
    }
}
