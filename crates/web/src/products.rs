use leptos::{ev::SubmitEvent, prelude::*};

use storefront_client::{
    domain::{ProductId, ProductUpdateKind},
    forms::ProductUpdateForm,
    render::ProductCard,
};

use crate::AppContext;

fn add_to_cart(app: AppContext, product_id: ProductId) {
    app.dispatch(move |storefront| async move { storefront.add_to_cart(&product_id).await });
}

#[component]
fn ProductTile(card: ProductCard, app: AppContext) -> impl IntoView {
    let ProductCard {
        product_id,
        name,
        price,
        stock_label,
        configuration,
        button_label,
        add_enabled,
    } = card;

    view! {
        <div class="product-card">
            <h3 class="product-name">{name}</h3>
            <p class="product-price">{price}</p>
            <p class="product-stock">{stock_label}</p>
            {configuration.map(|summary| view! { <p class="product-config">{summary}</p> })}
            <button
                type="button"
                class="button button-primary"
                disabled=!add_enabled
                on:click=move |_| add_to_cart(app, product_id.clone())
            >
                {button_label}
            </button>
        </div>
    }
}

/// Product grid.
#[component]
pub(crate) fn ProductsPanel(app: AppContext) -> impl IntoView {
    view! {
        <section class="panel products-panel">
            <h2 class="panel-title">"Products"</h2>
            <div class="product-grid">
                {move || {
                    app.state
                        .with(|state| app.renderer.product_cards(&state.products))
                        .into_iter()
                        .map(|card| view! { <ProductTile card=card app=app /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

/// Price and stock editor.
#[component]
pub(crate) fn UpdateProductPanel(app: AppContext) -> impl IntoView {
    let product_id = RwSignal::new(String::new());
    let kind = RwSignal::new(ProductUpdateKind::default());
    let value = RwSignal::new(String::new());

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let form = ProductUpdateForm {
            product_id: product_id.get_untracked(),
            kind: kind.get_untracked(),
            value: value.get_untracked(),
        };

        app.dispatch(move |storefront| async move { storefront.update_product(&form).await });
    };

    view! {
        <section class="panel update-panel">
            <h2 class="panel-title">"Update Product"</h2>
            <form class="form" on:submit=on_submit>
                <select
                    prop:value=move || product_id.get()
                    on:change=move |event| product_id.set(event_target_value(&event))
                >
                    <option value="">"Select product"</option>
                    {move || {
                        app.state
                            .with(|state| app.renderer.product_options(&state.products))
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <option value=option.value.to_string()>{option.label}</option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
                <select on:change=move |event| {
                    if let Some(parsed) = ProductUpdateKind::parse(&event_target_value(&event)) {
                        kind.set(parsed);
                    }
                }>
                    <option value=ProductUpdateKind::Price.as_str()>"Price"</option>
                    <option value=ProductUpdateKind::Stock.as_str()>"Stock"</option>
                </select>
                <input
                    type="number"
                    step="0.01"
                    placeholder="New value"
                    prop:value=move || value.get()
                    on:input=move |event| value.set(event_target_value(&event))
                />
                <button type="submit" class="button">"Update"</button>
            </form>
        </section>
    }
}
