//! Storefront web client.

use std::rc::Rc;

use leptos::{prelude::*, task};
use tracing::info;

use storefront_client::{
    ClientConfig, ConfigError, HttpStorefrontApi, Storefront, StorefrontState,
    config::{API_BASE_KEY, CURRENCY_KEY, LOG_LEVEL_KEY, NOTIFICATION_KEY, POLL_INTERVAL_KEY},
    render::Renderer,
    schedule::RefreshSchedule,
    storefront::ActionResult,
};

mod cart;
mod checkout;
mod logging;
mod notifications;
mod polling;
mod products;
mod timers;

type WebStorefront = Storefront<HttpStorefrontApi>;

/// Handles shared by every panel.
#[derive(Debug, Clone, Copy)]
struct AppContext {
    /// The controller; lives as long as the root owner.
    storefront: StoredValue<Rc<WebStorefront>, LocalStorage>,

    /// Snapshot of the controller state, republished after every operation.
    state: RwSignal<StorefrontState>,

    renderer: Renderer,

    toasts: notifications::Toasts,
}

impl AppContext {
    fn new(config: &ClientConfig) -> Self {
        let storefront = Storefront::new(HttpStorefrontApi::from_config(config));

        Self {
            storefront: StoredValue::new_local(Rc::new(storefront)),
            state: RwSignal::new(StorefrontState::default()),
            renderer: Renderer::from_config(config),
            toasts: notifications::Toasts::new(config.notification_ttl),
        }
    }

    /// Copy the controller's state into the reactive snapshot.
    fn publish(self, storefront: &WebStorefront) {
        self.state.set(storefront.state());
    }

    /// Initial page load.
    fn bootstrap(self) {
        let Some(storefront) = self.storefront.try_get_value() else {
            return;
        };

        task::spawn_local(async move {
            storefront.initialize().await;

            self.publish(&storefront);
        });
    }

    /// Run a user action in the background, then republish state and show
    /// whatever notification it produced.
    fn dispatch<F, Fut>(self, action: F)
    where
        F: FnOnce(Rc<WebStorefront>) -> Fut + 'static,
        Fut: Future<Output = ActionResult> + 'static,
    {
        let Some(storefront) = self.storefront.try_get_value() else {
            return;
        };

        task::spawn_local(async move {
            let result = action(Rc::clone(&storefront)).await;

            self.publish(&storefront);

            match result {
                Ok(Some(notification)) => self.toasts.push(notification),
                Ok(None) => {}
                Err(error) => self.toasts.push(error.notification()),
            }
        });
    }
}

/// Read configuration baked in at build time.
fn load_config() -> Result<ClientConfig, ConfigError> {
    ClientConfig::from_lookup(|key| {
        match key {
            API_BASE_KEY => option_env!("STOREFRONT_API_BASE"),
            POLL_INTERVAL_KEY => option_env!("STOREFRONT_POLL_INTERVAL_MS"),
            NOTIFICATION_KEY => option_env!("STOREFRONT_NOTIFICATION_MS"),
            CURRENCY_KEY => option_env!("STOREFRONT_CURRENCY"),
            LOG_LEVEL_KEY => option_env!("STOREFRONT_LOG_LEVEL"),
            _ => None,
        }
        .map(str::to_string)
    })
}

/// Storefront page shell.
#[component]
fn App(config: ClientConfig) -> impl IntoView {
    let app = AppContext::new(&config);

    app.bootstrap();

    polling::install(app, RefreshSchedule::from_config(&config));

    view! {
        <main class="storefront">
            <header class="storefront-header">
                <h1>"Shopping Cart"</h1>
            </header>
            <notifications::NotificationStack toasts=app.toasts />
            <div class="storefront-layout">
                <div class="storefront-main">
                    <products::ProductsPanel app=app />
                    <products::UpdateProductPanel app=app />
                </div>
                <aside class="storefront-sidebar">
                    <cart::CartPanel app=app />
                    <checkout::CheckoutPanel app=app />
                </aside>
            </div>
        </main>
    }
}

/// Shown instead of the shop when configuration is unusable.
#[component]
fn ConfigErrorPage(message: String) -> impl IntoView {
    view! {
        <main class="storefront">
            <header class="storefront-header">
                <h1>"Shopping Cart"</h1>
            </header>
            <div class="panel panel-error">
                <p>{message}</p>
            </div>
        </main>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    match load_config() {
        Ok(config) => {
            if let Err(error) = logging::init(&config.log_level) {
                leptos::logging::error!("failed to initialise logging: {error}");
            }

            info!(
                api_base = %config.api_base,
                poll_interval = ?config.poll_interval,
                currency = config.currency.iso_alpha_code,
                "starting storefront"
            );

            leptos::mount::mount_to_body(move || view! { <App config=config /> });
        }
        Err(error) => {
            let message = format!("Invalid configuration: {error}");

            leptos::logging::error!("{message}");

            leptos::mount::mount_to_body(move || view! { <ConfigErrorPage message=message /> });
        }
    }
}
