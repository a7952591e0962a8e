//! Background cart refresh.

use leptos::{prelude::*, task};
use tracing::debug;

use storefront_client::schedule::RefreshSchedule;

use crate::{AppContext, timers};

/// Re-fetch the cart on every tick of `schedule` for as long as the app is
/// mounted. Ticks are not coordinated with in-flight user actions.
pub(crate) fn install(app: AppContext, schedule: RefreshSchedule) {
    if !schedule.is_enabled() {
        debug!("cart polling disabled");

        return;
    }

    let period = timers::timeout_millis(schedule.interval());

    debug!(period_ms = period, "cart polling enabled");

    task::spawn_local(async move {
        loop {
            timers::sleep(period).await;

            let Some(storefront) = app.storefront.try_get_value() else {
                debug!("storefront unmounted, polling stopped");

                break;
            };

            storefront.load_cart().await;

            app.publish(&storefront);
        }
    });
}
