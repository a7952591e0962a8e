//! Browser timers as futures.

use std::time::Duration;

/// Clamp a duration to the millisecond range `setTimeout` accepts.
pub(crate) fn timeout_millis(duration: Duration) -> i32 {
    i32::try_from(duration.as_millis()).unwrap_or(i32::MAX)
}

/// Resolve after `delay_ms` milliseconds. The promise's own `resolve`
/// function is the timeout callback.
#[cfg(target_arch = "wasm32")]
pub(crate) async fn sleep(delay_ms: i32) {
    use js_sys::{Function, Promise};
    use tracing::warn;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;

    let Some(window) = web_sys::window() else {
        warn!("no window, timer skipped");

        return;
    };

    let mut arm = |resolve: Function, _reject: Function| {
        if let Err(error) =
            window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, delay_ms)
        {
            warn!(?error, "setTimeout failed, resolving immediately");

            if let Err(error) = resolve.call0(&JsValue::UNDEFINED) {
                warn!(?error, "timer promise could not be resolved");
            }
        }
    };

    if let Err(error) = JsFuture::from(Promise::new(&mut arm)).await {
        warn!(?error, "timer promise rejected");
    }
}

/// Off the browser there is no timer; yield once instead.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) async fn sleep(_delay_ms: i32) {
    leptos::task::tick().await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_millis_converts() {
        assert_eq!(timeout_millis(Duration::from_secs(3)), 3_000);
        assert_eq!(timeout_millis(Duration::ZERO), 0);
    }

    #[test]
    fn test_timeout_millis_saturates() {
        assert_eq!(timeout_millis(Duration::from_secs(u64::MAX)), i32::MAX);
    }
}
