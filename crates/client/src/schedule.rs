//! Background cart refresh cadence.

use std::time::Duration;

use crate::config::ClientConfig;

/// How often the cart is re-fetched while the page is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSchedule {
    interval: Duration,
}

impl RefreshSchedule {
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self { interval }
    }

    #[must_use]
    pub const fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.poll_interval)
    }

    /// A zero interval turns polling off.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !self.interval.is_zero()
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for RefreshSchedule {
    fn default() -> Self {
        Self::from_config(&ClientConfig::default())
    }
}
