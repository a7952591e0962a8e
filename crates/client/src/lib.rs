//! Storefront client: a typed view-model over the shop's REST API.
//!
//! The [`storefront::Storefront`] controller owns the product and cart
//! projections, talks to the backend through the [`api::StorefrontApi`] seam
//! and hands typed render models from [`render`] to whichever UI drives it.

pub mod api;
pub mod config;
pub mod domain;
pub mod forms;
pub mod notifications;
pub mod render;
pub mod schedule;
pub mod storefront;

#[cfg(test)]
mod test_helpers;

pub use api::{ApiError, HttpStorefrontApi, StorefrontApi};
pub use config::{ClientConfig, ConfigError};
pub use notifications::{Notification, NotificationKind};
pub use storefront::{ActionError, Storefront, StorefrontState};
