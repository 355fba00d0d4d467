//! Checkout step tracking.
//!
//! [`CheckoutStepTracker`] fans a step out to one emitter per Google
//! implementation. Each emitter decides on its own whether the step means
//! anything to it and builds its own payloads:
//!
//! - [`ua::UaCheckoutEmitter`] - Universal Analytics `checkout` action
//! - [`ga4::Ga4CheckoutEmitter`] - GA4 funnel events (`view_cart`, `begin_checkout`, ...)

pub mod ga4;
pub mod ua;

use std::sync::Arc;

use gtm_checkout_core::{CheckoutStep, Order};
use serde::Serialize;
use tracing::instrument;

use crate::context::CurrencyContext;
use crate::flags::ImplementationFlags;
use crate::product::ProductMapper;
use crate::tag_manager::TagManager;

pub use ga4::Ga4CheckoutEmitter;
pub use ua::UaCheckoutEmitter;

/// Records that an order reached a checkout step.
pub trait StepTracker: Send + Sync {
    fn add_step(&self, order: &Order, step: CheckoutStep);
}

/// One analytics implementation's reaction to a checkout step.
pub trait StepEmitter: Send + Sync {
    /// Push zero or more payloads for `step`.
    fn emit(&self, order: &Order, step: CheckoutStep, tag_manager: &dyn TagManager);
}

/// Pushes UA and GA4 checkout events for whichever implementations are enabled.
///
/// Flags are read on every call and both implementations are evaluated
/// independently; enabling one never suppresses the other.
pub struct CheckoutStepTracker {
    tag_manager: Arc<dyn TagManager>,
    flags: Arc<dyn ImplementationFlags>,
    ua: UaCheckoutEmitter,
    ga4: Ga4CheckoutEmitter,
}

impl CheckoutStepTracker {
    pub fn new(
        tag_manager: Arc<dyn TagManager>,
        flags: Arc<dyn ImplementationFlags>,
        products: ProductMapper,
        currency: Arc<dyn CurrencyContext>,
    ) -> Self {
        Self {
            tag_manager,
            flags,
            ua: UaCheckoutEmitter::new(products.clone()),
            ga4: Ga4CheckoutEmitter::new(products, currency),
        }
    }
}

impl StepTracker for CheckoutStepTracker {
    #[instrument(skip_all, fields(step = step.number(), order_id = %order.id))]
    fn add_step(&self, order: &Order, step: CheckoutStep) {
        let tag_manager = self.tag_manager.as_ref();

        if self.flags.is_ua_enabled() {
            self.ua.emit(order, step, tag_manager);
        }

        if self.flags.is_ga4_enabled() {
            self.ga4.emit(order, step, tag_manager);
        }
    }
}

impl std::fmt::Debug for CheckoutStepTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutStepTracker")
            .field("ua", &self.ua)
            .field("ga4", &self.ga4)
            .finish_non_exhaustive()
    }
}

/// Serialize a typed payload to JSON.
///
/// Tracking must never break checkout, so a payload that cannot be
/// represented is logged and dropped instead of returned as an error.
pub(crate) fn to_payload<T: Serialize>(event: &str, payload: &T) -> Option<serde_json::Value> {
    match serde_json::to_value(payload) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(event, error = %e, "Skipping unserializable data layer payload");
            None
        }
    }
}
