//! Universal Analytics checkout steps.
//!
//! UA models the funnel as a single `checkout` action carrying the step
//! number. The confirmation page is not a checkout step in UA's model.

use gtm_checkout_core::{CheckoutStep, Order};
use serde::Serialize;

use super::{StepEmitter, to_payload};
use crate::product::{ProductMapper, UaProduct};
use crate::tag_manager::TagManager;

const CHECKOUT_EVENT: &str = "checkout";

#[derive(Debug, Serialize)]
struct CheckoutPush {
    event: &'static str,
    ecommerce: CheckoutEcommerce,
}

#[derive(Debug, Serialize)]
struct CheckoutEcommerce {
    checkout: Checkout,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Checkout {
    action_field: ActionField,
    products: Vec<UaProduct>,
}

#[derive(Debug, Serialize)]
struct ActionField {
    step: CheckoutStep,
}

/// Whether UA reports `step` at all.
#[must_use]
pub fn tracks_step(step: CheckoutStep) -> bool {
    step != CheckoutStep::Confirm
}

/// Pushes `{event: "checkout", ecommerce: {checkout: {actionField, products}}}`.
#[derive(Debug, Clone)]
pub struct UaCheckoutEmitter {
    products: ProductMapper,
}

impl UaCheckoutEmitter {
    #[must_use]
    pub fn new(products: ProductMapper) -> Self {
        Self { products }
    }

    fn payload(&self, order: &Order, step: CheckoutStep) -> CheckoutPush {
        CheckoutPush {
            event: CHECKOUT_EVENT,
            ecommerce: CheckoutEcommerce {
                checkout: Checkout {
                    action_field: ActionField { step },
                    products: order
                        .items
                        .iter()
                        .map(|item| self.products.to_ua_product(item))
                        .collect(),
                },
            },
        }
    }
}

impl StepEmitter for UaCheckoutEmitter {
    fn emit(&self, order: &Order, step: CheckoutStep, tag_manager: &dyn TagManager) {
        if !tracks_step(step) {
            return;
        }

        if let Some(payload) = to_payload(CHECKOUT_EVENT, &self.payload(order, step)) {
            tag_manager.add_push(payload);
            tracing::debug!(event = CHECKOUT_EVENT, step = step.number(), "UA checkout step pushed");
        }
    }
}
