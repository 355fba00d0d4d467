//! GA4 checkout funnel events.
//!
//! GA4 reports progress through the checkout as the step the shopper has
//! just moved past:
//!
//! | Step     | Event               | Extra field     |
//! |----------|---------------------|-----------------|
//! | Cart     | `view_cart`         |                 |
//! | Address  | `begin_checkout`    |                 |
//! | Payment  | `add_shipping_info` | `shipping_tier` |
//! | Confirm  | `add_payment_info`  | `payment_type`  |
//!
//! The shipping step itself has no event. Each event is preceded by an
//! `{ecommerce: null}` push so fields from an earlier ecommerce object do not
//! carry over into the next one.
//!
//! See <https://developers.google.com/analytics/devguides/collection/ga4/ecommerce?client_type=gtm>

use std::sync::Arc;

use gtm_checkout_core::{CheckoutStep, Order};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;

use super::{StepEmitter, to_payload};
use crate::context::CurrencyContext;
use crate::product::{Ga4Item, ProductMapper};
use crate::tag_manager::TagManager;

const NAME_SEPARATOR: &str = ", ";

/// Order-derived field attached to some GA4 events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraField {
    /// Selected shipping method names.
    ShippingTier,
    /// Selected payment method names.
    PaymentType,
}

impl ExtraField {
    /// Key of the field inside the `ecommerce` object.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ShippingTier => "shipping_tier",
            Self::PaymentType => "payment_type",
        }
    }

    /// Method names joined with `", "`; empty when the order has none.
    #[must_use]
    pub fn value(self, order: &Order) -> String {
        let names: Vec<&str> = match self {
            Self::ShippingTier => order.shipping_method_names().collect(),
            Self::PaymentType => order.payment_method_names().collect(),
        };
        names.join(NAME_SEPARATOR)
    }
}

/// A row of the step to event table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ga4StepEvent {
    pub step: CheckoutStep,
    pub event: &'static str,
    pub extra: Option<ExtraField>,
}

/// Steps that produce a GA4 event. Steps not listed are not reported.
pub static GA4_STEP_EVENTS: [Ga4StepEvent; 4] = [
    Ga4StepEvent {
        step: CheckoutStep::Cart,
        event: "view_cart",
        extra: None,
    },
    Ga4StepEvent {
        step: CheckoutStep::Address,
        event: "begin_checkout",
        extra: None,
    },
    Ga4StepEvent {
        step: CheckoutStep::Payment,
        event: "add_shipping_info",
        extra: Some(ExtraField::ShippingTier),
    },
    Ga4StepEvent {
        step: CheckoutStep::Confirm,
        event: "add_payment_info",
        extra: Some(ExtraField::PaymentType),
    },
];

/// Look up the GA4 event for a step.
#[must_use]
pub fn event_for(step: CheckoutStep) -> Option<&'static Ga4StepEvent> {
    GA4_STEP_EVENTS.iter().find(|row| row.step == step)
}

#[derive(Debug, Serialize)]
struct Ga4Push<'a> {
    event: &'a str,
    ecommerce: Ga4Ecommerce,
}

#[derive(Debug, Serialize)]
struct Ga4Ecommerce {
    currency: String,
    #[serde(with = "rust_decimal::serde::float")]
    value: Decimal,
    items: Vec<Ga4Item>,
    #[serde(skip_serializing_if = "Option::is_none")]
    coupon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shipping_tier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payment_type: Option<String>,
}

impl Ga4Ecommerce {
    fn set_extra(&mut self, field: ExtraField, value: String) {
        match field {
            ExtraField::ShippingTier => self.shipping_tier = Some(value),
            ExtraField::PaymentType => self.payment_type = Some(value),
        }
    }
}

/// Pushes the GA4 funnel event mapped to a step, after an ecommerce reset.
#[derive(Clone)]
pub struct Ga4CheckoutEmitter {
    products: ProductMapper,
    currency: Arc<dyn CurrencyContext>,
}

impl Ga4CheckoutEmitter {
    pub fn new(products: ProductMapper, currency: Arc<dyn CurrencyContext>) -> Self {
        Self { products, currency }
    }

    fn ecommerce(&self, order: &Order, extra: Option<ExtraField>) -> Ga4Ecommerce {
        let mut ecommerce = Ga4Ecommerce {
            currency: self.currency.currency_code().into(),
            value: order.total.to_major(),
            items: order
                .items
                .iter()
                .enumerate()
                .map(|(index, item)| self.products.to_ga4_product(item, index))
                .collect(),
            coupon: order.coupon_code().map(String::from),
            shipping_tier: None,
            payment_type: None,
        };

        if let Some(field) = extra {
            ecommerce.set_extra(field, field.value(order));
        }

        ecommerce
    }
}

impl StepEmitter for Ga4CheckoutEmitter {
    fn emit(&self, order: &Order, step: CheckoutStep, tag_manager: &dyn TagManager) {
        let Some(row) = event_for(step) else {
            return;
        };

        let push = Ga4Push {
            event: row.event,
            ecommerce: self.ecommerce(order, row.extra),
        };
        let Some(payload) = to_payload(row.event, &push) else {
            return;
        };

        tag_manager.add_push(json!({ "ecommerce": null }));
        tag_manager.add_push(payload);
        tracing::debug!(event = row.event, step = step.number(), "GA4 checkout event pushed");
    }
}

impl std::fmt::Debug for Ga4CheckoutEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ga4CheckoutEmitter")
            .field("products", &self.products)
            .finish_non_exhaustive()
    }
}
