//! Integration tests for GTM checkout tracking.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p gtm-checkout-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `checkout_flow` - Controller signals through the interceptor into the data layer
//! - `data_layer` - Rendering queued pushes for the page
//!
//! This library holds the storefront-shaped fixtures the tests share: a
//! route-based step resolver, a cart with shipments and payments, and a
//! [`Harness`] wiring the interceptor, tracker and data layer together.

use std::sync::Arc;

use axum::http::request::Parts;
use axum::http::{Method, Request};
use gtm_checkout::{
    CheckoutStepTracker, ControllerHandle, ControllerKind, ControllerSignal, DataLayer,
    ProductMapper, RuntimeFlags, StaticContext, StepInterceptor, TrackingConfig,
};
use gtm_checkout_core::{
    Amount, Channel, CheckoutStep, CurrencyCode, Order, OrderId, OrderItem, OrderItemId, Payment,
    PaymentMethod, Product, ProductId, ProductVariant, PromotionCoupon, Shipment, ShippingMethod,
    VariantId,
};

/// Resolves order controller methods the way a storefront's routes would.
#[must_use]
pub fn resolve_storefront_step(method: &str, request: &Parts) -> Option<CheckoutStep> {
    match (method, request.uri.path()) {
        ("summary", "/cart") => Some(CheckoutStep::Cart),
        ("address", "/checkout/address") => Some(CheckoutStep::Address),
        ("select_shipping", "/checkout/select-shipping") => Some(CheckoutStep::Shipping),
        ("select_payment", "/checkout/select-payment") => Some(CheckoutStep::Payment),
        ("complete", "/checkout/complete") if request.method == Method::GET => {
            Some(CheckoutStep::Confirm)
        }
        _ => None,
    }
}

fn item(id: i64, code: &str, name: &str, taxon: Option<&str>, unit_price: i64, quantity: u32) -> OrderItem {
    OrderItem {
        id: OrderItemId::new(id),
        variant: ProductVariant {
            id: VariantId::new(id),
            code: format!("{code}-STD"),
            name: Some("Standard".to_string()),
            product: Product {
                id: ProductId::new(id),
                code: code.to_string(),
                name: name.to_string(),
                main_taxon: taxon.map(String::from),
            },
        },
        quantity,
        unit_price: Amount::from_minor(unit_price),
    }
}

fn shipping(name: &str) -> Shipment {
    Shipment {
        method: Some(ShippingMethod {
            code: name.to_lowercase(),
            name: Some(name.to_string()),
        }),
    }
}

/// A three-line cart totalling 64.97 with two shipments, one payment and a coupon.
#[must_use]
pub fn storefront_cart() -> Order {
    Order {
        id: OrderId::new(5001),
        items: vec![
            item(1, "GRINDER", "Burr Grinder", Some("Equipment"), 4999, 1),
            item(2, "BEANS", "House Blend", Some("Coffee"), 799, 2),
            item(3, "FILTERS", "Paper Filters", None, 400, 1),
        ],
        shipments: vec![shipping("Standard"), shipping("Express")],
        payments: vec![Payment {
            method: Some(PaymentMethod {
                code: "card".to_string(),
                name: Some("Credit Card".to_string()),
            }),
        }],
        total: Amount::from_minor(6497),
        promotion_coupon: Some(PromotionCoupon {
            code: "SAVE10".to_string(),
        }),
    }
}

/// Build the head of a request.
///
/// # Panics
///
/// Panics if `path` is not a valid URI.
#[must_use]
pub fn request(method: Method, path: &str) -> Parts {
    #[allow(clippy::unwrap_used)]
    let request = Request::builder()
        .method(method)
        .uri(path)
        .body(())
        .unwrap();
    request.into_parts().0
}

/// A controller signal for an order controller method on the main request.
#[must_use]
pub fn order_action(method: &str, path: &str) -> ControllerSignal {
    ControllerSignal {
        is_main_request: true,
        controller: ControllerHandle::method(ControllerKind::Order, method),
        request: request(Method::GET, path),
    }
}

/// Interceptor, tracker and data layer wired together over a fixed context.
pub struct Harness {
    pub interceptor: StepInterceptor,
    pub flags: Arc<RuntimeFlags>,
    pub data_layer: Arc<DataLayer>,
    pub context: Arc<StaticContext>,
}

impl Harness {
    /// Wire a harness for `cart` in EUR on the "Coffee Shop" channel.
    ///
    /// # Panics
    ///
    /// Never in practice: the fixed currency code is valid.
    #[must_use]
    pub fn new(config: &TrackingConfig, cart: Order) -> Self {
        #[allow(clippy::unwrap_used)]
        let currency = CurrencyCode::parse("EUR").unwrap();
        let context = Arc::new(StaticContext {
            cart,
            channel: Channel {
                code: "coffee".to_string(),
                name: "Coffee Shop".to_string(),
            },
            currency,
        });
        let flags = Arc::new(RuntimeFlags::from_config(config));
        let data_layer = Arc::new(DataLayer::new());

        let products = ProductMapper::new(config.product_identifier, context.clone(), context.clone());
        let tracker = Arc::new(CheckoutStepTracker::new(
            data_layer.clone(),
            flags.clone(),
            products,
            context.clone(),
        ));
        let interceptor = StepInterceptor::new(
            Arc::new(resolve_storefront_step),
            context.clone(),
            tracker,
        );

        Self {
            interceptor,
            flags,
            data_layer,
            context,
        }
    }
}
