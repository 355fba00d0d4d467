//! Order aggregate as seen by checkout tracking.
//!
//! These mirror the subset of the order-management model that analytics
//! payloads are built from. Nested data that the order system may leave
//! unset (a shipment without a method, a method without a name) is kept
//! optional here rather than defaulted.

use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::id::{OrderId, OrderItemId, ProductId, VariantId};

// =============================================================================
// Catalog
// =============================================================================

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    /// Merchant-facing product code (SKU-like, unique per catalog).
    pub code: String,
    pub name: String,
    /// Name of the product's main taxon, if it has one.
    #[serde(default)]
    pub main_taxon: Option<String>,
}

/// A purchasable variant of a [`Product`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariant {
    pub id: VariantId,
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
    pub product: Product,
}

impl ProductVariant {
    /// Variant label for analytics: its name, or its code when unnamed.
    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.code)
    }
}

// =============================================================================
// Order
// =============================================================================

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub variant: ProductVariant,
    pub quantity: u32,
    /// Price of a single unit, in minor units.
    pub unit_price: Amount,
}

impl OrderItem {
    /// The product this line refers to.
    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.variant.product
    }
}

/// A shipping method selected for a shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingMethod {
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// A shipment of (part of) an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    #[serde(default)]
    pub method: Option<ShippingMethod>,
}

/// A payment method selected for a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// A payment against an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(default)]
    pub method: Option<PaymentMethod>,
}

/// A promotion coupon applied to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionCoupon {
    pub code: String,
}

/// A cart or placed order.
///
/// The currency is not part of the order; it comes from the currency
/// context active for the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub shipments: Vec<Shipment>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    /// Order total, in minor units.
    pub total: Amount,
    #[serde(default)]
    pub promotion_coupon: Option<PromotionCoupon>,
}

impl Order {
    /// Create an empty order.
    #[must_use]
    pub const fn new(id: OrderId) -> Self {
        Self {
            id,
            items: Vec::new(),
            shipments: Vec::new(),
            payments: Vec::new(),
            total: Amount::ZERO,
            promotion_coupon: None,
        }
    }

    /// Code of the applied promotion coupon, if any.
    #[must_use]
    pub fn coupon_code(&self) -> Option<&str> {
        self.promotion_coupon.as_ref().map(|c| c.code.as_str())
    }

    /// Shipping method names in shipment order.
    ///
    /// A shipment without a method, or a method without a name, yields `""`.
    pub fn shipping_method_names(&self) -> impl Iterator<Item = &str> {
        self.shipments.iter().map(|shipment| {
            shipment
                .method
                .as_ref()
                .and_then(|m| m.name.as_deref())
                .unwrap_or_default()
        })
    }

    /// Payment method names in payment order.
    ///
    /// A payment without a method, or a method without a name, yields `""`.
    pub fn payment_method_names(&self) -> impl Iterator<Item = &str> {
        self.payments.iter().map(|payment| {
            payment
                .method
                .as_ref()
                .and_then(|m| m.name.as_deref())
                .unwrap_or_default()
        })
    }
}

// =============================================================================
// Channel
// =============================================================================

/// The sales channel a request is served from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub code: String,
    pub name: String,
}
