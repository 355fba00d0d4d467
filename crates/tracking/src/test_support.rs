//! Fixtures shared by unit tests.

use gtm_checkout_core::{
    Amount, Channel, CurrencyCode, Order, OrderId, OrderItem, OrderItemId, Payment, PaymentMethod,
    Product, ProductId, ProductVariant, PromotionCoupon, Shipment, ShippingMethod, VariantId,
};

use crate::context::StaticContext;

pub fn context() -> StaticContext {
    StaticContext {
        cart: order(),
        channel: Channel {
            code: "web".to_string(),
            name: "Web Store".to_string(),
        },
        currency: CurrencyCode::parse("EUR").unwrap_or_default(),
    }
}

pub fn line_item(product_id: i64, code: &str, name: &str, unit_price: i64, quantity: u32) -> OrderItem {
    OrderItem {
        id: OrderItemId::new(product_id * 10),
        variant: ProductVariant {
            id: VariantId::new(product_id * 100),
            code: format!("{code}-VARIANT"),
            name: None,
            product: Product {
                id: ProductId::new(product_id),
                code: code.to_string(),
                name: name.to_string(),
                main_taxon: None,
            },
        },
        quantity,
        unit_price: Amount::from_minor(unit_price),
    }
}

/// Two-line order totalling 19.99 with no shipments, payments or coupon.
pub fn order() -> Order {
    Order {
        items: vec![
            line_item(1, "MUG", "Coffee Mug", 1250, 1),
            line_item(2, "BEANS", "Coffee Beans", 749, 1),
        ],
        total: Amount::from_minor(1999),
        ..Order::new(OrderId::new(100))
    }
}

pub fn shipment(name: &str) -> Shipment {
    Shipment {
        method: Some(ShippingMethod {
            code: name.to_lowercase(),
            name: Some(name.to_string()),
        }),
    }
}

pub fn payment(name: &str) -> Payment {
    Payment {
        method: Some(PaymentMethod {
            code: name.to_lowercase().replace(' ', "_"),
            name: Some(name.to_string()),
        }),
    }
}

pub fn coupon(code: &str) -> Option<PromotionCoupon> {
    Some(PromotionCoupon {
        code: code.to_string(),
    })
}
