//! Entity ids.
//!
//! Orders, lines, products and variants are all keyed by `i64` in the order
//! system. Each gets its own type so a product id cannot be passed where a
//! variant id is expected. `Display` prints the bare number, which is what
//! analytics receives when products are identified by id.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            #[must_use]
            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

entity_id!(
    /// A cart or placed order.
    OrderId
);
entity_id!(
    /// One line of an order.
    OrderItemId
);
entity_id!(
    /// A catalog product.
    ProductId
);
entity_id!(
    /// A purchasable product variant.
    VariantId
);
