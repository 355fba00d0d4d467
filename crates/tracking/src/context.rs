//! Request context collaborators.
//!
//! The order system, channel resolution and currency selection live outside
//! this crate. Tracking only reads from them through these traits.

use gtm_checkout_core::{Channel, CurrencyCode, Order};

/// Provides the shopper's current cart.
pub trait CartContext: Send + Sync {
    fn cart(&self) -> Order;
}

/// Provides the sales channel serving the request.
pub trait ChannelContext: Send + Sync {
    fn channel(&self) -> Channel;
}

/// Provides the active currency for the request.
pub trait CurrencyContext: Send + Sync {
    fn currency_code(&self) -> CurrencyCode;
}

/// Context backed by fixed values.
///
/// Used by the preview CLI, and useful anywhere the cart, channel and
/// currency are already resolved before tracking runs.
#[derive(Debug, Clone)]
pub struct StaticContext {
    pub cart: Order,
    pub channel: Channel,
    pub currency: CurrencyCode,
}

impl CartContext for StaticContext {
    fn cart(&self) -> Order {
        self.cart.clone()
    }
}

impl ChannelContext for StaticContext {
    fn channel(&self) -> Channel {
        self.channel.clone()
    }
}

impl CurrencyContext for StaticContext {
    fn currency_code(&self) -> CurrencyCode {
        self.currency.clone()
    }
}
