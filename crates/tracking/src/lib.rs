//! GTM checkout step tracking.
//!
//! Detects which checkout step a shopper is on and pushes Universal
//! Analytics and GA4 enhanced-ecommerce events to a tag manager data layer.
//!
//! # Flow
//!
//! ```text
//! controller signal -> StepInterceptor -> CheckoutStepResolver
//!                                      -> CheckoutStepTracker -> UA / GA4 emitters -> TagManager
//! ```
//!
//! The web framework, the order system and the tag manager transport are
//! collaborators behind the traits in [`context`], [`resolver`] and
//! [`tag_manager`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod context;
pub mod flags;
pub mod interceptor;
pub mod product;
pub mod resolver;
pub mod tag_manager;
pub mod tracker;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{ConfigError, ProductIdentifierSource, TrackingConfig};
pub use context::{CartContext, ChannelContext, CurrencyContext, StaticContext};
pub use flags::{ImplementationFlags, RuntimeFlags};
pub use interceptor::{ControllerHandle, ControllerKind, ControllerSignal, StepInterceptor};
pub use product::ProductMapper;
pub use resolver::CheckoutStepResolver;
pub use tag_manager::{DataLayer, TagManager};
pub use tracker::{CheckoutStepTracker, StepEmitter, StepTracker};
