//! Checkout step resolution.
//!
//! Deciding which step a request belongs to depends on the application's
//! routes, so it is left to the application. Any closure with the right
//! signature can act as a resolver.

use axum::http::request::Parts;
use gtm_checkout_core::CheckoutStep;

/// Classifies a checkout controller action into a step.
pub trait CheckoutStepResolver: Send + Sync {
    /// Returns `None` when the action is not a trackable checkout step.
    fn resolve(&self, method: &str, request: &Parts) -> Option<CheckoutStep>;
}

impl<F> CheckoutStepResolver for F
where
    F: Fn(&str, &Parts) -> Option<CheckoutStep> + Send + Sync,
{
    fn resolve(&self, method: &str, request: &Parts) -> Option<CheckoutStep> {
        self(method, request)
    }
}
