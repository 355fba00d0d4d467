//! Checkout step interception.
//!
//! The web layer reports each controller it is about to run as a
//! [`ControllerSignal`]. Only order-controller methods on the main request can
//! be checkout steps; everything else (sub-requests rendering fragments,
//! closures, other controllers) is ignored without logging, since tracking
//! must neither double-fire nor interfere with the request.

use std::sync::Arc;

use axum::http::request::Parts;

use crate::context::CartContext;
use crate::resolver::CheckoutStepResolver;
use crate::tracker::StepTracker;

/// The controller type a handler method belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerKind {
    /// The order (cart and checkout) controller.
    Order,
    /// Any other controller, by name.
    Other(String),
}

/// How the resolved handler is addressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerHandle {
    /// A named method on a controller.
    Method {
        controller: ControllerKind,
        method: String,
    },
    /// An anonymous handler with no controller/method identity.
    Closure,
}

impl ControllerHandle {
    pub fn method(controller: ControllerKind, method: impl Into<String>) -> Self {
        Self::Method {
            controller,
            method: method.into(),
        }
    }

    /// The method name, if this handle can be a checkout step at all.
    #[must_use]
    pub fn checkout_action(&self) -> Option<&str> {
        match self {
            Self::Method {
                controller: ControllerKind::Order,
                method,
            } => Some(method.as_str()),
            Self::Method { .. } | Self::Closure => None,
        }
    }
}

/// "A controller is about to handle this request."
#[derive(Debug)]
pub struct ControllerSignal {
    /// `false` for sub-requests issued while rendering the main one.
    pub is_main_request: bool,
    pub controller: ControllerHandle,
    pub request: Parts,
}

/// Turns controller signals into tracked checkout steps.
pub struct StepInterceptor {
    resolver: Arc<dyn CheckoutStepResolver>,
    cart: Arc<dyn CartContext>,
    tracker: Arc<dyn StepTracker>,
}

impl StepInterceptor {
    pub fn new(
        resolver: Arc<dyn CheckoutStepResolver>,
        cart: Arc<dyn CartContext>,
        tracker: Arc<dyn StepTracker>,
    ) -> Self {
        Self {
            resolver,
            cart,
            tracker,
        }
    }

    pub fn on_controller_resolved(&self, signal: &ControllerSignal) {
        if !signal.is_main_request {
            return;
        }

        let Some(method) = signal.controller.checkout_action() else {
            return;
        };

        let Some(step) = self.resolver.resolve(method, &signal.request) else {
            return;
        };

        self.tracker.add_step(&self.cart.cart(), step);
    }
}

impl std::fmt::Debug for StepInterceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepInterceptor").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use axum::http::Request;
    use gtm_checkout_core::{CheckoutStep, Order, OrderId};

    use super::*;
    use crate::test_support::context;

    #[derive(Default)]
    struct RecordingTracker {
        calls: Mutex<Vec<(OrderId, CheckoutStep)>>,
    }

    impl RecordingTracker {
        fn calls(&self) -> Vec<(OrderId, CheckoutStep)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl StepTracker for RecordingTracker {
        fn add_step(&self, order: &Order, step: CheckoutStep) {
            self.calls.lock().unwrap().push((order.id, step));
        }
    }

    fn resolve_by_method(method: &str, _request: &Parts) -> Option<CheckoutStep> {
        match method {
            "summary" => Some(CheckoutStep::Cart),
            "address" => Some(CheckoutStep::Address),
            "select_payment" => Some(CheckoutStep::Payment),
            _ => None,
        }
    }

    fn interceptor() -> (StepInterceptor, Arc<RecordingTracker>) {
        let tracker = Arc::new(RecordingTracker::default());
        let interceptor = StepInterceptor::new(
            Arc::new(resolve_by_method),
            Arc::new(context()),
            tracker.clone(),
        );
        (interceptor, tracker)
    }

    fn signal(is_main_request: bool, controller: ControllerHandle) -> ControllerSignal {
        let (request, ()) = Request::get("/checkout").body(()).unwrap().into_parts();
        ControllerSignal {
            is_main_request,
            controller,
            request,
        }
    }

    #[test]
    fn test_resolved_step_is_tracked_once_with_current_cart() {
        let (interceptor, tracker) = interceptor();
        interceptor.on_controller_resolved(&signal(
            true,
            ControllerHandle::method(ControllerKind::Order, "select_payment"),
        ));

        assert_eq!(
            tracker.calls(),
            vec![(context().cart.id, CheckoutStep::Payment)]
        );
    }

    #[test]
    fn test_sub_request_is_ignored() {
        let (interceptor, tracker) = interceptor();
        interceptor.on_controller_resolved(&signal(
            false,
            ControllerHandle::method(ControllerKind::Order, "summary"),
        ));
        assert!(tracker.calls().is_empty());
    }

    #[test]
    fn test_closure_is_ignored() {
        let (interceptor, tracker) = interceptor();
        interceptor.on_controller_resolved(&signal(true, ControllerHandle::Closure));
        assert!(tracker.calls().is_empty());
    }

    #[test]
    fn test_other_controller_is_ignored() {
        let (interceptor, tracker) = interceptor();
        interceptor.on_controller_resolved(&signal(
            true,
            ControllerHandle::method(ControllerKind::Other("ProductController".to_string()), "summary"),
        ));
        assert!(tracker.calls().is_empty());
    }

    #[test]
    fn test_unresolved_method_is_ignored() {
        let (interceptor, tracker) = interceptor();
        interceptor.on_controller_resolved(&signal(
            true,
            ControllerHandle::method(ControllerKind::Order, "remove_item"),
        ));
        assert!(tracker.calls().is_empty());
    }

    #[test]
    fn test_checkout_action() {
        assert_eq!(
            ControllerHandle::method(ControllerKind::Order, "summary").checkout_action(),
            Some("summary")
        );
        assert_eq!(ControllerHandle::Closure.checkout_action(), None);
        assert_eq!(
            ControllerHandle::method(ControllerKind::Other("x".to_string()), "summary")
                .checkout_action(),
            None
        );
    }
}
