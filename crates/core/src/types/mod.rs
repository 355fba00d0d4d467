//! Core types for checkout tracking.
//!
//! This module provides type-safe wrappers for the checkout domain.

pub mod amount;
pub mod currency;
pub mod id;
pub mod order;
pub mod step;

pub use amount::Amount;
pub use currency::{CurrencyCode, CurrencyCodeError};
pub use id::*;
pub use order::*;
pub use step::{CheckoutStep, StepError};
