//! GTM Checkout Core - Shared checkout domain types.
//!
//! This crate provides the read-only view of a checkout that the tracking
//! crate builds analytics payloads from:
//! - `tracking` - Checkout step detection and data layer emission
//! - `cli` - Preview tool that runs the tracker against order fixtures
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no data layer, no HTTP.
//! Orders are owned by the order-management system; these types only mirror
//! what the tracker reads from them.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, amounts, currency codes, checkout steps and the order aggregate

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
