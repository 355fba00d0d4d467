//! Step to event table.
//!
//! ```bash
//! $ gtm-checkout steps
//! 1  cart      UA: checkout  GA4: view_cart
//! 2  address   UA: checkout  GA4: begin_checkout
//! 3  shipping  UA: checkout  GA4: -
//! 4  payment   UA: checkout  GA4: add_shipping_info (shipping_tier)
//! 5  confirm   UA: -         GA4: add_payment_info (payment_type)
//! ```

use gtm_checkout::tracker::{ga4, ua};
use gtm_checkout_core::CheckoutStep;

/// Describe what each implementation pushes for `step`.
#[must_use]
pub fn describe(step: CheckoutStep) -> String {
    let ua_event = if ua::tracks_step(step) { "checkout" } else { "-" };
    let ga4_event = ga4::event_for(step).map_or_else(
        || "-".to_string(),
        |row| match row.extra {
            Some(field) => format!("{} ({})", row.event, field.key()),
            None => row.event.to_string(),
        },
    );

    format!(
        "{}  {:<8}  UA: {:<8}  GA4: {}",
        step.number(),
        step.as_str(),
        ua_event,
        ga4_event
    )
}

/// Print the table for all steps.
pub fn print() {
    #[allow(clippy::print_stdout)]
    {
        for step in CheckoutStep::ALL {
            println!("{}", describe(step));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        assert_eq!(
            describe(CheckoutStep::Cart),
            "1  cart      UA: checkout  GA4: view_cart"
        );
        assert_eq!(
            describe(CheckoutStep::Shipping),
            "3  shipping  UA: checkout  GA4: -"
        );
        assert_eq!(
            describe(CheckoutStep::Confirm),
            "5  confirm   UA: -         GA4: add_payment_info (payment_type)"
        );
    }
}
