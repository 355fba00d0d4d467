//! Checkout steps.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when converting a number into a [`CheckoutStep`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepError {
    /// The number is not one of the five checkout steps.
    #[error("checkout step must be between 1 and 5 (got {0})")]
    OutOfRange(i64),
}

/// A stage of the checkout flow.
///
/// Steps are totally ordered: `Cart < Address < Shipping < Payment < Confirm`.
/// The discriminant is the step number reported to analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub enum CheckoutStep {
    Cart = 1,
    Address = 2,
    Shipping = 3,
    Payment = 4,
    Confirm = 5,
}

impl CheckoutStep {
    /// All steps in checkout order.
    pub const ALL: [Self; 5] = [
        Self::Cart,
        Self::Address,
        Self::Shipping,
        Self::Payment,
        Self::Confirm,
    ];

    /// The step number (1-5).
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Lowercase name used in logs and CLI output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cart => "cart",
            Self::Address => "address",
            Self::Shipping => "shipping",
            Self::Payment => "payment",
            Self::Confirm => "confirm",
        }
    }
}

impl fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i64> for CheckoutStep {
    type Error = StepError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Cart),
            2 => Ok(Self::Address),
            3 => Ok(Self::Shipping),
            4 => Ok(Self::Payment),
            5 => Ok(Self::Confirm),
            other => Err(StepError::OutOfRange(other)),
        }
    }
}

impl TryFrom<u8> for CheckoutStep {
    type Error = StepError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl From<CheckoutStep> for u8 {
    fn from(step: CheckoutStep) -> Self {
        step.number()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_match_discriminants() {
        let numbers: Vec<u8> = CheckoutStep::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(CheckoutStep::try_from(1_i64).unwrap(), CheckoutStep::Cart);
        assert_eq!(CheckoutStep::try_from(5_u8).unwrap(), CheckoutStep::Confirm);
    }

    #[test]
    fn test_try_from_out_of_range() {
        assert_eq!(
            CheckoutStep::try_from(0_i64),
            Err(StepError::OutOfRange(0))
        );
        assert_eq!(
            CheckoutStep::try_from(6_i64),
            Err(StepError::OutOfRange(6))
        );
        assert_eq!(
            CheckoutStep::try_from(-1_i64),
            Err(StepError::OutOfRange(-1))
        );
    }

    #[test]
    fn test_total_order() {
        assert!(CheckoutStep::Cart < CheckoutStep::Address);
        assert!(CheckoutStep::Address < CheckoutStep::Shipping);
        assert!(CheckoutStep::Shipping < CheckoutStep::Payment);
        assert!(CheckoutStep::Payment < CheckoutStep::Confirm);
    }

    #[test]
    fn test_serde_as_number() {
        assert_eq!(serde_json::to_string(&CheckoutStep::Payment).unwrap(), "4");
        let step: CheckoutStep = serde_json::from_str("2").unwrap();
        assert_eq!(step, CheckoutStep::Address);
        assert!(serde_json::from_str::<CheckoutStep>("9").is_err());
    }
}
