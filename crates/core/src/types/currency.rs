//! ISO 4217 currency code type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`CurrencyCode`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyCodeError {
    /// The input is not exactly three characters long.
    #[error("currency code must be exactly 3 characters (got {len})")]
    InvalidLength {
        /// Length of the rejected input.
        len: usize,
    },
    /// The input contains something other than ASCII letters.
    #[error("currency code must contain only ASCII letters")]
    InvalidCharacter,
}

/// A three-letter ISO 4217 currency code, stored uppercase.
///
/// Only the shape is validated; whether the code is an active currency is
/// the concern of the currency context that hands it out.
///
/// ## Examples
///
/// ```
/// use gtm_checkout_core::CurrencyCode;
///
/// assert_eq!(CurrencyCode::parse("eur").unwrap().as_str(), "EUR");
/// assert!(CurrencyCode::parse("EURO").is_err());
/// assert!(CurrencyCode::parse("E1R").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Required length of a currency code.
    pub const LENGTH: usize = 3;

    /// Parse a `CurrencyCode`, normalising to uppercase.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not three ASCII letters.
    pub fn parse(s: &str) -> Result<Self, CurrencyCodeError> {
        if s.len() != Self::LENGTH {
            return Err(CurrencyCodeError::InvalidLength { len: s.len() });
        }

        if !s.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(CurrencyCodeError::InvalidCharacter);
        }

        Ok(Self(s.to_ascii_uppercase()))
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self("USD".to_owned())
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = CurrencyCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = CurrencyCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_codes() {
        assert_eq!(CurrencyCode::parse("USD").unwrap().as_str(), "USD");
        assert_eq!(CurrencyCode::parse("gbp").unwrap().as_str(), "GBP");
    }

    #[test]
    fn test_parse_wrong_length() {
        assert_eq!(
            CurrencyCode::parse(""),
            Err(CurrencyCodeError::InvalidLength { len: 0 })
        );
        assert!(matches!(
            CurrencyCode::parse("EURO"),
            Err(CurrencyCodeError::InvalidLength { len: 4 })
        ));
    }

    #[test]
    fn test_parse_non_letters() {
        assert_eq!(
            CurrencyCode::parse("U$D"),
            Err(CurrencyCodeError::InvalidCharacter)
        );
    }

    #[test]
    fn test_serde_validates() {
        let code: CurrencyCode = serde_json::from_str("\"cad\"").unwrap();
        assert_eq!(code.as_str(), "CAD");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"CAD\"");
        assert!(serde_json::from_str::<CurrencyCode>("\"dollars\"").is_err());
    }

    #[test]
    fn test_default_is_usd() {
        assert_eq!(CurrencyCode::default().to_string(), "USD");
    }
}
