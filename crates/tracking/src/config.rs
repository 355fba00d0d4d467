//! Tracking configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `GTM_UA_ENABLED` - Emit Universal Analytics checkout events (default: false)
//! - `GTM_GA4_ENABLED` - Emit GA4 checkout events (default: true)
//! - `GTM_PRODUCT_IDENTIFIER` - Product identifier reported to analytics, `code` or `id` (default: code)
//! - `GTM_DATA_LAYER_NAME` - JavaScript data layer variable (default: dataLayer)
//!
//! Booleans accept `1`/`0`, `true`/`false`, `yes`/`no` and `on`/`off`,
//! case-insensitively.

use std::str::FromStr;

use thiserror::Error;

const UA_ENABLED_VAR: &str = "GTM_UA_ENABLED";
const GA4_ENABLED_VAR: &str = "GTM_GA4_ENABLED";
const PRODUCT_IDENTIFIER_VAR: &str = "GTM_PRODUCT_IDENTIFIER";
const DATA_LAYER_NAME_VAR: &str = "GTM_DATA_LAYER_NAME";

/// Default JavaScript variable Google Tag Manager reads pushes from.
pub const DEFAULT_DATA_LAYER_NAME: &str = "dataLayer";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Which product attribute is reported as the analytics product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductIdentifierSource {
    /// The merchant-facing product code.
    #[default]
    Code,
    /// The numeric product id.
    Id,
}

impl FromStr for ProductIdentifierSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "code" => Ok(Self::Code),
            "id" => Ok(Self::Id),
            other => Err(format!("expected `code` or `id`, got `{other}`")),
        }
    }
}

/// Checkout tracking configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingConfig {
    /// Push Universal Analytics `checkout` events
    pub ua_enabled: bool,
    /// Push GA4 checkout funnel events
    pub ga4_enabled: bool,
    /// Product attribute used as the analytics identifier
    pub product_identifier: ProductIdentifierSource,
    /// JavaScript variable the data layer is rendered into
    pub data_layer_name: String,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            ua_enabled: false,
            ga4_enabled: true,
            product_identifier: ProductIdentifierSource::default(),
            data_layer_name: DEFAULT_DATA_LAYER_NAME.to_string(),
        }
    }
}

impl TrackingConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        tracing::info!(
            ua_enabled = config.ua_enabled,
            ga4_enabled = config.ga4_enabled,
            product_identifier = ?config.product_identifier,
            "Tracking configuration loaded"
        );
        Ok(config)
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let ua_enabled = lookup(UA_ENABLED_VAR)
            .map(|v| parse_bool(UA_ENABLED_VAR, &v))
            .transpose()?
            .unwrap_or(defaults.ua_enabled);
        let ga4_enabled = lookup(GA4_ENABLED_VAR)
            .map(|v| parse_bool(GA4_ENABLED_VAR, &v))
            .transpose()?
            .unwrap_or(defaults.ga4_enabled);
        let product_identifier = lookup(PRODUCT_IDENTIFIER_VAR)
            .map(|v| {
                v.parse::<ProductIdentifierSource>()
                    .map_err(|e| ConfigError::InvalidEnvVar(PRODUCT_IDENTIFIER_VAR.to_string(), e))
            })
            .transpose()?
            .unwrap_or(defaults.product_identifier);
        let data_layer_name = lookup(DATA_LAYER_NAME_VAR)
            .map(|v| validate_data_layer_name(DATA_LAYER_NAME_VAR, v))
            .transpose()?
            .unwrap_or(defaults.data_layer_name);

        Ok(Self {
            ua_enabled,
            ga4_enabled,
            product_identifier,
            data_layer_name,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a boolean flag value.
fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got `{other}`"),
        )),
    }
}

/// Validate that a data layer name is a plain JavaScript identifier.
///
/// The name is interpolated into a `<script>` block, so anything beyond
/// `[A-Za-z_$][A-Za-z0-9_$]*` is rejected.
fn validate_data_layer_name(key: &str, value: String) -> Result<String, ConfigError> {
    let mut chars = value.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$');
    let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');

    if valid_start && valid_rest {
        Ok(value)
    } else {
        Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("`{value}` is not a valid JavaScript identifier"),
        ))
    }
}
