//! Data layer preview for an order fixture.
//!
//! # Usage
//!
//! ```bash
//! gtm-checkout preview --order order.json --step 5 --format script
//! ```
//!
//! # Fixture Format
//!
//! ```json
//! {
//!   "id": 1,
//!   "total": 1999,
//!   "items": [{
//!     "id": 10,
//!     "quantity": 1,
//!     "unit_price": 1999,
//!     "variant": {
//!       "id": 100, "code": "MUG-BLUE", "name": "Blue",
//!       "product": {"id": 1, "code": "MUG", "name": "Coffee Mug", "main_taxon": "Kitchen"}
//!     }
//!   }],
//!   "shipments": [{"method": {"code": "ups", "name": "UPS"}}],
//!   "payments": [{"method": {"code": "card", "name": "Credit Card"}}],
//!   "promotion_coupon": {"code": "SAVE10"}
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::ValueEnum;
use gtm_checkout::{
    CheckoutStepTracker, ConfigError, DataLayer, ProductMapper, StaticContext, StepTracker,
    TrackingConfig,
};
use gtm_checkout_core::{Channel, CheckoutStep, CurrencyCode, CurrencyCodeError, Order};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while previewing.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// Tracking configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The order fixture could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The order fixture is not valid JSON.
    #[error("Invalid JSON order: {0}")]
    Json(#[from] serde_json::Error),

    /// The order fixture is not valid YAML.
    #[error("Invalid YAML order: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The currency option is not a currency code.
    #[error("Invalid currency: {0}")]
    Currency(#[from] CurrencyCodeError),
}

/// How pushes are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array of pushes
    Json,
    /// JavaScript data layer snippet as it would appear on the page
    Script,
}

/// Options for [`run`].
#[derive(Debug)]
pub struct PreviewOptions {
    pub order: PathBuf,
    pub step: CheckoutStep,
    pub ua: Option<bool>,
    pub ga4: Option<bool>,
    pub currency: String,
    pub channel_code: String,
    pub channel_name: String,
    pub format: OutputFormat,
}

/// Run the tracker for one step and print the queued pushes.
///
/// # Errors
///
/// Returns an error if configuration, the fixture, or the currency is invalid.
pub async fn run(options: &PreviewOptions) -> Result<(), PreviewError> {
    let mut config = TrackingConfig::from_env()?;
    if let Some(ua) = options.ua {
        config.ua_enabled = ua;
    }
    if let Some(ga4) = options.ga4 {
        config.ga4_enabled = ga4;
    }

    let content = tokio::fs::read_to_string(&options.order)
        .await
        .map_err(|source| PreviewError::Io {
            path: options.order.clone(),
            source,
        })?;
    let order = parse_order(&options.order, &content)?;
    info!(
        path = %options.order.display(),
        items = order.items.len(),
        step = %options.step,
        "Loaded order fixture"
    );

    let context = StaticContext {
        cart: order,
        channel: Channel {
            code: options.channel_code.clone(),
            name: options.channel_name.clone(),
        },
        currency: CurrencyCode::parse(&options.currency)?,
    };

    let layer = track(&config, context, options.step);
    let output = render(&layer, options.format, &config.data_layer_name)?;

    #[allow(clippy::print_stdout)]
    {
        println!("{output}");
    }

    Ok(())
}

/// Track `step` for the context's cart into a fresh data layer.
pub fn track(config: &TrackingConfig, context: StaticContext, step: CheckoutStep) -> Arc<DataLayer> {
    let context = Arc::new(context);
    let layer = Arc::new(DataLayer::new());
    let products = ProductMapper::new(config.product_identifier, context.clone(), context.clone());
    let tracker = CheckoutStepTracker::new(
        layer.clone(),
        Arc::new(config.clone()),
        products,
        context.clone(),
    );

    tracker.add_step(&context.cart, step);
    layer
}

/// Parse an order fixture, choosing the format by file extension.
///
/// # Errors
///
/// Returns an error if the content does not match the order schema.
pub fn parse_order(path: &Path, content: &str) -> Result<Order, PreviewError> {
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    if is_yaml {
        Ok(serde_yaml::from_str(content)?)
    } else {
        Ok(serde_json::from_str(content)?)
    }
}

/// Format the queued pushes for output.
///
/// # Errors
///
/// Returns an error if the pushes cannot be serialized.
pub fn render(layer: &DataLayer, format: OutputFormat, data_layer_name: &str) -> Result<String, PreviewError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&layer.pushes())?),
        OutputFormat::Script => Ok(layer.render_script(data_layer_name)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    const JSON_ORDER: &str = r#"{
        "id": 1,
        "total": 2500,
        "items": [{
            "id": 10,
            "quantity": 2,
            "unit_price": 1250,
            "variant": {
                "id": 100,
                "code": "MUG-BLUE",
                "product": {"id": 1, "code": "MUG", "name": "Coffee Mug"}
            }
        }],
        "shipments": [{"method": {"code": "ups", "name": "UPS"}}]
    }"#;

    const YAML_ORDER: &str = "
id: 2
total: 999
payments:
  - method:
      code: card
      name: Credit Card
promotion_coupon:
  code: SAVE10
";

    fn context(order: Order) -> StaticContext {
        StaticContext {
            cart: order,
            channel: Channel {
                code: "web".to_string(),
                name: "Web Store".to_string(),
            },
            currency: CurrencyCode::parse("USD").unwrap(),
        }
    }

    #[test]
    fn test_parse_json_order() {
        let order = parse_order(Path::new("order.json"), JSON_ORDER).unwrap();
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.total.minor(), 2500);
    }

    #[test]
    fn test_parse_yaml_order() {
        let order = parse_order(Path::new("order.YML"), YAML_ORDER).unwrap();
        assert_eq!(order.coupon_code(), Some("SAVE10"));
        assert_eq!(order.payment_method_names().collect::<Vec<_>>(), vec!["Credit Card"]);
    }

    #[test]
    fn test_parse_invalid_order() {
        let result = parse_order(Path::new("order.json"), "{\"id\": 1}");
        assert!(matches!(result, Err(PreviewError::Json(_))));
    }

    #[test]
    fn test_track_payment_step() {
        let config = TrackingConfig {
            ua_enabled: true,
            ..TrackingConfig::default()
        };
        let order = parse_order(Path::new("order.json"), JSON_ORDER).unwrap();

        let pushes = track(&config, context(order), CheckoutStep::Payment).pushes();
        assert_eq!(pushes.len(), 3);
        assert_eq!(pushes[0]["event"], "checkout");
        assert_eq!(pushes[2]["event"], "add_shipping_info");
        assert_eq!(pushes[2]["ecommerce"]["shipping_tier"], "UPS");
        assert_eq!(pushes[2]["ecommerce"]["value"], serde_json::json!(25.0));
    }

    #[test]
    fn test_render_formats() {
        let order = parse_order(Path::new("order.yaml"), YAML_ORDER).unwrap();
        let layer = track(&TrackingConfig::default(), context(order), CheckoutStep::Confirm);

        let json = render(&layer, OutputFormat::Json, "dataLayer").unwrap();
        assert!(json.contains("\"add_payment_info\""));

        let script = render(&layer, OutputFormat::Script, "dataLayer").unwrap();
        assert!(script.starts_with("window.dataLayer = window.dataLayer || [];"));
        assert_eq!(script.matches(".push(").count(), 2);
    }
}
