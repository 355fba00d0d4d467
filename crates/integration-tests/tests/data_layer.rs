//! Integration tests for rendering the data layer into a page.

use gtm_checkout::TrackingConfig;
use gtm_checkout_integration_tests::{Harness, order_action, storefront_cart};

fn tracked_harness(config: &TrackingConfig) -> Harness {
    let harness = Harness::new(config, storefront_cart());
    harness
        .interceptor
        .on_controller_resolved(&order_action("select_payment", "/checkout/select-payment"));
    harness
}

#[test]
fn test_render_script_uses_configured_name() {
    let config = TrackingConfig::from_lookup(|key| match key {
        "GTM_UA_ENABLED" => Some("true".to_string()),
        "GTM_DATA_LAYER_NAME" => Some("shopLayer".to_string()),
        _ => None,
    })
    .expect("valid config");
    let harness = tracked_harness(&config);

    let script = harness.data_layer.render_script(&config.data_layer_name);
    let lines: Vec<_> = script.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "window.shopLayer = window.shopLayer || [];");
    assert!(lines[1].starts_with("window.shopLayer.push({"));
    assert!(lines[1].contains("\"event\":\"checkout\""));
    assert_eq!(lines[2], "window.shopLayer.push({\"ecommerce\":null});");
    assert!(lines[3].contains("\"add_shipping_info\""));
}

#[test]
fn test_render_script_escapes_closing_tags() {
    let mut cart = storefront_cart();
    if let Some(item) = cart.items.first_mut() {
        item.variant.product.name = "</script><script>alert(1)</script>".to_string();
    }
    let harness = Harness::new(&TrackingConfig::default(), cart);
    harness
        .interceptor
        .on_controller_resolved(&order_action("summary", "/cart"));

    let script = harness.data_layer.render_script("dataLayer");
    assert!(!script.contains("</script>"));
    assert!(!script.contains("<script>"));
    assert!(script.contains(r"\u003c/script>"));
}

#[test]
fn test_take_drains_queued_pushes() {
    let harness = tracked_harness(&TrackingConfig::default());

    assert_eq!(harness.data_layer.len(), 2);
    let pushes = harness.data_layer.take();
    assert_eq!(pushes.len(), 2);
    assert!(harness.data_layer.is_empty());
    assert_eq!(
        harness.data_layer.render_script("dataLayer"),
        "window.dataLayer = window.dataLayer || [];\n"
    );
}
