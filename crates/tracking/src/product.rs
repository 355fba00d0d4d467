//! Order line to analytics product mapping.
//!
//! UA and GA4 describe products with different field names. GA4 items also
//! carry their position in the cart and the store they were sold through.

use std::sync::Arc;

use gtm_checkout_core::{OrderItem, Product};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::ProductIdentifierSource;
use crate::context::{ChannelContext, CurrencyContext};

/// A product in a Universal Analytics `checkout` action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UaProduct {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
    pub variant: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// An item in a GA4 ecommerce event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ga4Item {
    pub item_id: String,
    pub item_name: String,
    pub affiliation: String,
    pub currency: String,
    pub index: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
    pub item_variant: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_category: Option<String>,
}

/// Maps order lines to UA products and GA4 items.
#[derive(Clone)]
pub struct ProductMapper {
    identifier: ProductIdentifierSource,
    channel: Arc<dyn ChannelContext>,
    currency: Arc<dyn CurrencyContext>,
}

impl ProductMapper {
    pub fn new(
        identifier: ProductIdentifierSource,
        channel: Arc<dyn ChannelContext>,
        currency: Arc<dyn CurrencyContext>,
    ) -> Self {
        Self {
            identifier,
            channel,
            currency,
        }
    }

    /// The identifier analytics knows this product by.
    #[must_use]
    pub fn identifier(&self, product: &Product) -> String {
        match self.identifier {
            ProductIdentifierSource::Code => product.code.clone(),
            ProductIdentifierSource::Id => product.id.to_string(),
        }
    }

    #[must_use]
    pub fn to_ua_product(&self, item: &OrderItem) -> UaProduct {
        let product = item.product();
        UaProduct {
            id: self.identifier(product),
            name: product.name.clone(),
            price: item.unit_price.to_major(),
            quantity: item.quantity,
            variant: item.variant.label().to_string(),
            category: product.main_taxon.clone(),
        }
    }

    /// `index` is the line's 0-based position in the order.
    #[must_use]
    pub fn to_ga4_product(&self, item: &OrderItem, index: usize) -> Ga4Item {
        let product = item.product();
        Ga4Item {
            item_id: self.identifier(product),
            item_name: product.name.clone(),
            affiliation: self.channel.channel().name,
            currency: self.currency.currency_code().into(),
            index,
            price: item.unit_price.to_major(),
            quantity: item.quantity,
            item_variant: item.variant.label().to_string(),
            item_category: product.main_taxon.clone(),
        }
    }
}

impl std::fmt::Debug for ProductMapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductMapper")
            .field("identifier", &self.identifier)
            .finish_non_exhaustive()
    }
}
