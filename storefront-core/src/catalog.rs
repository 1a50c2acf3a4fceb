//! Catalog data as returned by the product query.
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A currency the storefront can display prices in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Currency {
    /// Currency code used for matching, e.g. `USD`
    pub label: String,
    /// Display symbol, e.g. `$`
    pub symbol: String,
}

impl Currency {
    #[must_use]
    pub fn new(label: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            symbol: symbol.into(),
        }
    }
}

/// A product price in one currency.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Price {
    pub amount: Money,
    pub currency: Currency,
}

/// How an attribute's values are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    /// Colour chip; the item value is a CSS colour
    Swatch,
    /// Plain text label; anything the catalog doesn't recognise renders as text
    #[default]
    #[serde(other)]
    Text,
}

/// One selectable value of an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeItem {
    pub id: String,
    pub value: String,
    pub display_value: String,
}

/// A customization axis of a product, such as `Size`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Attribute {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: AttributeKind,
    #[serde(default)]
    pub items: Vec<AttributeItem>,
}

/// A product as shown on the detail page and carried in cart lines.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand: String,
    #[serde(default)]
    pub category: String,
    pub in_stock: bool,
    #[serde(default)]
    pub gallery: Vec<String>,
    /// Untrusted rich text; render only through [`crate::sanitize::SafeHtml`]
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub prices: Vec<Price>,
}

impl Product {
    /// First gallery image, used as the default main image and the cart thumbnail.
    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.gallery.first().map(String::as_str)
    }
}
