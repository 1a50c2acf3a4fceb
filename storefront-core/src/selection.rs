//! Attribute selections and the product page's add-to-cart gate.
use crate::cart::{CartMode, CartRequest};
use crate::catalog::{AttributeItem, Product};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from attribute name to the single item chosen for it.
///
/// Keys are unique; selecting a new item for an attribute replaces the old one.
/// There is no deselection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSelection(BTreeMap<String, AttributeItem>);

impl AttributeSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the item for `attribute`. Returns `false` when it was already selected.
    pub fn select(&mut self, attribute: impl Into<String>, item: AttributeItem) -> bool {
        let attribute = attribute.into();
        if self.0.get(&attribute).is_some_and(|current| current.id == item.id) {
            return false;
        }
        self.0.insert(attribute, item);
        true
    }

    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&AttributeItem> {
        self.0.get(attribute)
    }

    #[must_use]
    pub fn contains(&self, attribute: &str) -> bool {
        self.0.contains_key(attribute)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every attribute of `product` has exactly one selected item.
    #[must_use]
    pub fn is_complete_for(&self, product: &Product) -> bool {
        self.len() == product.attributes.len()
            && product.attributes.iter().all(|attr| self.contains(&attr.name))
    }

    /// Names of the product's attributes that still lack a selection, in display order.
    #[must_use]
    pub fn missing<'a>(&self, product: &'a Product) -> Vec<&'a str> {
        product
            .attributes
            .iter()
            .filter(|attr| !self.contains(&attr.name))
            .map(|attr| attr.name.as_str())
            .collect()
    }
}

/// How far the shopper has got through a product's attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completeness {
    None,
    Partial,
    Complete,
}

/// Result of pressing add-to-cart on the product page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every attribute is selected; hand this request to the cart.
    Ready(CartRequest),
    /// Some attributes are unselected; validation messages are now shown.
    Incomplete,
    /// The product cannot be bought at all.
    OutOfStock,
}

/// Local state of one product page visit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub selection: AttributeSelection,
    pub show_message: bool,
    pub selected_image: Option<String>,
}

impl ProductForm {
    pub fn select_attribute(&mut self, attribute: &str, item: AttributeItem) {
        self.selection.select(attribute, item);
    }

    pub fn select_image(&mut self, src: impl Into<String>) {
        self.selected_image = Some(src.into());
    }

    /// The image to show large: the clicked thumbnail, else the product cover.
    #[must_use]
    pub fn main_image<'a>(&'a self, product: &'a Product) -> Option<&'a str> {
        self.selected_image.as_deref().or_else(|| product.cover_image())
    }

    #[must_use]
    pub fn completeness(&self, product: &Product) -> Completeness {
        if self.selection.is_complete_for(product) {
            Completeness::Complete
        } else if self.selection.is_empty() {
            Completeness::None
        } else {
            Completeness::Partial
        }
    }

    /// Whether the "please select" message belongs under `attribute` this render.
    #[must_use]
    pub fn shows_missing(&self, attribute: &str) -> bool {
        self.show_message && !self.selection.contains(attribute)
    }

    /// Gate add-to-cart on stock and attribute completeness.
    ///
    /// A ready submit leaves the form untouched so the shopper can add again.
    pub fn submit(&mut self, product: &Product) -> SubmitOutcome {
        if !product.in_stock {
            return SubmitOutcome::OutOfStock;
        }
        if self.selection.is_complete_for(product) {
            SubmitOutcome::Ready(CartRequest {
                product: product.clone(),
                selection: self.selection.clone(),
                mode: CartMode::Increase,
            })
        } else {
            self.show_message = true;
            SubmitOutcome::Incomplete
        }
    }
}
