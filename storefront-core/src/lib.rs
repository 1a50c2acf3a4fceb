//! Storefront Core
//!
//! Platform-agnostic catalog, pricing and cart logic for the storefront.
//! This crate has no UI or browser dependencies; the web crate renders on top of it.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod money;
pub mod pricing;
pub mod query;
pub mod sanitize;
pub mod selection;

// Re-export commonly used types
pub use cart::{Cart, CartLine, CartMode, CartRequest};
pub use catalog::{Attribute, AttributeItem, AttributeKind, Currency, Price, Product};
pub use config::{ConfigError, StorefrontConfig};
pub use money::{Money, MoneyError};
pub use pricing::{
    CartSummary, PricingError, TAX_RATE_PCT, count_tax, get_price, summarize, total_price,
    total_quantity,
};
pub use query::{
    GraphQLError, PRODUCT_QUERY, QueryError, QueryState, parse_product_response,
    product_request_body,
};
pub use sanitize::SafeHtml;
pub use selection::{AttributeSelection, Completeness, ProductForm, SubmitOutcome};
