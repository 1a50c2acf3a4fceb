//! Embedded storefront configuration.
//!
//! `static/config.json` is compiled in. Set `STOREFRONT_GRAPHQL_URL` at build time
//! to point a deployment at another query endpoint.

use once_cell::sync::Lazy;
use storefront_core::StorefrontConfig;

static CONFIG: Lazy<StorefrontConfig> = Lazy::new(|| {
    load_config(
        include_str!("../static/config.json"),
        option_env!("STOREFRONT_GRAPHQL_URL"),
    )
});

fn load_config(text: &str, endpoint_override: Option<&str>) -> StorefrontConfig {
    StorefrontConfig::from_json(text)
        .unwrap_or_else(|e| {
            log::error!("Invalid storefront config, using defaults: {e}");
            StorefrontConfig::default()
        })
        .with_endpoint_override(endpoint_override)
}

/// The active configuration.
#[must_use]
pub fn config() -> &'static StorefrontConfig {
    &CONFIG
}
