//! Storefront configuration: query endpoint and offered currencies.
use crate::catalog::Currency;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "http://localhost:4000/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("graphql_endpoint must not be empty")]
    EmptyEndpoint,
    #[error("at least one currency must be configured")]
    NoCurrencies,
    #[error("default currency {0} is not in the currency list")]
    UnknownDefaultCurrency(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    pub graphql_endpoint: String,
    pub currencies: Vec<Currency>,
    /// Label of the currency active when the app starts
    pub default_currency: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            graphql_endpoint: DEFAULT_GRAPHQL_ENDPOINT.to_string(),
            currencies: vec![Currency::new("USD", "$")],
            default_currency: "USD".to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Parse and validate a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON, an empty endpoint, an empty currency
    /// list, or a default currency missing from the list.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the endpoint when a non-blank override is given.
    #[must_use]
    pub fn with_endpoint_override(mut self, endpoint: Option<&str>) -> Self {
        if let Some(endpoint) = endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            self.graphql_endpoint = endpoint.to_string();
        }
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.graphql_endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        if self.currencies.is_empty() {
            return Err(ConfigError::NoCurrencies);
        }
        if self.currency(&self.default_currency).is_none() {
            return Err(ConfigError::UnknownDefaultCurrency(
                self.default_currency.clone(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn currency(&self, label: &str) -> Option<&Currency> {
        self.currencies.iter().find(|c| c.label == label)
    }

    /// The starting currency. Falls back to the first entry for unvalidated configs.
    #[must_use]
    pub fn initial_currency(&self) -> Currency {
        self.currency(&self.default_currency)
            .or_else(|| self.currencies.first())
            .cloned()
            .unwrap_or_else(|| Currency::new("USD", "$"))
    }
}
