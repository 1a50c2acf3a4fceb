//! The product query document and its response handling.
//!
//! Transport lives in the web crate; this module builds the request body and turns
//! the raw response text into a [`Product`] or a [`QueryError`].

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fetches everything the product page and cart lines render.
pub const PRODUCT_QUERY: &str = r"query GET_PRODUCT($productId: String!) {
  product(id: $productId) {
    name
    id
    inStock
    gallery
    description
    brand
    category
    attributes {
      name
      id
      type
      items {
        displayValue
        value
        id
      }
    }
    prices {
      currency {
        label
        symbol
      }
      amount
    }
  }
}";

#[derive(Debug, Error)]
pub enum QueryError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Transport(String),
    /// The endpoint answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),
    #[error("Product not found: {0}")]
    NotFound(String),
}

/// A GraphQL error entry from the response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GraphQLError {
    pub message: String,
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Serialize)]
struct GraphQLRequest<'a, V> {
    query: &'a str,
    variables: V,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProductVariables<'a> {
    product_id: &'a str,
}

#[derive(Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQLError>>,
}

#[derive(Deserialize)]
struct ProductData {
    product: Option<Product>,
}

/// JSON body for fetching `product_id`.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn product_request_body(product_id: &str) -> Result<String, serde_json::Error> {
    serde_json::to_string(&GraphQLRequest {
        query: PRODUCT_QUERY,
        variables: ProductVariables { product_id },
    })
}

/// Interpret a product query response.
///
/// # Errors
///
/// Returns [`QueryError::Parse`] for malformed JSON, [`QueryError::GraphQL`] when
/// the envelope carries errors, and [`QueryError::NotFound`] when the product is null.
pub fn parse_product_response(product_id: &str, body: &str) -> Result<Product, QueryError> {
    let response: GraphQLResponse<ProductData> = serde_json::from_str(body)?;

    if let Some(errors) = response.errors
        && !errors.is_empty()
    {
        return Err(QueryError::GraphQL(errors));
    }

    response
        .data
        .and_then(|data| data.product)
        .ok_or_else(|| QueryError::NotFound(product_id.to_string()))
}

/// What a screen waiting on the query can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState<T> {
    Loading,
    /// Error message, rendered verbatim in place of the view
    Error(String),
    Ready(T),
}

impl<T> From<Result<T, QueryError>> for QueryState<T> {
    fn from(result: Result<T, QueryError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Error(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn request_body_carries_query_and_variables() {
        let body = product_request_body("apple-airtag").unwrap();
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["variables"]["productId"], "apple-airtag");
        assert!(json["query"].as_str().unwrap().contains("product(id: $productId)"));
    }

    #[test]
    fn parses_product_payload() {
        let body = r#"{"data":{"product":{"id":"apple-airtag","name":"AirTag","brand":"Apple",
            "category":"tech","inStock":true,"gallery":["a.png"],"description":"<p>Lose your knack</p>",
            "attributes":[],"prices":[{"currency":{"label":"USD","symbol":"$"},"amount":120.57}]}}}"#;
        let product = parse_product_response("apple-airtag", body).unwrap();
        assert_eq!(product.name, "AirTag");
        assert_eq!(product.prices[0].amount.cents(), 12057);
    }

    #[test]
    fn null_product_is_not_found() {
        let err = parse_product_response("ghost", r#"{"data":{"product":null}}"#).unwrap_err();
        assert!(matches!(err, QueryError::NotFound(ref id) if id == "ghost"));
        assert_eq!(err.to_string(), "Product not found: ghost");
    }

    #[test]
    fn graphql_errors_win_over_data() {
        let body = r#"{"data":null,"errors":[{"message":"boom"},{"message":"again"}]}"#;
        let err = parse_product_response("x", body).unwrap_err();
        assert_eq!(err.to_string(), "GraphQL errors: boom; again");
    }

    #[test]
    fn malformed_body_is_parse_error() {
        let err = parse_product_response("x", "<html>").unwrap_err();
        assert!(matches!(err, QueryError::Parse(_)));
    }

    #[test]
    fn query_state_from_result_keeps_message_verbatim() {
        let state: QueryState<u8> = Err(QueryError::Transport("offline".into())).into();
        assert_eq!(state, QueryState::Error("Network error: offline".into()));
    }
}
