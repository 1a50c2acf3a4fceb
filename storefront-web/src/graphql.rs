//! Product query transport and the hook screens use to wait on it.
use std::rc::Rc;

use storefront_core::{Product, QueryError, QueryState, parse_product_response, product_request_body};
use yew::prelude::*;

use crate::dom;

/// Longest slice of an error body carried into the error message.
const ERROR_BODY_PREVIEW: usize = 200;

/// Fetch one product from the configured GraphQL endpoint.
///
/// # Errors
/// Returns [`QueryError::Transport`] when the request fails outright,
/// [`QueryError::Http`] for non-success statuses, and the parse errors of
/// [`parse_product_response`] otherwise.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_product(endpoint: &str, product_id: &str) -> Result<Product, QueryError> {
    let body = product_request_body(product_id)?;
    let (status, text) = dom::post_json(endpoint, &body)
        .await
        .map_err(|e| QueryError::Transport(dom::js_error_message(&e)))?;

    if !(200..300).contains(&status) {
        return Err(QueryError::Http {
            status,
            body: text.chars().take(ERROR_BODY_PREVIEW).collect(),
        });
    }

    parse_product_response(product_id, &text)
}

/// Generation counter for in-flight queries.
///
/// Each fetch takes a ticket when it starts; only the newest ticket may
/// publish its reply.
#[derive(Debug, Default)]
pub struct LatestRequest {
    generation: u64,
}

impl LatestRequest {
    /// Start a new request, superseding every earlier ticket.
    pub const fn begin(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Supersede the outstanding ticket without starting a new request.
    pub const fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    #[must_use]
    pub const fn is_current(&self, ticket: u64) -> bool {
        self.generation == ticket
    }
}

/// Query the product with `product_id`, re-fetching whenever the id changes.
///
/// Starts in [`QueryState::Loading`]. Failures are logged and surfaced as
/// [`QueryState::Error`] with the error's message. Replies for an id the
/// caller has moved away from, or that land after unmount, are dropped.
#[hook]
pub fn use_product_query(product_id: AttrValue) -> UseStateHandle<QueryState<Rc<Product>>> {
    let state = use_state(|| QueryState::Loading);
    let latest = use_mut_ref(LatestRequest::default);
    {
        let state = state.clone();
        use_effect_with(product_id, move |id| {
            state.set(QueryState::Loading);
            let ticket = latest.borrow_mut().begin();
            let id = id.to_string();
            let endpoint = crate::config::config().graphql_endpoint.clone();
            {
                let latest = latest.clone();
                yew::platform::spawn_local(async move {
                    let result = fetch_product(&endpoint, &id).await;
                    if !latest.borrow().is_current(ticket) {
                        log::debug!("Dropping stale reply for product {id}");
                        return;
                    }
                    if let Err(e) = &result {
                        dom::console_error(&format!("Product query for {id} failed: {e}"));
                    }
                    state.set(result.map(Rc::new).into());
                });
            }
            move || latest.borrow_mut().cancel()
        });
    }
    state
}
