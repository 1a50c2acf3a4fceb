use std::rc::Rc;

use storefront_core::{Cart, CartRequest};
use yew::prelude::*;

use crate::app::state::AppState;

#[derive(Clone)]
pub struct AppHandlers {
    pub cart_request: Callback<CartRequest>,
    pub currency_change: Callback<String>,
    pub toggle_minicart: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            cart_request: build_cart_request(state),
            currency_change: build_currency_change(state),
            toggle_minicart: build_toggle_minicart(state),
        }
    }
}

/// Cart after `request`, sharing nothing with `cart` so props see a new pointer.
#[must_use]
pub fn apply_cart_request(cart: &Cart, request: &CartRequest) -> Rc<Cart> {
    let mut next = cart.clone();
    let quantity = next.apply(request);
    log::debug!(
        "{:?} {} -> quantity {quantity}",
        request.mode,
        request.product.id
    );
    Rc::new(next)
}

fn build_cart_request(state: &AppState) -> Callback<CartRequest> {
    let cart = state.cart.clone();
    Callback::from(move |request: CartRequest| {
        cart.set(apply_cart_request(&cart, &request));
    })
}

fn build_currency_change(state: &AppState) -> Callback<String> {
    let active = state.active_currency.clone();
    let currencies = state.currencies.clone();
    Callback::from(move |label: String| {
        match currencies.iter().find(|c| c.label == label) {
            Some(currency) => active.set(currency.clone()),
            None => log::warn!("Ignoring unknown currency {label}"),
        }
    })
}

fn build_toggle_minicart(state: &AppState) -> Callback<()> {
    let show = state.show_minicart.clone();
    Callback::from(move |()| show.set(!*show))
}
