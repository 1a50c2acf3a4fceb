use std::rc::Rc;

use storefront_core::{Cart, Currency};
use yew::prelude::*;

/// Shell-level state shared by the header and the routed screens.
#[derive(Clone)]
pub struct AppState {
    pub cart: UseStateHandle<Rc<Cart>>,
    pub active_currency: UseStateHandle<Currency>,
    pub show_minicart: UseStateHandle<bool>,
    pub currencies: Rc<Vec<Currency>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    let currencies = use_memo((), |()| crate::config::config().currencies.clone());
    AppState {
        cart: use_state(|| Rc::new(Cart::new())),
        active_currency: use_state(|| crate::config::config().initial_currency()),
        show_minicart: use_state(|| false),
        currencies,
    }
}
