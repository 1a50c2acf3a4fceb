use std::rc::Rc;

use crate::components::minicart::Minicart;
use crate::i18n::t;
use storefront_core::{Cart, Currency};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub currencies: Rc<Vec<Currency>>,
    pub active_currency: Currency,
    pub on_currency_change: Callback<String>,
    pub cart: Rc<Cart>,
    pub show_minicart: bool,
    pub on_toggle_minicart: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_currency_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                cb.emit(sel.value());
            }
        })
    };

    html! {
        <header role="banner">
            <div class="header-content">
                <nav aria-label={t("nav.currency")} class="header-left">
                    <label for="currency-select" class="sr-only">{ t("nav.currency") }</label>
                    <select id="currency-select" onchange={on_change} aria-label={t("nav.currency")}>
                        { for p.currencies.iter().map(|c| html! {
                            <option value={c.label.clone()} selected={c.label == p.active_currency.label}>
                                { format!("{} {}", c.symbol, c.label) }
                            </option>
                        }) }
                    </select>
                </nav>
                <div class="header-right">
                    <Minicart
                        cart={p.cart.clone()}
                        active_currency={p.active_currency.clone()}
                        open={p.show_minicart}
                        on_toggle={p.on_toggle_minicart.clone()}
                    />
                </div>
            </div>
        </header>
    }
}
