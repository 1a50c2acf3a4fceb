use crate::i18n;
use storefront_core::{Currency, Price, get_price};
use yew::prelude::*;

/// Symbol and amount of the price in `currency`.
///
/// A product with no price in the active currency renders an explicit notice
/// instead of an amount, and the gap is logged.
#[must_use]
pub fn render_price(prices: &[Price], currency: &Currency, class: &'static str) -> Html {
    match get_price(prices, currency) {
        Ok(price) => html! {
            <div {class}>
                <span class="currency-symbol">{ price.currency.symbol.clone() }</span>
                <span class="amount">{ price.amount.to_string() }</span>
            </div>
        },
        Err(e) => {
            log::warn!("{e}");
            html! {
                <div class={classes!(class, "price-unavailable")} role="note">
                    { i18n::t("price.unavailable") }
                </div>
            }
        }
    }
}
