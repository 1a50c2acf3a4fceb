//! Full cart listing with quantity controls and the totals footer.
use std::rc::Rc;

use storefront_core::{Cart, CartLine, CartRequest, Currency, summarize};
use yew::prelude::*;

use crate::components::line_attributes::render_line_attributes;
use crate::components::price_tag::render_price;
use crate::i18n;

#[derive(Properties, Clone)]
pub struct CartScreenProps {
    pub cart: Rc<Cart>,
    pub active_currency: Currency,
    /// Receives "+" as [`CartMode::Increase`](storefront_core::CartMode) and "–" as `Decrease`
    pub on_cart_request: Callback<CartRequest>,
}

impl PartialEq for CartScreenProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cart, &other.cart)
            && self.active_currency == other.active_currency
            && self.on_cart_request == other.on_cart_request
    }
}

fn render_line(idx: usize, line: &CartLine, props: &CartScreenProps) -> Html {
    let increase = {
        let cb = props.on_cart_request.clone();
        let request = CartRequest::increase(line);
        Callback::from(move |_: MouseEvent| cb.emit(request.clone()))
    };
    let decrease = {
        let cb = props.on_cart_request.clone();
        let request = CartRequest::decrease(line);
        Callback::from(move |_: MouseEvent| cb.emit(request.clone()))
    };
    let name = line.product.name.as_str();

    html! {
        <li class="cart-line" key={format!("{idx}-{}", line.product.id)}>
            <div class="cart-line-info">
                <div>
                    <div class="brand">{ line.product.brand.clone() }</div>
                    <div class="product-name">{ line.product.name.clone() }</div>
                </div>
                { render_price(&line.product.prices, &props.active_currency, "price-productScreen") }
                { render_line_attributes(line, "cart") }
            </div>
            <div class="quantity-control_image">
                <div class="quantity-control">
                    <button type="button" class="plus" onclick={increase}
                        aria-label={i18n::tr1("cart.increase", "name", name)}>{ "+" }</button>
                    <div class="cart__quantity">{ line.quantity.to_string() }</div>
                    <button type="button" class="minus" onclick={decrease}
                        aria-label={i18n::tr1("cart.decrease", "name", name)}>{ "-" }</button>
                </div>
                { line.product.cover_image().map_or_else(|| html! {}, |src| html! {
                    <div class="cart-image"><img src={src.to_string()} alt={line.product.name.clone()} /></div>
                }) }
            </div>
        </li>
    }
}

fn render_totals(props: &CartScreenProps) -> Html {
    let currency = &props.active_currency;
    match summarize(&props.cart.lines, currency) {
        Ok(summary) => html! {
            <div class="cart-bottom">
                <div class="cart-total">
                    <span>{ i18n::t("cart.tax") }</span>
                    <span class="cart-amount cart-tax">{ i18n::fmt_money(currency, summary.tax) }</span>
                </div>
                <div class="cart-total">
                    <span>{ i18n::t("cart.quantity") }</span>
                    <span class="cart-amount cart-count">{ summary.quantity.to_string() }</span>
                </div>
                <div class="cart-total">
                    <span>{ i18n::t("cart.total") }</span>
                    <span class="cart-amount cart-grand-total">{ i18n::fmt_money(currency, summary.grand_total()) }</span>
                </div>
                <button type="button" class="cart-button">{ i18n::t("cart.order") }</button>
            </div>
        },
        Err(e) => {
            log::error!("Cannot total cart: {e}");
            html! {
                <div class="cart-bottom">
                    <p class="error" role="alert">
                        { i18n::tr1("cart.prices_unavailable", "currency", &currency.label) }
                    </p>
                </div>
            }
        }
    }
}

#[function_component(CartScreen)]
pub fn cart_screen(props: &CartScreenProps) -> Html {
    if props.cart.is_empty() {
        return html! {
            <section class="cartscreen">
                <div class="cartscreen-empty">{ i18n::t("cart.empty") }</div>
            </section>
        };
    }

    html! {
        <section class="cartscreen" aria-labelledby="cart-title">
            <h1 id="cart-title" class="cart-title">{ i18n::t("cart.title") }</h1>
            <ul class="cart-products">
                { for props.cart.lines.iter().enumerate().map(|(idx, line)| render_line(idx, line, props)) }
            </ul>
            { render_totals(props) }
        </section>
    }
}
