//! Minicart - cart icon with a quantity badge and a summary popover.
//!
//! The parent owns the open flag; this component reports toggles and closes
//! itself through `on_toggle` when the shopper presses anywhere outside it.

mod outside_click;

pub use outside_click::{OutsideClick, should_close, use_outside_click};

use std::rc::Rc;

use storefront_core::{Cart, Currency};
use yew::prelude::*;
use yew_router::prelude::*;

use super::line_attributes::render_line_attributes;
use super::price_tag::render_price;
use crate::i18n;
use crate::paths;
use crate::router::Route;

#[derive(Properties, Clone)]
pub struct Props {
    pub cart: Rc<Cart>,
    pub active_currency: Currency,
    pub open: bool,
    pub on_toggle: Callback<()>,
}

impl PartialEq for Props {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cart, &other.cart)
            && self.active_currency == other.active_currency
            && self.open == other.open
            && self.on_toggle == other.on_toggle
    }
}

#[function_component(Minicart)]
pub fn minicart(p: &Props) -> Html {
    let container_ref = use_node_ref();
    use_outside_click(container_ref.clone(), p.open, p.on_toggle.clone());

    let navigator = use_navigator();
    let total_quantity = p.cart.total_quantity();
    let quantity_str = total_quantity.to_string();

    let toggle = {
        let cb = p.on_toggle.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let view_bag = {
        let cb = p.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(nav) = &navigator {
                e.prevent_default();
                nav.push(&Route::Cart);
            }
            cb.emit(());
        })
    };

    let body = if p.cart.is_empty() {
        html! { <div class="minicart-empty">{ i18n::t("minicart.empty") }</div> }
    } else {
        html! {
            <div class="minicart-items">
                <div class="header">
                    <span class="bag">{ i18n::t("minicart.bag") }</span>
                    <span>{ i18n::tr1("minicart.items", "count", &quantity_str) }</span>
                </div>
                <ul class="minicart-products">
                    { for p.cart.lines.iter().enumerate().map(|(idx, line)| html! {
                        <li class="minicart-product" key={format!("{idx}-{}", line.product.id)}>
                            <div class="minicart-product-info">
                                <div class="brand-name">
                                    <div>{ line.product.brand.clone() }</div>
                                    <div>{ line.product.name.clone() }</div>
                                </div>
                                { render_price(&line.product.prices, &p.active_currency, "minicart-price") }
                                { render_line_attributes(line, "minicart") }
                            </div>
                            <div class="minicart-quantity">{ line.quantity.to_string() }</div>
                        </li>
                    }) }
                </ul>
                <a class="view-bag" href={Route::Cart.to_path()} onclick={view_bag}>
                    { i18n::t("minicart.view_bag") }
                </a>
            </div>
        }
    };

    html! {
        <div class="cart" ref={container_ref}>
            <button type="button" class="nav__cart-icon" onclick={toggle}
                aria-label={i18n::t("nav.cart")}
                aria-expanded={p.open.to_string()}>
                <img src={paths::asset_path(paths::CART_ICON)} alt={i18n::t("minicart.icon_alt")} />
                { if p.cart.is_empty() {
                    html! {}
                } else {
                    html! { <div class="cart-quantity"><span>{ quantity_str.clone() }</span></div> }
                }}
            </button>
            <div class={classes!("minicart", p.open.then_some("show"))}>
                { body }
            </div>
        </div>
    }
}
