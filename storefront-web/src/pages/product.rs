//! Product detail page: gallery, attribute pickers, price and add-to-cart.
use std::rc::Rc;

use storefront_core::{
    AttributeItem as Item, CartRequest, Currency, Product, ProductForm, QueryState, SafeHtml,
    SubmitOutcome,
};
use yew::prelude::*;

use crate::components::attribute_item::AttributeItem;
use crate::components::loading_box::LoadingBox;
use crate::components::price_tag::render_price;
use crate::graphql::use_product_query;
use crate::{dom, i18n};

#[derive(Properties, PartialEq, Clone)]
pub struct ProductScreenProps {
    pub product_id: AttrValue,
    pub active_currency: Currency,
    pub on_cart_request: Callback<CartRequest>,
}

/// Fetches the product for `product_id` and shows it once loaded.
#[function_component(ProductScreen)]
pub fn product_screen(p: &ProductScreenProps) -> Html {
    use_effect_with((), |()| dom::scroll_to_top());
    let query = use_product_query(p.product_id.clone());
    render_query_state(&query, &p.active_currency, &p.on_cart_request)
}

/// Loading indicator, the query's error message verbatim, or the product view.
#[must_use]
pub fn render_query_state(
    state: &QueryState<Rc<Product>>,
    active_currency: &Currency,
    on_cart_request: &Callback<CartRequest>,
) -> Html {
    match state {
        QueryState::Loading => html! { <LoadingBox /> },
        QueryState::Error(message) => html! {
            <div class="error" role="alert">{ message.clone() }</div>
        },
        QueryState::Ready(product) => html! {
            <ProductView
                key={product.id.clone()}
                product={product.clone()}
                active_currency={active_currency.clone()}
                on_cart_request={on_cart_request.clone()}
            />
        },
    }
}

#[derive(Properties, Clone)]
pub struct ProductViewProps {
    pub product: Rc<Product>,
    pub active_currency: Currency,
    pub on_cart_request: Callback<CartRequest>,
}

impl PartialEq for ProductViewProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.product, &other.product)
            && self.active_currency == other.active_currency
            && self.on_cart_request == other.on_cart_request
    }
}

/// A loaded product. Selections, the validation flag and the main image live
/// here and reset when the view unmounts.
#[function_component(ProductView)]
pub fn product_view(p: &ProductViewProps) -> Html {
    let form = use_state(ProductForm::default);
    let description = use_memo(p.product.description.clone(), |raw| SafeHtml::sanitize(raw));
    let product = &p.product;

    let on_select = {
        let form = form.clone();
        Callback::from(move |(name, item): (AttrValue, Item)| {
            let mut next = (*form).clone();
            next.select_attribute(&name, item);
            if next != *form {
                form.set(next);
            }
        })
    };

    let on_add = {
        let form = form.clone();
        let product = product.clone();
        let cb = p.on_cart_request.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            match next.submit(&product) {
                SubmitOutcome::Ready(request) => {
                    log::debug!("Adding {} to cart", product.id);
                    cb.emit(request);
                }
                SubmitOutcome::Incomplete => form.set(next),
                SubmitOutcome::OutOfStock => {}
            }
        })
    };

    let main_image = form.main_image(product).map(str::to_string);

    html! {
        <section class="productscreen">
            <div class="gallery">
                <div class="thumbnails">
                    { for product.gallery.iter().map(|src| {
                        let onclick = {
                            let form = form.clone();
                            let src = src.clone();
                            Callback::from(move |_: MouseEvent| {
                                let mut next = (*form).clone();
                                next.select_image(src.clone());
                                form.set(next);
                            })
                        };
                        html! {
                            <button type="button" class="thumbnail" key={src.clone()} {onclick}>
                                <img src={src.clone()} alt={i18n::t("product.thumbnail_alt")} />
                            </button>
                        }
                    }) }
                </div>
                <div class="main-image">
                    { main_image.map_or_else(|| html! {}, |src| html! {
                        <img {src} alt={i18n::t("product.image_alt")} />
                    }) }
                </div>
            </div>
            <div class="info">
                <div class="brand">{ product.brand.clone() }</div>
                <h1 class="product-name">{ product.name.clone() }</h1>
                <div class="attributes">
                    { for product.attributes.iter().map(|attribute| {
                        let name = AttrValue::from(attribute.name.clone());
                        let active = form.selection.get(&attribute.name).cloned();
                        html! {
                            <div class="attribute" key={attribute.name.clone()}>
                                <div class="label">{ format!("{}:", attribute.name) }</div>
                                <div class="attribute-items">
                                    { for attribute.items.iter().enumerate().map(|(idx, item)| html! {
                                        <AttributeItem
                                            key={item.id.clone()}
                                            item={item.clone()}
                                            kind={attribute.kind}
                                            attribute_name={name.clone()}
                                            active={active.clone()}
                                            index={AttrValue::from(idx.to_string())}
                                            on_select={Some(on_select.clone())}
                                        />
                                    }) }
                                </div>
                                { if form.shows_missing(&attribute.name) {
                                    html! {
                                        <div class="attribute-message" role="alert">
                                            { i18n::tr1("product.select_attribute", "attribute", &attribute.name) }
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }}
                            </div>
                        }
                    }) }
                </div>
                <div class="label">{ i18n::t("product.price") }</div>
                { render_price(&product.prices, &p.active_currency, "price-productScreen") }
                <button type="button" class="add-to-cart" onclick={on_add} disabled={!product.in_stock}>
                    { if product.in_stock { i18n::t("product.add_to_cart") } else { i18n::t("product.out_of_stock") } }
                </button>
                { if description.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="description">
                            { Html::from_html_unchecked(AttrValue::from(description.as_str().to_string())) }
                        </div>
                    }
                }}
            </div>
        </section>
    }
}
