use std::rc::Rc;

use futures::executor::block_on;
use storefront_core::{
    Attribute, AttributeItem, AttributeKind, Currency, Money, Price, Product, QueryState,
};
use storefront_web::pages::product::{ProductView, ProductViewProps, render_query_state};
use yew::prelude::*;
use yew::LocalServerRenderer;

fn usd() -> Currency {
    Currency::new("USD", "$")
}

fn items(values: &[&str]) -> Vec<AttributeItem> {
    values
        .iter()
        .map(|v| AttributeItem {
            id: (*v).into(),
            value: (*v).into(),
            display_value: (*v).into(),
        })
        .collect()
}

fn console(in_stock: bool) -> Product {
    Product {
        id: "ps-5".into(),
        name: "PlayStation 5".into(),
        brand: "Sony".into(),
        category: "tech".into(),
        in_stock,
        gallery: vec![
            "https://cdn.example/ps5-front.png".into(),
            "https://cdn.example/ps5-side.png".into(),
        ],
        description: "<p>A good console</p><script>alert('x')</script>".into(),
        attributes: vec![
            Attribute {
                id: "Color".into(),
                name: "Color".into(),
                kind: AttributeKind::Swatch,
                items: items(&["#44FF03", "#FFFFFF"]),
            },
            Attribute {
                id: "Capacity".into(),
                name: "Capacity".into(),
                kind: AttributeKind::Text,
                items: items(&["512G", "1T"]),
            },
        ],
        prices: vec![Price {
            amount: Money::from_cents(84402),
            currency: usd(),
        }],
    }
}

fn render_view(product: Product) -> String {
    let props = ProductViewProps {
        product: Rc::new(product),
        active_currency: usd(),
        on_cart_request: Callback::noop(),
    };
    block_on(LocalServerRenderer::<ProductView>::with_props(props).render())
}

#[test]
fn product_view_renders_details_and_pickers() {
    let html = render_view(console(true));
    assert!(html.contains("Sony"), "{html}");
    assert!(html.contains("PlayStation 5"), "{html}");
    assert!(html.contains("PRICE:"), "{html}");
    assert!(html.contains("844.02"), "{html}");
    assert!(html.contains("Color-#44FF03-0"), "{html}");
    assert!(html.contains("Capacity-1T-1"), "{html}");
    assert!(html.contains("background-color: #FFFFFF"), "{html}");
    assert!(html.contains("ADD TO CART"), "{html}");
}

#[test]
fn first_gallery_image_is_main_until_a_thumbnail_is_chosen() {
    let html = render_view(console(true));
    let main = html.split("class=\"main-image\"").nth(1).unwrap_or_default();
    assert!(main.contains("ps5-front.png"), "{html}");
}

#[test]
fn description_is_sanitized() {
    let html = render_view(console(true));
    assert!(html.contains("<p>A good console</p>"), "{html}");
    assert!(!html.contains("<script>"), "{html}");
    assert!(!html.contains("alert("), "{html}");
}

#[test]
fn nothing_is_flagged_before_submit() {
    let html = render_view(console(true));
    assert!(!html.contains("Please select"), "{html}");
    assert!(!html.contains("selected"), "{html}");
}

#[test]
fn out_of_stock_disables_add_to_cart() {
    let html = render_view(console(false));
    assert!(html.contains("OUT OF STOCK"), "{html}");
    assert!(!html.contains("ADD TO CART"), "{html}");
    assert!(html.contains("disabled"), "{html}");
}

#[derive(Properties, PartialEq)]
struct QueryHostProps {
    state: QueryState<Rc<Product>>,
}

#[function_component(QueryHost)]
fn query_host(p: &QueryHostProps) -> Html {
    render_query_state(&p.state, &usd(), &Callback::noop())
}

fn render_state(state: QueryState<Rc<Product>>) -> String {
    block_on(LocalServerRenderer::<QueryHost>::with_props(QueryHostProps { state }).render())
}

#[test]
fn query_states_render_loading_error_and_product() {
    let html = render_state(QueryState::Loading);
    assert!(html.contains("Loading..."), "{html}");

    let html = render_state(QueryState::Error("Product not found: ps-9".into()));
    assert!(html.contains("Product not found: ps-9"), "{html}");
    assert!(!html.contains("productscreen"), "{html}");

    let html = render_state(QueryState::Ready(Rc::new(console(true))));
    assert!(html.contains("productscreen"), "{html}");
    assert!(html.contains("PlayStation 5"), "{html}");
}

#[test]
fn script_only_description_renders_no_block() {
    let mut product = console(true);
    product.description = "<script>alert('x')</script>".into();
    let html = render_view(product);
    assert!(!html.contains("class=\"description\""), "{html}");
}
