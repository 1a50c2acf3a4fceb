//! One selectable attribute value, drawn as a swatch or a text chip.
use storefront_core::{AttributeItem as Item, AttributeKind};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub item: Item,
    pub kind: AttributeKind,
    pub attribute_name: AttrValue,
    /// Item currently selected for this attribute, if any
    #[prop_or_default]
    pub active: Option<Item>,
    /// Distinguishes the same item rendered in several places (`"cart"`, `"minicart"`, or a position)
    #[prop_or_default]
    pub index: AttrValue,
    /// Selection handler; read-only when absent
    #[prop_or_default]
    pub on_select: Option<Callback<(AttrValue, Item)>>,
}

#[function_component(AttributeItem)]
pub fn attribute_item(p: &Props) -> Html {
    let selected = p.active.as_ref().is_some_and(|active| active.id == p.item.id);

    let onclick = p.on_select.clone().map(|cb| {
        let name = p.attribute_name.clone();
        let item = p.item.clone();
        Callback::from(move |_: MouseEvent| cb.emit((name.clone(), item.clone())))
    });

    let class = classes!(
        "attribute-item",
        match p.kind {
            AttributeKind::Swatch => "swatch",
            AttributeKind::Text => "text",
        },
        selected.then_some("selected"),
        p.on_select.is_none().then_some("readonly"),
    );
    let id = format!("{}-{}-{}", p.attribute_name, p.item.id, p.index);

    match p.kind {
        AttributeKind::Swatch => html! {
            <button type="button" {id} {class} {onclick}
                title={p.item.display_value.clone()}
                aria-label={p.item.display_value.clone()}
                aria-pressed={selected.to_string()}
                disabled={p.on_select.is_none()}
                style={format!("background-color: {}", p.item.value)}>
            </button>
        },
        AttributeKind::Text => html! {
            <button type="button" {id} {class} {onclick}
                aria-pressed={selected.to_string()}
                disabled={p.on_select.is_none()}>
                { p.item.value.clone() }
            </button>
        },
    }
}
