//! Read-only attribute listing for a cart line.
use super::attribute_item::AttributeItem;
use storefront_core::CartLine;
use yew::prelude::*;

/// Every attribute of the line's product with the line's choice highlighted.
///
/// `context` keeps element ids unique between the cart page and the minicart.
#[must_use]
pub fn render_line_attributes(line: &CartLine, context: &'static str) -> Html {
    html! {
        <div class={classes!(format!("{context}-attributes"))}>
            { for line.product.attributes.iter().map(|attribute| {
                let name = AttrValue::from(attribute.name.clone());
                let active = line.selection.get(&attribute.name).cloned();
                html! {
                    <div class="attribute" key={attribute.name.clone()}>
                        <div class={format!("{context}-label")}>{ format!("{}:", attribute.name) }</div>
                        <div class="attribute-items">
                            { for attribute.items.iter().map(|item| html! {
                                <AttributeItem
                                    key={item.id.clone()}
                                    item={item.clone()}
                                    kind={attribute.kind}
                                    attribute_name={name.clone()}
                                    active={active.clone()}
                                    index={AttrValue::Static(context)}
                                />
                            }) }
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
