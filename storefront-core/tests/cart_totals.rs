use storefront_core::{
    AttributeItem, AttributeSelection, Cart, CartMode, CartRequest, Currency, Money, Price,
    PricingError, Product, ProductForm, SubmitOutcome, count_tax, summarize, total_price,
};

fn usd() -> Currency {
    Currency::new("USD", "$")
}

fn product(id: &str, usd_cents: i64) -> Product {
    Product {
        id: id.to_string(),
        name: format!("{id} name"),
        brand: "Brand".into(),
        category: "tech".into(),
        in_stock: true,
        gallery: vec![format!("https://cdn.example/{id}.png")],
        description: String::new(),
        attributes: vec![],
        prices: vec![
            Price {
                amount: Money::from_cents(usd_cents),
                currency: usd(),
            },
            Price {
                amount: Money::from_cents(usd_cents * 2),
                currency: Currency::new("AUD", "A$"),
            },
        ],
    }
}

fn add(cart: &mut Cart, product: &Product, times: u32) {
    let request = CartRequest {
        product: product.clone(),
        selection: AttributeSelection::new(),
        mode: CartMode::Increase,
    };
    for _ in 0..times {
        cart.apply(&request);
    }
}

#[test]
fn two_line_cart_matches_worked_example() {
    let mut cart = Cart::new();
    add(&mut cart, &product("jacket", 1000), 2);
    add(&mut cart, &product("cap", 500), 1);

    let summary = summarize(&cart.lines, &usd()).expect("all lines priced in USD");
    assert_eq!(summary.subtotal, Money::from_cents(2500));
    assert_eq!(summary.grand_total().to_string(), "25.00");
    assert_eq!(summary.tax.to_string(), "5.25");
    assert_eq!(summary.quantity, 3);
    assert_eq!(cart.total_quantity(), 3);
}

#[test]
fn totals_follow_the_active_currency() {
    let mut cart = Cart::new();
    add(&mut cart, &product("jacket", 1000), 2);
    let aud = Currency::new("AUD", "A$");
    assert_eq!(total_price(&cart.lines, &aud), Ok(Money::from_cents(4000)));
    assert_eq!(count_tax(Money::from_cents(4000)), Money::from_cents(840));
}

#[test]
fn unpriced_currency_fails_the_whole_total() {
    let mut cart = Cart::new();
    add(&mut cart, &product("jacket", 1000), 1);
    let yen = Currency::new("JPY", "¥");
    assert_eq!(
        summarize(&cart.lines, &yen),
        Err(PricingError::MissingCurrency {
            label: "JPY".into()
        })
    );
}

#[test]
fn product_form_feeds_the_cart() {
    let mut jacket = product("jacket", 51847);
    jacket.attributes = vec![storefront_core::Attribute {
        id: "Size".into(),
        name: "Size".into(),
        kind: storefront_core::AttributeKind::Text,
        items: vec![AttributeItem {
            id: "L".into(),
            value: "L".into(),
            display_value: "Large".into(),
        }],
    }];

    let mut cart = Cart::new();
    let mut form = ProductForm::default();
    assert_eq!(form.submit(&jacket), SubmitOutcome::Incomplete);

    form.select_attribute("Size", jacket.attributes[0].items[0].clone());
    let SubmitOutcome::Ready(request) = form.submit(&jacket) else {
        panic!("form should be complete");
    };
    cart.apply(&request);
    cart.apply(&request);

    assert_eq!(cart.lines.len(), 1);
    assert_eq!(cart.lines[0].quantity, 2);
    assert_eq!(
        cart.lines[0].selection.get("Size").map(|i| i.display_value.as_str()),
        Some("Large")
    );
    assert_eq!(
        total_price(&cart.lines, &usd()).map(|m| m.to_string()),
        Ok("1036.94".to_string())
    );
}
