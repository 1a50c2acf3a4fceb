//! Price lookup by active currency, cart totals and tax.
use crate::cart::CartLine;
use crate::catalog::{Currency, Price};
use crate::money::Money;
use thiserror::Error;

/// Tax share shown on the cart screen, in percent of the subtotal.
pub const TAX_RATE_PCT: i64 = 21;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// The product lists no price in the active currency.
    #[error("no price listed in {label}")]
    MissingCurrency { label: String },
}

/// Find the price whose currency label matches the active currency.
///
/// # Errors
///
/// Returns [`PricingError::MissingCurrency`] when no entry matches; there is no
/// fallback currency.
pub fn get_price<'a>(prices: &'a [Price], active: &Currency) -> Result<&'a Price, PricingError> {
    prices
        .iter()
        .find(|price| price.currency.label == active.label)
        .ok_or_else(|| PricingError::MissingCurrency {
            label: active.label.clone(),
        })
}

/// Sum of unit price times quantity across the cart. Zero for an empty cart.
///
/// # Errors
///
/// Fails on the first line whose product has no price in `active`.
pub fn total_price(lines: &[CartLine], active: &Currency) -> Result<Money, PricingError> {
    lines.iter().try_fold(Money::ZERO, |total, line| {
        let price = get_price(&line.product.prices, active)?;
        Ok(total + price.amount * line.quantity)
    })
}

/// Tax portion of `total` at the fixed storefront rate.
#[must_use]
pub const fn count_tax(total: Money) -> Money {
    total.percent(TAX_RATE_PCT)
}

#[must_use]
pub fn total_quantity(lines: &[CartLine]) -> u32 {
    lines
        .iter()
        .fold(0_u32, |sum, line| sum.saturating_add(line.quantity))
}

/// Derived figures for the cart footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartSummary {
    pub subtotal: Money,
    pub tax: Money,
    pub quantity: u32,
}

impl CartSummary {
    /// Amount the shopper pays. Catalog prices include tax, so this is the subtotal.
    #[must_use]
    pub const fn grand_total(&self) -> Money {
        self.subtotal
    }
}

/// Compute subtotal, tax and quantity for one render pass.
///
/// # Errors
///
/// Propagates [`PricingError`] from [`total_price`].
pub fn summarize(lines: &[CartLine], active: &Currency) -> Result<CartSummary, PricingError> {
    let subtotal = total_price(lines, active)?;
    Ok(CartSummary {
        subtotal,
        tax: count_tax(subtotal),
        quantity: total_quantity(lines),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prices() -> Vec<Price> {
        vec![
            Price {
                amount: Money::from_cents(14469),
                currency: Currency::new("USD", "$"),
            },
            Price {
                amount: Money::from_cents(10400),
                currency: Currency::new("GBP", "£"),
            },
        ]
    }

    #[test]
    fn get_price_matches_on_label_only() {
        let prices = prices();
        let found = get_price(&prices, &Currency::new("GBP", "GBP symbol ignored")).unwrap();
        assert_eq!(found.amount, Money::from_cents(10400));
        assert_eq!(found.currency.symbol, "£");
    }

    #[test]
    fn get_price_reports_missing_currency() {
        let err = get_price(&prices(), &Currency::new("JPY", "¥")).unwrap_err();
        assert_eq!(
            err,
            PricingError::MissingCurrency {
                label: "JPY".into()
            }
        );
        assert_eq!(err.to_string(), "no price listed in JPY");
    }

    #[test]
    fn empty_cart_totals_are_zero() {
        let summary = summarize(&[], &Currency::new("USD", "$")).unwrap();
        assert_eq!(summary.subtotal, Money::ZERO);
        assert_eq!(summary.tax, Money::ZERO);
        assert_eq!(summary.quantity, 0);
    }

    #[test]
    fn tax_is_twenty_one_percent() {
        assert_eq!(count_tax(Money::from_cents(10000)), Money::from_cents(2100));
        assert_eq!(count_tax(Money::from_cents(14469)), Money::from_cents(3038));
    }
}
