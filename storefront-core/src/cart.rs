//! Shopping cart state and the add-to-cart reducer.
use crate::catalog::Product;
use crate::selection::AttributeSelection;
use serde::{Deserialize, Serialize};

/// Direction of a cart change request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CartMode {
    /// Insert the line, or bump its quantity when the same product and
    /// selections are already in the cart. This is what "+" and the product
    /// page's add-to-cart both send.
    #[default]
    Increase,
    /// Drop one unit; the line disappears when it reaches zero.
    Decrease,
}

/// A request from a display component to change the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartRequest {
    pub product: Product,
    pub selection: AttributeSelection,
    #[serde(default)]
    pub mode: CartMode,
}

impl CartRequest {
    /// Request one more unit of an existing line.
    #[must_use]
    pub fn increase(line: &CartLine) -> Self {
        Self {
            product: line.product.clone(),
            selection: line.selection.clone(),
            mode: CartMode::Increase,
        }
    }

    /// Request one less unit of an existing line.
    #[must_use]
    pub fn decrease(line: &CartLine) -> Self {
        Self {
            mode: CartMode::Decrease,
            ..Self::increase(line)
        }
    }
}

/// One product-plus-selections entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    /// Always at least 1 while the line is in the cart
    pub quantity: u32,
    pub selection: AttributeSelection,
}

impl CartLine {
    /// Whether this line holds `product_id` with exactly these selections.
    #[must_use]
    pub fn matches(&self, product_id: &str, selection: &AttributeSelection) -> bool {
        self.product.id == product_id && &self.selection == selection
    }
}

/// Shopping cart state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Create a new empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn find_line_mut(
        &mut self,
        product_id: &str,
        selection: &AttributeSelection,
    ) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.matches(product_id, selection))
    }

    /// Add one unit of `product` with `selection`.
    /// Returns the new quantity for that line.
    pub fn add_item(&mut self, product: &Product, selection: &AttributeSelection) -> u32 {
        if let Some(line) = self.find_line_mut(&product.id, selection) {
            line.quantity = line.quantity.saturating_add(1);
            line.quantity
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
                selection: selection.clone(),
            });
            1
        }
    }

    /// Remove one unit of a line.
    /// Returns the new quantity (0 if the line is removed or was never there).
    pub fn remove_item(&mut self, product_id: &str, selection: &AttributeSelection) -> u32 {
        let Some(line) = self.find_line_mut(product_id, selection) else {
            return 0;
        };
        line.quantity = line.quantity.saturating_sub(1);
        let remaining = line.quantity;
        if remaining == 0 {
            self.lines
                .retain(|line| !line.matches(product_id, selection));
        }
        remaining
    }

    /// Apply a display component's request. Returns the line's resulting quantity.
    pub fn apply(&mut self, request: &CartRequest) -> u32 {
        match request.mode {
            CartMode::Increase => self.add_item(&request.product, &request.selection),
            CartMode::Decrease => self.remove_item(&request.product.id, &request.selection),
        }
    }

    /// Sum of quantities across every line.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        crate::pricing::total_quantity(&self.lines)
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
