//! Cart and line item types.

use crate::cart::{pricing, CartPricing};
use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product in a chosen size with a quantity.
///
/// Lines are keyed by `(product id, selected size)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    #[serde(flatten)]
    pub product: Product,
    /// Quantity, always positive.
    pub quantity: u32,
    /// Size picked by the shopper.
    pub selected_size: String,
}

impl CartLineItem {
    /// Create a line with quantity 1.
    pub fn new(product: Product, size: impl Into<String>) -> Self {
        Self {
            product,
            quantity: 1,
            selected_size: size.into(),
        }
    }

    /// Check whether this line holds `id` in `size`.
    pub fn is(&self, id: ProductId, size: &str) -> bool {
        self.product.id == id && self.selected_size == size
    }

    /// Price times quantity.
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// Add one unit of `product` in `size`.
///
/// Increments the matching line or appends a new one.
pub fn add(lines: &[CartLineItem], product: &Product, size: &str) -> Vec<CartLineItem> {
    if lines.iter().any(|l| l.is(product.id, size)) {
        lines
            .iter()
            .map(|l| {
                if l.is(product.id, size) {
                    CartLineItem {
                        quantity: l.quantity.saturating_add(1),
                        ..l.clone()
                    }
                } else {
                    l.clone()
                }
            })
            .collect()
    } else {
        let mut next = lines.to_vec();
        next.push(CartLineItem::new(product.clone(), size));
        next
    }
}

/// Drop the line for `id` in `size`, if any.
pub fn remove(lines: &[CartLineItem], id: ProductId, size: &str) -> Vec<CartLineItem> {
    lines.iter().filter(|l| !l.is(id, size)).cloned().collect()
}

/// Replace the quantity of the line for `id` in `size`.
///
/// A quantity of zero removes the line.
pub fn set_quantity(
    lines: &[CartLineItem],
    id: ProductId,
    size: &str,
    quantity: u32,
) -> Vec<CartLineItem> {
    if quantity == 0 {
        return remove(lines, id, size);
    }
    lines
        .iter()
        .map(|l| {
            if l.is(id, size) {
                CartLineItem {
                    quantity,
                    ..l.clone()
                }
            } else {
                l.clone()
            }
        })
        .collect()
}

/// Total number of units (the cart badge).
pub fn item_count(lines: &[CartLineItem]) -> u64 {
    lines.iter().map(|l| u64::from(l.quantity)).sum()
}

/// A session cart.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Lines in insertion order.
    pub items: Vec<CartLineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product` in `size`.
    pub fn add_item(&mut self, product: &Product, size: &str) {
        self.items = add(&self.items, product, size);
    }

    /// Remove a line.
    pub fn remove_item(&mut self, id: ProductId, size: &str) {
        self.items = remove(&self.items, id, size);
    }

    /// Update a line's quantity; zero removes it.
    pub fn update_quantity(&mut self, id: ProductId, size: &str, quantity: u32) {
        self.items = set_quantity(&self.items, id, size, quantity);
    }

    /// Get the line for `id` in `size`.
    pub fn get_item(&self, id: ProductId, size: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|l| l.is(id, size))
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get total unit count.
    pub fn item_count(&self) -> u64 {
        item_count(&self.items)
    }

    /// Calculate cart pricing.
    pub fn calculate_pricing(&self) -> CartPricing {
        pricing::calculate(&self.items)
    }
}
