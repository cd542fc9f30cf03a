//! Cart pricing calculations.

use crate::cart::{item_count, CartLineItem};
use serde::{Deserialize, Serialize};

/// Pricing summary for a cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of price times quantity.
    pub total_price: f64,
    /// Sum of savings against prior prices.
    pub total_discount: f64,
    /// Number of units.
    pub item_count: u64,
}

impl CartPricing {
    /// What the cart would cost at prior prices.
    pub fn full_price(&self) -> f64 {
        self.total_price + self.total_discount
    }

    /// Check if any line is discounted.
    pub fn has_discounts(&self) -> bool {
        self.total_discount > 0.0
    }
}

/// Sum of price times quantity over all lines.
pub fn total_price(lines: &[CartLineItem]) -> f64 {
    lines.iter().map(CartLineItem::line_total).sum()
}

/// Sum of `(old price - price) * quantity` over lines with a prior price.
pub fn total_discount(lines: &[CartLineItem]) -> f64 {
    lines
        .iter()
        .filter_map(|l| l.product.savings().map(|s| s * f64::from(l.quantity)))
        .sum()
}

pub(crate) fn calculate(lines: &[CartLineItem]) -> CartPricing {
    CartPricing {
        total_price: total_price(lines),
        total_discount: total_discount(lines),
        item_count: item_count(lines),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{add, set_quantity};
    use crate::catalog::{NewProduct, Product};
    use crate::ids::ProductId;

    fn product(id: i64, price: f64, old_price: Option<f64>) -> Product {
        Product::from_new(
            ProductId::new(id),
            NewProduct {
                name: format!("Product {}", id),
                price,
                old_price,
                category: "Tees".to_string(),
                image: String::new(),
                sizes: vec!["M".into()],
                colors: vec![],
                rating: 5.0,
                reviews: 0,
                discount: None,
                is_new: false,
                is_trending: false,
                description: None,
            },
        )
    }

    #[test]
    fn test_total_price() {
        let a = product(1, 1290.0, Some(1690.0));
        let b = product(2, 1990.0, None);
        let cart = add(&add(&add(&[], &a, "M"), &a, "M"), &b, "M");
        assert_eq!(total_price(&cart), 4570.0);
    }

    #[test]
    fn test_total_discount_skips_lines_without_prior_price() {
        let a = product(1, 1290.0, Some(1690.0));
        let b = product(2, 1990.0, None);
        let cart = add(&add(&add(&[], &a, "M"), &a, "M"), &b, "M");
        assert_eq!(total_discount(&cart), 800.0);
    }

    #[test]
    fn test_zero_prior_price_adds_no_discount() {
        let a = product(1, 1290.0, Some(0.0));
        let cart = add(&add(&[], &a, "M"), &a, "M");
        assert_eq!(total_discount(&cart), 0.0);
        assert_eq!(total_price(&cart), 2580.0);
        assert!(!calculate(&cart).has_discounts());
    }

    #[test]
    fn test_totals_are_linear_in_quantity() {
        let a = product(1, 1290.0, Some(1690.0));
        let one = add(&[], &a, "M");
        let five = set_quantity(&one, a.id, "M", 5);
        assert_eq!(total_price(&five), 5.0 * total_price(&one));
        assert_eq!(total_discount(&five), 5.0 * total_discount(&one));
    }

    #[test]
    fn test_empty_cart() {
        let pricing = calculate(&[]);
        assert_eq!(pricing.total_price, 0.0);
        assert_eq!(pricing.item_count, 0);
        assert!(!pricing.has_discounts());
    }

    #[test]
    fn test_full_price() {
        let a = product(1, 1290.0, Some(1690.0));
        let pricing = calculate(&add(&[], &a, "M"));
        assert_eq!(pricing.full_price(), 1690.0);
        assert!(pricing.has_discounts());
    }
}
