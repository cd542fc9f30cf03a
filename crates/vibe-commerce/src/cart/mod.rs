//! Shopping cart module.
//!
//! Cart operations are pure functions over a slice of line items; [`Cart`]
//! wraps them for callers holding session state.

mod cart;
mod pricing;

pub use cart::{add, item_count, remove, set_quantity, Cart, CartLineItem};
pub use pricing::{total_discount, total_price, CartPricing};
