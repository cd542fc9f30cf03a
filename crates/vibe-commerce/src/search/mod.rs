//! Search module.
//!
//! Contains the catalog filter engine and facet helpers.

mod facets;
mod filter;

pub use facets::{categories, size_options};
pub use filter::{filter_products, CategoryFilter, FilterCriteria, PriceRange};
