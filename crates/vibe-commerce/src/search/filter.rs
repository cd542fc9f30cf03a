//! Catalog filter engine.

use crate::catalog::Product;
use crate::error::CommerceError;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Category selection in the catalog sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Every product.
    #[default]
    All,
    /// Products flagged as new.
    New,
    /// Products flagged as trending.
    Trending,
    /// Products whose category equals the name exactly.
    Named(String),
}

impl CategoryFilter {
    /// Create a filter for an exact category name.
    pub fn named(name: impl Into<String>) -> Self {
        CategoryFilter::Named(name.into())
    }

    /// Get the display label.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::New => "New",
            CategoryFilter::Trending => "Trending",
            CategoryFilter::Named(name) => name,
        }
    }

    /// Check whether a product passes this category selection.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::New => product.is_new,
            CategoryFilter::Trending => product.is_trending,
            CategoryFilter::Named(name) => product.category == *name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for CategoryFilter {
    fn from(label: &str) -> Self {
        match label {
            "All" => CategoryFilter::All,
            "New" => CategoryFilter::New,
            "Trending" => CategoryFilter::Trending,
            name => CategoryFilter::Named(name.to_string()),
        }
    }
}

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// Create a price range.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Range with no upper bound.
    pub fn at_least(min: f64) -> Self {
        Self::new(min, f64::INFINITY)
    }

    /// Check whether a price lies within the bounds.
    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::at_least(0.0)
    }
}

impl FromStr for PriceRange {
    type Err = CommerceError;

    /// Parse `min..max`, `min..` or `..max`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CommerceError::InvalidPriceRange(s.to_string());
        let (min, max) = s.split_once("..").ok_or_else(invalid)?;

        let min = match min.trim() {
            "" => 0.0,
            v => v.parse::<f64>().map_err(|_| invalid())?,
        };
        let max = match max.trim() {
            "" => f64::INFINITY,
            v => v.parse::<f64>().map_err(|_| invalid())?,
        };

        if min.is_nan() || max.is_nan() || min > max {
            return Err(invalid());
        }
        Ok(Self::new(min, max))
    }
}

/// Category, price range and size set used to narrow the catalog.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub price: PriceRange,
    pub sizes: BTreeSet<String>,
}

impl FilterCriteria {
    /// Criteria that pass every product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category selection.
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the price bounds.
    pub fn with_price(mut self, price: PriceRange) -> Self {
        self.price = price;
        self
    }

    /// Add sizes to the selection.
    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes.extend(sizes.into_iter().map(Into::into));
        self
    }

    /// Select a size if unselected, otherwise unselect it.
    pub fn toggle_size(&mut self, size: &str) {
        if !self.sizes.remove(size) {
            self.sizes.insert(size.to_string());
        }
    }

    /// Check whether a product passes all three filters.
    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(product)
            && self.price.contains(product.price)
            && (self.sizes.is_empty() || product.sizes.iter().any(|s| self.sizes.contains(s)))
    }
}

/// Reduce a product list to the products matching `criteria`.
///
/// Keeps the relative order of the input.
pub fn filter_products(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    products
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NewProduct;
    use crate::ids::ProductId;

    fn product(id: i64, category: &str, price: f64, sizes: &[&str]) -> Product {
        Product::from_new(
            ProductId::new(id),
            NewProduct {
                name: format!("Product {}", id),
                price,
                old_price: None,
                category: category.to_string(),
                image: String::new(),
                sizes: sizes.iter().map(|s| s.to_string()).collect(),
                colors: vec![],
                rating: 4.5,
                reviews: 10,
                discount: None,
                is_new: false,
                is_trending: false,
                description: None,
            },
        )
    }

    fn catalog() -> Vec<Product> {
        let mut hoodie = product(1, "Hoodies", 4990.0, &["XS", "S", "M", "L", "XL"]);
        hoodie.is_new = true;
        hoodie.is_trending = true;
        let mut jacket = product(2, "Jackets", 7990.0, &["S", "M", "L", "XL"]);
        jacket.is_trending = true;
        let mut sneakers = product(3, "Shoes", 8990.0, &["38", "39", "40"]);
        sneakers.is_new = true;
        let tee = product(4, "Hoodies", 1290.0, &["M"]);
        vec![hoodie, jacket, sneakers, tee]
    }

    fn ids(products: &[Product]) -> Vec<i64> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_default_criteria_pass_everything() {
        let all = catalog();
        assert_eq!(filter_products(&all, &FilterCriteria::new()), all);
    }

    #[test]
    fn test_category_filters() {
        let all = catalog();
        let new = FilterCriteria::new().with_category(CategoryFilter::New);
        assert_eq!(ids(&filter_products(&all, &new)), vec![1, 3]);

        let trending = FilterCriteria::new().with_category(CategoryFilter::Trending);
        assert_eq!(ids(&filter_products(&all, &trending)), vec![1, 2]);

        let hoodies = FilterCriteria::new().with_category("Hoodies");
        assert_eq!(ids(&filter_products(&all, &hoodies)), vec![1, 4]);

        let unknown = FilterCriteria::new().with_category("hoodies");
        assert!(filter_products(&all, &unknown).is_empty());
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let all = catalog();
        let criteria = FilterCriteria::new().with_price(PriceRange::new(4990.0, 7990.0));
        assert_eq!(ids(&filter_products(&all, &criteria)), vec![1, 2]);
    }

    #[test]
    fn test_size_filter_needs_any_overlap() {
        let all = catalog();
        let criteria = FilterCriteria::new().with_sizes(["XS", "40"]);
        assert_eq!(ids(&filter_products(&all, &criteria)), vec![1, 3]);
    }

    #[test]
    fn test_filters_combine() {
        let all = catalog();
        let criteria = FilterCriteria::new()
            .with_category("Hoodies")
            .with_price(PriceRange::new(0.0, 2000.0))
            .with_sizes(["M"]);
        assert_eq!(ids(&filter_products(&all, &criteria)), vec![4]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let all = catalog();
        let criteria = FilterCriteria::new()
            .with_category(CategoryFilter::Trending)
            .with_sizes(["L"]);
        let once = filter_products(&all, &criteria);
        assert_eq!(filter_products(&once, &criteria), once);
    }

    #[test]
    fn test_toggle_size() {
        let mut criteria = FilterCriteria::new();
        criteria.toggle_size("M");
        assert!(criteria.sizes.contains("M"));
        criteria.toggle_size("M");
        assert!(criteria.sizes.is_empty());
    }

    #[test]
    fn test_category_from_label() {
        assert_eq!(CategoryFilter::from("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from("New"), CategoryFilter::New);
        assert_eq!(CategoryFilter::from("Trending"), CategoryFilter::Trending);
        assert_eq!(CategoryFilter::from("Shoes"), CategoryFilter::named("Shoes"));
        assert_eq!(CategoryFilter::named("Shoes").to_string(), "Shoes");
    }

    #[test]
    fn test_price_range_parse() {
        assert_eq!("100..500".parse::<PriceRange>().unwrap(), PriceRange::new(100.0, 500.0));
        assert_eq!("100..".parse::<PriceRange>().unwrap(), PriceRange::at_least(100.0));
        assert_eq!("..500".parse::<PriceRange>().unwrap(), PriceRange::new(0.0, 500.0));
        assert!("500..100".parse::<PriceRange>().is_err());
        assert!("cheap".parse::<PriceRange>().is_err());
    }
}
