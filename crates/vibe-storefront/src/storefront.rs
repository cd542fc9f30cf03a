//! Per-visitor storefront state.

use crate::source::ProductSource;
use crate::StorefrontError;
use vibe_commerce::cart::{Cart, CartPricing};
use vibe_commerce::catalog::Product;
use vibe_commerce::search::{self, CategoryFilter, FilterCriteria, PriceRange};
use vibe_commerce::ProductId;

/// The catalog a visitor is browsing, their filters and their cart.
#[derive(Debug, Clone, Default)]
pub struct Storefront {
    catalog: Vec<Product>,
    criteria: FilterCriteria,
    cart: Cart,
}

impl Storefront {
    /// Create an empty storefront.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storefront showing `catalog`.
    pub fn with_catalog(catalog: Vec<Product>) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// Replace the catalog. Filters and cart are kept.
    pub fn set_catalog(&mut self, catalog: Vec<Product>) {
        self.catalog = catalog;
    }

    /// Reload the catalog from `source`, returning the new product count.
    ///
    /// On failure the current catalog is left as it was.
    pub async fn refresh(&mut self, source: &dyn ProductSource) -> Result<usize, StorefrontError> {
        let products = source.list_products().await?;
        let count = products.len();
        self.set_catalog(products);
        Ok(count)
    }

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn select_category(&mut self, category: impl Into<CategoryFilter>) {
        self.criteria.category = category.into();
    }

    pub fn set_price_range(&mut self, range: PriceRange) {
        self.criteria.price = range;
    }

    /// Toggle a size checkbox in the sidebar.
    pub fn toggle_size(&mut self, size: &str) {
        self.criteria.toggle_size(size);
    }

    /// Check every size in `sizes`. Sizes already checked stay checked.
    pub fn select_sizes<I, S>(&mut self, sizes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.criteria.sizes.extend(sizes.into_iter().map(Into::into));
    }

    /// Clear all filters.
    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::new();
    }

    /// Products matching the current filters, in catalog order.
    pub fn visible_products(&self) -> Vec<Product> {
        search::filter_products(&self.catalog, &self.criteria)
    }

    /// Category names for the sidebar.
    pub fn categories(&self) -> Vec<String> {
        search::categories(&self.catalog)
    }

    /// Size names for the sidebar.
    pub fn size_options(&self) -> Vec<String> {
        search::size_options(&self.catalog)
    }

    /// Find a product in the current catalog.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.catalog.iter().find(|p| p.id == id)
    }

    /// Put one unit of a catalog product into the cart.
    pub fn add_to_cart(&mut self, id: ProductId, size: &str) -> Result<(), StorefrontError> {
        let product = self
            .product(id)
            .ok_or(StorefrontError::ProductNotFound(id))?;
        if !product.has_size(size) {
            return Err(StorefrontError::SizeUnavailable {
                id,
                size: size.to_string(),
            });
        }
        let product = product.clone();
        self.cart.add_item(&product, size);
        Ok(())
    }

    pub fn remove_from_cart(&mut self, id: ProductId, size: &str) {
        self.cart.remove_item(id, size);
    }

    /// Set a line's quantity; zero removes it.
    pub fn update_quantity(&mut self, id: ProductId, size: &str, quantity: u32) {
        self.cart.update_quantity(id, size, quantity);
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Cart totals for the checkout sheet.
    pub fn pricing(&self) -> CartPricing {
        self.cart.calculate_pricing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Product> {
        serde_json::from_str(
            r#"[
            {"id": 1, "name": "Футболка Dino", "price": 1290, "oldPrice": 1690,
             "category": "Футболки", "sizes": ["4-5 лет", "6-7 лет"], "isNew": true},
            {"id": 2, "name": "Платье Sunny", "price": 1990,
             "category": "Платья", "sizes": ["6-7 лет"], "isTrending": true},
            {"id": 3, "name": "Куртка Storm", "price": 5990,
             "category": "Куртки", "sizes": ["8-9 лет"]}
        ]"#,
        )
        .unwrap()
    }

    fn ids(products: &[Product]) -> Vec<i64> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_filters_drive_visible_products() {
        let mut store = Storefront::with_catalog(catalog());
        assert_eq!(ids(&store.visible_products()), vec![1, 2, 3]);

        store.select_category(CategoryFilter::New);
        assert_eq!(ids(&store.visible_products()), vec![1]);

        store.select_category("All");
        store.toggle_size("6-7 лет");
        assert_eq!(ids(&store.visible_products()), vec![1, 2]);

        store.set_price_range(PriceRange::new(1500.0, 15000.0));
        assert_eq!(ids(&store.visible_products()), vec![2]);

        store.reset_filters();
        assert_eq!(store.visible_products().len(), 3);
    }

    #[test]
    fn test_select_sizes_is_idempotent() {
        let mut store = Storefront::with_catalog(catalog());
        store.select_sizes(["8-9 лет", "8-9 лет"]);
        assert_eq!(ids(&store.visible_products()), vec![3]);

        store.select_sizes(["8-9 лет", "4-5 лет"]);
        assert_eq!(store.criteria().sizes.len(), 2);
        assert_eq!(ids(&store.visible_products()), vec![1, 3]);
    }

    #[test]
    fn test_sidebar_facets() {
        let store = Storefront::with_catalog(catalog());
        assert_eq!(store.categories(), vec!["Футболки", "Платья", "Куртки"]);
        assert_eq!(store.size_options(), vec!["4-5 лет", "6-7 лет", "8-9 лет"]);
    }

    #[test]
    fn test_cart_session() {
        let mut store = Storefront::with_catalog(catalog());
        store.add_to_cart(ProductId::new(1), "4-5 лет").unwrap();
        store.add_to_cart(ProductId::new(1), "4-5 лет").unwrap();
        store.add_to_cart(ProductId::new(2), "6-7 лет").unwrap();

        let pricing = store.pricing();
        assert_eq!(pricing.total_price, 4570.0);
        assert_eq!(pricing.total_discount, 800.0);
        assert_eq!(pricing.item_count, 3);

        store.update_quantity(ProductId::new(1), "4-5 лет", 0);
        assert_eq!(store.cart().items.len(), 1);

        store.remove_from_cart(ProductId::new(2), "6-7 лет");
        assert!(store.cart().is_empty());

        store.add_to_cart(ProductId::new(3), "8-9 лет").unwrap();
        store.clear_cart();
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_add_to_cart_checks_catalog() {
        let mut store = Storefront::with_catalog(catalog());
        assert!(matches!(
            store.add_to_cart(ProductId::new(99), "4-5 лет"),
            Err(StorefrontError::ProductNotFound(_))
        ));
        assert!(matches!(
            store.add_to_cart(ProductId::new(3), "2-3 года"),
            Err(StorefrontError::SizeUnavailable { .. })
        ));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_set_catalog_keeps_cart() {
        let mut store = Storefront::with_catalog(catalog());
        store.add_to_cart(ProductId::new(2), "6-7 лет").unwrap();
        store.set_catalog(Vec::new());
        assert_eq!(store.cart().item_count(), 1);
        assert!(store.visible_products().is_empty());
    }
}
