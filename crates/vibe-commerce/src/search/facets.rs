//! Sidebar facets derived from the catalog.

use crate::catalog::Product;

/// Distinct category names in first-seen order.
pub fn categories(products: &[Product]) -> Vec<String> {
    distinct(products.iter().map(|p| p.category.as_str()))
}

/// Distinct sizes in first-seen order.
pub fn size_options(products: &[Product]) -> Vec<String> {
    distinct(products.iter().flat_map(|p| p.sizes.iter().map(String::as_str)))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facets_keep_first_seen_order() {
        let json = r#"[
            {"id": 1, "name": "A", "price": 1, "category": "Shoes", "sizes": ["40", "41"]},
            {"id": 2, "name": "B", "price": 1, "category": "Hats", "sizes": ["M"]},
            {"id": 3, "name": "C", "price": 1, "category": "Shoes", "sizes": ["41", "M"]}
        ]"#;
        let products: Vec<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(categories(&products), vec!["Shoes", "Hats"]);
        assert_eq!(size_options(&products), vec!["40", "41", "M"]);
    }
}
