//! The admin product form.
//!
//! [`ProductForm`] mirrors the form inputs as text. Parsing and the derived
//! fields (discount, color list, id) happen in [`ProductForm::to_new_product`]
//! and [`ProductForm::into_product`].

use crate::AdminError;
use serde::{Deserialize, Serialize};
use vibe_commerce::catalog::{discount_percent, NewProduct, Product};
use vibe_commerce::ProductId;

/// Categories offered by the category select.
pub const CATEGORIES: [&str; 6] = ["Футболки", "Платья", "Худи", "Брюки", "Куртки", "Обувь"];

/// Sizes offered as checkboxes.
pub const AVAILABLE_SIZES: [&str; 6] = [
    "2-3 года",
    "4-5 лет",
    "6-7 лет",
    "8-9 лет",
    "10-11 лет",
    "12-13 лет",
];

const DEFAULT_RATING: &str = "5.0";
const DEFAULT_REVIEWS: &str = "0";

/// Form state for creating or editing a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    /// Blank when the product is not on sale.
    pub old_price: String,
    pub image: String,
    pub category: String,
    /// Checked sizes, in the order they were checked.
    pub sizes: Vec<String>,
    /// Comma-separated color list.
    pub colors: String,
    pub rating: String,
    pub reviews: String,
    pub is_new: bool,
    pub is_trending: bool,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            old_price: String::new(),
            image: String::new(),
            category: CATEGORIES[0].to_string(),
            sizes: Vec::new(),
            colors: String::new(),
            rating: DEFAULT_RATING.to_string(),
            reviews: DEFAULT_REVIEWS.to_string(),
            is_new: false,
            is_trending: false,
        }
    }
}

impl ProductForm {
    /// Create a blank form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill the form for editing `product`.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            old_price: product.old_price.map(|p| p.to_string()).unwrap_or_default(),
            image: product.image.clone(),
            category: product.category.clone(),
            sizes: product.sizes.clone(),
            colors: product.colors.join(", "),
            rating: product.rating.to_string(),
            reviews: product.reviews.to_string(),
            is_new: product.is_new,
            is_trending: product.is_trending,
        }
    }

    /// Check or uncheck a size.
    pub fn toggle_size(&mut self, size: &str) {
        if let Some(pos) = self.sizes.iter().position(|s| s == size) {
            self.sizes.remove(pos);
        } else {
            self.sizes.push(size.to_string());
        }
    }

    /// Clear the form after a successful submit.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Parse the form into a product body without an id.
    pub fn to_new_product(&self) -> Result<NewProduct, AdminError> {
        let name = required("name", &self.name)?;
        let price = parse_number("price", required("price", &self.price)?)?;
        let image = required("image", &self.image)?;
        let category = required("category", &self.category)?;
        required("colors", &self.colors)?;

        let old_price = match self.old_price.trim() {
            "" => None,
            value => Some(parse_number("oldPrice", value)?),
        };
        let discount = old_price.and_then(|old| discount_percent(price, old));

        let rating = parse_number("rating", self.rating.trim())?;
        let reviews = numeric_prefix(self.reviews.trim(), false)
            .parse::<u32>()
            .map_err(|_| invalid("reviews", &self.reviews))?;

        Ok(NewProduct {
            name: name.to_string(),
            price,
            old_price,
            category: category.to_string(),
            image: image.to_string(),
            sizes: self.sizes.clone(),
            colors: split_colors(&self.colors),
            rating,
            reviews,
            discount,
            is_new: self.is_new,
            is_trending: self.is_trending,
            description: None,
        })
    }

    /// Parse the form into a full product.
    ///
    /// Keeps `existing_id` when editing; a new product gets a
    /// timestamp-based id.
    pub fn into_product(&self, existing_id: Option<ProductId>) -> Result<Product, AdminError> {
        let id = existing_id.unwrap_or_else(ProductId::generate);
        Ok(Product::from_new(id, self.to_new_product()?))
    }
}

/// Human label of a form field.
pub fn field_label(field: &str) -> &str {
    match field {
        "name" => "Название товара",
        "price" => "Цена",
        "oldPrice" => "Старая цена",
        "image" => "Ссылка на изображение",
        "category" => "Категория",
        "colors" => "Цвета",
        "rating" => "Рейтинг",
        "reviews" => "Отзывов",
        other => other,
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, AdminError> {
    match value.trim() {
        "" => Err(AdminError::MissingField(field)),
        v => Ok(v),
    }
}

/// Parse the leading number of `value`; trailing text such as a currency
/// sign is ignored.
fn parse_number(field: &'static str, value: &str) -> Result<f64, AdminError> {
    numeric_prefix(value.trim(), true)
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| invalid(field, value))
}

/// The longest leading run of `value` that reads as a number: an optional
/// sign and digits, plus a fraction and exponent when `fractional` is set.
fn numeric_prefix(value: &str, fractional: bool) -> &str {
    let bytes = value.as_bytes();
    let digits = |from: usize| {
        bytes
            .get(from..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let whole = digits(end);
    end += whole;
    let mut fraction = 0;
    if fractional && bytes.get(end) == Some(&b'.') {
        fraction = digits(end + 1);
        if whole + fraction > 0 {
            end += 1 + fraction;
        }
    }
    if whole + fraction == 0 {
        return "";
    }
    if fractional && matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let count = digits(exponent);
        if count > 0 {
            end = exponent + count;
        }
    }
    &value[..end]
}

fn invalid(field: &'static str, value: &str) -> AdminError {
    AdminError::InvalidNumber {
        field,
        value: value.to_string(),
    }
}

fn split_colors(colors: &str) -> Vec<String> {
    colors
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from)
        .collect()
}
