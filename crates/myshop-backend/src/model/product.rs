use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products.
///
/// Serializes transparently as the JSON number the backend uses for
/// product ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// A purchasable product as returned by `GET /api/products`.
///
/// Immutable once received; the storefront never writes products back.
/// The backend may omit `description` and `image`, so both default when
/// absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier assigned by the backend
    /// * `title` - Display title
    /// * `price` - Unit price
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            price,
            image: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_product() {
        let json = r#"{
            "id": 1,
            "title": "Widget",
            "description": "A widget",
            "price": 19.5,
            "image": "http://cdn.example.com/widget.png"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId(1));
        assert_eq!(product.title, "Widget");
        assert_eq!(product.price, 19.5);
        assert_eq!(product.image.as_deref(), Some("http://cdn.example.com/widget.png"));
    }

    #[test]
    fn tolerates_missing_description_and_image() {
        let json = r#"{"id": 2, "title": "Bare", "price": 5.0}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.description, "");
        assert_eq!(product.image, None);
    }

    #[test]
    fn product_id_is_a_plain_number_on_the_wire() {
        let product = Product::new(7u64, "Widget", 1.0);
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["id"], serde_json::json!(7));
    }
}
