use crate::domain::Product;
use crate::domain::product::value_label;
use serde::{Deserialize, Serialize};

/// What a category page is built from. The label shown to the visitor and the
/// value the store was queried with are the same field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPage {
    pub category: String,
    pub products: Vec<Product>,
}

/// The presentational slice of a product used by the card grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub key: String,
    pub title: String,
    pub price: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        // the storage key, so 1 and "1" stay distinct cards
        let key = product.key().unwrap_or_default();

        // first non-empty text field wins, the identifier is the last resort
        let title = ["name", "title"]
            .iter()
            .filter_map(|field| product.get(field).and_then(|v| v.as_str()))
            .find(|s| !s.trim().is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| product.id_label().unwrap_or_default());

        let scalar = |field: &str| {
            product
                .get(field)
                .filter(|v| v.is_string() || v.is_number())
                .map(value_label)
        };

        ProductCard {
            key,
            title,
            price: scalar("price"),
            image: product.get("image").and_then(|v| v.as_str()).map(str::to_owned),
            description: product
                .get("description")
                .and_then(|v| v.as_str())
                .map(str::to_owned),
        }
    }
}
