use crate::features::products::model::{CategoryPage, ProductCard};
use serde::Serialize;
use tera::{Context, Tera};

const CATEGORY_TEMPLATE: &str = "category.html";

#[derive(Serialize)]
struct CategoryView<'a> {
    category: &'a str,
    cards: Vec<ProductCard>,
}

/// Renders the card grid. Templates are compiled into the binary and
/// `.html` templates are autoescaped by tera.
pub struct CategoryPageRenderer {
    engine: Tera,
}

impl CategoryPageRenderer {
    pub fn new() -> Result<Self, tera::Error> {
        let mut engine = Tera::default();

        engine.add_raw_templates(vec![
            (
                "product_card.html",
                include_str!("../../../templates/product_card.html"),
            ),
            (
                CATEGORY_TEMPLATE,
                include_str!("../../../templates/category.html"),
            ),
        ])?;

        Ok(Self { engine })
    }

    pub fn render(&self, page: &CategoryPage) -> Result<String, tera::Error> {
        let view = CategoryView {
            category: &page.category,
            cards: page.products.iter().map(ProductCard::from).collect(),
        };

        let context = Context::from_serialize(&view)?;
        self.engine.render(CATEGORY_TEMPLATE, &context)
    }
}
