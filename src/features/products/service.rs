use crate::database::ProductRepository;
use crate::domain::{CategoryQuery, Product};
use crate::error::StoreError;
use crate::features::products::model::CategoryPage;
use std::sync::Arc;

/// Answers "which products are in this category".
///
/// The handler owns no connection of its own; it borrows whatever store the
/// repository was built on and issues exactly one read per call.
pub struct CategoryQueryHandler {
    repo: Arc<dyn ProductRepository>,
}

impl CategoryQueryHandler {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// Every product whose `category` equals `category`, in store order.
    ///
    /// The value is not validated or normalized. An unknown category is an
    /// empty `Vec`, store failures are returned untouched.
    pub async fn fetch_products_by_category(
        &self,
        category: &CategoryQuery,
    ) -> Result<Vec<Product>, StoreError> {
        let products = self.repo.find_by_category(category).await?;

        tracing::debug!(%category, matches = products.len(), "category query");

        Ok(products)
    }

    /// Runs the query and packs the result together with its label.
    pub async fn load_page(&self, category: CategoryQuery) -> Result<CategoryPage, StoreError> {
        let products = self.fetch_products_by_category(&category).await?;

        Ok(CategoryPage {
            category: category.into_inner(),
            products,
        })
    }
}
