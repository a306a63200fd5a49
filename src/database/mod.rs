use crate::domain::{CategoryQuery, Product};
use crate::error::StoreError;
use async_trait::async_trait;

pub mod pool;
pub mod sqlite;

// a ProductRepository is shared between request tasks, sqlx::Pool is thread safe
// generic document operations live here, store specific implementations in "sqlite.rs"
#[async_trait]
pub trait ProductRepository: Send + Sync {
    // every document whose `category` equals the query, in store order
    async fn find_by_category(&self, query: &CategoryQuery) -> Result<Vec<Product>, StoreError>;
    async fn count_products(&self) -> Result<u64, StoreError>;

    // write operations
    async fn save_product(&self, product: &Product) -> Result<(), StoreError>;
}
