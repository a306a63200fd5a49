
use crate::database::ProductRepository;
use crate::domain::{CategoryQuery, Product};
use crate::error::StoreError;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

// --- Manual Mock: ProductRepository ---
// keeps "documents" in a Vec so router and service tests never touch sqlite
#[derive(Clone, Default)]
pub struct MockRepository {
    pub products: Arc<Mutex<Vec<Product>>>,
}

impl MockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(Mutex::new(products)),
        }
    }
}

#[async_trait]
impl ProductRepository for MockRepository {
    async fn find_by_category(&self, query: &CategoryQuery) -> Result<Vec<Product>, StoreError> {
        let products = self.products.lock().unwrap();
        Ok(products
            .iter()
            .filter(|p| p.category() == Some(query.as_str()))
            .cloned()
            .collect())
    }

    async fn count_products(&self) -> Result<u64, StoreError> {
        Ok(self.products.lock().unwrap().len() as u64)
    }

    async fn save_product(&self, product: &Product) -> Result<(), StoreError> {
        let key = product
            .key()
            .ok_or_else(|| StoreError::InvalidDocument("product has no id".to_string()))?;

        let mut products = self.products.lock().unwrap();
        products.retain(|p| p.key().as_deref() != Some(key.as_str()));
        products.push(product.clone());
        Ok(())
    }
}

// --- Manual Mock: a store that can't be reached ---
pub struct UnreachableRepository;

#[async_trait]
impl ProductRepository for UnreachableRepository {
    async fn find_by_category(&self, _query: &CategoryQuery) -> Result<Vec<Product>, StoreError> {
        Err(StoreError::Unavailable(sqlx::Error::PoolClosed))
    }

    async fn count_products(&self) -> Result<u64, StoreError> {
        Err(StoreError::Unavailable(sqlx::Error::PoolClosed))
    }

    async fn save_product(&self, _product: &Product) -> Result<(), StoreError> {
        Err(StoreError::Unavailable(sqlx::Error::PoolClosed))
    }
}

// --- Manual Mock: a store whose reads fail ---
pub struct FailingQueryRepository;

#[async_trait]
impl ProductRepository for FailingQueryRepository {
    async fn find_by_category(&self, _query: &CategoryQuery) -> Result<Vec<Product>, StoreError> {
        Err(StoreError::QueryFailed("no such table: product".to_string()))
    }

    async fn count_products(&self) -> Result<u64, StoreError> {
        Err(StoreError::QueryFailed("no such table: product".to_string()))
    }

    async fn save_product(&self, _product: &Product) -> Result<(), StoreError> {
        Err(StoreError::QueryFailed("no such table: product".to_string()))
    }
}

pub fn product(value: Value) -> Product {
    Product::try_from(value).expect("test product must be an object")
}

// the shoes/hats catalogue used across tests
pub fn sample_products() -> Vec<Product> {
    vec![
        product(json!({ "id": 1, "category": "shoes", "name": "Runner", "price": 59.5 })),
        product(json!({ "id": 2, "category": "hats", "name": "Beanie", "price": 15 })),
        product(json!({ "id": 3, "category": "shoes", "name": "Loafer", "price": "89.00" })),
    ]
}

// ids of a result, sorted, since store order is not part of the contract
pub fn sorted_ids(products: &[Product]) -> Vec<String> {
    let mut ids: Vec<String> = products.iter().filter_map(Product::id_label).collect();
    ids.sort();
    ids
}
