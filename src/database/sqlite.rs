use crate::database::ProductRepository;
use crate::domain::{CategoryQuery, Product};
use crate::error::StoreError;
use async_trait::async_trait;
use sqlx::{Pool, Sqlite};

pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

// rows hold the raw JSON text of a document, turn it back into a Product
pub(crate) fn decode_document(document: &str) -> Result<Product, StoreError> {
    let value: serde_json::Value = serde_json::from_str(document)
        .map_err(|e| StoreError::QueryFailed(format!("stored document is not JSON: {}", e)))?;

    Product::try_from(value).map_err(|other| {
        StoreError::QueryFailed(format!("stored document is not an object: {}", other))
    })
}

#[async_trait]
impl ProductRepository for SqliteRepository {
    async fn find_by_category(&self, query: &CategoryQuery) -> Result<Vec<Product>, StoreError> {
        // only text categories can match; json_extract hands arrays and objects back as
        // JSON text, which would otherwise compare equal to a request spelled the same way
        let documents: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT document FROM product
            WHERE json_type(document, '$.category') = 'text'
                AND json_extract(document, '$.category') = ?
            "#,
        )
        .bind(query.as_str())
        .fetch_all(&self.pool)
        .await?;

        documents.iter().map(String::as_str).map(decode_document).collect()
    }

    async fn count_products(&self) -> Result<u64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM product")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.max(0) as u64)
    }

    async fn save_product(&self, product: &Product) -> Result<(), StoreError> {
        let key = product
            .key()
            .ok_or_else(|| StoreError::InvalidDocument("product has no id".to_string()))?;

        let document = serde_json::to_string(product)
            .map_err(|e| StoreError::InvalidDocument(e.to_string()))?;

        // upsert, the whole document is replaced
        sqlx::query(
            r#"
            INSERT INTO product (key, document)
            VALUES (?, ?)
            ON CONFLICT(key) DO UPDATE SET
                document = excluded.document
            "#,
        )
        .bind(&key)
        .bind(&document)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
