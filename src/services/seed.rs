use crate::database::ProductRepository;
use crate::domain::Product;
use crate::error::StoreError;
use crate::io::ProductSource;
use anyhow::{Context, Result, anyhow};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    pub files: usize,
    pub imported: usize,
    pub skipped: usize,
}

/// Loads product documents from a directory of `.json` files into the store.
pub struct SeedImporter {
    repo: Arc<dyn ProductRepository>,
    source: Box<dyn ProductSource>,
}

impl SeedImporter {
    pub fn new(repo: Arc<dyn ProductRepository>, source: Box<dyn ProductSource>) -> Self {
        Self { repo, source }
    }

    /// Imports every document under `root`.
    ///
    /// Files that don't parse and documents without an id are logged and
    /// skipped. A store failure stops the import.
    pub async fn import_dir(&self, root: &Path) -> Result<ImportReport> {
        tracing::info!(dir = %root.display(), "importing seed products");

        let paths = self
            .source
            .list_documents(root)
            .await
            .context("Failed to list seed files")?;

        let mut report = ImportReport::default();

        for path in paths {
            report.files += 1;

            let documents = match self.read_documents(&path).await {
                Ok(documents) => documents,
                Err(e) => {
                    tracing::warn!(file = %path.display(), error = %e, "skipping seed file");
                    report.skipped += 1;
                    continue;
                }
            };

            for document in documents {
                let product = match Product::try_from(document) {
                    Ok(product) => product,
                    Err(other) => {
                        tracing::warn!(file = %path.display(), value = %other, "seed entry is not an object");
                        report.skipped += 1;
                        continue;
                    }
                };

                match self.repo.save_product(&product).await {
                    Ok(()) => {
                        tracing::debug!(
                            id = %product.id_label().unwrap_or_default(),
                            category = product.category().unwrap_or_default(),
                            "imported product"
                        );
                        report.imported += 1;
                    }
                    Err(StoreError::InvalidDocument(reason)) => {
                        tracing::warn!(file = %path.display(), %reason, "skipping seed product");
                        report.skipped += 1;
                    }
                    Err(e) => {
                        return Err(anyhow::Error::new(e)
                            .context(format!("Failed to import {}", path.display())));
                    }
                }
            }
        }

        tracing::info!(
            files = report.files,
            imported = report.imported,
            skipped = report.skipped,
            "seed import complete"
        );

        Ok(report)
    }

    // a seed file holds either one product object or an array of them
    async fn read_documents(&self, path: &Path) -> Result<Vec<Value>> {
        let raw = self.source.read_to_string(path).await?;

        let value: Value = serde_json::from_str(&raw)
            .map_err(|e| anyhow!("Failed to parse {}: {}", path.display(), e))?;

        match value {
            Value::Array(items) => Ok(items),
            Value::Object(_) => Ok(vec![value]),
            _ => Err(anyhow!(
                "{} must contain an object or an array of objects",
                path.display()
            )),
        }
    }
}
