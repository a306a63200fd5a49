use crate::io::ProductSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct LocalProductSource;

#[async_trait]
impl ProductSource for LocalProductSource {
    async fn read_to_string(&self, path: &Path) -> Result<String> {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Unable to read file {}", path.display()))
    }

    async fn list_documents(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            anyhow::bail!("Seed directory {} does not exist", root.display());
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
            if entry.file_type().is_file()
                && entry.path().extension().and_then(|s| s.to_str()) == Some("json")
            {
                entries.push(entry.into_path());
            }
        }

        // walk order is platform dependent, keep imports reproducible
        entries.sort();
        Ok(entries)
    }
}
