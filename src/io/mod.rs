use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub mod local;

// where seed documents come from, faked in tests so no files hit the disk
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn read_to_string(&self, path: &Path) -> Result<String>;
    async fn list_documents(&self, root: &Path) -> Result<Vec<PathBuf>>;
}
