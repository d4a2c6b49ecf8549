use crate::core::Storage;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

/// [`Storage`] backed by the local file system.
///
/// Relative paths are resolved against `base_path`.
#[derive(Debug, Clone)]
pub struct LocalFs {
    base_path: PathBuf,
}

impl LocalFs {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn full_path(&self, path: &Path) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Default for LocalFs {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalFs {
    async fn exists(&self, path: &Path) -> bool {
        fs::metadata(self.full_path(path)).await.is_ok()
    }

    async fn is_dir(&self, path: &Path) -> io::Result<bool> {
        let metadata = fs::metadata(self.full_path(path)).await?;
        Ok(metadata.is_dir())
    }

    async fn create_dir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir(self.full_path(path)).await
    }

    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(self.full_path(path)).await
    }

    async fn write_file(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        fs::write(self.full_path(path), data).await
    }

    async fn create_file(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.full_path(path))
            .await?;
        file.write_all(data).await?;
        file.flush().await
    }
}
