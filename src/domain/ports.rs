use crate::domain::model::{DuplicateCheck, InsertionPolicy, VisibilityOption};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io;
use std::path::Path;

/// File system operations the scaffolder needs. Each call is one await point;
/// nothing here is transactional.
pub trait Storage: Send + Sync {
    fn exists(&self, path: &Path) -> impl std::future::Future<Output = bool> + Send;
    fn is_dir(&self, path: &Path) -> impl std::future::Future<Output = io::Result<bool>> + Send;
    fn create_dir(&self, path: &Path) -> impl std::future::Future<Output = io::Result<()>> + Send;
    fn read_to_string(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = io::Result<String>> + Send;
    fn write_file(
        &self,
        path: &Path,
        data: &[u8],
    ) -> impl std::future::Future<Output = io::Result<()>> + Send;
    /// Like `write_file`, but fails with `AlreadyExists` instead of
    /// overwriting an existing entry.
    fn create_file(
        &self,
        path: &Path,
        data: &[u8],
    ) -> impl std::future::Future<Output = io::Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn auto_focus(&self) -> bool;
    fn show_notifications(&self) -> bool;
    fn visibility_options(&self) -> &[VisibilityOption];
    fn insertion_policy(&self) -> InsertionPolicy;
    fn duplicate_check(&self) -> DuplicateCheck;
    fn module_template(&self) -> &str;
}

/// Presentation side of the host: opening documents and showing messages.
#[async_trait]
pub trait Editor: Send + Sync {
    async fn focus(&self, path: &Path) -> Result<()>;
    async fn notify(&self, message: &str);
}
