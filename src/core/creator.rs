use crate::core::synchronizer::MODULE_FILE;
use crate::domain::model::{ModuleIdentifier, ModuleKind};
use crate::domain::ports::Storage;
use crate::utils::error::{ModError, Result};
use std::path::{Path, PathBuf};

/// Path occupied by a module of `kind` under `parent_dir`.
pub fn module_path(parent_dir: &Path, identifier: &ModuleIdentifier, kind: ModuleKind) -> PathBuf {
    match kind {
        ModuleKind::Directory => parent_dir.join(identifier.as_str()),
        ModuleKind::File => parent_dir.join(format!("{}.rs", identifier)),
    }
}

/// File that holds the module's code: `<dir>/mod.rs` or `<name>.rs`.
pub fn entry_file(parent_dir: &Path, identifier: &ModuleIdentifier, kind: ModuleKind) -> PathBuf {
    match kind {
        ModuleKind::Directory => module_path(parent_dir, identifier, kind).join(MODULE_FILE),
        ModuleKind::File => module_path(parent_dir, identifier, kind),
    }
}

/// Creates the module on disk and returns its entry file.
///
/// A directory module collides with any entry named `identifier`; a file
/// module collides with an existing `identifier.rs`. The existence check and
/// the creation are separate steps; creation never overwrites, so an entry
/// made by another process in between surfaces as [`ModError::IoError`]
/// rather than [`ModError::AlreadyExists`].
pub async fn create_module<S: Storage>(
    storage: &S,
    parent_dir: &Path,
    identifier: &ModuleIdentifier,
    kind: ModuleKind,
    template: &str,
) -> Result<PathBuf> {
    let path = module_path(parent_dir, identifier, kind);

    if storage.exists(&path).await {
        return Err(ModError::AlreadyExists {
            name: identifier.to_string(),
            path,
        });
    }

    if kind == ModuleKind::Directory {
        storage.create_dir(&path).await?;
        tracing::debug!("Created directory {}", path.display());
    }

    let entry = entry_file(parent_dir, identifier, kind);
    storage.create_file(&entry, template.as_bytes()).await?;
    tracing::info!("Created {}", entry.display());

    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mock_storage::MockStorage;

    fn id(name: &str) -> ModuleIdentifier {
        ModuleIdentifier::new(name)
    }

    #[tokio::test]
    async fn test_directory_module_gets_empty_mod_rs() {
        let storage = MockStorage::new().with_dir("/proj/src");

        let entry = create_module(
            &storage,
            Path::new("/proj/src"),
            &id("parser"),
            ModuleKind::Directory,
            "",
        )
        .await
        .unwrap();

        assert_eq!(entry, PathBuf::from("/proj/src/parser/mod.rs"));
        assert!(storage.has_dir("/proj/src/parser").await);
        assert_eq!(storage.get_file("/proj/src/parser/mod.rs").await.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_file_module_gets_rs_file() {
        let storage = MockStorage::new().with_dir("/proj/src");

        let entry = create_module(
            &storage,
            Path::new("/proj/src"),
            &id("utils"),
            ModuleKind::File,
            "",
        )
        .await
        .unwrap();

        assert_eq!(entry, PathBuf::from("/proj/src/utils.rs"));
        assert_eq!(storage.get_file("/proj/src/utils.rs").await.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_template_is_written() {
        let storage = MockStorage::new().with_dir("/proj/src");
        create_module(
            &storage,
            Path::new("/proj/src"),
            &id("utils"),
            ModuleKind::File,
            "// TODO: Implement module\n",
        )
        .await
        .unwrap();

        assert_eq!(
            storage.get_file("/proj/src/utils.rs").await.as_deref(),
            Some("// TODO: Implement module\n")
        );
    }

    #[tokio::test]
    async fn test_directory_collides_with_file_or_directory() {
        let storage = MockStorage::new()
            .with_dir("/proj/src")
            .with_dir("/proj/src/utils")
            .with_file("/proj/src/config", "");

        for name in ["utils", "config"] {
            let err = create_module(
                &storage,
                Path::new("/proj/src"),
                &id(name),
                ModuleKind::Directory,
                "",
            )
            .await
            .unwrap_err();
            assert!(matches!(err, ModError::AlreadyExists { .. }));
        }
        assert_eq!(storage.write_count().await, 0);
    }

    #[tokio::test]
    async fn test_file_collides_with_existing_rs_file() {
        let storage = MockStorage::new()
            .with_dir("/proj/src")
            .with_file("/proj/src/utils.rs", "fn keep() {}\n");

        let err = create_module(
            &storage,
            Path::new("/proj/src"),
            &id("utils"),
            ModuleKind::File,
            "",
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ModError::AlreadyExists { .. }));
        assert_eq!(
            storage.get_file("/proj/src/utils.rs").await.as_deref(),
            Some("fn keep() {}\n")
        );
    }

    #[tokio::test]
    async fn test_file_created_after_check_is_not_overwritten() {
        let storage = MockStorage::new()
            .with_dir("/proj/src")
            .created_concurrently("/proj/src/utils.rs", "fn precious() {}\n");

        let err = create_module(
            &storage,
            Path::new("/proj/src"),
            &id("utils"),
            ModuleKind::File,
            "",
        )
        .await
        .unwrap_err();

        match err {
            ModError::IoError(e) => assert_eq!(e.kind(), std::io::ErrorKind::AlreadyExists),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(
            storage.get_file("/proj/src/utils.rs").await.as_deref(),
            Some("fn precious() {}\n")
        );
    }
}
