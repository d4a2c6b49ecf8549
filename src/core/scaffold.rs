use crate::core::creator::{create_module, entry_file, module_path};
use crate::core::normalizer::normalize;
use crate::core::synchronizer::{select_parent_file, sync_declaration, SyncOptions, MODULE_FILE};
use crate::domain::model::{
    DeclarationLine, ModuleKind, ModuleRequest, ScaffoldPlan, ScaffoldReport, SyncOutcome,
    VisibilityOption,
};
use crate::domain::ports::{ConfigProvider, Editor, Storage};
use crate::utils::error::{ModError, Result};
use std::path::{Path, PathBuf};

/// Runs one "create module" command: normalize, create, declare, present.
pub struct ModuleScaffolder<S: Storage, C: ConfigProvider, E: Editor> {
    storage: S,
    config: C,
    editor: E,
}

impl<S: Storage, C: ConfigProvider, E: Editor> ModuleScaffolder<S, C, E> {
    pub fn new(storage: S, config: C, editor: E) -> Self {
        Self {
            storage,
            config,
            editor,
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Directory the module goes into: the selection itself, or the
    /// directory containing it when a file was selected.
    pub async fn resolve_target_dir(&self, selected: &Path) -> Result<PathBuf> {
        if self.storage.is_dir(selected).await? {
            return Ok(selected.to_path_buf());
        }

        Ok(selected
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")))
    }

    /// True when the target directory already declares submodules in `mod.rs`.
    pub async fn is_submodule_dir(&self, dir: &Path) -> bool {
        self.storage.exists(&dir.join(MODULE_FILE)).await
    }

    pub fn find_visibility(&self, label: &str) -> Result<&VisibilityOption> {
        let options = self.config.visibility_options();
        options
            .iter()
            .find(|option| option.label == label)
            .ok_or_else(|| ModError::UnknownVisibility {
                label: label.to_string(),
                available: options.iter().map(|o| o.label.clone()).collect(),
            })
    }

    /// Computes everything `run` would do without touching the file system.
    pub async fn plan(&self, request: &ModuleRequest) -> Result<ScaffoldPlan> {
        let normalized = normalize(&request.raw_name)?;
        let visibility = self.find_visibility(&request.visibility)?;
        let target_dir = self.resolve_target_dir(&request.selected_path).await?;

        let declaration = DeclarationLine::new(visibility.keyword(), &normalized.identifier);
        let (parent_file, parent_exists) = select_parent_file(&self.storage, &target_dir).await;

        let plan = ScaffoldPlan {
            module_path: module_path(&target_dir, &normalized.identifier, normalized.kind),
            entry_file: entry_file(&target_dir, &normalized.identifier, normalized.kind),
            target_dir,
            identifier: normalized.identifier,
            kind: normalized.kind,
            parent_file,
            parent_exists,
            declaration,
        };

        tracing::debug!("Planned: {:?}", plan);
        Ok(plan)
    }

    pub async fn run(&self, request: &ModuleRequest) -> Result<ScaffoldReport> {
        let plan = self.plan(request).await?;

        let entry = create_module(
            &self.storage,
            &plan.target_dir,
            &plan.identifier,
            plan.kind,
            self.config.module_template(),
        )
        .await?;

        let options = SyncOptions {
            insertion: self.config.insertion_policy(),
            duplicates: self.config.duplicate_check(),
        };

        let sync =
            sync_declaration(&self.storage, &plan.target_dir, &plan.declaration, options).await?;

        if self.config.auto_focus() {
            if let Err(e) = self.editor.focus(&entry).await {
                tracing::warn!("Could not open {}: {}", entry.display(), e);
            }
        }

        if self.config.show_notifications() {
            self.editor.notify(&success_message(&plan, &sync)).await;
        }

        Ok(ScaffoldReport {
            identifier: plan.identifier,
            kind: plan.kind,
            module_path: plan.module_path,
            declaration: plan.declaration,
            sync,
        })
    }
}

fn success_message(plan: &ScaffoldPlan, sync: &SyncOutcome) -> String {
    let kind = match plan.kind {
        ModuleKind::Directory => "Module",
        ModuleKind::File => "Submodule",
    };
    let parent = sync
        .path()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match sync {
        SyncOutcome::Inserted(_) => format!(
            "{} '{}' created at {} and added to {}",
            kind,
            plan.identifier,
            plan.module_path.display(),
            parent
        ),
        SyncOutcome::AlreadyPresent(_) => format!(
            "{} '{}' created at {} ({} already declares it)",
            kind,
            plan.identifier,
            plan.module_path.display(),
            parent
        ),
    }
}
