use crate::core::header::header_boundary;
use crate::domain::model::{DeclarationLine, DuplicateCheck, InsertionPolicy, SyncOutcome};
use crate::domain::ports::Storage;
use crate::utils::error::{ModError, Result};
use std::path::{Path, PathBuf};

/// Candidate parent files, in priority order.
pub const PARENT_FILE_CANDIDATES: [&str; 3] = ["lib.rs", "main.rs", "mod.rs"];

/// Name of the file created when a directory has no parent file yet.
pub const MODULE_FILE: &str = "mod.rs";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    pub insertion: InsertionPolicy,
    pub duplicates: DuplicateCheck,
}

/// Picks the file in `dir` that should receive the declaration. The flag is
/// false when none of the candidates exist and `mod.rs` must be created.
pub async fn select_parent_file<S: Storage>(storage: &S, dir: &Path) -> (PathBuf, bool) {
    for candidate in PARENT_FILE_CANDIDATES {
        let path = dir.join(candidate);
        if storage.exists(&path).await {
            tracing::debug!("Parent file for {} is {}", dir.display(), path.display());
            return (path, true);
        }
    }

    (dir.join(MODULE_FILE), false)
}

/// Adds `line` to the parent file of `dir`, creating `mod.rs` if needed.
///
/// The file is read and rewritten whole. Any I/O failure is reported as
/// [`ModError::ParentUpdateFailed`].
pub async fn sync_declaration<S: Storage>(
    storage: &S,
    dir: &Path,
    line: &DeclarationLine,
    options: SyncOptions,
) -> Result<SyncOutcome> {
    let (parent, exists) = select_parent_file(storage, dir).await;

    let failed = |source: std::io::Error| ModError::ParentUpdateFailed {
        module: line.identifier().to_string(),
        path: parent.clone(),
        source,
    };

    if !exists {
        let content = format!("{}\n", line);
        storage
            .create_file(&parent, content.as_bytes())
            .await
            .map_err(failed)?;
        tracing::info!("Created {} with '{}'", parent.display(), line);
        return Ok(SyncOutcome::Inserted(parent));
    }

    let text = storage.read_to_string(&parent).await.map_err(failed)?;

    match splice_declaration(&text, line, options) {
        None => {
            tracing::info!("'{}' already present in {}", line, parent.display());
            Ok(SyncOutcome::AlreadyPresent(parent))
        }
        Some(updated) => {
            storage
                .write_file(&parent, updated.as_bytes())
                .await
                .map_err(failed)?;
            tracing::info!("Inserted '{}' into {}", line, parent.display());
            Ok(SyncOutcome::Inserted(parent))
        }
    }
}

/// Returns the updated text, or `None` when the declaration is already there.
pub fn splice_declaration(
    text: &str,
    line: &DeclarationLine,
    options: SyncOptions,
) -> Option<String> {
    if contains_declaration(text, line, options.duplicates) {
        return None;
    }

    let eol = if text.contains("\r\n") { "\r\n" } else { "\n" };

    let updated = match options.insertion {
        InsertionPolicy::Top => format!("{}{}{}", line, eol, text.trim_start()),
        InsertionPolicy::HeaderAware => insert_after_header(text, line.as_str(), eol),
    };

    Some(updated)
}

pub fn contains_declaration(text: &str, line: &DeclarationLine, check: DuplicateCheck) -> bool {
    match check {
        DuplicateCheck::Substring => text.contains(line.as_str()),
        DuplicateCheck::ExactLine => text.lines().any(|l| l.trim() == line.as_str()),
    }
}

fn insert_after_header(text: &str, line: &str, eol: &str) -> String {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    let at = header_boundary(lines.iter().copied());

    let mut out = String::with_capacity(text.len() + line.len() + eol.len() * 2);
    for existing in &lines[..at] {
        out.push_str(existing);
    }
    if !out.is_empty() && !out.ends_with('\n') {
        out.push_str(eol);
    }
    out.push_str(line);
    out.push_str(eol);
    for existing in &lines[at..] {
        out.push_str(existing);
    }
    out
}
