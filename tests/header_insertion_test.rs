use anyhow::Result;
use rust_mod_creator::core::{ModuleRequest, SyncOutcome};
use rust_mod_creator::domain::model::InsertionPolicy;
use rust_mod_creator::{LocalFs, ModuleScaffolder, TerminalEditor, TomlConfig};
use std::fs;
use tempfile::TempDir;

const LIB_RS: &str = "//! Networking helpers.
//!
//! Everything here is synchronous.

#![allow(dead_code)]
#![warn(
    missing_docs,
    unused_results,
)]

/* Copyright notice
   spanning lines */

mod existing;

pub fn connect() {}
";

async fn add_module(policy: InsertionPolicy, name: &str, label: &str) -> Result<String> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("lib.rs"), LIB_RS)?;

    let mut config = TomlConfig::default();
    config.creator.auto_focus = Some(false);
    config.creator.show_notifications = Some(false);
    config.creator.insertion = Some(policy);

    let report = ModuleScaffolder::new(LocalFs::default(), config, TerminalEditor::new())
        .run(&ModuleRequest::new(temp_dir.path(), name, label))
        .await?;
    assert!(matches!(report.sync, SyncOutcome::Inserted(_)));

    Ok(fs::read_to_string(temp_dir.path().join("lib.rs"))?)
}

#[tokio::test]
async fn test_header_aware_keeps_crate_header_intact() -> Result<()> {
    let updated = add_module(InsertionPolicy::HeaderAware, "tls.rs", "pub").await?;

    let expected = LIB_RS.replace("\nmod existing;", "\npub mod tls;\nmod existing;");
    assert_eq!(updated, expected);
    assert!(updated.starts_with("//! Networking helpers."));
    Ok(())
}

#[tokio::test]
async fn test_top_policy_prepends() -> Result<()> {
    let updated = add_module(InsertionPolicy::Top, "tls.rs", "private").await?;

    assert_eq!(updated, format!("mod tls;\n{}", LIB_RS));
    Ok(())
}
