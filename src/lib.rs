pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{editor::TerminalEditor, storage::LocalFs};
pub use config::toml_config::TomlConfig;
pub use crate::core::{
    creator::create_module, normalizer::normalize, scaffold::ModuleScaffolder,
    synchronizer::sync_declaration,
};
pub use utils::error::{ModError, Result};
