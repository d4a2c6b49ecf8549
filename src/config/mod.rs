pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::{DuplicateCheck, InsertionPolicy};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "rust-mod-creator")]
#[command(about = "Create Rust modules and declare them in the parent file")]
pub struct CliConfig {
    /// File or directory the module is created next to / inside
    #[arg(default_value = ".")]
    pub path: String,

    /// Module name: `name/` or `name` for a directory, `name.rs` or `name.` for a file
    #[arg(short, long)]
    pub name: Option<String>,

    /// Visibility label, e.g. pub, pub(crate), private
    #[arg(short = 'V', long)]
    pub visibility: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Where the declaration goes in the parent file
    #[arg(long, value_enum)]
    pub insertion: Option<InsertionPolicy>,

    /// Only treat identical lines as an existing declaration
    #[arg(long)]
    pub exact_duplicates: bool,

    /// Do not open the new module file
    #[arg(long)]
    pub no_focus: bool,

    /// Do not print the success notification
    #[arg(short, long)]
    pub quiet: bool,

    /// Show what would be created without touching the file system
    #[arg(long)]
    pub dry_run: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Command line flags win over values from the configuration file.
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(insertion) = self.insertion {
            config.creator.insertion = Some(insertion);
        }
        if self.exact_duplicates {
            config.creator.duplicate_check = Some(DuplicateCheck::ExactLine);
        }
        if self.no_focus {
            config.creator.auto_focus = Some(false);
        }
        if self.quiet || self.json {
            config.creator.show_notifications = Some(false);
        }
    }
}
