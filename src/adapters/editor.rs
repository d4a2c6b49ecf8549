use crate::core::Editor;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// [`Editor`] for a terminal session: "opening" a file prints its path so it
/// can be piped into an editor, notifications go to stdout.
#[derive(Debug, Clone, Default)]
pub struct TerminalEditor;

impl TerminalEditor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Editor for TerminalEditor {
    async fn focus(&self, path: &Path) -> Result<()> {
        tracing::debug!("Focusing {}", path.display());
        println!("📝 {}", path.display());
        Ok(())
    }

    async fn notify(&self, message: &str) {
        println!("✅ {}", message);
    }
}
