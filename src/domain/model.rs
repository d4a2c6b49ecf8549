use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;

/// Label that maps to the default (private) visibility.
pub const PRIVATE_LABEL: &str = "private";

/// Normalized module name: the raw name with any trailing marker stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleIdentifier(String);

impl ModuleIdentifier {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    /// `<name>.rs`
    File,
    /// `<name>/mod.rs`
    Directory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    pub identifier: ModuleIdentifier,
    pub kind: ModuleKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityOption {
    pub label: String,
    #[serde(default)]
    pub description: String,
}

impl VisibilityOption {
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
        }
    }

    /// Keyword placed in front of `mod`. Empty for the private label.
    pub fn keyword(&self) -> &str {
        keyword_for_label(&self.label)
    }
}

pub fn keyword_for_label(label: &str) -> &str {
    if label == PRIVATE_LABEL {
        ""
    } else {
        label
    }
}

pub fn default_visibility_options() -> Vec<VisibilityOption> {
    vec![
        VisibilityOption::new("pub", "Visible to entire crate"),
        VisibilityOption::new("pub(super)", "Visible to the parent module"),
        VisibilityOption::new("pub(crate)", "Visible only within the crate"),
        VisibilityOption::new(PRIVATE_LABEL, "Visible only within this module"),
    ]
}

/// `<keyword> mod <identifier>;`, without the keyword segment when private.
/// Serializes as the line text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationLine {
    text: String,
    identifier: ModuleIdentifier,
}

impl DeclarationLine {
    pub fn new(keyword: &str, identifier: &ModuleIdentifier) -> Self {
        let keyword = keyword.trim();
        let text = if keyword.is_empty() {
            format!("mod {};", identifier)
        } else {
            format!("{} mod {};", keyword, identifier)
        };
        Self {
            text,
            identifier: identifier.clone(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn identifier(&self) -> &ModuleIdentifier {
        &self.identifier
    }
}

impl fmt::Display for DeclarationLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for DeclarationLine {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

/// Where a new declaration goes inside an existing parent file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum InsertionPolicy {
    /// Very first line of the file.
    Top,
    /// After the leading block of comments and inner attributes.
    #[default]
    HeaderAware,
}

/// How an existing declaration is detected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum DuplicateCheck {
    /// Declaration text appears anywhere in the file.
    #[default]
    Substring,
    /// Some trimmed line equals the declaration.
    ExactLine,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "path", rename_all = "kebab-case")]
pub enum SyncOutcome {
    /// Declaration written (into an existing file or a freshly created one).
    Inserted(PathBuf),
    /// Declaration already there; file left untouched.
    AlreadyPresent(PathBuf),
}

impl SyncOutcome {
    pub fn path(&self) -> &PathBuf {
        match self {
            SyncOutcome::Inserted(path) | SyncOutcome::AlreadyPresent(path) => path,
        }
    }
}

/// Already-collected input of one command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRequest {
    /// File or directory the user picked; a file resolves to its directory.
    pub selected_path: PathBuf,
    pub raw_name: String,
    pub visibility: String,
}

impl ModuleRequest {
    pub fn new(
        selected_path: impl Into<PathBuf>,
        raw_name: impl Into<String>,
        visibility: impl Into<String>,
    ) -> Self {
        Self {
            selected_path: selected_path.into(),
            raw_name: raw_name.into(),
            visibility: visibility.into(),
        }
    }
}

/// What a request would do, computed without touching the file system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldPlan {
    pub target_dir: PathBuf,
    pub identifier: ModuleIdentifier,
    pub kind: ModuleKind,
    /// Directory for [`ModuleKind::Directory`], `.rs` file otherwise.
    pub module_path: PathBuf,
    /// File that will be opened after creation.
    pub entry_file: PathBuf,
    pub parent_file: PathBuf,
    pub parent_exists: bool,
    pub declaration: DeclarationLine,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub identifier: ModuleIdentifier,
    pub kind: ModuleKind,
    pub module_path: PathBuf,
    pub declaration: DeclarationLine,
    pub sync: SyncOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_line_omits_private_keyword() {
        let id = ModuleIdentifier::new("parser");
        let private = VisibilityOption::new(PRIVATE_LABEL, "");

        assert_eq!(
            DeclarationLine::new(private.keyword(), &id).as_str(),
            "mod parser;"
        );
        assert_eq!(
            DeclarationLine::new("pub(crate)", &id).as_str(),
            "pub(crate) mod parser;"
        );
        assert_eq!(DeclarationLine::new("pub", &id).identifier().as_str(), "parser");
    }

    #[test]
    fn test_declaration_line_serializes_as_text() {
        let line = DeclarationLine::new("pub", &ModuleIdentifier::new("net"));
        assert_eq!(serde_json::to_value(&line).unwrap(), "pub mod net;");
    }

    #[test]
    fn test_keyword_for_label_is_verbatim() {
        assert_eq!(keyword_for_label("pub(in crate::a)"), "pub(in crate::a)");
        assert_eq!(keyword_for_label("private"), "");
    }

    #[test]
    fn test_sync_outcome_serializes_with_status() {
        let outcome = SyncOutcome::Inserted(PathBuf::from("src/lib.rs"));
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "inserted");
        assert_eq!(json["path"], "src/lib.rs");
    }
}
