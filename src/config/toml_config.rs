use crate::core::ConfigProvider;
use crate::domain::model::{
    default_visibility_options, DuplicateCheck, InsertionPolicy, VisibilityOption,
};
use crate::utils::error::{ModError, Result};
use crate::utils::validation::{validate_visibility_options, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = ".rust-mod-creator.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub creator: CreatorConfig,
    #[serde(default = "default_visibility_options")]
    pub visibility: Vec<VisibilityOption>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatorConfig {
    pub auto_focus: Option<bool>,
    pub show_notifications: Option<bool>,
    pub insertion: Option<InsertionPolicy>,
    pub duplicate_check: Option<DuplicateCheck>,
    pub module_template: Option<String>,
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            creator: CreatorConfig::default(),
            visibility: default_visibility_options(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ModError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Loads `path` if given, else the default file when present, else defaults.
    pub fn discover(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                tracing::debug!("Using {}", DEFAULT_CONFIG_FILE);
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => Ok(Self::default()),
        }
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_visibility_options("visibility", &self.visibility)
    }
}

impl ConfigProvider for TomlConfig {
    fn auto_focus(&self) -> bool {
        self.creator.auto_focus.unwrap_or(true)
    }

    fn show_notifications(&self) -> bool {
        self.creator.show_notifications.unwrap_or(true)
    }

    fn visibility_options(&self) -> &[VisibilityOption] {
        &self.visibility
    }

    fn insertion_policy(&self) -> InsertionPolicy {
        self.creator.insertion.unwrap_or_default()
    }

    fn duplicate_check(&self) -> DuplicateCheck {
        self.creator.duplicate_check.unwrap_or_default()
    }

    fn module_template(&self) -> &str {
        self.creator.module_template.as_deref().unwrap_or("")
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
