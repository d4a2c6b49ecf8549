use crate::domain::model::{ModuleIdentifier, ModuleKind, NormalizedName};
use crate::utils::error::{ModError, Result};
use regex::Regex;
use std::sync::OnceLock;

// base: letter or underscore first, then word characters; marker: optional.
const NAME_PATTERN: &str = r"^(?P<base>[A-Za-z_][A-Za-z0-9_]*)(?P<marker>\.rs|/|\.)?$";

fn name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(NAME_PATTERN).expect("module name pattern compiles"))
}

/// Validates a raw module name without classifying it.
pub fn is_valid_module_name(raw: &str) -> bool {
    validate(raw).is_ok()
}

/// Classifies `raw` and strips its marker.
///
/// * `name/` is a directory module
/// * `name.rs` and `name.` are file modules
/// * a bare `name` is a directory module
pub fn normalize(raw: &str) -> Result<NormalizedName> {
    let (base, marker) = validate(raw)?;

    let kind = match marker {
        Some("/") => ModuleKind::Directory,
        Some(_) => ModuleKind::File,
        None => ModuleKind::Directory,
    };

    tracing::debug!("Normalized '{}' to {:?} module '{}'", raw, kind, base);

    Ok(NormalizedName {
        identifier: ModuleIdentifier::new(base),
        kind,
    })
}

fn validate(raw: &str) -> Result<(&str, Option<&str>)> {
    let invalid = |reason: &str| ModError::InvalidName {
        name: raw.to_string(),
        reason: reason.to_string(),
    };

    if raw.is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if raw.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(invalid("name cannot start with a digit"));
    }
    if raw.starts_with('.') {
        return Err(invalid("name cannot start with a period"));
    }

    let caps = name_regex().captures(raw).ok_or_else(|| {
        invalid("only letters, digits and underscores are allowed, followed by an optional '/', '.' or '.rs'")
    })?;

    let base = caps.name("base").map(|m| m.as_str()).unwrap_or_default();
    if base.ends_with('_') {
        return Err(invalid("name cannot end with an underscore"));
    }

    Ok((base, caps.name("marker").map(|m| m.as_str())))
}
