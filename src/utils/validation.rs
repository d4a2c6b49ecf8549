use crate::domain::model::VisibilityOption;
use crate::utils::error::{ModError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ModError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ModError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ModError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_visibility_options(field_name: &str, options: &[VisibilityOption]) -> Result<()> {
    if options.is_empty() {
        return Err(ModError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "At least one visibility option is required".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for option in options {
        validate_non_empty_string(&format!("{}.label", field_name), &option.label)?;

        if !seen.insert(option.label.as_str()) {
            return Err(ModError::InvalidConfigValueError {
                field: format!("{}.label", field_name),
                value: option.label.clone(),
                reason: "Duplicate visibility label".to_string(),
            });
        }
    }

    Ok(())
}
