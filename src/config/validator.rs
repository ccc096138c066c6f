//! Configuration validation rules.
//!
//! Collects every problem instead of stopping at the first one, so a user
//! can fix a config in one pass.

use crate::config::schema::{CustomRequirementCheck, DoctorConfig};
use crate::error::{DoctorError, Result};
use crate::platform::ios::parse_version;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Requirement name if error is requirement-specific
    pub requirement: Option<String>,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
            requirement: None,
        }
    }

    fn for_requirement(rule: &str, name: &str, message: String) -> Self {
        Self {
            requirement: Some(name.to_string()),
            ..Self::new(rule, message)
        }
    }
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &DoctorConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_settings(config));
    errors.extend(validate_platforms(config));
    errors.extend(validate_requirements(config));

    errors
}

fn validate_settings(config: &DoctorConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if config.settings.command_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "zero-timeout",
            "settings.command_timeout_secs must be greater than 0".to_string(),
        ));
    }
    errors
}

fn validate_platforms(config: &DoctorConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.android.api_level == Some(0) {
        errors.push(ValidationError::new(
            "invalid-api-level",
            "android.api_level must be a positive integer".to_string(),
        ));
    }

    if let Some(min) = &config.ios.min_runtime {
        if parse_version(min).is_none() {
            errors.push(ValidationError::new(
                "invalid-runtime-version",
                format!(
                    "ios.min_runtime '{}' is not a dotted version such as \"17.0\"",
                    min
                ),
            ));
        }
    }

    errors
}

fn validate_requirements(config: &DoctorConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (name, req) in &config.requirements {
        if req.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            errors.push(ValidationError::for_requirement(
                "empty-title",
                name,
                format!("Requirement '{}' has an empty title", name),
            ));
        }

        let (field, value) = match &req.check {
            CustomRequirementCheck::CommandSucceeds { command } => ("command", command),
            CustomRequirementCheck::FileExists { path } => ("path", path),
            CustomRequirementCheck::ToolOnPath { tool } => ("tool", tool),
            CustomRequirementCheck::EnvDir { var } => ("var", var),
        };
        if value.trim().is_empty() {
            errors.push(ValidationError::for_requirement(
                "empty-check",
                name,
                format!("Requirement '{}' has an empty '{}'", name, field),
            ));
        }
    }

    errors
}

/// Validate and convert errors to a single result.
pub fn validate(config: &DoctorConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(DoctorError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
