//! Configuration file discovery and loading.
//!
//! A project needs no config at all: without one, defaults apply. When
//! present, `.mobile-doctor/config.local.yml` is deep-merged over
//! `.mobile-doctor/config.yml`.

use crate::config::merger::merge_configs;
use crate::config::schema::DoctorConfig;
use crate::error::{DoctorError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory holding project configuration.
pub const CONFIG_DIR: &str = ".mobile-doctor";

/// Paths to configuration files in priority order (later overrides earlier).
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .mobile-doctor/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .mobile-doctor/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project
            .iter()
            .chain(self.project_local.iter())
            .collect()
    }

    /// Check if any project config exists.
    pub fn has_project_config(&self) -> bool {
        self.project.is_some()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.exists().then_some(path)
}

/// Find the project root by walking up from `start`.
///
/// Looks for a `.mobile-doctor` directory first, then `.git`.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_DIR).is_dir() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a config file as raw YAML Value (for merging).
///
/// An empty file loads as an empty mapping.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DoctorError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DoctorError::Io(e)
        }
    })?;

    let value: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|e| DoctorError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(if value.is_null() {
        serde_yaml::Value::Mapping(Default::default())
    } else {
        value
    })
}

/// Parse a merged value into the typed config.
fn from_value(value: serde_yaml::Value, source_path: &Path) -> Result<DoctorConfig> {
    serde_yaml::from_value(value).map_err(|e| DoctorError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single config file without merging.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<DoctorConfig> {
    let value = load_config_value(path)?;
    from_value(value, path)
}

/// Load and merge the project's config files.
///
/// Returns the default config when the project has none.
pub fn load_merged_config(project_root: &Path) -> Result<DoctorConfig> {
    let paths = ConfigPaths::discover(project_root);
    let existing = paths.all_existing();

    if existing.is_empty() {
        debug!("No config under {}; using defaults", project_root.display());
        return Ok(DoctorConfig::default());
    }

    let mut configs = Vec::new();
    for path in &existing {
        debug!("Loading config {}", path.display());
        configs.push(load_config_value(path)?);
    }

    let merged = merge_configs(&configs);
    let source = existing
        .last()
        .map(|p| p.as_path())
        .unwrap_or(project_root);
    from_value(merged, source)
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging;
/// a missing override is an error rather than a fallback to defaults.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<DoctorConfig> {
    if let Some(override_path) = config_override {
        load_config_file(override_path)
    } else {
        load_merged_config(project_root)
    }
}
