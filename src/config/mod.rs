//! Configuration loading, parsing, and validation.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use mobile_doctor::config::{load_merged_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".mobile-doctor");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "android:\n  api_level: 34\n").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.android.api_level, Some(34));
//! ```
//!
//! # Configuration File Locations
//!
//! 1. Project config (`.mobile-doctor/config.yml`)
//! 2. Local overrides (`.mobile-doctor/config.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{
    find_project_root, load_config, load_config_file, load_config_value, load_merged_config,
    ConfigPaths, CONFIG_DIR,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{
    AndroidConfig, CustomRequirement, CustomRequirementCheck, DoctorConfig, IosConfig, Settings,
};
pub use validator::{validate, validate_config, ValidationError};
