//! Configuration schema definitions.
//!
//! This module contains the struct definitions that map to
//! `.mobile-doctor/config.yml`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DoctorConfig {
    /// Android toolchain checks
    pub android: AndroidConfig,

    /// iOS toolchain checks
    pub ios: IosConfig,

    /// Global settings
    pub settings: Settings,

    /// Project-specific requirements, checked after the platform groups
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub requirements: BTreeMap<String, CustomRequirement>,
}

/// Android toolchain settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AndroidConfig {
    /// Run the Android group
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// SDK location, preferred over `ANDROID_SDK_ROOT` and `ANDROID_HOME`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdk_root: Option<PathBuf>,

    /// Platform API level that must be installed (e.g. 34)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_level: Option<u32>,
}

impl Default for AndroidConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sdk_root: None,
            api_level: None,
        }
    }
}

/// iOS toolchain settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IosConfig {
    /// Run the iOS group; defaults to true only on macOS
    #[serde(default = "default_ios_enabled")]
    pub enabled: bool,

    /// Lowest acceptable simulator runtime version (e.g. "17.0")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_runtime: Option<String>,
}

impl Default for IosConfig {
    fn default() -> Self {
        Self {
            enabled: default_ios_enabled(),
            min_runtime: None,
        }
    }
}

/// Global settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Limit for each external command a check runs
    #[serde(default = "default_timeout")]
    pub command_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            command_timeout_secs: default_timeout(),
        }
    }
}

/// A project-specific requirement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomRequirement {
    /// Display title; the map key is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// How to check if this requirement is satisfied
    pub check: CustomRequirementCheck,

    /// Text appended to the result whatever the outcome
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Check type for a custom requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CustomRequirementCheck {
    /// Check if a shell command succeeds (exit code 0)
    CommandSucceeds {
        /// Command to run
        command: String,
    },

    /// Check if a file or directory exists
    FileExists {
        /// Path to check, relative to the project root
        path: String,
    },

    /// Check if a binary is on PATH
    ToolOnPath {
        /// Binary name
        tool: String,
    },

    /// Check if an environment variable names a directory
    EnvDir {
        /// Variable name
        var: String,
    },
}

fn default_true() -> bool {
    true
}

fn default_ios_enabled() -> bool {
    cfg!(target_os = "macos")
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: DoctorConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.android.enabled);
        assert_eq!(config.ios.enabled, cfg!(target_os = "macos"));
        assert_eq!(config.settings.command_timeout_secs, 30);
        assert!(config.requirements.is_empty());
    }

    #[test]
    fn platform_sections_parse() {
        let yaml = r#"
android:
  sdk_root: /opt/android-sdk
  api_level: 34
ios:
  enabled: false
  min_runtime: "17.0"
settings:
  command_timeout_secs: 5
"#;
        let config: DoctorConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.android.enabled);
        assert_eq!(
            config.android.sdk_root,
            Some(PathBuf::from("/opt/android-sdk"))
        );
        assert_eq!(config.android.api_level, Some(34));
        assert!(!config.ios.enabled);
        assert_eq!(config.ios.min_runtime.as_deref(), Some("17.0"));
        assert_eq!(config.settings.command_timeout_secs, 5);
    }

    #[test]
    fn custom_requirement_parses() {
        let yaml = r#"
requirements:
  internal-cli:
    title: Internal CLI works
    check:
      type: command_succeeds
      command: "internal-cli --version"
    note: "Download from https://internal.company.com/cli"
  yarn:
    check: { type: tool_on_path, tool: yarn }
"#;
        let config: DoctorConfig = serde_yaml::from_str(yaml).unwrap();
        let req = &config.requirements["internal-cli"];
        assert!(matches!(
            &req.check,
            CustomRequirementCheck::CommandSucceeds { command } if command == "internal-cli --version"
        ));
        assert_eq!(req.title.as_deref(), Some("Internal CLI works"));
        assert_eq!(
            req.note.as_deref(),
            Some("Download from https://internal.company.com/cli")
        );
        assert_eq!(
            config.requirements["yarn"].check,
            CustomRequirementCheck::ToolOnPath {
                tool: "yarn".to_string()
            }
        );
    }

    #[test]
    fn unknown_check_type_is_rejected() {
        let yaml = r#"
requirements:
  bad:
    check: { type: service_reachable, command: "curl localhost" }
"#;
        assert!(serde_yaml::from_str::<DoctorConfig>(yaml).is_err());
    }

    #[test]
    fn requirements_iterate_in_name_order() {
        let yaml = r#"
requirements:
  zeta: { check: { type: file_exists, path: z } }
  alpha: { check: { type: file_exists, path: a } }
"#;
        let config: DoctorConfig = serde_yaml::from_str(yaml).unwrap();
        let names: Vec<_> = config.requirements.keys().collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }
}
