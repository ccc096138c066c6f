//! Android toolchain requirements.
//!
//! The SDK root is resolved once, when the group is built. Its tool
//! directories are put ahead of PATH for every check in the group, so a
//! working SDK passes even when the user never added it to their shell.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::AndroidConfig;
use crate::requirements::checks::{command_succeeds, tool_on_path};
use crate::requirements::{CheckContext, Requirement};
use crate::shell::run_program;

static JAVA_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"version "([^"]+)""#).expect("JAVA_VERSION must compile")
});

const PLATFORM_PREFIX: &str = "platforms;android-";

/// Where the SDK root came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SdkSource {
    Config,
    AndroidSdkRoot,
    AndroidHome,
}

impl fmt::Display for SdkSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config => write!(f, "android.sdk_root"),
            Self::AndroidSdkRoot => write!(f, "ANDROID_SDK_ROOT"),
            Self::AndroidHome => write!(f, "ANDROID_HOME"),
        }
    }
}

/// A resolved Android SDK installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AndroidSdk {
    pub root: PathBuf,
    pub source: SdkSource,
}

impl AndroidSdk {
    /// Directories holding the SDK's command-line tools.
    pub fn tool_dirs(&self) -> Vec<PathBuf> {
        vec![
            self.root.join("platform-tools"),
            self.root.join("cmdline-tools").join("latest").join("bin"),
            self.root.join("emulator"),
            self.root.join("tools").join("bin"),
        ]
    }

    /// Installed platform directory for an API level.
    pub fn platform_dir(&self, api_level: u32) -> PathBuf {
        self.root
            .join("platforms")
            .join(format!("android-{}", api_level))
    }
}

/// Why no SDK root could be resolved.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SdkRootError {
    #[error("Have you installed the Android SDK? Neither ANDROID_SDK_ROOT nor ANDROID_HOME is set")]
    NotSet,
    #[error("{source_name} is set to {}, which is not a directory", path.display())]
    NotADir { source_name: String, path: PathBuf },
}

/// Resolve the SDK root from config, then `ANDROID_SDK_ROOT`, then the
/// deprecated `ANDROID_HOME`.
pub fn resolve_sdk(
    config: &AndroidConfig,
    ctx: &CheckContext,
) -> std::result::Result<AndroidSdk, SdkRootError> {
    if let Some(configured) = &config.sdk_root {
        let root = ctx.resolve_path(configured);
        return if root.is_dir() {
            Ok(AndroidSdk {
                root,
                source: SdkSource::Config,
            })
        } else {
            Err(SdkRootError::NotADir {
                source_name: SdkSource::Config.to_string(),
                path: root,
            })
        };
    }

    let sdk_root_err = match ctx.var("ANDROID_SDK_ROOT").map(PathBuf::from) {
        Some(root) if root.is_dir() => {
            return Ok(AndroidSdk {
                root,
                source: SdkSource::AndroidSdkRoot,
            })
        }
        Some(root) => SdkRootError::NotADir {
            source_name: SdkSource::AndroidSdkRoot.to_string(),
            path: root,
        },
        None => SdkRootError::NotSet,
    };

    match ctx
        .var("ANDROID_HOME")
        .map(PathBuf::from)
        .filter(|home| home.is_dir())
    {
        Some(root) => {
            warn!("`ANDROID_SDK_ROOT` isn't set; falling back to `ANDROID_HOME`, which is deprecated");
            Ok(AndroidSdk {
                root,
                source: SdkSource::AndroidHome,
            })
        }
        None => Err(sdk_root_err),
    }
}

/// Extract the version from `java -version` output.
pub fn parse_java_version(output: &str) -> Option<String> {
    JAVA_VERSION
        .captures(output)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Package paths from `sdkmanager --list_installed` output.
pub fn parse_installed_packages(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.split('|').next().filter(|_| line.contains('|')))
        .map(str::trim)
        .filter(|path| !path.is_empty() && *path != "Path" && !path.starts_with('-'))
        .map(str::to_string)
        .collect()
}

/// Numeric API levels among installed `platforms;android-N` packages.
pub fn installed_api_levels(packages: &[String]) -> Vec<u32> {
    packages
        .iter()
        .filter_map(|p| p.strip_prefix(PLATFORM_PREFIX))
        .filter_map(|level| level.parse().ok())
        .collect()
}

/// Build the Android requirement group.
pub fn requirements(config: &AndroidConfig, ctx: &CheckContext) -> Vec<Requirement> {
    let sdk = resolve_sdk(config, ctx);
    let mut sdk_ctx = ctx.clone();
    if let Ok(sdk) = &sdk {
        debug!("Android SDK at {} (from {})", sdk.root.display(), sdk.source);
        sdk_ctx.prepend_path(sdk.tool_dirs());
    }

    let mut reqs = vec![
        sdk_location(sdk.clone()),
        java(&sdk_ctx),
        command_succeeds("Android Debug Bridge (adb)", "adb", &["version"], &sdk_ctx)
            .with_supplemental_message("Install the SDK platform-tools package."),
        tool_on_path("Android SDK command-line tools", "sdkmanager", &sdk_ctx),
        tool_on_path("Android emulator", "emulator", &sdk_ctx),
        tool_on_path("AVD manager", "avdmanager", &sdk_ctx),
    ];

    if let Some(level) = config.api_level {
        reqs.push(api_level(level, sdk.ok(), &sdk_ctx));
    }

    reqs
}

fn sdk_location(sdk: std::result::Result<AndroidSdk, SdkRootError>) -> Requirement {
    Requirement::new("Android SDK location", move || async move {
        match sdk {
            Ok(sdk) => Ok(Some(format!(
                "{} (from {})",
                sdk.root.display(),
                sdk.source
            ))),
            Err(err) => Err(err.to_string()),
        }
    })
}

fn java_program(ctx: &CheckContext) -> String {
    ctx.var("JAVA_HOME")
        .map(|home| Path::new(home).join("bin").join("java"))
        .filter(|java| java.is_file())
        .map(|java| java.display().to_string())
        .unwrap_or_else(|| "java".to_string())
}

const JAVA_HINT: &str = "Install a JDK and set JAVA_HOME.";

fn java(ctx: &CheckContext) -> Requirement {
    let ctx = ctx.clone();
    Requirement::new("Java Development Kit", move || async move {
        java_version(&ctx)
            .await
            .map(Some)
            .map_err(|e| format!("{}. {}", e.trim_end_matches('.'), JAVA_HINT))
    })
}

async fn java_version(ctx: &CheckContext) -> std::result::Result<String, String> {
    let program = java_program(ctx);
    let output = run_program(&program, &["-version"], ctx)
        .await
        .map_err(|e| e.to_string())?;
    if !output.success() {
        return Err(output.failure_summary());
    }
    let text = format!("{}\n{}", output.stderr, output.stdout);
    Ok(match parse_java_version(&text) {
        Some(version) => format!("Java {}", version),
        None => output.first_line().unwrap_or("Java found").to_string(),
    })
}

fn api_level(level: u32, sdk: Option<AndroidSdk>, ctx: &CheckContext) -> Requirement {
    let ctx = ctx.clone();
    let package = format!("{}{}", PLATFORM_PREFIX, level);
    Requirement::new(format!("Android platform API {}", level), move || async move {
        if let Some(sdk) = &sdk {
            if sdk.platform_dir(level).is_dir() {
                return Ok(Some(format!("{} installed", package)));
            }
        }

        let output = run_program("sdkmanager", &["--list_installed"], &ctx)
            .await
            .map_err(|e| e.to_string())?;
        if !output.success() {
            return Err(output.failure_summary());
        }
        let installed = installed_api_levels(&parse_installed_packages(&output.stdout));
        if installed.contains(&level) {
            Ok(Some(format!("{} installed", package)))
        } else {
            Err(format!(
                "{} is not installed; run `sdkmanager \"{}\"`",
                package, package
            ))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::run_requirement;
    use std::collections::HashMap;
    use tempfile::TempDir;

    const LIST_INSTALLED: &str = "\
Installed packages:
  Path                 | Version | Description                    | Location
  -------              | ------- | -------                        | -------
  build-tools;34.0.0   | 34.0.0  | Android SDK Build-Tools 34     | build-tools/34.0.0
  platform-tools       | 35.0.1  | Android SDK Platform-Tools     | platform-tools
  platforms;android-33 | 3       | Android SDK Platform 33        | platforms/android-33
  platforms;android-34 | 3       | Android SDK Platform 34        | platforms/android-34
  platforms;android-VanillaIceCream | 1 | Android SDK Platform VanillaIceCream | platforms/android-VanillaIceCream
";

    fn ctx(pairs: &[(&str, &Path)]) -> CheckContext {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.display().to_string()))
            .collect();
        CheckContext::with_env(std::env::temp_dir(), env)
    }

    #[test]
    fn parses_installed_package_paths() {
        let packages = parse_installed_packages(LIST_INSTALLED);
        assert_eq!(packages.len(), 5);
        assert_eq!(packages[0], "build-tools;34.0.0");
        assert!(packages.contains(&"platforms;android-34".to_string()));
    }

    #[test]
    fn api_levels_skip_codenames() {
        let levels = installed_api_levels(&parse_installed_packages(LIST_INSTALLED));
        assert_eq!(levels, vec![33, 34]);
    }

    #[tokio::test]
    async fn missing_java_explains_how_to_install() {
        let empty = TempDir::new().unwrap();
        let ctx = ctx(&[("PATH", empty.path())]);
        let result = run_requirement(java(&ctx)).await;
        assert!(!result.has_passed);
        assert!(result.message.contains("'java' was not found on PATH"));
        assert!(result.message.ends_with(JAVA_HINT));
    }

    #[test]
    fn parses_java_versions() {
        let openjdk = "openjdk version \"17.0.9\" 2023-10-17\nOpenJDK Runtime Environment";
        assert_eq!(parse_java_version(openjdk).as_deref(), Some("17.0.9"));
        let oracle = "java version \"1.8.0_391\"";
        assert_eq!(parse_java_version(oracle).as_deref(), Some("1.8.0_391"));
        assert_eq!(parse_java_version("command not found"), None);
    }

    #[test]
    fn config_sdk_root_wins() {
        let configured = TempDir::new().unwrap();
        let env_root = TempDir::new().unwrap();
        let config = AndroidConfig {
            sdk_root: Some(configured.path().to_path_buf()),
            ..AndroidConfig::default()
        };
        let sdk = resolve_sdk(&config, &ctx(&[("ANDROID_SDK_ROOT", env_root.path())])).unwrap();
        assert_eq!(sdk.root, configured.path());
        assert_eq!(sdk.source, SdkSource::Config);
    }

    #[test]
    fn android_home_is_a_fallback() {
        let home = TempDir::new().unwrap();
        let sdk = resolve_sdk(
            &AndroidConfig::default(),
            &ctx(&[("ANDROID_HOME", home.path())]),
        )
        .unwrap();
        assert_eq!(sdk.source, SdkSource::AndroidHome);
    }

    #[test]
    fn sdk_root_preferred_over_android_home() {
        let root = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        let sdk = resolve_sdk(
            &AndroidConfig::default(),
            &ctx(&[("ANDROID_SDK_ROOT", root.path()), ("ANDROID_HOME", home.path())]),
        )
        .unwrap();
        assert_eq!(sdk.root, root.path());
        assert_eq!(sdk.source, SdkSource::AndroidSdkRoot);
    }

    #[test]
    fn unresolvable_sdk_reports_why() {
        assert_eq!(
            resolve_sdk(&AndroidConfig::default(), &ctx(&[])),
            Err(SdkRootError::NotSet)
        );

        let missing = Path::new("/definitely/not/an/sdk");
        let err = resolve_sdk(
            &AndroidConfig::default(),
            &ctx(&[("ANDROID_SDK_ROOT", missing)]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("ANDROID_SDK_ROOT"));
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn group_includes_api_level_only_when_configured() {
        let without = requirements(&AndroidConfig::default(), &ctx(&[]));
        assert_eq!(without.len(), 6);

        let config = AndroidConfig {
            api_level: Some(34),
            ..AndroidConfig::default()
        };
        let with = requirements(&config, &ctx(&[]));
        assert_eq!(with.len(), 7);
        assert_eq!(with[6].title, "Android platform API 34");
    }

    #[tokio::test]
    async fn installed_platform_dir_satisfies_api_level() {
        let root = TempDir::new().unwrap();
        std::fs::create_dir_all(root.path().join("platforms").join("android-34")).unwrap();
        let config = AndroidConfig {
            sdk_root: Some(root.path().to_path_buf()),
            api_level: Some(34),
            ..AndroidConfig::default()
        };

        let mut reqs = requirements(&config, &ctx(&[]));
        let api = reqs.pop().unwrap();
        let result = run_requirement(api).await;
        assert!(result.has_passed);
        assert_eq!(result.message, "platforms;android-34 installed");

        let location = run_requirement(reqs.remove(0)).await;
        assert!(location.has_passed);
        assert!(location.message.contains("from android.sdk_root"));
    }

    #[tokio::test]
    async fn missing_sdk_fails_location_check() {
        let reqs = requirements(&AndroidConfig::default(), &ctx(&[]));
        let first = reqs.into_iter().next().unwrap();
        let result = run_requirement(first).await;
        assert!(!result.has_passed);
        assert!(result.message.starts_with("Have you installed the Android SDK?"));
    }
}
