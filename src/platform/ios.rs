//! iOS toolchain requirements.
//!
//! Everything here shells out to Apple tooling, so the group only runs on
//! macOS by default.

use std::cmp::Ordering;

use serde::Deserialize;

use crate::config::IosConfig;
use crate::requirements::{CheckContext, Requirement};
use crate::shell::run_program;

/// Developer dir that lacks simulators.
pub const FORBIDDEN_DEVELOPER_DIR: &str = "/Library/Developer/CommandLineTools";

/// Developer dir of a default Xcode install.
pub const SUGGESTED_DEVELOPER_DIR: &str = "/Applications/Xcode.app/Contents/Developer";

/// One entry of `xcrun simctl list runtimes --json`.
#[derive(Debug, Clone, Deserialize)]
pub struct SimRuntime {
    pub name: String,
    pub version: String,
    pub identifier: String,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(rename = "isAvailable", default = "available_by_default")]
    pub is_available: bool,
}

impl SimRuntime {
    fn is_ios(&self) -> bool {
        match &self.platform {
            Some(platform) => platform == "iOS",
            None => self.name.starts_with("iOS"),
        }
    }
}

#[derive(Deserialize)]
struct RuntimeList {
    runtimes: Vec<SimRuntime>,
}

fn available_by_default() -> bool {
    true
}

/// Parse a dotted numeric version such as "17.0.1".
pub fn parse_version(version: &str) -> Option<Vec<u32>> {
    let parts: Option<Vec<u32>> = version
        .trim()
        .split('.')
        .map(|part| part.parse().ok())
        .collect();
    parts.filter(|p| !p.is_empty())
}

/// Compare dotted versions, treating missing components as zero.
pub fn compare_versions(a: &[u32], b: &[u32]) -> Ordering {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(0);
            let y = b.get(i).copied().unwrap_or(0);
            x.cmp(&y)
        })
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Parse the JSON runtime list printed by simctl.
pub fn parse_runtimes(json: &str) -> serde_json::Result<Vec<SimRuntime>> {
    serde_json::from_str::<RuntimeList>(json).map(|list| list.runtimes)
}

/// Newest available iOS runtime, if any.
pub fn newest_ios_runtime(runtimes: &[SimRuntime]) -> Option<&SimRuntime> {
    runtimes
        .iter()
        .filter(|r| r.is_available && r.is_ios())
        .filter_map(|r| parse_version(&r.version).map(|v| (v, r)))
        .max_by(|(a, _), (b, _)| compare_versions(a, b))
        .map(|(_, r)| r)
}

/// Judge the active developer dir printed by `xcode-select -p`.
pub fn check_developer_dir(path: &str) -> std::result::Result<String, String> {
    if path == FORBIDDEN_DEVELOPER_DIR {
        Err(format!(
            "The active developer dir is the Command Line Tools ({}), which has no simulators; run `sudo xcode-select -s {}`",
            FORBIDDEN_DEVELOPER_DIR, SUGGESTED_DEVELOPER_DIR
        ))
    } else {
        Ok(format!("Active developer dir: {}", path))
    }
}

/// Decide whether the runtime list satisfies `min`.
pub fn check_runtimes(
    runtimes: &[SimRuntime],
    min: Option<&[u32]>,
) -> std::result::Result<String, String> {
    let newest = newest_ios_runtime(runtimes).ok_or_else(|| {
        "No iOS simulator runtime is installed; add one in Xcode > Settings > Platforms"
            .to_string()
    })?;

    if let (Some(min), Some(found)) = (min, parse_version(&newest.version)) {
        if compare_versions(&found, min).is_lt() {
            return Err(format!(
                "Newest iOS simulator runtime is {}, older than the required {}",
                newest.version,
                join_version(min)
            ));
        }
    }
    Ok(newest.name.clone())
}

fn join_version(version: &[u32]) -> String {
    version
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

/// Build the iOS requirement group.
pub fn requirements(config: &IosConfig, ctx: &CheckContext) -> Vec<Requirement> {
    let min = config.min_runtime.as_deref().and_then(parse_version);
    let runtime_title = match &min {
        Some(v) => format!("iOS simulator runtime {} or newer", join_version(v)),
        None => "iOS simulator runtime".to_string(),
    };

    vec![
        developer_dir(ctx),
        simctl(ctx),
        runtime(runtime_title, min, ctx),
    ]
}

const XCODE_HINT: &str = "Install Xcode from the App Store.";

fn developer_dir(ctx: &CheckContext) -> Requirement {
    let ctx = ctx.clone();
    Requirement::new("Xcode developer directory", move || async move {
        active_developer_dir(&ctx)
            .await
            .map(Some)
            .map_err(|e| format!("{}. {}", e.trim_end_matches('.'), XCODE_HINT))
    })
}

async fn active_developer_dir(ctx: &CheckContext) -> std::result::Result<String, String> {
    let output = run_program("xcode-select", &["-p"], ctx)
        .await
        .map_err(|e| e.to_string())?;
    if !output.success() {
        return Err(output.failure_summary());
    }
    check_developer_dir(output.first_line().unwrap_or_default())
}

fn simctl(ctx: &CheckContext) -> Requirement {
    let ctx = ctx.clone();
    Requirement::new("Simulator tooling (simctl)", move || async move {
        let output = run_program("xcrun", &["simctl", "help"], &ctx)
            .await
            .map_err(|e| e.to_string())?;
        if output.success() {
            Ok(Some("xcrun simctl is available".to_string()))
        } else {
            Err(output.failure_summary())
        }
    })
}

fn runtime(title: String, min: Option<Vec<u32>>, ctx: &CheckContext) -> Requirement {
    let ctx = ctx.clone();
    Requirement::new(title, move || async move {
        let output = run_program("xcrun", &["simctl", "list", "runtimes", "--json"], &ctx)
            .await
            .map_err(|e| e.to_string())?;
        if !output.success() {
            return Err(output.failure_summary());
        }
        let runtimes = parse_runtimes(&output.stdout)
            .map_err(|e| format!("`simctl list` returned invalid JSON: {}", e))?;
        check_runtimes(&runtimes, min.as_deref()).map(Some)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUNTIMES: &str = r#"{
  "runtimes" : [
    {
      "bundlePath" : "/Library/Developer/CoreSimulator/Volumes/iOS_21A328/iOS 17.0.simruntime",
      "buildversion" : "21A328",
      "platform" : "iOS",
      "runtimeRoot" : "/Library/Developer/CoreSimulator/Volumes/iOS_21A328/iOS 17.0.simruntime/Contents/Resources/RuntimeRoot",
      "identifier" : "com.apple.CoreSimulator.SimRuntime.iOS-17-0",
      "version" : "17.0",
      "isInternal" : false,
      "isAvailable" : true,
      "name" : "iOS 17.0",
      "supportedDeviceTypes" : []
    },
    {
      "buildversion" : "21C62",
      "platform" : "iOS",
      "identifier" : "com.apple.CoreSimulator.SimRuntime.iOS-17-2",
      "version" : "17.2",
      "isAvailable" : true,
      "name" : "iOS 17.2"
    },
    {
      "buildversion" : "22A3351",
      "platform" : "iOS",
      "identifier" : "com.apple.CoreSimulator.SimRuntime.iOS-18-0",
      "version" : "18.0",
      "isAvailable" : false,
      "name" : "iOS 18.0"
    },
    {
      "platform" : "watchOS",
      "identifier" : "com.apple.CoreSimulator.SimRuntime.watchOS-10-2",
      "version" : "10.2",
      "isAvailable" : true,
      "name" : "watchOS 10.2"
    }
  ]
}"#;

    #[test]
    fn parses_dotted_versions() {
        assert_eq!(parse_version("17.0"), Some(vec![17, 0]));
        assert_eq!(parse_version(" 16.4.1 "), Some(vec![16, 4, 1]));
        assert_eq!(parse_version("17"), Some(vec![17]));
        assert_eq!(parse_version("seventeen"), None);
        assert_eq!(parse_version("17..0"), None);
        assert_eq!(parse_version(""), None);
    }

    #[test]
    fn compares_with_zero_padding() {
        assert_eq!(compare_versions(&[17], &[17, 0]), Ordering::Equal);
        assert_eq!(compare_versions(&[17, 2], &[17, 10]), Ordering::Less);
        assert_eq!(compare_versions(&[18], &[17, 9, 9]), Ordering::Greater);
    }

    #[test]
    fn newest_runtime_ignores_unavailable_and_other_platforms() {
        let runtimes = parse_runtimes(RUNTIMES).unwrap();
        assert_eq!(runtimes.len(), 4);
        let newest = newest_ios_runtime(&runtimes).unwrap();
        assert_eq!(newest.identifier, "com.apple.CoreSimulator.SimRuntime.iOS-17-2");
    }

    #[test]
    fn runtime_check_honors_minimum() {
        let runtimes = parse_runtimes(RUNTIMES).unwrap();
        assert_eq!(check_runtimes(&runtimes, None), Ok("iOS 17.2".to_string()));
        assert_eq!(
            check_runtimes(&runtimes, Some(&[17, 1][..])),
            Ok("iOS 17.2".to_string())
        );

        let err = check_runtimes(&runtimes, Some(&[18][..])).unwrap_err();
        assert!(err.contains("17.2"));
        assert!(err.contains("required 18"));
    }

    #[test]
    fn no_ios_runtime_is_a_failure() {
        let err = check_runtimes(&[], None).unwrap_err();
        assert!(err.starts_with("No iOS simulator runtime"));
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(parse_runtimes("not json").is_err());
    }

    #[test]
    fn command_line_tools_dir_is_rejected() {
        let err = check_developer_dir(FORBIDDEN_DEVELOPER_DIR).unwrap_err();
        assert!(err.contains(SUGGESTED_DEVELOPER_DIR));
        assert_eq!(
            check_developer_dir(SUGGESTED_DEVELOPER_DIR),
            Ok(format!("Active developer dir: {}", SUGGESTED_DEVELOPER_DIR))
        );
    }

    #[tokio::test]
    async fn missing_xcode_select_explains_how_to_install() {
        let empty = tempfile::TempDir::new().unwrap();
        let env = [("PATH".to_string(), empty.path().display().to_string())]
            .into_iter()
            .collect();
        let ctx = CheckContext::with_env(std::env::temp_dir(), env);
        let result = crate::requirements::run_requirement(developer_dir(&ctx)).await;
        assert!(!result.has_passed);
        assert!(result.message.contains("'xcode-select' was not found on PATH"));
        assert!(result.message.ends_with(XCODE_HINT));
    }

    #[test]
    fn runtime_title_mentions_minimum() {
        let ctx = CheckContext::with_env(std::env::temp_dir(), Default::default());
        let config = IosConfig {
            enabled: true,
            min_runtime: Some("17.0".to_string()),
        };
        let reqs = requirements(&config, &ctx);
        assert_eq!(reqs.len(), 3);
        assert_eq!(reqs[2].title, "iOS simulator runtime 17.0 or newer");
    }
}
