//! Requirements declared in project config.

use std::collections::BTreeMap;

use crate::config::{CustomRequirement, CustomRequirementCheck};
use crate::requirements::checks::{env_dir, file_exists, shell_succeeds, tool_on_path};
use crate::requirements::{CheckContext, Requirement};

/// Build one requirement per configured entry, in name order.
pub fn requirements(
    declared: &BTreeMap<String, CustomRequirement>,
    ctx: &CheckContext,
) -> Vec<Requirement> {
    declared
        .iter()
        .map(|(name, custom)| build(name, custom, ctx))
        .collect()
}

fn build(name: &str, custom: &CustomRequirement, ctx: &CheckContext) -> Requirement {
    let title = custom.title.clone().unwrap_or_else(|| name.to_string());
    let requirement = match &custom.check {
        CustomRequirementCheck::CommandSucceeds { command } => shell_succeeds(title, command, ctx),
        CustomRequirementCheck::FileExists { path } => file_exists(title, path, ctx),
        CustomRequirementCheck::ToolOnPath { tool } => tool_on_path(title, tool, ctx),
        CustomRequirementCheck::EnvDir { var } => env_dir(title, var, ctx),
    };
    match &custom.note {
        Some(note) => requirement.with_supplemental_message(note.clone()),
        None => requirement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::run_requirement;
    use tempfile::TempDir;

    fn declared(yaml: &str) -> BTreeMap<String, CustomRequirement> {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn title_defaults_to_name() {
        let reqs = declared(
            r#"
gradle-wrapper: { check: { type: file_exists, path: gradlew } }
pods: { title: CocoaPods, check: { type: tool_on_path, tool: pod } }
"#,
        );
        let ctx = CheckContext::with_env(std::env::temp_dir(), Default::default());
        let built = requirements(&reqs, &ctx);
        let titles: Vec<_> = built.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["gradle-wrapper", "CocoaPods"]);
    }

    #[tokio::test]
    async fn note_is_appended_to_the_message() {
        let dir = TempDir::new().unwrap();
        let reqs = declared(
            r#"
env-file:
  check: { type: file_exists, path: .env }
  note: "Copy .env.example to .env"
"#,
        );
        let ctx = CheckContext::with_env(dir.path(), Default::default());
        let req = requirements(&reqs, &ctx).pop().unwrap();
        let result = run_requirement(req).await;
        assert!(!result.has_passed);
        assert!(result.message.ends_with("does not exist Copy .env.example to .env"));
    }
}
