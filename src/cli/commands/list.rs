//! List command implementation.
//!
//! The `mobile-doctor list` command shows every requirement group and its
//! titles without running any check.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::platform::build_requirements;
use crate::requirements::{CheckContext, RequirementList};
use crate::ui::{DoctorTheme, StatusKind, UserInterface};

use super::dispatcher::{load_project_config, Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: ListArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

/// Lines describing one group.
pub fn group_lines(key: &str, list: &RequirementList, theme: &DoctorTheme) -> Vec<String> {
    let state = if list.enabled { "enabled" } else { "disabled" };
    let mut lines = vec![format!(
        "  {} {}",
        theme.highlight.apply_to(key),
        theme.dim.apply_to(format!("({}, {} checks)", state, list.len()))
    )];

    let kind = if list.enabled {
        StatusKind::Running
    } else {
        StatusKind::Disabled
    };
    lines.extend(list.titles().map(|title| format!("    {}", kind.format(theme, title))));
    if list.is_empty() {
        lines.push(format!("    {}", theme.dim.apply_to("(none)")));
    }
    lines
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let loaded = load_project_config(&self.project_root, self.config_path.as_deref(), ui)?;
        let config = match loaded {
            Ok(config) => config,
            Err(stop) => return Ok(stop),
        };

        let ctx = CheckContext::from_env(&self.project_root)
            .with_timeout(Duration::from_secs(config.settings.command_timeout_secs));
        let requirements = build_requirements(&config, &ctx, self.args.platform);
        let theme = DoctorTheme::for_stdout();

        ui.show_header("Requirement groups");
        for (key, list) in requirements.iter() {
            for line in group_lines(key, list, &theme) {
                ui.message(&line);
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PlatformSelection;
    use crate::requirements::Requirement;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn noop(title: &str) -> Requirement {
        Requirement::new(title, || async { Ok(None) })
    }

    #[test]
    fn disabled_group_is_marked() {
        let list = RequirementList::with_enabled(vec![noop("Xcode")], false);
        let lines = group_lines("ios", &list, &DoctorTheme::plain());
        assert_eq!(lines[0], "  ios (disabled, 1 checks)");
        assert_eq!(lines[1], "    ○ Xcode");
    }

    #[test]
    fn empty_group_says_none() {
        let list = RequirementList::new(Vec::new());
        let lines = group_lines("custom", &list, &DoctorTheme::plain());
        assert_eq!(lines.last().map(String::as_str), Some("    (none)"));
    }

    #[test]
    fn lists_every_group_without_running() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let args = ListArgs {
            platform: PlatformSelection::Android,
        };
        let result = ListCommand::new(temp.path(), None, args)
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(ui.headers(), &["Requirement groups"]);
        assert!(ui.messages().iter().any(|m| m.contains("android")));
        assert!(ui.messages().iter().any(|m| m.contains("ios")));
        assert!(ui.messages().iter().any(|m| m.contains("Android SDK location")));
    }
}
