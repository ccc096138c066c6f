//! Check command implementation.
//!
//! The `mobile-doctor check` command runs every enabled requirement and
//! exits non-zero if any of them is unmet.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::platform::build_requirements;
use crate::requirements::{
    CheckContext, CommandRequirements, RequirementCheckResult, RequirementProcessor,
};
use crate::ui::{ExecutionMode, UserInterface};

use super::dispatcher::{load_project_config, Command, CommandResult, EXIT_UNMET};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
}

/// Machine-readable report printed by `check --json`.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub checked_at: DateTime<Utc>,
    pub passed: usize,
    pub total: usize,
    #[serde(flatten)]
    pub result: &'a RequirementCheckResult,
}

impl<'a> JsonReport<'a> {
    pub fn new(result: &'a RequirementCheckResult) -> Self {
        Self {
            checked_at: Utc::now(),
            passed: result.passed_count(),
            total: result.tests.len(),
            result,
        }
    }
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Pick how progress is shown.
    ///
    /// JSON output wants a clean stdout; a non-interactive terminal gets the
    /// headless summary.
    pub fn execution_mode(&self, interactive: bool) -> ExecutionMode {
        if self.args.json {
            ExecutionMode::Silent
        } else if self.args.headless || !interactive {
            ExecutionMode::Headless
        } else {
            ExecutionMode::Interactive
        }
    }

    fn run(
        &self,
        requirements: CommandRequirements,
        mode: ExecutionMode,
    ) -> Result<RequirementCheckResult> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(RequirementProcessor::execute(requirements, mode))
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let loaded = load_project_config(&self.project_root, self.config_path.as_deref(), ui)?;
        let config = match loaded {
            Ok(config) => config,
            Err(stop) => return Ok(stop),
        };

        let ctx = CheckContext::from_env(&self.project_root)
            .with_timeout(Duration::from_secs(config.settings.command_timeout_secs));
        let requirements = build_requirements(&config, &ctx, self.args.platform);
        let mode = self.execution_mode(ui.is_interactive());
        debug!("Running checks in {:?} mode", mode);

        let no_checks = requirements.enabled_count() == 0;
        let result = self.run(requirements, mode)?;

        if self.args.json {
            let report = serde_json::to_string_pretty(&JsonReport::new(&result))
                .map_err(anyhow::Error::from)?;
            ui.message(&report);
        } else if no_checks {
            ui.warning("No requirements are enabled; nothing to check.");
        } else if result.has_met_all_requirements {
            ui.success("All requirements are met.");
        } else {
            ui.error(&format!(
                "{} of {} requirements are not met.",
                result.failures().count(),
                result.tests.len()
            ));
        }

        if result.has_met_all_requirements {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(EXIT_UNMET))
        }
    }
}
