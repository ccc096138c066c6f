//! Requirement groups for each mobile platform.
//!
//! [`build_requirements`] turns a loaded config into the
//! [`CommandRequirements`] the `check` and `list` commands work on. Groups
//! are always present so `list` can show disabled ones; only enabled groups
//! run.

pub mod android;
pub mod custom;
pub mod ios;

use clap::ValueEnum;

use crate::config::DoctorConfig;
use crate::requirements::{CheckContext, CommandRequirements, RequirementList};

/// Group key for Android checks.
pub const ANDROID_GROUP: &str = "android";
/// Group key for iOS checks.
pub const IOS_GROUP: &str = "ios";
/// Group key for config-declared checks.
pub const CUSTOM_GROUP: &str = "custom";

/// Which platform groups a command should run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PlatformSelection {
    #[default]
    All,
    Android,
    Ios,
}

impl PlatformSelection {
    pub fn includes_android(self) -> bool {
        matches!(self, Self::All | Self::Android)
    }

    pub fn includes_ios(self) -> bool {
        matches!(self, Self::All | Self::Ios)
    }
}

/// Build every requirement group for one invocation.
///
/// Custom requirements run whatever the platform selection.
pub fn build_requirements(
    config: &DoctorConfig,
    ctx: &CheckContext,
    selection: PlatformSelection,
) -> CommandRequirements {
    CommandRequirements::new()
        .with(
            ANDROID_GROUP,
            RequirementList::with_enabled(
                android::requirements(&config.android, ctx),
                config.android.enabled && selection.includes_android(),
            ),
        )
        .with(
            IOS_GROUP,
            RequirementList::with_enabled(
                ios::requirements(&config.ios, ctx),
                config.ios.enabled && selection.includes_ios(),
            ),
        )
        .with(
            CUSTOM_GROUP,
            RequirementList::new(custom::requirements(&config.requirements, ctx)),
        )
}
