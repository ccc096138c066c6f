//! Host platform detection.

/// CI environment variables that force headless output.
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
    "BUILDKITE",
];

/// Check if running in a CI environment.
///
/// Used to force headless reporting in `check`.
pub fn is_ci() -> bool {
    is_ci_with(|key| std::env::var_os(key).is_some())
}

/// Check for CI with a custom variable lookup.
pub fn is_ci_with<F>(is_set: F) -> bool
where
    F: Fn(&str) -> bool,
{
    CI_VARS.iter().any(|var| is_set(var))
}

/// Whether this host can run Apple's simulator tooling.
pub fn is_macos() -> bool {
    cfg!(target_os = "macos")
}

/// Shell program and the flag that passes it a command string.
pub fn shell_invocation() -> (&'static str, &'static str) {
    if cfg!(target_os = "windows") {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    }
}
