//! Explicit environment for built-in checks.
//!
//! Checks never read process-wide state directly. Everything they need
//! (environment variables, PATH entries, the project root and the command
//! timeout) travels in a [`CheckContext`], so two contexts built from
//! different environments give independent results.

use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, warn};

use super::probe::{parse_path_value, resolve_tool_path};

/// Default limit for a single external command.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment snapshot handed to check constructors.
#[derive(Debug, Clone)]
pub struct CheckContext {
    project_root: PathBuf,
    env: HashMap<String, String>,
    path_entries: Vec<PathBuf>,
    original_path: Option<OsString>,
    command_timeout: Duration,
}

impl CheckContext {
    /// Snapshot the current process environment.
    pub fn from_env(project_root: impl Into<PathBuf>) -> Self {
        Self::from_os_vars(project_root, std::env::vars_os())
    }

    /// Build a context from raw OS variables.
    ///
    /// PATH is kept as-is; other variables that are not valid UTF-8 are
    /// skipped.
    pub fn from_os_vars<I>(project_root: impl Into<PathBuf>, vars: I) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let mut env = HashMap::new();
        let mut path = None;
        for (key, value) in vars {
            if key == "PATH" {
                path = Some(value);
                continue;
            }
            match (key.into_string(), value.into_string()) {
                (Ok(k), Ok(v)) => {
                    env.insert(k, v);
                }
                (Ok(k), Err(_)) => debug!("Skipping {} with a non-UTF-8 value", k),
                (Err(k), _) => debug!("Skipping non-UTF-8 variable {:?}", k),
            }
        }
        Self::from_parts(project_root.into(), env, path)
    }

    /// Build a context from an explicit set of variables.
    pub fn with_env(project_root: impl Into<PathBuf>, mut env: HashMap<String, String>) -> Self {
        let path = env.remove("PATH").map(OsString::from);
        Self::from_parts(project_root.into(), env, path)
    }

    fn from_parts(
        project_root: PathBuf,
        mut env: HashMap<String, String>,
        path: Option<OsString>,
    ) -> Self {
        let path_entries = path
            .as_deref()
            .map(parse_path_value)
            .unwrap_or_default();
        if let Some(p) = path.as_deref().and_then(OsStr::to_str) {
            env.insert("PATH".to_string(), p.to_string());
        }
        Self {
            project_root,
            env,
            path_entries,
            original_path: path,
            command_timeout: DEFAULT_COMMAND_TIMEOUT,
        }
    }

    /// Set the limit applied to each external command.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.command_timeout = timeout;
        self
    }

    /// Put extra directories ahead of PATH, skipping ones already present.
    pub fn prepend_path<I>(&mut self, dirs: I)
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut added: Vec<PathBuf> = dirs
            .into_iter()
            .filter(|d| !self.path_entries.contains(d))
            .collect();
        added.append(&mut self.path_entries);
        self.path_entries = added;
    }

    /// Project directory that relative paths resolve against.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Look up a variable; empty values count as unset.
    pub fn var(&self, key: &str) -> Option<&str> {
        self.env
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Directories searched for tools, in order.
    pub fn path_entries(&self) -> &[PathBuf] {
        &self.path_entries
    }

    /// PATH value for child processes.
    ///
    /// Falls back to the PATH this context was built with when an entry
    /// cannot be joined.
    pub fn joined_path(&self) -> OsString {
        match std::env::join_paths(&self.path_entries) {
            Ok(joined) => joined,
            Err(e) => {
                warn!(
                    "Cannot build PATH for child processes ({}); using the original PATH",
                    e
                );
                self.original_path.clone().unwrap_or_default()
            }
        }
    }

    /// Find `tool` on this context's PATH.
    pub fn resolve_tool(&self, tool: &str) -> Option<PathBuf> {
        resolve_tool_path(tool, &self.path_entries)
    }

    /// Resolve `path` against the project root unless already absolute.
    pub fn resolve_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }

    /// Limit applied to each external command.
    pub fn command_timeout(&self) -> Duration {
        self.command_timeout
    }
}
