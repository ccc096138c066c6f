//! PATH lookup for tool binaries.
//!
//! Resolution walks PATH entries directly instead of shelling out to
//! `which`, whose behavior varies across systems.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Candidate file names for `tool` on this platform.
fn candidate_names(tool: &str) -> Vec<String> {
    if cfg!(windows) && Path::new(tool).extension().is_none() {
        ["exe", "bat", "cmd"]
            .iter()
            .map(|ext| format!("{}.{}", tool, ext))
            .collect()
    } else {
        vec![tool.to_string()]
    }
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let names = candidate_names(tool);
    for dir in path_entries {
        for name in &names {
            let candidate = dir.join(name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Split a PATH-style value into directories, dropping empty entries.
pub fn parse_path_value(value: &OsStr) -> Vec<PathBuf> {
    std::env::split_paths(value)
        .filter(|p| !p.as_os_str().is_empty())
        .collect()
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| parse_path_value(&path))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn make_executable(path: &Path) {
        use std::os::unix::fs::PermissionsExt;
        fs::write(path, "#!/bin/sh\nexit 0\n").unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    #[cfg(unix)]
    fn resolves_first_matching_entry() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        make_executable(&first.path().join("adb"));
        make_executable(&second.path().join("adb"));

        let entries = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        assert_eq!(
            resolve_tool_path("adb", &entries),
            Some(first.path().join("adb"))
        );
    }

    #[test]
    #[cfg(unix)]
    fn skips_non_executable_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("adb"), "not a binary").unwrap();
        assert_eq!(resolve_tool_path("adb", &[dir.path().to_path_buf()]), None);
    }

    #[test]
    fn missing_tool_is_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            resolve_tool_path("definitely-not-a-tool", &[dir.path().to_path_buf()]),
            None
        );
    }

    #[test]
    #[cfg(unix)]
    fn parse_path_value_drops_empty_entries() {
        let entries = parse_path_value(OsStr::new("/usr/bin::/bin"));
        assert_eq!(
            entries,
            vec![PathBuf::from("/usr/bin"), PathBuf::from("/bin")]
        );
    }
}
