//! Local execution: search-path lookup and synchronous spawn with inherited stdio.

use super::Runner;
use crate::core::error::StateError;
use crate::core::types::Invocation;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Runs invocations on this machine, resolving programs against `PATH`.
#[derive(Debug, Clone, Default)]
pub struct LocalRunner {
    search_path: Option<OsString>,
}

impl LocalRunner {
    /// Use the process's own `PATH`.
    pub fn from_env() -> Self {
        LocalRunner {
            search_path: std::env::var_os("PATH"),
        }
    }

    /// Use an explicit search path.
    pub fn with_path(search_path: impl Into<OsString>) -> Self {
        LocalRunner {
            search_path: Some(search_path.into()),
        }
    }
}

impl Runner for LocalRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<(), StateError> {
        let program = invocation.program();
        let resolved = find_program(program, self.search_path.as_deref()).ok_or_else(|| {
            StateError::NotInstalled {
                program: program.to_string(),
            }
        })?;
        tracing::debug!(program, path = %resolved.display(), "resolved");

        let mut cmd = Command::new(&resolved);
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.arg0(program);
        }
        let status = cmd
            .args(invocation.args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| StateError::Spawn {
                program: program.to_string(),
                source,
            })?;

        tracing::debug!(program, %status, "exited");
        if status.success() {
            Ok(())
        } else {
            Err(StateError::ExitStatus {
                program: program.to_string(),
                status,
            })
        }
    }
}

/// Resolve `name` to an executable file.
/// Names containing a path separator are checked directly; others are
/// looked up in each directory of `search_path`, first match wins.
pub fn find_program(name: &str, search_path: Option<&OsStr>) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }
    if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
        let path = PathBuf::from(name);
        return is_executable(&path).then_some(path);
    }
    std::env::split_paths(search_path?)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    std::fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}
