use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::VcsError;

/// Source of the current branch name
pub(crate) trait BranchLocator {
    fn current_branch(&self) -> Result<String, VcsError>;
}

/// Asks the `git` binary for the abbreviated name of HEAD.
/// A detached HEAD succeeds with the literal name `HEAD`.
#[derive(Debug, Clone, Default)]
pub(crate) struct GitLocator {
    work_dir: Option<PathBuf>,
}

impl GitLocator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Run git inside `dir` instead of the process working directory
    pub(crate) fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            work_dir: Some(dir.as_ref().to_path_buf()),
        }
    }
}

impl BranchLocator for GitLocator {
    fn current_branch(&self) -> Result<String, VcsError> {
        let mut cmd = Command::new("git");
        cmd.args(["rev-parse", "--abbrev-ref", "HEAD"])
            .stdin(Stdio::null());
        if let Some(dir) = &self.work_dir {
            if !dir.is_dir() {
                return Err(VcsError::Spawn(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("working directory {} does not exist", dir.display()),
                )));
            }
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                VcsError::NotFound
            } else {
                VcsError::Spawn(e)
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(VcsError::Failed {
                status: output.status,
                stderr: stderr.trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout).map_err(VcsError::Utf8)?;
        Ok(stdout.trim().to_string())
    }
}

/// Current branch, or an empty string when the locator cannot tell
pub(crate) fn get_branch(locator: &dyn BranchLocator) -> String {
    match locator.current_branch() {
        Ok(branch) => branch,
        Err(e) => {
            debug_log!("branch lookup failed: {e}");
            String::new()
        }
    }
}
