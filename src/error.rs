use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid statusline input: {0}")]
    InvalidInput(#[source] serde_json::Error),

    #[error("Failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("Failed to serialize JSON output: {0}")]
    Json(#[source] serde_json::Error),

    #[error("{0}")]
    Vcs(#[from] VcsError),
}

#[derive(Debug, Error)]
pub(crate) enum VcsError {
    #[error("git not found. Please install git to show the current branch.")]
    NotFound,

    #[error("Failed to run git: {0}")]
    Spawn(std::io::Error),

    #[error("Invalid UTF-8 from git: {0}")]
    Utf8(std::string::FromUtf8Error),

    #[error("git failed ({status}): {stderr}")]
    Failed {
        status: std::process::ExitStatus,
        stderr: String,
    },
}
