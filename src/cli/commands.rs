//! CLI subcommand definitions

use clap::Subcommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Subcommand)]
pub(crate) enum Commands {
    /// Render the status line (default)
    #[default]
    Statusline,
    /// Print the current git branch, shortened to --max-branch-len
    Branch,
    /// Print the usage cache path and keychain service name for this profile
    Paths,
}
