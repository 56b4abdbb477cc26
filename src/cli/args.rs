//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};
use crate::usage::DEFAULT_TTL;

use super::commands::Commands;

/// Branch names longer than this are shortened
pub(crate) const DEFAULT_BRANCH_MAX_LEN: usize = 30;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal and NO_COLOR (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Parser)]
#[command(name = "claudeline")]
#[command(about = "Compact status line for Claude Code: git branch and cached usage", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Maximum branch width in characters
    #[arg(short = 'm', long, global = true, value_name = "N")]
    pub(crate) max_branch_len: Option<usize>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug output on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Leave the branch out of the status line
    #[arg(long, global = true)]
    pub(crate) no_branch: bool,

    /// Leave cached usage out of the status line
    #[arg(long, global = true)]
    pub(crate) no_usage: bool,

    /// Seconds a cached usage snapshot stays valid
    #[arg(long, global = true, value_name = "SECS")]
    pub(crate) usage_ttl: Option<u64>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }
        if !self.no_branch && config.no_branch {
            self.no_branch = true;
        }
        if !self.no_usage && config.no_usage {
            self.no_usage = true;
        }

        if let Some(color) = config.color
            && matches!(self.color, ColorMode::Auto)
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.max_branch_len.is_none() {
            self.max_branch_len = config.branch_max_len;
        }
        if self.usage_ttl.is_none() {
            self.usage_ttl = config.usage_ttl_secs;
        }

        self
    }

    pub(crate) fn command(&self) -> Commands {
        self.command.unwrap_or_default()
    }

    pub(crate) fn branch_max_len(&self) -> usize {
        self.max_branch_len.unwrap_or(DEFAULT_BRANCH_MAX_LEN)
    }

    pub(crate) fn usage_ttl(&self) -> Duration {
        self.usage_ttl.map_or(DEFAULT_TTL, Duration::from_secs)
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var_os("NO_COLOR").is_none_or(|v| v.is_empty())
                    && std::io::stdout().is_terminal()
            }
        }
    }
}
