use chrono::Utc;
use serde::Serialize;

use crate::branch::{BranchLocator, GitLocator, compact_branch, get_branch};
use crate::cli::{Cli, Commands};
use crate::error::AppError;
use crate::input::StatusInput;
use crate::output::{StatusLine, print_statusline, statusline_json};
use crate::scope::{ConfigScope, cache_file_path, keychain_service_name};
use crate::usage::load_if_fresh;

/// Inputs resolved once at startup and shared by every command
pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) scope: &'a ConfigScope,
}

#[derive(Debug, Serialize)]
struct PathsReport {
    config_dir: Option<String>,
    scope_suffix: String,
    cache_file: String,
    keychain_service: String,
}

fn handle_statusline(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let input = StatusInput::from_stdin()?;

    let branch = if ctx.cli.no_branch {
        None
    } else {
        let locator = match input.current_dir() {
            Some(dir) => GitLocator::in_dir(dir),
            None => GitLocator::new(),
        };
        Some(compact_branch(&get_branch(&locator), ctx.cli.branch_max_len()))
    };

    let usage = if ctx.cli.no_usage {
        None
    } else {
        let path = cache_file_path(ctx.scope.as_deref());
        debug_log!("usage cache: {}", path.display());
        load_if_fresh(&path, ctx.cli.usage_ttl())
    };

    let line = StatusLine::build(&input, branch, usage.as_ref(), Utc::now());
    if ctx.cli.json {
        println!("{}", statusline_json(&line)?);
    } else {
        print_statusline(&line, ctx.cli.use_color());
    }
    Ok(())
}

fn handle_branch(ctx: &CommandContext<'_>, locator: &dyn BranchLocator) -> Result<(), AppError> {
    let raw = locator.current_branch()?;
    let branch = compact_branch(&raw, ctx.cli.branch_max_len());
    if ctx.cli.json {
        let json = serde_json::json!({ "branch": branch, "full": raw });
        println!("{json}");
    } else {
        println!("{branch}");
    }
    Ok(())
}

fn handle_paths(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let config_dir = ctx.scope.as_deref();
    let report = PathsReport {
        config_dir: config_dir.map(|dir| dir.to_string_lossy().into_owned()),
        scope_suffix: ctx.scope.suffix().to_string(),
        cache_file: cache_file_path(config_dir).display().to_string(),
        keychain_service: keychain_service_name(config_dir),
    };

    if ctx.cli.json {
        println!("{}", serde_json::to_string(&report).map_err(AppError::Json)?);
    } else {
        println!("cache_file: {}", report.cache_file);
        println!("keychain_service: {}", report.keychain_service);
    }
    Ok(())
}

pub(crate) fn run(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    match ctx.cli.command() {
        Commands::Statusline => handle_statusline(ctx),
        Commands::Branch => handle_branch(ctx, &GitLocator::new()),
        Commands::Paths => handle_paths(ctx),
    }
}
