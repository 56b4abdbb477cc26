#[macro_use]
mod utils;

mod app;
mod branch;
mod cli;
mod config;
mod error;
mod input;
mod output;
mod scope;
mod usage;

use clap::Parser;

use app::CommandContext;
use cli::Cli;
use config::Config;
use scope::ConfigScope;
use utils::{debug_enabled, set_debug};

fn main() {
    let cli = Cli::parse();
    let config = if cli.debug {
        Config::load()
    } else {
        Config::load_quiet()
    };
    let cli = cli.with_config(&config);
    set_debug(cli.debug);

    // The only place the environment decides the profile
    let scope = ConfigScope::from_env();
    if debug_enabled() {
        match scope.as_deref() {
            Some(dir) => debug_log!(
                "config dir {} (suffix {})",
                dir.to_string_lossy(),
                scope.suffix()
            ),
            None => debug_log!("default config dir"),
        }
    }

    let ctx = CommandContext {
        cli: &cli,
        scope: &scope,
    };
    if let Err(e) = app::run(&ctx) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
