use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) no_branch: bool,
    #[serde(default)]
    pub(crate) no_usage: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) branch_max_len: Option<usize>,
    #[serde(default)]
    pub(crate) usage_ttl_secs: Option<u64>,
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::load_internal(false)
    }

    pub(crate) fn load_quiet() -> Self {
        Self::load_internal(true)
    }

    fn load_internal(quiet: bool) -> Self {
        for path in Self::get_config_paths() {
            if let Some(config) = Self::load_from(&path, quiet) {
                return config;
            }
        }

        Self::default()
    }

    fn load_from(path: &Path, quiet: bool) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        let content = fs::read_to_string(path).ok()?;
        match toml::from_str::<Config>(&content) {
            Ok(config) => {
                if !quiet {
                    eprintln!("Loaded config from {}", path.display());
                }
                Some(config)
            }
            Err(e) => {
                if !quiet {
                    eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                }
                None
            }
        }
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/claudeline/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("claudeline").join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/claudeline/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("claudeline").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.claudeline.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".claudeline.toml"));
        }

        paths
    }
}
