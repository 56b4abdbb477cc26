//! Configuration-scope identifiers
//!
//! Claude Code can run several isolated profiles side by side by pointing
//! `CLAUDE_CONFIG_DIR` at different directories. Every per-profile resource
//! (usage cache file, keychain entry) is namespaced by a short digest of that
//! directory string so profiles never read each other's data.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// Environment variable selecting the Claude Code configuration directory
pub(crate) const CONFIG_DIR_ENV: &str = "CLAUDE_CONFIG_DIR";

const CACHE_FILE_STEM: &str = "claudeline-usage";
const KEYCHAIN_SERVICE: &str = "Claude Code-credentials";
const SUFFIX_LEN: usize = 8;

/// The configuration directory override, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ConfigScope(Option<OsString>);

impl ConfigScope {
    pub(crate) fn new(config_dir: Option<OsString>) -> Self {
        Self(config_dir.filter(|dir| !dir.is_empty()))
    }

    /// Read the override from the process environment, non-UTF-8 bytes included
    pub(crate) fn from_env() -> Self {
        Self::new(std::env::var_os(CONFIG_DIR_ENV))
    }

    pub(crate) fn as_deref(&self) -> Option<&OsStr> {
        self.0.as_deref()
    }

    pub(crate) fn suffix(&self) -> ScopeSuffix {
        resolve_scope_suffix(self.as_deref())
    }
}

/// Short fingerprint of a [`ConfigScope`]; empty for the default scope
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub(crate) struct ScopeSuffix(String);

impl ScopeSuffix {
    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append `-<suffix>` to `base`, or return `base` untouched for the default scope
    fn decorate(&self, base: &str) -> String {
        if self.is_empty() {
            base.to_string()
        } else {
            format!("{base}-{}", self.0)
        }
    }
}

impl fmt::Display for ScopeSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive the scope suffix for a configuration directory override.
///
/// The override is hashed verbatim: no trimming, no separator or
/// trailing-slash normalization, no UTF-8 validation. `None` and an empty
/// string both mean the default scope and yield an empty suffix.
pub(crate) fn resolve_scope_suffix(config_dir: Option<&OsStr>) -> ScopeSuffix {
    let Some(dir) = config_dir.filter(|d| !d.is_empty()) else {
        return ScopeSuffix::default();
    };

    let digest = Sha256::digest(dir.as_encoded_bytes());
    let hex = format!("{digest:x}");
    ScopeSuffix(hex[..SUFFIX_LEN].to_string())
}

/// Usage cache file for the given scope, under the system temp directory
pub(crate) fn cache_file_path(config_dir: Option<&OsStr>) -> PathBuf {
    cache_file_path_in(&std::env::temp_dir(), config_dir)
}

pub(crate) fn cache_file_path_in(temp_dir: &Path, config_dir: Option<&OsStr>) -> PathBuf {
    let stem = resolve_scope_suffix(config_dir).decorate(CACHE_FILE_STEM);
    temp_dir.join(format!("{stem}.json"))
}

/// Keychain service under which Claude Code stores credentials for the scope
pub(crate) fn keychain_service_name(config_dir: Option<&OsStr>) -> String {
    resolve_scope_suffix(config_dir).decorate(KEYCHAIN_SERVICE)
}
