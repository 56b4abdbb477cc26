//! Session payload Claude Code pipes to the status line command

use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StatusInput {
    #[serde(default)]
    pub(crate) model: Option<ModelInfo>,
    #[serde(default)]
    pub(crate) workspace: Option<WorkspaceInfo>,
    #[serde(default)]
    pub(crate) cost: Option<CostInfo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ModelInfo {
    #[serde(default)]
    pub(crate) display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WorkspaceInfo {
    #[serde(default)]
    pub(crate) current_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CostInfo {
    #[serde(default)]
    pub(crate) total_cost_usd: Option<f64>,
}

impl StatusInput {
    pub(crate) fn parse(raw: &str) -> Result<Self, AppError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(AppError::InvalidInput)
    }

    /// Read the payload from stdin; an interactive terminal means no payload
    pub(crate) fn from_stdin() -> Result<Self, AppError> {
        let mut stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Ok(Self::default());
        }
        let mut raw = String::new();
        stdin.read_to_string(&mut raw).map_err(AppError::Stdin)?;
        Self::parse(&raw)
    }

    pub(crate) fn model_name(&self) -> Option<&str> {
        self.model
            .as_ref()?
            .display_name
            .as_deref()
            .filter(|name| !name.is_empty())
    }

    pub(crate) fn current_dir(&self) -> Option<&PathBuf> {
        self.workspace.as_ref()?.current_dir.as_ref()
    }

    pub(crate) fn session_cost(&self) -> Option<f64> {
        self.cost.as_ref()?.total_cost_usd
    }
}
