use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::AppError;
use crate::input::StatusInput;
use crate::output::format::{
    Color, format_cost, format_countdown, format_percent, paint, usage_color,
};
use crate::usage::{UsageSnapshot, UsageWindow};

const SEPARATOR: &str = " | ";

/// One rate-limit window as shown on the status line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct WindowSegment {
    pub(crate) utilization: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) resets_in: Option<String>,
}

impl WindowSegment {
    fn from_window(window: &UsageWindow, now: DateTime<Utc>) -> Self {
        Self {
            utilization: window.utilization,
            resets_in: window.resets_in(now).map(format_countdown),
        }
    }

    fn render(&self, label: &str, use_color: bool) -> String {
        let percent = paint(
            &format_percent(self.utilization),
            usage_color(self.utilization),
            use_color,
        );
        match &self.resets_in {
            Some(left) => format!("{label}: {percent} (resets in {left})"),
            None => format!("{label}: {percent}"),
        }
    }
}

/// Everything the status line can show; absent parts are left out
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub(crate) struct StatusLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) five_hour: Option<WindowSegment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) seven_day: Option<WindowSegment>,
}

impl StatusLine {
    /// `branch` is expected to be compacted already; an empty name is dropped
    pub(crate) fn build(
        input: &StatusInput,
        branch: Option<String>,
        usage: Option<&UsageSnapshot>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            model: input.model_name().map(str::to_string),
            branch: branch.filter(|b| !b.is_empty()),
            cost: input.session_cost(),
            five_hour: usage
                .and_then(|u| u.five_hour.as_ref())
                .map(|w| WindowSegment::from_window(w, now)),
            seven_day: usage
                .and_then(|u| u.seven_day.as_ref())
                .map(|w| WindowSegment::from_window(w, now)),
        }
    }

    pub(crate) fn render(&self, use_color: bool) -> String {
        let mut parts = Vec::new();
        if let Some(model) = &self.model {
            parts.push(model.clone());
        }
        if let Some(branch) = &self.branch {
            parts.push(paint(branch, Color::Cyan, use_color));
        }
        if let Some(cost) = self.cost {
            parts.push(format_cost(cost));
        }
        if let Some(window) = &self.five_hour {
            parts.push(window.render("5h", use_color));
        }
        if let Some(window) = &self.seven_day {
            parts.push(window.render("7d", use_color));
        }
        parts.join(SEPARATOR)
    }
}

/// Output a single line suitable for the Claude Code status bar
pub(crate) fn print_statusline(line: &StatusLine, use_color: bool) {
    println!("{}", line.render(use_color));
}

/// Status line as JSON for programmatic consumption
pub(crate) fn statusline_json(line: &StatusLine) -> Result<String, AppError> {
    serde_json::to_string(line).map_err(AppError::Json)
}
