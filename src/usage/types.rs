use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Utilization of one rate-limit window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct UsageWindow {
    /// Percent of the window consumed, 0-100
    pub(crate) utilization: f64,
    #[serde(default)]
    pub(crate) resets_at: Option<DateTime<Utc>>,
}

impl UsageWindow {
    /// Time left until the window resets, if known and still in the future
    pub(crate) fn resets_in(&self, now: DateTime<Utc>) -> Option<chrono::Duration> {
        let resets_at = self.resets_at?;
        let left = resets_at - now;
        (left > chrono::Duration::zero()).then_some(left)
    }
}

/// Contents of the per-scope usage cache file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct UsageSnapshot {
    #[serde(default)]
    pub(crate) fetched_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub(crate) five_hour: Option<UsageWindow>,
    #[serde(default)]
    pub(crate) seven_day: Option<UsageWindow>,
}
