use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Headline counts for the administrator dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DashboardSummary {
    pub total_incidents: usize,
    pub resolved_incidents: usize,
    pub unresolved_incidents: usize,
    pub online_devices: usize,
    pub total_devices: usize,
}
