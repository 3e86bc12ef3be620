use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::GeoPoint;
use crate::traits::Record;

/// Triage state of an incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum IncidentStatus {
    New,
    Acknowledged,
    Resolved,
}

impl IncidentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Acknowledged => "acknowledged",
            Self::Resolved => "resolved",
        }
    }

    /// Ranger-driven transitions. `Resolved` is terminal.
    pub fn can_transition_to(self, next: IncidentStatus) -> bool {
        matches!(
            (self, next),
            (Self::New, Self::Acknowledged)
                | (Self::New, Self::Resolved)
                | (Self::Acknowledged, Self::Resolved)
        )
    }
}

impl fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of an incident's audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HistoryEvent {
    pub event: String,
    pub timestamp: DateTime<Utc>,
}

/// A free-text note left on an incident by a ranger or administrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IncidentNote {
    pub user: String,
    pub note: String,
    pub timestamp: DateTime<Utc>,
}

/// A reported potential illegal-logging event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Incident {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub tree_id: String,
    pub status: IncidentStatus,
    pub location: GeoPoint,
    pub confidence: f64,
    pub sensors_triggered: Vec<String>,
    pub history: Vec<HistoryEvent>,
    pub notes: Vec<IncidentNote>,
    pub photos: Vec<String>,
}

impl Incident {
    /// Append an audit-trail entry stamped with `at`.
    pub fn push_history(&mut self, event: impl Into<String>, at: DateTime<Utc>) {
        self.history.push(HistoryEvent {
            event: event.into(),
            timestamp: at,
        });
    }
}

impl Record for Incident {
    const COLLECTION: &'static str = "incidents";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Fields an administrator supplies when filing an incident by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewIncident {
    pub tree_id: String,
    pub status: IncidentStatus,
    pub confidence: f64,
    pub location: GeoPoint,
    /// Comma-separated sensor names, e.g. "vibration, sound".
    pub sensors_triggered: String,
}

/// Partial update applied by the administrator edit dialog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct IncidentPatch {
    pub tree_id: Option<String>,
    pub status: Option<IncidentStatus>,
    pub confidence: Option<f64>,
    pub location: Option<GeoPoint>,
    pub sensors_triggered: Option<String>,
}
