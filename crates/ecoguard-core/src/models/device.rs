use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::GeoPoint;
use crate::traits::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum DeviceStatus {
    Online,
    Offline,
}

/// A deployed EcoGuard sensor unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Device {
    pub id: String,
    pub status: DeviceStatus,
    pub last_reported: DateTime<Utc>,
    /// Battery charge, percent.
    pub battery: u8,
    pub location: GeoPoint,
}

impl Record for Device {
    const COLLECTION: &'static str = "devices";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewDevice {
    pub id: String,
    pub status: DeviceStatus,
    pub battery: u8,
    pub location: GeoPoint,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DevicePatch {
    pub status: Option<DeviceStatus>,
    pub battery: Option<u8>,
    pub location: Option<GeoPoint>,
}
