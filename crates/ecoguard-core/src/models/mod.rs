pub mod confidence;
pub mod device;
pub mod incident;
pub mod location;
pub mod summary;
pub mod user;

pub use confidence::{ConfidenceRequest, ConfidenceResult};
pub use device::{Device, DevicePatch, DeviceStatus, NewDevice};
pub use incident::{
    HistoryEvent, Incident, IncidentNote, IncidentPatch, IncidentStatus, NewIncident,
};
pub use location::GeoPoint;
pub use summary::DashboardSummary;
pub use user::{NewUser, User, UserPatch, UserRole};
