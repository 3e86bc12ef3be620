//! RecordsService: user, device and incident actions over document stores.

use chrono::Utc;
use uuid::Uuid;

use ecoguard_core::constants::HISTORY_INCIDENT_DETECTED;
use ecoguard_core::errors::RecordError;
use ecoguard_core::models::{
    ConfidenceResult, DashboardSummary, Device, DevicePatch, DeviceStatus, Incident, IncidentNote,
    IncidentPatch, IncidentStatus, NewDevice, NewIncident, NewUser, User, UserPatch,
};
use ecoguard_core::traits::{IDocumentStore, Record};
use ecoguard_observability::record_span;
use ecoguard_observability::tracing_setup::events;

use crate::memory_store::MemoryCollection;
use crate::validation;

/// Actor recorded for administrator edits made through `update_incident`.
const ADMIN_ACTOR: &str = "administrator";

/// Record actions for the dashboard and incident pages.
///
/// Every write validates its input first and leaves the store untouched on
/// failure. Reads return snapshots.
pub struct RecordsService<
    U = MemoryCollection<User>,
    D = MemoryCollection<Device>,
    I = MemoryCollection<Incident>,
> {
    users: U,
    devices: D,
    incidents: I,
}

impl RecordsService {
    /// Service over fresh in-memory collections.
    pub fn in_memory() -> Self {
        Self::new(
            MemoryCollection::new(),
            MemoryCollection::new(),
            MemoryCollection::new(),
        )
    }
}

impl<U, D, I> RecordsService<U, D, I>
where
    U: IDocumentStore<User>,
    D: IDocumentStore<Device>,
    I: IDocumentStore<Incident>,
{
    pub fn new(users: U, devices: D, incidents: I) -> Self {
        Self {
            users,
            devices,
            incidents,
        }
    }

    // ── Users ────────────────────────────────────────────────────────────

    pub fn add_user(&self, new: NewUser) -> Result<User, RecordError> {
        let user = User {
            id: Uuid::new_v4().to_string(),
            name: validation::user_name(&new.name)?,
            email: validation::email(&new.email)?,
            role: new.role,
        };
        self.users.insert(user.clone())?;
        tracing::debug!(user_id = %user.id, role = %user.role, "user added");
        Ok(user)
    }

    pub fn update_user(&self, id: &str, patch: UserPatch) -> Result<User, RecordError> {
        let mut user = fetch(&self.users, id)?;
        if let Some(name) = patch.name {
            user.name = validation::user_name(&name)?;
        }
        if let Some(email) = patch.email {
            user.email = validation::email(&email)?;
        }
        if let Some(role) = patch.role {
            user.role = role;
        }
        self.users.replace(user.clone())?;
        Ok(user)
    }

    pub fn delete_user(&self, id: &str) -> Result<(), RecordError> {
        delete(&self.users, id)
    }

    /// All users, sorted by name.
    pub fn list_users(&self) -> Result<Vec<User>, RecordError> {
        let mut users = self.users.list()?;
        users.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(users)
    }

    // ── Devices ──────────────────────────────────────────────────────────

    /// Register a device under its administrator-assigned id.
    pub fn add_device(&self, new: NewDevice) -> Result<Device, RecordError> {
        let device = Device {
            id: validation::device_id(&new.id)?,
            status: new.status,
            last_reported: Utc::now(),
            battery: validation::battery(new.battery)?,
            location: validation::location(new.location)?,
        };
        self.devices.insert(device.clone())?;
        tracing::debug!(device_id = %device.id, "device registered");
        Ok(device)
    }

    pub fn update_device(&self, id: &str, patch: DevicePatch) -> Result<Device, RecordError> {
        let mut device = fetch(&self.devices, id)?;
        if let Some(status) = patch.status {
            device.status = status;
        }
        if let Some(battery) = patch.battery {
            device.battery = validation::battery(battery)?;
        }
        if let Some(location) = patch.location {
            device.location = validation::location(location)?;
        }
        self.devices.replace(device.clone())?;
        Ok(device)
    }

    pub fn delete_device(&self, id: &str) -> Result<(), RecordError> {
        delete(&self.devices, id)
    }

    /// All devices, sorted by id.
    pub fn list_devices(&self) -> Result<Vec<Device>, RecordError> {
        let mut devices = self.devices.list()?;
        devices.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(devices)
    }

    // ── Incidents ────────────────────────────────────────────────────────

    /// File an incident by hand. History starts with the detection entry.
    pub fn add_incident(&self, new: NewIncident) -> Result<Incident, RecordError> {
        let now = Utc::now();
        let mut incident = Incident {
            id: Uuid::new_v4().to_string(),
            timestamp: now,
            tree_id: validation::tree_id(&new.tree_id)?,
            status: new.status,
            location: validation::location(new.location)?,
            confidence: validation::confidence(new.confidence)?,
            sensors_triggered: validation::sensors(&new.sensors_triggered)?,
            history: Vec::new(),
            notes: Vec::new(),
            photos: Vec::new(),
        };
        incident.push_history(HISTORY_INCIDENT_DETECTED, now);

        self.incidents.insert(incident.clone())?;
        events::incident_created(&incident.id, &incident.tree_id, incident.confidence);
        Ok(incident)
    }

    pub fn get_incident(&self, id: &str) -> Result<Incident, RecordError> {
        fetch(&self.incidents, id)
    }

    /// All incidents, newest first.
    pub fn list_incidents(&self) -> Result<Vec<Incident>, RecordError> {
        let mut incidents = self.incidents.list()?;
        newest_first(&mut incidents);
        Ok(incidents)
    }

    /// Incidents in `status`, newest first.
    pub fn incidents_by_status(
        &self,
        status: IncidentStatus,
    ) -> Result<Vec<Incident>, RecordError> {
        let mut incidents: Vec<Incident> = self
            .incidents
            .list()?
            .into_iter()
            .filter(|i| i.status == status)
            .collect();
        newest_first(&mut incidents);
        Ok(incidents)
    }

    /// Administrator edit. Any status may be set; a change is written to the history.
    pub fn update_incident(&self, id: &str, patch: IncidentPatch) -> Result<Incident, RecordError> {
        let _span = record_span!(Incident::COLLECTION, id).entered();
        let mut incident = fetch(&self.incidents, id)?;

        if let Some(tree_id) = patch.tree_id {
            incident.tree_id = validation::tree_id(&tree_id)?;
        }
        if let Some(confidence) = patch.confidence {
            incident.confidence = validation::confidence(confidence)?;
        }
        if let Some(location) = patch.location {
            incident.location = validation::location(location)?;
        }
        if let Some(sensors) = patch.sensors_triggered {
            incident.sensors_triggered = validation::sensors(&sensors)?;
        }

        let previous = incident.status;
        if let Some(status) = patch.status.filter(|s| *s != previous) {
            incident.status = status;
            incident.push_history(format!("Status set to {status} by {ADMIN_ACTOR}"), Utc::now());
        }

        self.incidents.replace(incident.clone())?;
        if incident.status != previous {
            events::incident_status_changed(
                id,
                previous.as_str(),
                incident.status.as_str(),
                ADMIN_ACTOR,
            );
        }
        Ok(incident)
    }

    /// Ranger acknowledges a new incident.
    pub fn acknowledge(&self, id: &str, actor: &str) -> Result<Incident, RecordError> {
        self.transition(id, IncidentStatus::Acknowledged, actor, "Acknowledged")
    }

    /// Ranger resolves a new or acknowledged incident. Resolved is terminal.
    pub fn resolve(&self, id: &str, actor: &str) -> Result<Incident, RecordError> {
        self.transition(id, IncidentStatus::Resolved, actor, "Resolved")
    }

    pub fn delete_incident(&self, id: &str) -> Result<(), RecordError> {
        delete(&self.incidents, id)
    }

    pub fn add_note(&self, id: &str, user: &str, note: &str) -> Result<Incident, RecordError> {
        let note = validation::non_blank("note", note, "must not be empty")?;
        let user = validation::non_blank("user", user, "is required")?;
        self.modify(id, |incident| {
            incident.notes.push(IncidentNote {
                user,
                note,
                timestamp: Utc::now(),
            });
        })
    }

    /// Notes on an incident, newest first.
    pub fn notes(&self, id: &str) -> Result<Vec<IncidentNote>, RecordError> {
        let mut notes = fetch(&self.incidents, id)?.notes;
        notes.reverse();
        notes.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(notes)
    }

    pub fn attach_photo(&self, id: &str, url: &str) -> Result<Incident, RecordError> {
        let url = validation::non_blank("photo", url, "URL must not be empty")?;
        self.modify(id, |incident| incident.photos.push(url))
    }

    /// Store an analysis outcome on the incident. Status is left alone;
    /// acting on the recommendation is up to the rangers.
    pub fn record_analysis(
        &self,
        id: &str,
        result: &ConfidenceResult,
    ) -> Result<Incident, RecordError> {
        let score = validation::confidence(result.confidence_score)?;
        let incident = self.modify(id, |incident| {
            incident.confidence = score;
            incident.push_history(
                format!(
                    "Confidence analysis: {}% ({})",
                    result.percent(),
                    result.recommendation()
                ),
                Utc::now(),
            );
        })?;
        events::analysis_recorded(id, score, result.should_notify_rangers);
        Ok(incident)
    }

    /// Headline counts for the administrator dashboard.
    pub fn summary(&self) -> Result<DashboardSummary, RecordError> {
        let incidents = self.incidents.list()?;
        let devices = self.devices.list()?;
        let resolved = incidents
            .iter()
            .filter(|i| i.status == IncidentStatus::Resolved)
            .count();

        Ok(DashboardSummary {
            total_incidents: incidents.len(),
            resolved_incidents: resolved,
            unresolved_incidents: incidents.len() - resolved,
            online_devices: devices
                .iter()
                .filter(|d| d.status == DeviceStatus::Online)
                .count(),
            total_devices: devices.len(),
        })
    }

    fn transition(
        &self,
        id: &str,
        to: IncidentStatus,
        actor: &str,
        verb: &str,
    ) -> Result<Incident, RecordError> {
        let _span = record_span!(Incident::COLLECTION, id).entered();
        let actor = validation::non_blank("actor", actor, "is required")?;
        let mut incident = fetch(&self.incidents, id)?;

        let from = incident.status;
        if !from.can_transition_to(to) {
            return Err(RecordError::InvalidTransition {
                id: id.to_string(),
                from,
                to,
            });
        }
        incident.status = to;
        incident.push_history(format!("{verb} by {actor}"), Utc::now());

        self.incidents.replace(incident.clone())?;
        events::incident_status_changed(id, from.as_str(), to.as_str(), &actor);
        Ok(incident)
    }

    fn modify(
        &self,
        id: &str,
        apply: impl FnOnce(&mut Incident),
    ) -> Result<Incident, RecordError> {
        let mut incident = fetch(&self.incidents, id)?;
        apply(&mut incident);
        self.incidents.replace(incident.clone())?;
        Ok(incident)
    }
}

fn fetch<T: Record>(store: &impl IDocumentStore<T>, id: &str) -> Result<T, RecordError> {
    store
        .get(id)?
        .ok_or_else(|| RecordError::not_found(T::COLLECTION, id))
}

fn delete<T: Record>(store: &impl IDocumentStore<T>, id: &str) -> Result<(), RecordError> {
    if !store.remove(id)? {
        return Err(RecordError::not_found(T::COLLECTION, id));
    }
    events::record_deleted(T::COLLECTION, id);
    Ok(())
}

fn newest_first(incidents: &mut [Incident]) {
    incidents.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then_with(|| a.id.cmp(&b.id)));
}
