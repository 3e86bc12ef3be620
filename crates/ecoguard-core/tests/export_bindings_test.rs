//! Test that generates TypeScript bindings from Rust types via ts-rs.
//!
//! Run with: cargo test -p ecoguard-core export_bindings
//! Generated files appear in ecoguard-core/bindings/*.ts and are consumed by
//! the dashboard front end.

#[test]
fn export_bindings() {
    // ts-rs export is triggered by the derive macro at compile time.
    // This test just validates all types are importable and TS-derivable.
    use ecoguard_core::models::{
        ConfidenceRequest, ConfidenceResult, DashboardSummary, Device, DevicePatch,
        DeviceStatus, GeoPoint, HistoryEvent, Incident, IncidentNote, IncidentPatch,
        IncidentStatus, NewDevice, NewIncident, NewUser, User, UserPatch, UserRole,
    };

    fn assert_ts<T: ts_rs::TS>() {}

    assert_ts::<ConfidenceRequest>();
    assert_ts::<ConfidenceResult>();
    assert_ts::<DashboardSummary>();
    assert_ts::<Device>();
    assert_ts::<DevicePatch>();
    assert_ts::<DeviceStatus>();
    assert_ts::<GeoPoint>();
    assert_ts::<HistoryEvent>();
    assert_ts::<Incident>();
    assert_ts::<IncidentNote>();
    assert_ts::<IncidentPatch>();
    assert_ts::<IncidentStatus>();
    assert_ts::<NewDevice>();
    assert_ts::<NewIncident>();
    assert_ts::<NewUser>();
    assert_ts::<User>();
    assert_ts::<UserPatch>();
    assert_ts::<UserRole>();
}
