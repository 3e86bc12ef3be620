//! Field checks shared by the record actions.

use ecoguard_core::constants::{
    BATTERY_MAX, CONFIDENCE_MAX, CONFIDENCE_MIN, MIN_DEVICE_ID_CHARS, MIN_USER_NAME_CHARS,
};
use ecoguard_core::errors::RecordError;
use ecoguard_core::models::GeoPoint;

pub(crate) fn user_name(name: &str) -> Result<String, RecordError> {
    let name = name.trim();
    if name.chars().count() < MIN_USER_NAME_CHARS {
        return Err(RecordError::invalid(
            "name",
            format!("must be at least {MIN_USER_NAME_CHARS} characters"),
        ));
    }
    Ok(name.to_string())
}

/// Shape check only: `local@label.label.tld`, ASCII, no whitespace.
pub(crate) fn email(email: &str) -> Result<String, RecordError> {
    let email = email.trim();
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| email_local(local) && email_domain(domain));
    if !valid {
        return Err(RecordError::invalid("email", "invalid email address"));
    }
    Ok(email.to_string())
}

fn email_local(local: &str) -> bool {
    !local.is_empty()
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c))
}

/// At least two labels; labels are alphanumeric with inner hyphens; the TLD is
/// two or more letters.
fn email_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    let Some(tld) = labels.last() else {
        return false;
    };
    labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

pub(crate) fn device_id(id: &str) -> Result<String, RecordError> {
    let id = id.trim();
    if id.chars().count() < MIN_DEVICE_ID_CHARS {
        return Err(RecordError::invalid(
            "id",
            format!("device id must be at least {MIN_DEVICE_ID_CHARS} characters"),
        ));
    }
    Ok(id.to_string())
}

pub(crate) fn battery(level: u8) -> Result<u8, RecordError> {
    if level > BATTERY_MAX {
        return Err(RecordError::invalid(
            "battery",
            format!("{level} is above {BATTERY_MAX}"),
        ));
    }
    Ok(level)
}

pub(crate) fn location(point: GeoPoint) -> Result<GeoPoint, RecordError> {
    if !point.is_valid() {
        return Err(RecordError::invalid(
            "location",
            format!("({}, {}) is not a valid coordinate", point.lat, point.lng),
        ));
    }
    Ok(point)
}

pub(crate) fn confidence(value: f64) -> Result<f64, RecordError> {
    if !value.is_finite() || !(CONFIDENCE_MIN..=CONFIDENCE_MAX).contains(&value) {
        return Err(RecordError::invalid(
            "confidence",
            format!("{value} is outside [{CONFIDENCE_MIN}, {CONFIDENCE_MAX}]"),
        ));
    }
    Ok(value)
}

pub(crate) fn tree_id(id: &str) -> Result<String, RecordError> {
    non_blank("treeId", id, "is required")
}

/// Split a comma-separated sensor list, dropping blanks.
pub(crate) fn sensors(list: &str) -> Result<Vec<String>, RecordError> {
    let sensors: Vec<String> = list
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if sensors.is_empty() {
        return Err(RecordError::invalid(
            "sensorsTriggered",
            "at least one sensor must be specified",
        ));
    }
    Ok(sensors)
}

pub(crate) fn non_blank(field: &str, value: &str, reason: &str) -> Result<String, RecordError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(RecordError::invalid(field, reason));
    }
    Ok(value.to_string())
}
