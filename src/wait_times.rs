use crate::error::{ParkError, Result};
use crate::model::entry::RawEntry;
use crate::model::ride::RideStatus;

/// Status token meaning the ride is currently running.
pub const OPERATING_STATUS: &str = "Operating";

/// Map one filtered entry to a [`RideStatus`]. Any missing wait-time detail
/// falls back to zero minutes, inactive, and no FastPass.
pub fn project(entry: &RawEntry) -> Result<RideStatus> {
    let id = required(&entry.id, "id")?;
    let name = required(&entry.name, "name")?;
    required(&entry.type_field, "type")?;

    let wait = entry.wait_time.as_ref();
    let wait_time_minutes = wait
        .and_then(|w| w.posted_wait_minutes)
        .filter(|m| m.is_finite() && *m >= 1.0)
        // Float-to-int `as` truncates and saturates at u32::MAX
        .map(|m| m as u32)
        .unwrap_or(0);
    let active = wait.and_then(|w| w.status.as_deref()) == Some(OPERATING_STATUS);
    let fast_pass_available = wait
        .and_then(|w| w.fast_pass.as_ref())
        .and_then(|fp| fp.available)
        .unwrap_or(false);

    Ok(RideStatus {
        id: id.to_string(),
        name: name.to_string(),
        wait_time_minutes,
        active,
        fast_pass_available,
        opening_time: None,
        closing_time: None,
    })
}

pub fn project_all(entries: &[RawEntry]) -> Result<Vec<RideStatus>> {
    entries.iter().map(project).collect()
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str> {
    match value.as_deref() {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(ParkError::MalformedEntry { field }),
    }
}
