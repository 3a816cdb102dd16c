use tracing::debug;

use crate::error::{ParkError, Result};
use crate::model::config::ParkConfig;
use crate::model::schedule::{RawScheduleEntry, ScheduleEntry, ScheduleTable};
use crate::time::{self, TimeNormalizer, UPSTREAM_TIME_FORMAT};

/// Standard-mode projection of raw park hours. Output order follows input order.
pub fn project(raw_schedules: &[RawScheduleEntry], config: &ParkConfig) -> Result<Vec<ScheduleEntry>> {
    let normalizer = TimeNormalizer::new(&config.timezone, &config.time_format)?;
    raw_schedules
        .iter()
        .map(|raw| project_one(raw, &normalizer, &config.date_format))
        .collect()
}

fn project_one(raw: &RawScheduleEntry, normalizer: &TimeNormalizer, date_format: &str) -> Result<ScheduleEntry> {
    let opening = format!("{}{}", raw.date, clock_token(&raw.start_time));
    let closing = format!("{}{}", raw.date, clock_token(&raw.end_time));
    // A closing hour of 0x is past midnight, so it belongs to the following day
    let rollover = raw.end_time.starts_with('0');

    Ok(ScheduleEntry {
        date: time::reformat_date(&raw.date, date_format)?,
        opening_time: normalizer.normalize(&opening, UPSTREAM_TIME_FORMAT, false)?,
        closing_time: normalizer.normalize(&closing, UPSTREAM_TIME_FORMAT, rollover)?,
        type_field: raw.type_field.clone(),
    })
}

/// Reduce `HH:mm` and `HH:mm:ss` clock values to the 4-digit `HHmm` token.
/// Anything without a colon is passed through for the strict parser to judge.
pub fn clock_token(raw: &str) -> String {
    if raw.contains(':') {
        raw.chars().filter(|c| *c != ':').take(4).collect()
    } else {
        raw.to_string()
    }
}

/// Joined-mode park hours: one entry per time block, walking dates in order.
/// Times are already formatted upstream and are passed through unchanged;
/// blocks without both times carry no hours and are skipped.
pub fn flatten_table(table: &ScheduleTable, park_id: &str, date_format: &str) -> Result<Vec<ScheduleEntry>> {
    let park = table.get(park_id).ok_or_else(|| ParkError::ParkNotFound {
        park_id: park_id.to_string(),
    })?;

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for (date, blocks) in &park.times {
        let formatted = time::reformat_date(date, date_format)?;
        for block in blocks {
            let Some((opening, closing)) = block.hours() else {
                skipped += 1;
                continue;
            };
            out.push(ScheduleEntry {
                date: formatted.clone(),
                opening_time: opening.to_string(),
                closing_time: closing.to_string(),
                type_field: block.type_field.clone().unwrap_or_default(),
            });
        }
    }
    if skipped > 0 {
        debug!(park_id, skipped, "Skipped schedule blocks without hours");
    }
    Ok(out)
}
