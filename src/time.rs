use std::fmt::{self, Write};

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{ParkError, Result};

/// Upstream schedules send a date and a 4-digit clock token back to back: `2024-06-010930`.
pub const UPSTREAM_TIME_FORMAT: &str = "%Y-%m-%d%H%M";
/// Date keys used by the upstream schedule feeds.
pub const UPSTREAM_DATE_FORMAT: &str = "%Y-%m-%d";

/// Converts upstream local timestamps into a fixed timezone and output format.
#[derive(Debug, Clone)]
pub struct TimeNormalizer {
    tz: Tz,
    output_format: String,
}

impl TimeNormalizer {
    pub fn new(timezone: &str, output_format: &str) -> Result<Self> {
        Ok(Self {
            tz: parse_timezone(timezone)?,
            output_format: output_format.to_string(),
        })
    }

    /// Parse `raw` as a local time in this normalizer's zone and format it.
    /// `rollover` moves the result one calendar day forward, keeping the clock time.
    pub fn normalize(&self, raw: &str, source_format: &str, rollover: bool) -> Result<String> {
        let mut naive = NaiveDateTime::parse_from_str(raw, source_format)
            .map_err(|e| ParkError::parse(raw, source_format, e.to_string()))?;
        if rollover {
            naive = naive
                .checked_add_days(Days::new(1))
                .ok_or_else(|| ParkError::parse(raw, source_format, "date out of range"))?;
        }
        let local = self.localize(naive).ok_or_else(|| {
            ParkError::parse(raw, source_format, format!("local time does not exist in {}", self.tz))
        })?;
        render(local.format(&self.output_format), raw, &self.output_format)
    }

    /// DST fold resolves to the earlier instant. A time inside a DST gap is moved
    /// forward past the gap, so 02:30 on a spring-forward night becomes 03:30.
    fn localize(&self, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
        self.tz.from_local_datetime(&naive).earliest().or_else(|| {
            let shifted = naive.checked_add_signed(TimeDelta::hours(1))?;
            self.tz.from_local_datetime(&shifted).earliest()
        })
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }
}

/// One-shot form of [`TimeNormalizer::normalize`].
pub fn normalize(raw: &str, source_format: &str, timezone: &str, output_format: &str, rollover: bool) -> Result<String> {
    TimeNormalizer::new(timezone, output_format)?.normalize(raw, source_format, rollover)
}

pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|e| ParkError::parse(name, "IANA timezone", e.to_string()))
}

/// Calendar date of `now` in `timezone`, as an upstream `YYYY-MM-DD` key.
pub fn today_in(timezone: &str, now: DateTime<Utc>) -> Result<String> {
    let tz = parse_timezone(timezone)?;
    Ok(now.with_timezone(&tz).format(UPSTREAM_DATE_FORMAT).to_string())
}

/// Reformat an upstream `YYYY-MM-DD` date; no timezone conversion applies.
pub fn reformat_date(raw: &str, date_format: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(raw, UPSTREAM_DATE_FORMAT)
        .map_err(|e| ParkError::parse(raw, UPSTREAM_DATE_FORMAT, e.to_string()))?;
    render(date.format(date_format), raw, date_format)
}

// Writing through fmt::Write surfaces a bad format string as an error instead of a panic.
fn render(value: impl fmt::Display, raw: &str, format: &str) -> Result<String> {
    let mut out = String::new();
    write!(out, "{}", value).map_err(|_| ParkError::parse(raw, format, "invalid output format"))?;
    Ok(out)
}
