use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Standard-mode schedule page.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SchedulePage {
    #[serde(default)]
    pub schedules: Vec<RawScheduleEntry>,
}

/// One day of park hours as sent upstream. Times are clock tokens such as `0900`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawScheduleEntry {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(rename = "type")]
    pub type_field: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub date: String,
    pub opening_time: String,
    pub closing_time: String,
    #[serde(rename = "type")]
    pub type_field: String,
}

/// Opening block within a single day of the joined schedule source.
/// Closed days may carry `null` times, so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBlock {
    #[serde(default)]
    pub opening_time: Option<String>,
    #[serde(default)]
    pub closing_time: Option<String>,
    #[serde(default, rename = "type")]
    pub type_field: Option<String>,
}

impl TimeBlock {
    /// Opening and closing time, when both are present.
    pub fn hours(&self) -> Option<(&str, &str)> {
        Some((self.opening_time.as_deref()?, self.closing_time.as_deref()?))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityTimes {
    // Keyed by YYYY-MM-DD so iteration is chronological
    #[serde(default)]
    pub times: BTreeMap<String, Vec<TimeBlock>>,
}

/// Entity id (ride or park) -> per-date opening blocks.
pub type ScheduleTable = HashMap<String, EntityTimes>;
