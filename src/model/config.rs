use serde::{Deserialize, Serialize};

use crate::source::Category;

pub const DEFAULT_TIMEZONE: &str = "America/New_York";
/// ISO-8601 with a colon-separated UTC offset, e.g. `2024-06-01T09:00:00-04:00`.
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
pub const DEFAULT_API_REGION: &str = "us";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatingMode {
    /// Single schedule feed with raw clock tokens.
    #[default]
    Standard,
    /// Wait times and schedules come from two id-keyed feeds that must be joined.
    AlternateJoined,
}

/// Per-park settings. Formats are chrono strftime strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkConfig {
    pub park_id: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_time_format")]
    pub time_format: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_api_region")]
    pub api_region: String,
    #[serde(default)]
    pub mode: OperatingMode,
    /// Content page that carries this park's wait times.
    #[serde(default)]
    pub category: Category,
}

/// Partial overwrite for [`ParkConfig`]; `None` keeps the current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParkConfigUpdate {
    pub park_id: Option<String>,
    pub timezone: Option<String>,
    pub time_format: Option<String>,
    pub date_format: Option<String>,
    pub api_region: Option<String>,
    pub mode: Option<OperatingMode>,
    pub category: Option<Category>,
}

impl ParkConfig {
    pub fn new(park_id: impl Into<String>) -> Self {
        Self {
            park_id: park_id.into(),
            timezone: default_timezone(),
            time_format: default_time_format(),
            date_format: default_date_format(),
            api_region: default_api_region(),
            mode: OperatingMode::Standard,
            category: Category::ThemePark,
        }
    }

    pub fn with_mode(mut self, mode: OperatingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Shallow field-by-field overwrite.
    pub fn apply(&mut self, update: ParkConfigUpdate) {
        if let Some(v) = update.park_id {
            self.park_id = v;
        }
        if let Some(v) = update.timezone {
            self.timezone = v;
        }
        if let Some(v) = update.time_format {
            self.time_format = v;
        }
        if let Some(v) = update.date_format {
            self.date_format = v;
        }
        if let Some(v) = update.api_region {
            self.api_region = v;
        }
        if let Some(v) = update.mode {
            self.mode = v;
        }
        if let Some(v) = update.category {
            self.category = v;
        }
    }
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_time_format() -> String {
    DEFAULT_TIME_FORMAT.to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_api_region() -> String {
    DEFAULT_API_REGION.to_string()
}
