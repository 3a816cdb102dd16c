use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::entry::EntriesPage;
use crate::model::schedule::{SchedulePage, ScheduleTable};

/// Content-page kinds served by the facility service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    #[default]
    ThemePark,
    WaterPark,
    Schedule,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ThemePark => "theme-park",
            Category::WaterPark => "water-park",
            Category::Schedule => "schedule",
        }
    }
}

/// Request shape for a content page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// Path segment after the park id, e.g. `wait-times`. Empty for none.
    pub subpage: String,
    /// Opaque query fragment appended verbatim. Empty for none.
    pub api_opts: String,
    pub region: String,
}

/// Upstream data for a park. Implementations own transport, auth, and timeouts.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_entries(&self, park_id: &str, category: Category, options: &PageOptions) -> Result<EntriesPage>;

    /// Joined-mode schedule table for every park and ride. `Ok(None)` means no data.
    async fn fetch_schedule_table(&self) -> Result<Option<ScheduleTable>>;

    async fn fetch_raw_schedule(&self, park_id: &str) -> Result<SchedulePage>;
}
