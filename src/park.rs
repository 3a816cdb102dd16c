use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};

use crate::error::{ParkError, Result};
use crate::model::config::{OperatingMode, ParkConfig, ParkConfigUpdate};
use crate::model::ride::RideStatus;
use crate::model::schedule::ScheduleEntry;
use crate::source::{DataSource, PageOptions};
use crate::{filter, merge, schedule, time, wait_times};

/// Query fragment the joined-mode feed expects for wait times.
pub const JOINED_WAIT_TIMES_OPTS: &str = "destination=dlp/wait-times";

/// Park-specific wait time and schedule lookups over a [`DataSource`].
#[derive(Debug)]
pub struct ParkService<S> {
    config: ParkConfig,
    source: S,
}

impl<S: DataSource> ParkService<S> {
    pub fn new(config: ParkConfig, source: S) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &ParkConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Overwrite the supplied fields; the mode in effect is whatever the result says.
    pub fn reconfigure(&mut self, update: ParkConfigUpdate) {
        self.config.apply(update);
        info!(park_id = %self.config.park_id, mode = ?self.config.mode, "Park reconfigured");
    }

    pub async fn fetch_wait_times(&self, include_entertainment: bool) -> Result<Vec<RideStatus>> {
        self.fetch_wait_times_at(include_entertainment, Utc::now()).await
    }

    /// Current ride statuses. `now` selects the day whose opening hours get merged in joined mode.
    #[instrument(level = "info", skip(self), fields(park_id = %self.config.park_id))]
    pub async fn fetch_wait_times_at(&self, include_entertainment: bool, now: DateTime<Utc>) -> Result<Vec<RideStatus>> {
        let options = wait_times_options(self.config.mode, &self.config.api_region);
        let page = self
            .source
            .fetch_entries(&self.config.park_id, self.config.category, &options)
            .await?;

        let total = page.entries.len();
        let entries = filter::filter(page.entries, include_entertainment);
        let rides = wait_times::project_all(&entries)?;
        info!(total, rides = rides.len(), "Projected wait times");

        match self.config.mode {
            OperatingMode::Standard => Ok(rides),
            OperatingMode::AlternateJoined => Ok(self.with_opening_times(rides, now).await),
        }
    }

    /// Park opening hours for every day the upstream feed knows about.
    #[instrument(level = "info", skip(self), fields(park_id = %self.config.park_id))]
    pub async fn fetch_schedule(&self) -> Result<Vec<ScheduleEntry>> {
        let entries = match self.config.mode {
            OperatingMode::Standard => self.standard_schedule().await?,
            OperatingMode::AlternateJoined => self.joined_schedule().await?,
        };
        info!(entries = entries.len(), "Built park schedule");
        Ok(entries)
    }

    // Best effort: any failure here returns the rides as they came in
    async fn with_opening_times(&self, rides: Vec<RideStatus>, now: DateTime<Utc>) -> Vec<RideStatus> {
        let table = match self.source.fetch_schedule_table().await {
            Ok(Some(table)) => table,
            Ok(None) => {
                warn!("No schedule table available; returning wait times without opening hours");
                return rides;
            }
            Err(e) => {
                warn!(error = %e, "Schedule table fetch failed; returning wait times without opening hours");
                return rides;
            }
        };
        match time::today_in(&self.config.timezone, now) {
            Ok(today) => merge::merge(rides, &table, &today),
            Err(e) => {
                warn!(error = %e, "Cannot determine park date; skipping opening hours");
                rides
            }
        }
    }

    async fn standard_schedule(&self) -> Result<Vec<ScheduleEntry>> {
        let page = self.source.fetch_raw_schedule(&self.config.park_id).await?;
        schedule::project(&page.schedules, &self.config)
    }

    async fn joined_schedule(&self) -> Result<Vec<ScheduleEntry>> {
        let table = self
            .source
            .fetch_schedule_table()
            .await?
            .filter(|t| !t.is_empty())
            .ok_or(ParkError::NoScheduleData)?;
        schedule::flatten_table(&table, &self.config.park_id, &self.config.date_format)
    }
}

/// Wait-time page request for each mode.
pub fn wait_times_options(mode: OperatingMode, region: &str) -> PageOptions {
    match mode {
        OperatingMode::Standard => PageOptions {
            subpage: "wait-times".to_string(),
            api_opts: String::new(),
            region: region.to_string(),
        },
        OperatingMode::AlternateJoined => PageOptions {
            subpage: String::new(),
            api_opts: JOINED_WAIT_TIMES_OPTS.to_string(),
            region: region.to_string(),
        },
    }
}
