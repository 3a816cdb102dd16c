#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;

use park_times_lambda_rust::disney::decode;
use park_times_lambda_rust::model::entry::EntriesPage;
use park_times_lambda_rust::model::schedule::{SchedulePage, ScheduleTable};
use park_times_lambda_rust::source::{Category, DataSource, PageOptions};
use park_times_lambda_rust::{ParkError, Result};

pub const WAIT_TIMES: &str = include_str!("../fixtures/wait_times.json");
pub const JOINED_WAIT_TIMES: &str = include_str!("../fixtures/joined_wait_times.json");
pub const JOINED_SCHEDULE: &str = include_str!("../fixtures/joined_schedule.json");
pub const SCHEDULE: &str = include_str!("../fixtures/schedule.json");

pub enum Reply {
    Json(String),
    Missing,
    Fail,
}

/// In-memory upstream that records the page requests it receives.
pub struct FakeSource {
    pub entries: Reply,
    pub table: Reply,
    pub schedule: Reply,
    pub requests: Mutex<Vec<(String, Category, PageOptions)>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self {
            entries: Reply::Missing,
            table: Reply::Missing,
            schedule: Reply::Missing,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_entries(mut self, json: &str) -> Self {
        self.entries = Reply::Json(json.to_string());
        self
    }

    pub fn with_table(mut self, reply: Reply) -> Self {
        self.table = reply;
        self
    }

    pub fn with_schedule(mut self, json: &str) -> Self {
        self.schedule = Reply::Json(json.to_string());
        self
    }

    pub fn requests(&self) -> Vec<(String, Category, PageOptions)> {
        self.requests.lock().unwrap().clone()
    }
}

fn transport() -> ParkError {
    ParkError::Transport("connection refused".to_string())
}

#[async_trait]
impl DataSource for FakeSource {
    async fn fetch_entries(&self, park_id: &str, category: Category, options: &PageOptions) -> Result<EntriesPage> {
        self.requests
            .lock()
            .unwrap()
            .push((park_id.to_string(), category, options.clone()));
        match &self.entries {
            Reply::Json(body) => decode(body),
            Reply::Missing => Ok(EntriesPage::default()),
            Reply::Fail => Err(transport()),
        }
    }

    async fn fetch_schedule_table(&self) -> Result<Option<ScheduleTable>> {
        match &self.table {
            Reply::Json(body) => decode(body),
            Reply::Missing => Ok(None),
            Reply::Fail => Err(transport()),
        }
    }

    async fn fetch_raw_schedule(&self, _park_id: &str) -> Result<SchedulePage> {
        match &self.schedule {
            Reply::Json(body) => decode(body),
            Reply::Missing => Ok(SchedulePage::default()),
            Reply::Fail => Err(transport()),
        }
    }
}
