use std::env;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{error, info, info_span, instrument};

use crate::error::{ParkError, Result};
use crate::model::entry::EntriesPage;
use crate::model::schedule::{SchedulePage, ScheduleTable};
use crate::source::{Category, DataSource, PageOptions};

pub const DEFAULT_BASE_URL: &str = "https://api.wdpro.disney.go.com/facility-service";

/// Blocking `ureq` client for the facility service, run off the async runtime.
#[derive(Debug, Clone)]
pub struct HttpDataSource {
    base_url: String,
    // Joined-mode schedule feed lives on a separate host; none configured means no data
    schedule_url: Option<String>,
    access_token: Option<String>,
}

impl HttpDataSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            schedule_url: None,
            access_token: None,
        }
    }

    /// Read `PARKS_API_BASE_URL`, `PARKS_SCHEDULE_URL` and `PARKS_API_TOKEN`.
    pub fn from_env() -> Self {
        let base_url = env::var("PARKS_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let mut source = Self::new(base_url);
        source.schedule_url = env::var("PARKS_SCHEDULE_URL").ok().filter(|s| !s.is_empty());
        source.access_token = env::var("PARKS_API_TOKEN").ok().filter(|s| !s.is_empty());
        source
    }

    pub fn with_schedule_url(mut self, url: impl Into<String>) -> Self {
        self.schedule_url = Some(url.into());
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// `{base}/{category}s/{park_id}[/{subpage}][?{api_opts}&region={region}]`
    pub fn page_url(&self, park_id: &str, category: Category, options: &PageOptions) -> String {
        let mut url = format!("{}/{}s/{}", self.base_url, category.as_str(), park_id);
        if !options.subpage.is_empty() {
            url.push('/');
            url.push_str(&options.subpage);
        }

        let mut query: Vec<String> = Vec::new();
        if !options.api_opts.is_empty() {
            query.push(options.api_opts.clone());
        }
        if !options.region.is_empty() {
            query.push(format!("region={}", options.region));
        }
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.join("&"));
        }
        url
    }

    async fn get<T: DeserializeOwned + Send + 'static>(&self, url: String) -> Result<T> {
        let token = self.access_token.clone();
        // ureq is blocking; the task must own its inputs
        tokio::task::spawn_blocking(move || get_json(&url, token.as_deref()))
            .await
            .map_err(|e| ParkError::Transport(format!("Fetch task join error: {}", e)))?
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    #[instrument(level = "info", skip(self, options))]
    async fn fetch_entries(&self, park_id: &str, category: Category, options: &PageOptions) -> Result<EntriesPage> {
        let url = self.page_url(park_id, category, options);
        let page: EntriesPage = self.get(url).await?;
        info!(entries = page.entries.len(), "Fetched entries page");
        Ok(page)
    }

    #[instrument(level = "info", skip(self))]
    async fn fetch_schedule_table(&self) -> Result<Option<ScheduleTable>> {
        match &self.schedule_url {
            Some(url) => self.get(url.clone()).await,
            None => Ok(None),
        }
    }

    #[instrument(level = "info", skip(self))]
    async fn fetch_raw_schedule(&self, park_id: &str) -> Result<SchedulePage> {
        let url = self.page_url(park_id, Category::Schedule, &PageOptions::default());
        self.get(url).await
    }
}

/// Decode an upstream JSON body.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str::<T>(body).map_err(ParkError::from)
}

fn get_json<T: DeserializeOwned>(url: &str, token: Option<&str>) -> Result<T> {
    let response_result = {
        let _span = info_span!("parks_fetch", url = %url).entered();
        // Keep non-2xx responses as responses so their body can be logged
        let mut request = ureq::get(url)
            .config()
            .http_status_as_error(false)
            .build()
            .header("Accept", "application/json");
        if let Some(token) = token {
            request = request.header("Authorization", format!("BEARER {}", token));
        }
        request.call()
    };

    let response = response_result.map_err(|e| {
        error!(error = %e, url = %url, "Request failed");
        ParkError::Transport(format!("Request to {} failed: {}", url, e))
    })?;

    let code = response.status().as_u16();
    let body = response.into_body().read_to_string().map_err(|e| {
        error!(error = %e, "Failed to read response body");
        ParkError::Transport(format!("Failed to read response body: {}", e))
    })?;
    check_status(code, url, &body)?;

    decode(&body).inspect_err(|e| error!(error = %e, bytes = body.len(), "Failed to decode response"))
}

/// Map a non-2xx status to a transport error, logging the body upstream sent with it.
pub fn check_status(code: u16, url: &str, body: &str) -> Result<()> {
    if (200..300).contains(&code) {
        return Ok(());
    }
    error!(status = code, url = %url, body = %body, "Non-success status");
    Err(ParkError::Transport(format!("GET {} returned status {}", url, code)))
}
