use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use crate::disney::HttpDataSource;
use crate::model::config::ParkConfig;
use crate::model::ride::RideStatus;
use crate::model::schedule::ScheduleEntry;
use crate::park::ParkService;
use crate::source::DataSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    WaitTimes,
    Schedule,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub action: Action,
    pub park: ParkConfig,
    #[serde(default)]
    pub include_entertainment: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response {
    WaitTimes { park_id: String, rides: Vec<RideStatus> },
    Schedule { park_id: String, schedule: Vec<ScheduleEntry> },
}

#[instrument(skip(event))]
pub async fn handler(event: LambdaEvent<Request>) -> Result<Response, Error> {
    // Transport settings come from the environment; park settings from the payload
    let source = HttpDataSource::from_env();
    respond(event.payload, source).await.map_err(|e| {
        error!(error = %e, "Request failed");
        Error::from(e)
    })
}

/// Run one request against `source`.
pub async fn respond<S: DataSource>(request: Request, source: S) -> crate::Result<Response> {
    let park_id = request.park.park_id.clone();
    let service = ParkService::new(request.park, source);

    match request.action {
        Action::WaitTimes => {
            let rides = service.fetch_wait_times(request.include_entertainment).await?;
            info!(park_id = %park_id, rides = rides.len(), "Prepared wait times");
            Ok(Response::WaitTimes { park_id, rides })
        }
        Action::Schedule => {
            let schedule = service.fetch_schedule().await?;
            info!(park_id = %park_id, entries = schedule.len(), "Prepared schedule");
            Ok(Response::Schedule { park_id, schedule })
        }
    }
}
