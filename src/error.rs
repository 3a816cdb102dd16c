use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParkError {
    #[error("Failed to parse time '{input}' with format '{format}': {reason}")]
    Parse {
        input: String,
        format: String,
        reason: String,
    },

    #[error("Malformed entry: missing {field}")]
    MalformedEntry { field: &'static str },

    #[error("No schedule data available")]
    NoScheduleData,

    #[error("Unable to find park schedule data for park {park_id}")]
    ParkNotFound { park_id: String },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ParkError {
    pub(crate) fn parse(input: &str, format: &str, reason: impl Into<String>) -> Self {
        ParkError::Parse {
            input: input.to_string(),
            format: format.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ParkError>;
