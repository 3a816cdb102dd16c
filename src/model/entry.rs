use serde::{Deserialize, Serialize};

/// Page of content entries as returned by the facility service.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct EntriesPage {
    #[serde(default)]
    pub entries: Vec<RawEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub type_field: Option<String>,
    pub wait_time: Option<WaitTime>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitTime {
    // Sent as an integer by most parks, occasionally as `45.0`
    pub posted_wait_minutes: Option<f64>,
    pub status: Option<String>,
    pub fast_pass: Option<FastPass>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FastPass {
    pub available: Option<bool>,
}
