//! Data Transfer Objects for the HTTP API.

use serde::{Deserialize, Serialize};

pub use crate::services::ScheduleView;

/// Query string accepted by the JSON endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueueQuery {
    /// Queue as typed by the user ("31", "3.1"); defaults when absent
    #[serde(default)]
    pub queue: Option<String>,
}

/// Raw status array under the `Status` key read by the web widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(rename = "Status")]
    pub status: Vec<u8>,
}

/// One selectable queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueInfo {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueListResponse {
    pub queues: Vec<QueueInfo>,
    pub default: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub provider: String,
}
