//! In-memory status provider.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use super::StatusProvider;
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::QueueId;

/// Status samples held in memory.
///
/// # Example
/// ```
/// use outage_schedule::models::QueueId;
/// use outage_schedule::provider::InMemoryStatusProvider;
///
/// let provider = InMemoryStatusProvider::new();
/// provider.set_statuses(QueueId::new("31"), vec![0, 0, 1, 1]);
/// assert_eq!(provider.queue_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct InMemoryStatusProvider {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    statuses: HashMap<QueueId, Vec<u8>>,
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            statuses: HashMap::new(),
            is_healthy: true,
        }
    }
}

impl InMemoryStatusProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a provider from a JSON object mapping queue ids to arrays of
    /// 0/1 values, e.g. `{"31": [0, 0, 1, 1]}`.
    pub fn from_json_str(json: &str) -> ScheduleResult<Self> {
        let parsed: HashMap<String, Vec<u8>> = serde_json::from_str(json)
            .map_err(|e| ScheduleError::Configuration(format!("Invalid status JSON: {}", e)))?;

        let provider = Self::new();
        for (queue, statuses) in parsed {
            provider.set_statuses(QueueId::new(queue), statuses);
        }
        Ok(provider)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ScheduleResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ScheduleError::Configuration(format!("Failed to read status file: {}", e))
        })?;
        Self::from_json_str(&content)
    }

    /// Replace the sample for `queue`.
    pub fn set_statuses(&self, queue: QueueId, statuses: Vec<u8>) {
        self.data.write().statuses.insert(queue, statuses);
    }

    /// Set the health status for testing provider failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    pub fn queue_count(&self) -> usize {
        self.data.read().statuses.len()
    }
}

#[async_trait]
impl StatusProvider for InMemoryStatusProvider {
    async fn health_check(&self) -> ScheduleResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn statuses(&self, queue: &QueueId) -> ScheduleResult<Vec<u8>> {
        let data = self.data.read();
        if !data.is_healthy {
            return Err(ScheduleError::transport("status source is not healthy"));
        }
        Ok(data.statuses.get(queue).cloned().unwrap_or_default())
    }
}
