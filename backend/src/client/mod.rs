//! gRPC-Web status client.
//!
//! A fetch cycle is: encode the request frame, POST it through a
//! [`StatusTransport`], unwrap and decode the response, then normalize.
//! [`StatusClient::fetch_view`] never fails; any error degrades to the
//! "no data" view so the next refresh can try again.

pub mod refresh;
pub mod transport;

use log::{debug, warn};
use std::sync::Arc;

use crate::codec;
use crate::config::ClientConfig;
use crate::error::ScheduleResult;
use crate::models::QueueId;
use crate::services::ScheduleView;

pub use refresh::{spawn_refresher, RefreshHandle};
pub use transport::{StatusTransport, GRPC_WEB_CONTENT_TYPE, GRPC_WEB_HEADERS};

#[cfg(feature = "http-client")]
pub use transport::HttpTransport;

/// Client for the status service.
///
/// Holds no per-request state, so concurrent fetches for different queues
/// are independent; each future resolves to its own response.
#[derive(Clone)]
pub struct StatusClient {
    transport: Arc<dyn StatusTransport>,
    url: String,
}

impl StatusClient {
    pub fn new(transport: Arc<dyn StatusTransport>, url: impl Into<String>) -> Self {
        Self {
            transport,
            url: url.into(),
        }
    }

    /// Client using [`HttpTransport`] with the configured URL and timeout.
    #[cfg(feature = "http-client")]
    pub fn from_config(config: &ClientConfig) -> ScheduleResult<Self> {
        let transport = HttpTransport::new(config.timeout())?;
        Ok(Self::new(Arc::new(transport), config.status_url()))
    }

    /// Client using a caller-supplied transport with the configured URL.
    pub fn with_transport(config: &ClientConfig, transport: Arc<dyn StatusTransport>) -> Self {
        Self::new(transport, config.status_url())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the raw per-slot flags for `queue`.
    pub async fn fetch_statuses(&self, queue: &QueueId) -> ScheduleResult<Vec<bool>> {
        let body = codec::encode_request_frame(queue.as_str());
        let response = self.transport.post(&self.url, body).await?;
        let statuses = codec::decode_response_frame(&response)?;
        debug!("queue {}: {} status flags", queue, statuses.len());
        Ok(statuses)
    }

    /// Fetch and normalize the schedule for `queue`, falling back to the
    /// "no data" view on any failure.
    pub async fn fetch_view(&self, queue: &QueueId) -> ScheduleView {
        match self.fetch_statuses(queue).await {
            Ok(statuses) => ScheduleView::from_raw(queue.clone(), &statuses),
            Err(e) => {
                warn!("queue {}: status fetch failed, showing no data: {}", queue, e);
                ScheduleView::no_data(queue.clone())
            }
        }
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
