//! Transport seam between the status client and the network.

use async_trait::async_trait;

use crate::error::ScheduleResult;

/// Content type of a gRPC-Web request carrying binary protobuf.
pub const GRPC_WEB_CONTENT_TYPE: &str = "application/grpc-web+proto";

/// Headers sent with every status request.
pub const GRPC_WEB_HEADERS: [(&str, &str); 2] = [
    ("Content-Type", GRPC_WEB_CONTENT_TYPE),
    ("X-Grpc-Web", "1"),
];

/// Something that can POST a request body and return the raw response body.
///
/// Failures, including non-success HTTP statuses, surface as
/// [`ScheduleError::TransportFailure`](crate::error::ScheduleError::TransportFailure).
///
/// # Thread Safety
/// Implementations must be `Send + Sync` so a client can be shared between
/// tasks.
#[async_trait]
pub trait StatusTransport: Send + Sync {
    async fn post(&self, url: &str, body: Vec<u8>) -> ScheduleResult<Vec<u8>>;
}

#[cfg(feature = "http-client")]
pub use http::HttpTransport;

#[cfg(feature = "http-client")]
mod http {
    use std::time::Duration;

    use async_trait::async_trait;
    use log::debug;

    use super::{StatusTransport, GRPC_WEB_HEADERS};
    use crate::error::{ScheduleError, ScheduleResult};

    /// [`StatusTransport`] over `reqwest`.
    #[derive(Clone)]
    pub struct HttpTransport {
        client: reqwest::Client,
    }

    impl HttpTransport {
        pub fn new(timeout: Duration) -> ScheduleResult<Self> {
            let client = reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| ScheduleError::Configuration(format!("HTTP client: {}", e)))?;
            Ok(Self { client })
        }
    }

    #[async_trait]
    impl StatusTransport for HttpTransport {
        async fn post(&self, url: &str, body: Vec<u8>) -> ScheduleResult<Vec<u8>> {
            let mut request = self.client.post(url).body(body);
            for (name, value) in GRPC_WEB_HEADERS {
                request = request.header(name, value);
            }

            let response = request
                .send()
                .await
                .map_err(|e| ScheduleError::transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(ScheduleError::http_status(status.as_u16()));
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|e| ScheduleError::transport(e.to_string()))?;
            debug!("POST {} -> {} bytes", url, bytes.len());
            Ok(bytes.to_vec())
        }
    }
}
