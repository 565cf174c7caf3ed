#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::time::Duration;

    use crate::client::{spawn_refresher, StatusClient, StatusTransport};
    use crate::codec;
    use crate::config::ClientConfig;
    use crate::error::{ScheduleError, ScheduleResult};
    use crate::models::{OutageInterval, QueueId};
    use crate::services::OutageSummary;

    /// Transport that replays a canned response and records requests.
    struct CannedTransport {
        response: Mutex<ScheduleResult<Vec<u8>>>,
        requests: Mutex<Vec<(String, Vec<u8>)>>,
    }

    impl CannedTransport {
        fn ok(body: Vec<u8>) -> Arc<Self> {
            Arc::new(Self {
                response: Mutex::new(Ok(body)),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn failing(status: u16) -> Arc<Self> {
            Arc::new(Self {
                response: Mutex::new(Err(ScheduleError::http_status(status))),
                requests: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl StatusTransport for CannedTransport {
        async fn post(&self, url: &str, body: Vec<u8>) -> ScheduleResult<Vec<u8>> {
            self.requests.lock().push((url.to_string(), body));
            match &*self.response.lock() {
                Ok(bytes) => Ok(bytes.clone()),
                Err(ScheduleError::TransportFailure { status, message }) => {
                    Err(ScheduleError::TransportFailure {
                        status: *status,
                        message: message.clone(),
                    })
                }
                Err(other) => Err(ScheduleError::transport(other.to_string())),
            }
        }
    }

    fn client(transport: Arc<CannedTransport>) -> StatusClient {
        StatusClient::with_transport(&ClientConfig::default(), transport)
    }

    #[tokio::test]
    async fn test_request_bytes() {
        let transport = CannedTransport::ok(codec::encode_response_body(&[]));
        let client = client(transport.clone());

        client.fetch_statuses(&QueueId::new("31")).await.unwrap();

        let requests = transport.requests.lock();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, "/grpc/StatusService/GetStatus");
        assert_eq!(requests[0].1, vec![0x00, 0, 0, 0, 4, 0x0a, 0x02, b'3', b'1']);
    }

    #[tokio::test]
    async fn test_fetch_view_with_outage() {
        let mut statuses = vec![false; 48];
        statuses[20..24].fill(true);
        let client = client(CannedTransport::ok(codec::encode_response_body(&statuses)));

        let view = client.fetch_view(&QueueId::new("31")).await;
        assert!(view.has_data);
        assert_eq!(view.intervals, vec![OutageInterval::new(20, 24)]);
    }

    #[tokio::test]
    async fn test_http_error_falls_back_to_no_data() {
        let client = client(CannedTransport::failing(502));
        let queue = QueueId::new("22");

        let err = client.fetch_statuses(&queue).await.unwrap_err();
        assert!(err.is_retryable());

        let view = client.fetch_view(&queue).await;
        assert_eq!(view.summary(), OutageSummary::NoData);
        assert!(!view.slots.has_outages());
    }

    #[tokio::test]
    async fn test_bad_frame_falls_back_to_no_data() {
        let client = client(CannedTransport::ok(vec![0x02, 0, 0, 0, 0]));
        let queue = QueueId::new("22");

        let err = client.fetch_statuses(&queue).await.unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::Codec(codec::CodecError::UnexpectedFrameType(0x02))
        ));
        assert_eq!(client.fetch_view(&queue).await, crate::services::ScheduleView::no_data(queue));
    }

    #[tokio::test]
    async fn test_concurrent_fetches_are_independent() {
        let client = client(CannedTransport::ok(codec::encode_response_body(&[true; 24])));
        let a = QueueId::new("11");
        let b = QueueId::new("12");

        let (va, vb) = tokio::join!(client.fetch_view(&a), client.fetch_view(&b));
        assert_eq!(va.queue, a);
        assert_eq!(vb.queue, b);
        assert_eq!(va.slots, vb.slots);
    }

    #[tokio::test]
    async fn test_refresher_publishes_views() {
        let transport = CannedTransport::ok(codec::encode_response_body(&[true]));
        let handle = spawn_refresher(
            client(transport.clone()),
            QueueId::new("41"),
            Duration::from_millis(10),
        );

        let mut rx = handle.subscribe();
        tokio::time::timeout(Duration::from_secs(5), rx.changed())
            .await
            .expect("refresher did not publish")
            .unwrap();
        assert!(rx.borrow().has_data);
        assert!(handle.latest().slots.has_outages());

        tokio::time::timeout(Duration::from_secs(5), async {
            while transport.requests.lock().len() < 2 {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("refresher did not fetch again");

        handle.stop();
    }
}
