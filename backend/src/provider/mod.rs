//! Sources of raw status samples for the status server.
//!
//! The server never talks to the upstream utility directly; it asks a
//! [`StatusProvider`] for the latest sample of a queue.
//!
//! - [`local`]: in-memory implementation for tests and local development

pub mod local;

use async_trait::async_trait;

use crate::error::ScheduleResult;
use crate::models::QueueId;

pub use local::InMemoryStatusProvider;

/// Read access to the latest raw status sample per queue.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to be shared by request handlers.
#[async_trait]
pub trait StatusProvider: Send + Sync {
    /// Check that the provider can serve data.
    async fn health_check(&self) -> ScheduleResult<bool>;

    /// Latest raw sample for `queue`, one 0/1 value per reported slot.
    ///
    /// An unknown queue yields an empty sample, which renders as "no data".
    async fn statuses(&self, queue: &QueueId) -> ScheduleResult<Vec<u8>>;
}
