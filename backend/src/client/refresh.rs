//! Periodic re-fetching of one queue's schedule.

use log::info;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use super::StatusClient;
use crate::models::QueueId;
use crate::services::ScheduleView;

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Handle to a running refresher. Dropping it stops the task.
pub struct RefreshHandle {
    receiver: watch::Receiver<ScheduleView>,
    task: JoinHandle<()>,
}

impl RefreshHandle {
    /// Receiver that observes every published view.
    pub fn subscribe(&self) -> watch::Receiver<ScheduleView> {
        self.receiver.clone()
    }

    /// Most recently published view.
    pub fn latest(&self) -> ScheduleView {
        self.receiver.borrow().clone()
    }

    pub fn stop(self) {
        self.task.abort();
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Fetch `queue` immediately and then every `period`, publishing each view.
///
/// The channel starts with the "no data" view. A tick that fires while a
/// fetch is still running is delayed, so fetches never overlap.
pub fn spawn_refresher(client: StatusClient, queue: QueueId, period: Duration) -> RefreshHandle {
    let (sender, receiver) = watch::channel(ScheduleView::no_data(queue.clone()));

    let task = tokio::spawn(async move {
        let mut ticker = interval(period.max(MIN_PERIOD));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let view = client.fetch_view(&queue).await;
            if sender.send(view).is_err() {
                info!("queue {}: no subscribers left, stopping refresh", queue);
                break;
            }
        }
    });

    RefreshHandle { receiver, task }
}
