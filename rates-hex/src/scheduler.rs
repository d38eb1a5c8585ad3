use std::sync::Arc;
use std::time::Duration;

use rates_types::{Currency, RateProvider};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::service::RateService;

/// Background loop that keeps the cache warm for every supported currency.
///
/// On start it runs one full refresh pass immediately, then repeats the pass
/// on a fixed interval until stopped. A failed refresh for one currency is
/// logged and does not abort the rest of the pass; the next tick retries it.
pub struct RefreshScheduler<P: RateProvider> {
    service: Arc<RateService<P>>,
    interval: Duration,
}

/// Handle to a running scheduler loop.
///
/// Dropping the handle signals the loop to exit, but only
/// [`SchedulerHandle::stop`] waits for it to finish.
pub struct SchedulerHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl<P: RateProvider> RefreshScheduler<P> {
    pub fn new(service: Arc<RateService<P>>, interval: Duration) -> Self {
        Self { service, interval }
    }

    /// Spawns the refresh loop. Consumes the scheduler, so a second start on
    /// the same instance is impossible.
    pub fn start(self) -> SchedulerHandle {
        let (shutdown, mut signal) = watch::channel(false);

        let task = tokio::spawn(async move {
            info!(
                interval_secs = self.interval.as_secs(),
                "Refresh scheduler started"
            );

            let mut ticker = tokio::time::interval(self.interval);
            // First tick fires immediately; no catch-up bursts after a
            // stalled pass.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = signal.changed() => {
                        info!("Refresh scheduler stopped");
                        return;
                    }
                    _ = ticker.tick() => {
                        self.refresh_all(&signal).await;
                    }
                }
            }
        });

        SchedulerHandle { shutdown, task }
    }

    /// One full refresh pass. Checks for shutdown between currencies so a
    /// stop request never waits on more than one in-flight fetch.
    async fn refresh_all(&self, signal: &watch::Receiver<bool>) {
        for &base in Currency::all() {
            if *signal.borrow() {
                return;
            }
            match self.service.get_latest_rates(base.code()).await {
                Ok(table) => debug!(base = %base, rates = table.len(), "Refreshed rates"),
                Err(err) => warn!(base = %base, error = %err, "Failed to refresh rates"),
            }
        }
    }
}

impl SchedulerHandle {
    /// Signals the loop to exit and waits until it has fully stopped. No
    /// refresh work is in flight once this returns.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}
