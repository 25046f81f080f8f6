//! Cache Sweep Task
//!
//! Background task that periodically removes stale cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::cache::CacheStore;

/// Smallest sweep period; tokio intervals must be non-zero.
const MIN_SWEEP_PERIOD: Duration = Duration::from_millis(1);

/// Largest sweep period. Longer intervals are accepted but sweep at this
/// rate, which keeps every tick deadline representable as an `Instant`.
const MAX_SWEEP_PERIOD: Duration = Duration::from_secs(u32::MAX as u64);

/// Spawns a background task that reaps stale entries once per `interval`.
///
/// The first sweep runs one full interval after the task starts. Ticks are
/// fixed-delay: a late tick pushes the following ones back rather than
/// bursting. The lock is held only for the duration of a single reap.
///
/// The task exits when `shutdown` receives a message or its sender is dropped.
pub fn spawn_sweep_task(
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    mut shutdown: broadcast::Receiver<()>,
) -> JoinHandle<()> {
    let period = interval.clamp(MIN_SWEEP_PERIOD, MAX_SWEEP_PERIOD);

    tokio::spawn(async move {
        info!(?period, "Starting cache sweep task");

        let now = Instant::now();
        let start = now.checked_add(period).unwrap_or(now);
        let mut ticker = time::interval_at(start, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = shutdown.recv() => {
                    debug!("Cache sweep task received shutdown");
                    break;
                }
                _ = ticker.tick() => {
                    let removed = {
                        let mut guard = store.lock().await;
                        guard.reap(Instant::now())
                    };

                    if removed > 0 {
                        info!("Cache sweep: removed {} stale entries", removed);
                    } else {
                        debug!("Cache sweep: no stale entries found");
                    }
                }
            }
        }
    })
}

// == Sweep Handle ==
/// Owns a running sweep task and the channel used to stop it.
///
/// Dropping the handle aborts the task; `stop` shuts it down and waits for
/// it to finish.
#[derive(Debug)]
pub struct SweepHandle {
    shutdown: broadcast::Sender<()>,
    task: Option<JoinHandle<()>>,
}

impl SweepHandle {
    /// Starts sweeping `store` once per `interval`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(store: Arc<Mutex<CacheStore>>, interval: Duration) -> Self {
        let (shutdown, rx) = broadcast::channel(1);
        let task = spawn_sweep_task(store, interval, rx);
        Self {
            shutdown,
            task: Some(task),
        }
    }

    /// Signals the task to stop and waits until it has exited.
    pub async fn stop(mut self) {
        let _ = self.shutdown.send(());
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!("Cache sweep task ended abnormally: {}", e);
            }
        }
        info!("Cache sweep task stopped");
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for SweepHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
