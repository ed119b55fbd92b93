// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scheduler lifecycle: interval loops around the sweeps.

use std::sync::Arc;

use chrono::Local;
use frontdesk_config::SchedulerConfig;
use frontdesk_core::Messenger;
use frontdesk_storage::Database;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::sweeps::{run_reminder_sweep, run_review_sweep};

struct Running {
    cancel: CancellationToken,
    handles: Vec<JoinHandle<()>>,
}

/// Runs the reminder and review sweeps on their configured intervals.
///
/// `start` and `stop` are idempotent; `stop` waits for in-flight sweeps to
/// finish before returning.
pub struct NotificationScheduler {
    db: Database,
    messenger: Arc<dyn Messenger>,
    config: SchedulerConfig,
    review_link: Option<String>,
    inner: Mutex<Option<Running>>,
}

impl NotificationScheduler {
    pub fn new(
        db: Database,
        messenger: Arc<dyn Messenger>,
        config: SchedulerConfig,
        review_link: Option<String>,
    ) -> Self {
        Self {
            db,
            messenger,
            config,
            review_link,
            inner: Mutex::new(None),
        }
    }

    /// Start both sweep loops. A second call while running is a no-op.
    pub async fn start(&self) {
        let mut inner = self.inner.lock().await;
        if inner.is_some() {
            return;
        }
        let cancel = CancellationToken::new();

        let reminder_handle = {
            let db = self.db.clone();
            let messenger = self.messenger.clone();
            let config = self.config.clone();
            let cancel = cancel.clone();
            tokio::spawn(async move {
                let mut ticker = interval(Duration::from_secs(config.reminder_interval_secs));
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    tokio::select! {
                        _ = cancel.cancelled() => break,
                        _ = ticker.tick() => {
                            let now = Local::now().naive_local();
                            if let Err(err) =
                                run_reminder_sweep(&db, &messenger, &config, now).await
                            {
                                warn!(error = %err, "reminder sweep failed");
                            }
                        }
                    }
                }
            })
        };

        let review_handle = {
            let db = self.db.clone();
            let messenger = self.messenger.clone();
            let config = self.config.clone();
            let review_link = self.review_link.clone();
            let cancel = cancel.clone();
            tokio::spawn(async move {
                let mut ticker = interval(Duration::from_secs(config.review_interval_secs));
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    tokio::select! {
                        _ = cancel.cancelled() => break,
                        _ = ticker.tick() => {
                            let now = Local::now().naive_local();
                            if let Err(err) = run_review_sweep(
                                &db,
                                &messenger,
                                &config,
                                review_link.as_deref(),
                                now,
                            )
                            .await
                            {
                                warn!(error = %err, "review sweep failed");
                            }
                        }
                    }
                }
            })
        };

        info!(
            reminder_interval_secs = self.config.reminder_interval_secs,
            review_interval_secs = self.config.review_interval_secs,
            "notification scheduler started"
        );
        *inner = Some(Running {
            cancel,
            handles: vec![reminder_handle, review_handle],
        });
    }

    /// Stop the loops and wait for them to wind down. No-op when stopped.
    pub async fn stop(&self) {
        let running = self.inner.lock().await.take();
        let Some(running) = running else {
            return;
        };
        running.cancel.cancel();
        for handle in running.handles {
            if let Err(err) = handle.await {
                warn!(error = %err, "scheduler task did not shut down cleanly");
            }
        }
        info!("notification scheduler stopped");
    }

    pub async fn is_running(&self) -> bool {
        self.inner.lock().await.is_some()
    }
}
