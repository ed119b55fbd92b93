// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The reminder and review sweeps.
//!
//! Each sweep is a pure function of the clock it is handed, which keeps the
//! tests free of real time. Per-booking failures are logged and skipped;
//! one bad phone number never stalls the rest of the batch.

use std::sync::Arc;

use chrono::{Duration, NaiveDateTime};
use frontdesk_config::SchedulerConfig;
use frontdesk_core::{FrontdeskError, Messenger};
use frontdesk_sms::templates;
use frontdesk_storage::{parse_start_at, queries, Database};
use tracing::{debug, info, warn};

/// Outcome of one sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepStats {
    /// Bookings the sweep considered.
    pub examined: usize,
    /// Messages delivered.
    pub sent: usize,
}

/// Send reminders for bookings starting `reminder_lead_hours` from `now`,
/// within a window of plus or minus `reminder_window_mins`.
///
/// The sent-flag is set only after a successful send; a failed send leaves
/// the booking eligible for the next sweep.
pub async fn run_reminder_sweep(
    db: &Database,
    messenger: &Arc<dyn Messenger>,
    config: &SchedulerConfig,
    now: NaiveDateTime,
) -> Result<SweepStats, FrontdeskError> {
    let target = now + Duration::hours(config.reminder_lead_hours);
    let window = Duration::minutes(config.reminder_window_mins);
    let due =
        queries::bookings::bookings_needing_reminder(db, target - window, target + window).await?;

    let mut stats = SweepStats {
        examined: due.len(),
        sent: 0,
    };
    for booking in &due {
        let when = parse_start_at(&booking.start_at)
            .map(|dt| dt.format("%H:%M").to_string())
            .unwrap_or_else(|| booking.start_at.clone());
        let body = templates::reminder(&booking.customer_name, &when);
        match messenger.send(&booking.phone, &body).await {
            Ok(_) => {
                stats.sent += 1;
                debug!(booking_id = %booking.id, "reminder sent");
                if let Err(err) = queries::bookings::mark_reminder_sent(db, &booking.id).await {
                    warn!(booking_id = %booking.id, error = %err, "could not persist reminder flag");
                }
            }
            Err(err) => {
                warn!(booking_id = %booking.id, error = %err, "reminder send failed, will retry");
            }
        }
    }
    if stats.examined > 0 {
        info!(examined = stats.examined, sent = stats.sent, "reminder sweep complete");
    }
    Ok(stats)
}

/// Send review requests for bookings that started before `now` but no
/// longer ago than `review_lookback_hours`.
pub async fn run_review_sweep(
    db: &Database,
    messenger: &Arc<dyn Messenger>,
    config: &SchedulerConfig,
    review_link: Option<&str>,
    now: NaiveDateTime,
) -> Result<SweepStats, FrontdeskError> {
    let cutoff = now - Duration::hours(config.review_lookback_hours);
    let due = queries::bookings::bookings_needing_review(db, cutoff, now).await?;

    let mut stats = SweepStats {
        examined: due.len(),
        sent: 0,
    };
    for booking in &due {
        let body = templates::review(&booking.customer_name, review_link);
        match messenger.send(&booking.phone, &body).await {
            Ok(_) => {
                stats.sent += 1;
                debug!(booking_id = %booking.id, "review request sent");
                if let Err(err) = queries::bookings::mark_review_sent(db, &booking.id).await {
                    warn!(booking_id = %booking.id, error = %err, "could not persist review flag");
                }
            }
            Err(err) => {
                warn!(booking_id = %booking.id, error = %err, "review send failed, will retry");
            }
        }
    }
    if stats.examined > 0 {
        info!(examined = stats.examined, sent = stats.sent, "review sweep complete");
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use frontdesk_test_utils::{temp_db, RecordingMessenger};

    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 10)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    async fn setup() -> (Database, Arc<RecordingMessenger>, Arc<dyn Messenger>, tempfile::TempDir) {
        let (db, dir) = temp_db().await;
        let recording = Arc::new(RecordingMessenger::new());
        let messenger: Arc<dyn Messenger> = recording.clone();
        (db, recording, messenger, dir)
    }

    async fn insert(
        db: &Database,
        name: &str,
        phone: &str,
        start: NaiveDateTime,
    ) -> frontdesk_storage::models::Booking {
        queries::bookings::insert_booking(db, phone, name, phone, start, None)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn reminder_sweep_is_idempotent() {
        let (db, recording, messenger, _dir) = setup().await;
        let config = SchedulerConfig::default();

        // due tomorrow 10:03, inside the ten-minute window around now+24h
        insert(&db, "Ada", "+15550001111", now() + Duration::hours(24) + Duration::minutes(3)).await;
        // well outside the window
        insert(&db, "Bob", "+15550002222", now() + Duration::hours(30)).await;

        let stats = run_reminder_sweep(&db, &messenger, &config, now()).await.unwrap();
        assert_eq!(stats, SweepStats { examined: 1, sent: 1 });
        let sent = recording.sent();
        assert_eq!(sent[0].0, "+15550001111");
        assert!(sent[0].1.contains("reminder"));

        // second sweep over the same clock sends nothing
        let stats = run_reminder_sweep(&db, &messenger, &config, now()).await.unwrap();
        assert_eq!(stats, SweepStats { examined: 0, sent: 0 });
        assert_eq!(recording.sent_count(), 1);
    }

    #[tokio::test]
    async fn failed_reminder_is_retried_next_sweep() {
        let (db, recording, messenger, _dir) = setup().await;
        let config = SchedulerConfig::default();

        insert(&db, "Ada", "+15550001111", now() + Duration::hours(24)).await;

        recording.fail_next(1);
        let stats = run_reminder_sweep(&db, &messenger, &config, now()).await.unwrap();
        assert_eq!(stats, SweepStats { examined: 1, sent: 0 });

        let stats = run_reminder_sweep(&db, &messenger, &config, now()).await.unwrap();
        assert_eq!(stats, SweepStats { examined: 1, sent: 1 });
        assert_eq!(recording.sent_count(), 1);
    }

    #[tokio::test]
    async fn one_bad_number_does_not_stall_the_batch() {
        let (db, recording, messenger, _dir) = setup().await;
        let config = SchedulerConfig::default();

        insert(&db, "Ada", "+15550001111", now() + Duration::hours(24) - Duration::minutes(5)).await;
        insert(&db, "Bob", "+15550002222", now() + Duration::hours(24) + Duration::minutes(5)).await;

        // first send (Ada, earliest start) fails; Bob still goes out
        recording.fail_next(1);
        let stats = run_reminder_sweep(&db, &messenger, &config, now()).await.unwrap();
        assert_eq!(stats, SweepStats { examined: 2, sent: 1 });
        assert_eq!(recording.sent()[0].0, "+15550002222");
    }

    #[tokio::test]
    async fn flag_persist_failure_does_not_stall_the_batch() {
        let (db, recording, messenger, _dir) = setup().await;
        let config = SchedulerConfig::default();

        let blocked =
            insert(&db, "Ada", "+15550001111", now() + Duration::hours(24) - Duration::minutes(5))
                .await;
        let fine =
            insert(&db, "Bob", "+15550002222", now() + Duration::hours(24) + Duration::minutes(5))
                .await;

        // make the flag update fail for Ada's row only
        let blocked_id = blocked.id.clone();
        db.connection()
            .call(move |conn| {
                conn.execute_batch(&format!(
                    "CREATE TRIGGER block_flag BEFORE UPDATE OF reminder_sent ON bookings
                     WHEN NEW.id = '{blocked_id}'
                     BEGIN SELECT RAISE(ABORT, 'flag blocked'); END;"
                ))?;
                Ok(())
            })
            .await
            .unwrap();

        let stats = run_reminder_sweep(&db, &messenger, &config, now()).await.unwrap();
        assert_eq!(stats, SweepStats { examined: 2, sent: 2 });
        assert_eq!(recording.sent_count(), 2);

        let row = queries::bookings::get_booking(&db, &fine.id).await.unwrap().unwrap();
        assert!(row.reminder_sent);
        let row = queries::bookings::get_booking(&db, &blocked.id).await.unwrap().unwrap();
        assert!(!row.reminder_sent);
    }

    #[tokio::test]
    async fn review_sweep_targets_recent_past_only() {
        let (db, recording, messenger, _dir) = setup().await;
        let config = SchedulerConfig::default();

        // yesterday: due for review
        insert(&db, "Ada", "+15550001111", now() - Duration::hours(20)).await;
        // three days ago: past the lookback
        insert(&db, "Bob", "+15550002222", now() - Duration::hours(72)).await;
        // later today: not started yet
        insert(&db, "Cam", "+15550003333", now() + Duration::hours(2)).await;

        let stats = run_review_sweep(&db, &messenger, &config, Some("https://example.com/r"), now())
            .await
            .unwrap();
        assert_eq!(stats, SweepStats { examined: 1, sent: 1 });
        let sent = recording.sent();
        assert_eq!(sent[0].0, "+15550001111");
        assert!(sent[0].1.contains("https://example.com/r"));

        let stats = run_review_sweep(&db, &messenger, &config, None, now()).await.unwrap();
        assert_eq!(stats, SweepStats { examined: 0, sent: 0 });
    }

    #[tokio::test]
    async fn reminder_and_review_flags_are_independent() {
        let (db, recording, messenger, _dir) = setup().await;
        let config = SchedulerConfig::default();

        let booking = insert(&db, "Ada", "+15550001111", now() - Duration::hours(1)).await;

        let stats = run_review_sweep(&db, &messenger, &config, None, now()).await.unwrap();
        assert_eq!(stats.sent, 1);

        let row = queries::bookings::get_booking(&db, &booking.id)
            .await
            .unwrap()
            .unwrap();
        assert!(row.review_sent);
        assert!(!row.reminder_sent);
        assert_eq!(recording.sent_count(), 1);
    }
}
