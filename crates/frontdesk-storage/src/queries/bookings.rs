// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Booking CRUD and the range queries driving the notification scheduler.

use chrono::NaiveDateTime;
use frontdesk_core::FrontdeskError;
use rusqlite::{params, OptionalExtension};
use uuid::Uuid;

use crate::database::{map_tr_err, Database};
use crate::models::Booking;
use crate::{format_start_at, now_timestamp};

/// Persist a new booking. The calendar event id is attached later, after the
/// booking row is already durable.
pub async fn insert_booking(
    db: &Database,
    user_id: &str,
    customer_name: &str,
    phone: &str,
    start_at: NaiveDateTime,
    notes: Option<&str>,
) -> Result<Booking, FrontdeskError> {
    let booking = Booking {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        customer_name: customer_name.to_string(),
        phone: phone.to_string(),
        start_at: format_start_at(start_at),
        notes: notes.map(String::from),
        calendar_event_id: None,
        reminder_sent: false,
        review_sent: false,
        created_at: now_timestamp(),
    };
    let row = booking.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO bookings
                   (id, user_id, customer_name, phone, start_at, notes,
                    calendar_event_id, reminder_sent, review_sent, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, NULL, 0, 0, ?7)",
                params![
                    row.id,
                    row.user_id,
                    row.customer_name,
                    row.phone,
                    row.start_at,
                    row.notes,
                    row.created_at
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)?;
    Ok(booking)
}

/// Attach the backend calendar event id to an existing booking.
pub async fn set_calendar_event_id(
    db: &Database,
    booking_id: &str,
    event_id: &str,
) -> Result<(), FrontdeskError> {
    let booking_id = booking_id.to_string();
    let event_id = event_id.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "UPDATE bookings SET calendar_event_id = ?1 WHERE id = ?2",
                params![event_id, booking_id],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// Fetch one booking by id.
pub async fn get_booking(db: &Database, id: &str) -> Result<Option<Booking>, FrontdeskError> {
    let id = id.to_string();
    db.connection()
        .call(move |conn| {
            let row = conn
                .query_row(
                    "SELECT id, user_id, customer_name, phone, start_at, notes,
                            calendar_event_id, reminder_sent, review_sent, created_at
                     FROM bookings WHERE id = ?1",
                    params![id],
                    booking_from_row,
                )
                .optional()?;
            Ok(row)
        })
        .await
        .map_err(map_tr_err)
}

/// Bookings starting within `[window_start, window_end]` whose reminder has
/// not been sent yet.
pub async fn bookings_needing_reminder(
    db: &Database,
    window_start: NaiveDateTime,
    window_end: NaiveDateTime,
) -> Result<Vec<Booking>, FrontdeskError> {
    let lo = format_start_at(window_start);
    let hi = format_start_at(window_end);
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, user_id, customer_name, phone, start_at, notes,
                        calendar_event_id, reminder_sent, review_sent, created_at
                 FROM bookings
                 WHERE reminder_sent = 0 AND start_at >= ?1 AND start_at <= ?2
                 ORDER BY start_at ASC",
            )?;
            let rows = stmt.query_map(params![lo, hi], booking_from_row)?;
            let mut bookings = Vec::new();
            for row in rows {
                bookings.push(row?);
            }
            Ok(bookings)
        })
        .await
        .map_err(map_tr_err)
}

/// Bookings that already started, no older than `cutoff`, whose review
/// request has not been sent yet.
pub async fn bookings_needing_review(
    db: &Database,
    cutoff: NaiveDateTime,
    now: NaiveDateTime,
) -> Result<Vec<Booking>, FrontdeskError> {
    let lo = format_start_at(cutoff);
    let hi = format_start_at(now);
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, user_id, customer_name, phone, start_at, notes,
                        calendar_event_id, reminder_sent, review_sent, created_at
                 FROM bookings
                 WHERE review_sent = 0 AND start_at >= ?1 AND start_at < ?2
                 ORDER BY start_at ASC",
            )?;
            let rows = stmt.query_map(params![lo, hi], booking_from_row)?;
            let mut bookings = Vec::new();
            for row in rows {
                bookings.push(row?);
            }
            Ok(bookings)
        })
        .await
        .map_err(map_tr_err)
}

/// Mark a booking's reminder as delivered. Called only after a successful
/// send, so a failed send stays eligible for the next sweep.
pub async fn mark_reminder_sent(db: &Database, booking_id: &str) -> Result<(), FrontdeskError> {
    set_flag(db, booking_id, "reminder_sent").await
}

/// Mark a booking's review request as delivered.
pub async fn mark_review_sent(db: &Database, booking_id: &str) -> Result<(), FrontdeskError> {
    set_flag(db, booking_id, "review_sent").await
}

async fn set_flag(db: &Database, booking_id: &str, column: &str) -> Result<(), FrontdeskError> {
    let booking_id = booking_id.to_string();
    // column name is one of two compile-time literals, not user input
    let sql = format!("UPDATE bookings SET {column} = 1 WHERE id = ?1");
    db.connection()
        .call(move |conn| {
            conn.execute(&sql, params![booking_id])?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

fn booking_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Booking> {
    Ok(Booking {
        id: row.get(0)?,
        user_id: row.get(1)?,
        customer_name: row.get(2)?,
        phone: row.get(3)?,
        start_at: row.get(4)?,
        notes: row.get(5)?,
        calendar_event_id: row.get(6)?,
        reminder_sent: row.get::<_, i64>(7)? != 0,
        review_sent: row.get::<_, i64>(8)? != 0,
        created_at: row.get(9)?,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::tempdir;

    use super::*;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        (db, dir)
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 10)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    async fn insert(db: &Database, name: &str, phone: &str, start: NaiveDateTime) -> Booking {
        insert_booking(db, phone, name, phone, start, None).await.unwrap()
    }

    #[tokio::test]
    async fn insert_then_fetch_roundtrip() {
        let (db, _dir) = setup_db().await;

        let booking = insert(&db, "Ada", "+15550001111", at(10, 30)).await;
        let fetched = get_booking(&db, &booking.id).await.unwrap().unwrap();
        assert_eq!(fetched, booking);
        assert!(!fetched.reminder_sent);
        assert!(fetched.calendar_event_id.is_none());

        set_calendar_event_id(&db, &booking.id, "evt-42").await.unwrap();
        let fetched = get_booking(&db, &booking.id).await.unwrap().unwrap();
        assert_eq!(fetched.calendar_event_id.as_deref(), Some("evt-42"));

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn owner_and_notes_persist_with_the_booking() {
        let (db, _dir) = setup_db().await;

        let booking = insert_booking(
            &db,
            "user-17",
            "Ada",
            "+15550001111",
            at(10, 30),
            Some("prefers the window seat"),
        )
        .await
        .unwrap();
        let fetched = get_booking(&db, &booking.id).await.unwrap().unwrap();
        assert_eq!(fetched.user_id, "user-17");
        assert_eq!(fetched.notes.as_deref(), Some("prefers the window seat"));

        let bare = insert_booking(&db, "user-18", "Bob", "+2", at(11, 0), None)
            .await
            .unwrap();
        let fetched = get_booking(&db, &bare.id).await.unwrap().unwrap();
        assert!(fetched.notes.is_none());

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn reminder_window_selects_only_unsent_in_range() {
        let (db, _dir) = setup_db().await;

        let inside = insert(&db, "Ada", "+1", at(10, 0)).await;
        let before = insert(&db, "Bob", "+2", at(9, 0)).await;
        let after = insert(&db, "Cam", "+3", at(11, 0)).await;
        let sent = insert(&db, "Dee", "+4", at(10, 5)).await;
        mark_reminder_sent(&db, &sent.id).await.unwrap();

        let due = bookings_needing_reminder(&db, at(9, 50), at(10, 10))
            .await
            .unwrap();
        let ids: Vec<_> = due.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec![inside.id.as_str()]);
        assert!(!ids.contains(&before.id.as_str()));
        assert!(!ids.contains(&after.id.as_str()));

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn review_query_excludes_future_and_stale() {
        let (db, _dir) = setup_db().await;

        let recent = insert(&db, "Ada", "+1", at(9, 0)).await;
        let future = insert(&db, "Bob", "+2", at(15, 0)).await;
        let stale = insert(
            &db,
            "Cam",
            "+3",
            NaiveDate::from_ymd_opt(2026, 3, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        )
        .await;

        let cutoff = NaiveDate::from_ymd_opt(2026, 3, 8)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let due = bookings_needing_review(&db, cutoff, at(12, 0)).await.unwrap();
        let ids: Vec<_> = due.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec![recent.id.as_str()]);
        assert!(!ids.contains(&future.id.as_str()));
        assert!(!ids.contains(&stale.id.as_str()));

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn marked_flags_are_monotone() {
        let (db, _dir) = setup_db().await;

        let booking = insert(&db, "Ada", "+1", at(9, 0)).await;
        mark_reminder_sent(&db, &booking.id).await.unwrap();
        mark_review_sent(&db, &booking.id).await.unwrap();

        let fetched = get_booking(&db, &booking.id).await.unwrap().unwrap();
        assert!(fetched.reminder_sent);
        assert!(fetched.review_sent);

        // marking twice is harmless
        mark_reminder_sent(&db, &booking.id).await.unwrap();
        let fetched = get_booking(&db, &booking.id).await.unwrap().unwrap();
        assert!(fetched.reminder_sent);

        db.close().await.unwrap();
    }
}
