// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transfer request audit log.

use frontdesk_core::FrontdeskError;
use rusqlite::params;
use uuid::Uuid;

use crate::database::{map_tr_err, Database};
use crate::models::TransferLog;
use crate::now_timestamp;

/// Record a transfer request. `conversation_id` is `"unknown"` when the
/// requesting user has no conversation row yet.
pub async fn insert_transfer_log(
    db: &Database,
    user_id: &str,
    conversation_id: &str,
    reason: &str,
) -> Result<TransferLog, FrontdeskError> {
    let log = TransferLog {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        conversation_id: conversation_id.to_string(),
        reason: reason.to_string(),
        created_at: now_timestamp(),
    };
    let row = log.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO transfer_logs (id, user_id, conversation_id, reason, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![row.id, row.user_id, row.conversation_id, row.reason, row.created_at],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)?;
    Ok(log)
}

/// List transfer logs, most recent first.
pub async fn list_transfer_logs(db: &Database) -> Result<Vec<TransferLog>, FrontdeskError> {
    db.connection()
        .call(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, user_id, conversation_id, reason, created_at
                 FROM transfer_logs ORDER BY created_at DESC, rowid DESC",
            )?;
            let rows = stmt.query_map([], |row| {
                Ok(TransferLog {
                    id: row.get(0)?,
                    user_id: row.get(1)?,
                    conversation_id: row.get(2)?,
                    reason: row.get(3)?,
                    created_at: row.get(4)?,
                })
            })?;
            let mut logs = Vec::new();
            for row in rows {
                logs.push(row?);
            }
            Ok(logs)
        })
        .await
        .map_err(map_tr_err)
}
