// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transcript message CRUD.

use frontdesk_core::FrontdeskError;
use rusqlite::params;
use uuid::Uuid;

use crate::database::{map_tr_err, Database};
use crate::models::StoredMessage;
use crate::now_timestamp;

/// Append a message to a conversation transcript. Returns the stored row.
pub async fn insert_message(
    db: &Database,
    conversation_id: &str,
    role: &str,
    content: &str,
) -> Result<StoredMessage, FrontdeskError> {
    let msg = StoredMessage {
        id: Uuid::new_v4().to_string(),
        conversation_id: conversation_id.to_string(),
        role: role.to_string(),
        content: content.to_string(),
        created_at: now_timestamp(),
    };
    let row = msg.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO messages (id, conversation_id, role, content, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![row.id, row.conversation_id, row.role, row.content, row.created_at],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)?;
    Ok(msg)
}

/// Get a conversation's messages in chronological order.
///
/// `rowid` breaks ties between messages persisted within the same
/// millisecond, preserving insertion order.
pub async fn messages_for_conversation(
    db: &Database,
    conversation_id: &str,
) -> Result<Vec<StoredMessage>, FrontdeskError> {
    let conversation_id = conversation_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, conversation_id, role, content, created_at
                 FROM messages WHERE conversation_id = ?1
                 ORDER BY created_at ASC, rowid ASC",
            )?;
            let rows = stmt.query_map(params![conversation_id], |row| {
                Ok(StoredMessage {
                    id: row.get(0)?,
                    conversation_id: row.get(1)?,
                    role: row.get(2)?,
                    content: row.get(3)?,
                    created_at: row.get(4)?,
                })
            })?;
            let mut messages = Vec::new();
            for row in rows {
                messages.push(row?);
            }
            Ok(messages)
        })
        .await
        .map_err(map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::conversations::get_or_create_conversation;
    use tempfile::tempdir;

    async fn setup() -> (Database, String, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        let convo = get_or_create_conversation(&db, "+15550001111").await.unwrap();
        (db, convo.id, dir)
    }

    #[tokio::test]
    async fn messages_come_back_in_insertion_order() {
        let (db, convo_id, _dir) = setup().await;

        insert_message(&db, &convo_id, "user", "hello").await.unwrap();
        insert_message(&db, &convo_id, "assistant", "hi, how can I help?")
            .await
            .unwrap();
        insert_message(&db, &convo_id, "user", "book me in").await.unwrap();

        let messages = messages_for_conversation(&db, &convo_id).await.unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].content, "hello");
        assert_eq!(messages[1].role, "assistant");
        assert_eq!(messages[2].content, "book me in");

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn conversations_are_isolated() {
        let (db, convo_a, _dir) = setup().await;
        let convo_b = get_or_create_conversation(&db, "+15550002222").await.unwrap();

        insert_message(&db, &convo_a, "user", "for a").await.unwrap();
        insert_message(&db, &convo_b.id, "user", "for b").await.unwrap();

        let a = messages_for_conversation(&db, &convo_a).await.unwrap();
        let b = messages_for_conversation(&db, &convo_b.id).await.unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
        assert_eq!(a[0].content, "for a");
        assert_eq!(b[0].content, "for b");

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn empty_conversation_yields_no_messages() {
        let (db, convo_id, _dir) = setup().await;
        let messages = messages_for_conversation(&db, &convo_id).await.unwrap();
        assert!(messages.is_empty());
        db.close().await.unwrap();
    }
}
