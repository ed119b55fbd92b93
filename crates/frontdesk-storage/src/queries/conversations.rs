// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation lookup and creation.

use frontdesk_core::FrontdeskError;
use rusqlite::{params, OptionalExtension};
use uuid::Uuid;

use crate::database::{map_tr_err, Database};
use crate::models::Conversation;
use crate::now_timestamp;

/// Fetch the conversation owned by `user_id`, if any.
pub async fn get_conversation_by_user(
    db: &Database,
    user_id: &str,
) -> Result<Option<Conversation>, FrontdeskError> {
    let user_id = user_id.to_string();
    db.connection()
        .call(move |conn| {
            let row = conn
                .query_row(
                    "SELECT id, user_id, created_at, updated_at
                     FROM conversations WHERE user_id = ?1",
                    params![user_id],
                    |row| {
                        Ok(Conversation {
                            id: row.get(0)?,
                            user_id: row.get(1)?,
                            created_at: row.get(2)?,
                            updated_at: row.get(3)?,
                        })
                    },
                )
                .optional()?;
            Ok(row)
        })
        .await
        .map_err(map_tr_err)
}

/// Fetch a conversation by its primary id.
pub async fn get_conversation(
    db: &Database,
    id: &str,
) -> Result<Option<Conversation>, FrontdeskError> {
    let id = id.to_string();
    db.connection()
        .call(move |conn| {
            let row = conn
                .query_row(
                    "SELECT id, user_id, created_at, updated_at
                     FROM conversations WHERE id = ?1",
                    params![id],
                    |row| {
                        Ok(Conversation {
                            id: row.get(0)?,
                            user_id: row.get(1)?,
                            created_at: row.get(2)?,
                            updated_at: row.get(3)?,
                        })
                    },
                )
                .optional()?;
            Ok(row)
        })
        .await
        .map_err(map_tr_err)
}

/// Fetch the conversation for `user_id`, creating it on first contact.
/// Bumps `updated_at` on the existing row otherwise.
pub async fn get_or_create_conversation(
    db: &Database,
    user_id: &str,
) -> Result<Conversation, FrontdeskError> {
    let user_id = user_id.to_string();
    let now = now_timestamp();
    db.connection()
        .call(move |conn| {
            let existing = conn
                .query_row(
                    "SELECT id, user_id, created_at, updated_at
                     FROM conversations WHERE user_id = ?1",
                    params![user_id],
                    |row| {
                        Ok(Conversation {
                            id: row.get(0)?,
                            user_id: row.get(1)?,
                            created_at: row.get(2)?,
                            updated_at: row.get(3)?,
                        })
                    },
                )
                .optional()?;

            if let Some(mut convo) = existing {
                conn.execute(
                    "UPDATE conversations SET updated_at = ?1 WHERE id = ?2",
                    params![now, convo.id],
                )?;
                convo.updated_at = now;
                return Ok(convo);
            }

            let convo = Conversation {
                id: Uuid::new_v4().to_string(),
                user_id,
                created_at: now.clone(),
                updated_at: now,
            };
            conn.execute(
                "INSERT INTO conversations (id, user_id, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![convo.id, convo.user_id, convo.created_at, convo.updated_at],
            )?;
            Ok(convo)
        })
        .await
        .map_err(map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        (db, dir)
    }

    #[tokio::test]
    async fn creates_then_reuses_conversation() {
        let (db, _dir) = setup_db().await;

        let first = get_or_create_conversation(&db, "+15550001111").await.unwrap();
        let second = get_or_create_conversation(&db, "+15550001111").await.unwrap();
        assert_eq!(first.id, second.id);

        let other = get_or_create_conversation(&db, "+15550002222").await.unwrap();
        assert_ne!(first.id, other.id);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn lookup_by_id_finds_the_row() {
        let (db, _dir) = setup_db().await;

        let created = get_or_create_conversation(&db, "+15550001111").await.unwrap();
        let found = get_conversation(&db, &created.id).await.unwrap().unwrap();
        assert_eq!(found.user_id, "+15550001111");
        assert!(get_conversation(&db, "no-such-id").await.unwrap().is_none());

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn lookup_missing_user_returns_none() {
        let (db, _dir) = setup_db().await;
        let result = get_conversation_by_user(&db, "+15559999999").await.unwrap();
        assert!(result.is_none());
        db.close().await.unwrap();
    }
}
