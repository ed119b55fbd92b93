// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! FAQ knowledge base entries injected into the system prompt.

use frontdesk_core::FrontdeskError;
use rusqlite::params;
use uuid::Uuid;

use crate::database::{map_tr_err, Database};
use crate::models::FaqEntry;
use crate::now_timestamp;

/// Add an entry to the FAQ knowledge base.
pub async fn insert_faq_entry(
    db: &Database,
    question: &str,
    answer: &str,
    category: Option<&str>,
) -> Result<FaqEntry, FrontdeskError> {
    let entry = FaqEntry {
        id: Uuid::new_v4().to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
        category: category.map(String::from),
        created_at: now_timestamp(),
    };
    let row = entry.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO faq_entries (id, question, answer, category, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![row.id, row.question, row.answer, row.category, row.created_at],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)?;
    Ok(entry)
}

/// List all FAQ entries in insertion order.
pub async fn list_faq_entries(db: &Database) -> Result<Vec<FaqEntry>, FrontdeskError> {
    db.connection()
        .call(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, question, answer, category, created_at
                 FROM faq_entries ORDER BY created_at ASC, rowid ASC",
            )?;
            let rows = stmt.query_map([], |row| {
                Ok(FaqEntry {
                    id: row.get(0)?,
                    question: row.get(1)?,
                    answer: row.get(2)?,
                    category: row.get(3)?,
                    created_at: row.get(4)?,
                })
            })?;
            let mut entries = Vec::new();
            for row in rows {
                entries.push(row?);
            }
            Ok(entries)
        })
        .await
        .map_err(map_tr_err)
}
