// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Temp-file database fixture.

use frontdesk_storage::Database;
use tempfile::TempDir;

/// Open a fresh database in a temporary directory.
///
/// Keep the returned `TempDir` alive for the duration of the test; dropping
/// it removes the database file.
pub async fn temp_db() -> (Database, TempDir) {
    let dir = tempfile::tempdir().expect("create tempdir");
    let path = dir.path().join("frontdesk-test.db");
    let db = Database::open(path.to_str().expect("utf8 temp path"))
        .await
        .expect("open test database");
    (db, dir)
}
