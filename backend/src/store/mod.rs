//! SQLite persistence for templates, folders, content entries and the
//! generation history.
//!
//! Each operation opens its own connection and drops it before returning,
//! whichever way it returns. Filtering happens in memory over full scans;
//! the tables stay small.

mod content;
mod folders;
mod generations;
mod schema;
mod templates;

use crate::error::ServiceError;
use log::{debug, info, warn};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Store {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn connect(&self) -> Result<Connection, ServiceError> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        Ok(conn)
    }

    /// Creates missing tables, adds columns missing from older databases
    /// and seeds the default folders into an empty folder table.
    pub fn initialize(&self) -> Result<(), ServiceError> {
        let conn = self.connect()?;
        conn.execute_batch(schema::CREATE_SCHEMA)?;

        for column in schema::TEMPLATE_COLUMN_MIGRATIONS {
            add_column_if_missing(&conn, "templates", column)?;
        }
        for index in schema::UNIQUE_INDEXES {
            // Existing duplicate rows make this fail; the table stays usable.
            if let Err(e) = conn.execute(index, []) {
                warn!("Could not enforce uniqueness ({}): {}", index, e);
            }
        }

        let folder_count: i64 =
            conn.query_row("SELECT COUNT(*) FROM folders", [], |row| row.get(0))?;
        if folder_count == 0 {
            for (name, description, color) in schema::DEFAULT_FOLDERS {
                conn.execute(
                    "INSERT INTO folders (name, description, color) VALUES (?1, ?2, ?3)",
                    (name, description, color),
                )?;
            }
            info!("Seeded {} default folders", schema::DEFAULT_FOLDERS.len());
        }

        info!("Database ready at {}", self.path.display());
        Ok(())
    }

    /// Opens a connection and runs a trivial query.
    pub fn ping(&self) -> Result<(), ServiceError> {
        let conn = self.connect()?;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        Ok(())
    }
}

/// `ALTER TABLE ... ADD COLUMN`, treating "duplicate column name" as success.
fn add_column_if_missing(
    conn: &Connection,
    table: &str,
    column_def: &str,
) -> Result<(), ServiceError> {
    let sql = format!("ALTER TABLE {} ADD COLUMN {}", table, column_def);
    match conn.execute(&sql, []) {
        Ok(_) => {
            info!("Migrated {}: added column {}", table, column_def);
            Ok(())
        }
        Err(rusqlite::Error::SqliteFailure(_, Some(msg)))
            if msg.contains("duplicate column name") =>
        {
            debug!("{}: column already present ({})", table, column_def);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Lenient JSON column decoding: anything unparsable reads as the default.
fn json_or_default<T: serde::de::DeserializeOwned + Default>(raw: Option<String>) -> T {
    raw.and_then(|s| serde_json::from_str(&s).ok()).unwrap_or_default()
}

/// `None` for absent or blank query values.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::model::content::ContentPayload;

    #[test]
    fn initialize_is_idempotent_and_seeds_once() {
        let (_dir, store) = test_support::store();
        store.initialize().unwrap();
        let folders = store.list_folders().unwrap();
        assert_eq!(folders.len(), 4);
        assert_eq!(folders[0].id, 1);
    }

    #[test]
    fn migrates_legacy_templates_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legacy.db");
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch(
                "CREATE TABLE templates (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    name TEXT NOT NULL UNIQUE,
                    description TEXT,
                    fixed_content TEXT NOT NULL,
                    variables TEXT NOT NULL,
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                );
                INSERT INTO templates (name, description, fixed_content, variables)
                VALUES ('옛 템플릿', NULL, '안녕 {{{이름}}}', '{}');",
            )
            .unwrap();
        }

        let store = Store::new(&path);
        store.initialize().unwrap();
        store.initialize().unwrap();

        let templates = store.list_templates().unwrap();
        assert_eq!(templates.len(), 1);
        assert!(templates[0].tags.is_empty());
        assert_eq!(templates[0].folder_id, None);
        assert_eq!(templates[0].description, "");
    }

    const LEGACY_CONTENT_TABLE: &str = "CREATE TABLE content_info (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        category TEXT NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    );";

    fn content(title: &str) -> ContentPayload {
        ContentPayload {
            title: title.into(),
            content: "내용".into(),
            category: "애니메이션".into(),
        }
    }

    #[test]
    fn legacy_content_table_gets_unique_titles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legacy.db");
        Connection::open(&path).unwrap().execute_batch(LEGACY_CONTENT_TABLE).unwrap();

        let store = Store::new(&path);
        store.initialize().unwrap();
        store.create_content(&content("a")).unwrap();
        let err = store.create_content(&content("a")).unwrap_err();
        assert!(matches!(err, ServiceError::DuplicateName(_)), "{err:?}");
        assert_eq!(store.list_content().unwrap().len(), 1);
    }

    #[test]
    fn existing_duplicate_titles_do_not_block_startup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legacy.db");
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch(LEGACY_CONTENT_TABLE).unwrap();
            conn.execute_batch(
                "INSERT INTO content_info (title, content, category) VALUES ('a', 'x', 'c');
                 INSERT INTO content_info (title, content, category) VALUES ('a', 'y', 'c');",
            )
            .unwrap();
        }

        let store = Store::new(&path);
        store.initialize().unwrap();
        assert_eq!(store.list_content().unwrap().len(), 2);
        store.create_content(&content("b")).unwrap();
    }

    #[test]
    fn unparsable_json_reads_as_default() {
        let parsed: std::collections::BTreeMap<String, String> =
            json_or_default(Some("not json".into()));
        assert!(parsed.is_empty());
    }
}
