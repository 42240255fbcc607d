use super::Store;
use crate::error::ServiceError;
use common::model::generation::{GenerationRecord, GenerationType};
use rusqlite::params;

/// Rows returned by [`Store::list_generation_history`].
pub const HISTORY_LIMIT: i64 = 100;

impl Store {
    /// Appends one generated sentence to the history.
    pub fn record_generation(
        &self,
        keyword: &str,
        kind: GenerationType,
        text: &str,
    ) -> Result<i64, ServiceError> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO ai_generations (keyword, generation_type, generated_text) \
             VALUES (?1, ?2, ?3)",
            params![keyword, kind.as_str(), text],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// The most recent history rows, newest first. Rows with a type this
    /// build does not know are skipped.
    pub fn list_generation_history(&self) -> Result<Vec<GenerationRecord>, ServiceError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, keyword, generation_type, generated_text, created_at FROM ai_generations \
             ORDER BY created_at DESC, id DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map([HISTORY_LIMIT], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (id, keyword, kind, generated_text, created_at) = row?;
            if let Ok(generation_type) = kind.parse() {
                records.push(GenerationRecord {
                    id,
                    keyword,
                    generation_type,
                    generated_text,
                    created_at,
                });
            }
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support;

    #[test]
    fn history_is_newest_first_and_capped() {
        let (_dir, store) = test_support::store();
        for i in 0..105 {
            store
                .record_generation("공룡", GenerationType::Hint, &format!("힌트 {}", i))
                .unwrap();
        }
        let history = store.list_generation_history().unwrap();
        assert_eq!(history.len(), 100);
        assert_eq!(history[0].generated_text, "힌트 104");
        assert_eq!(history[99].generated_text, "힌트 5");
        assert_eq!(history[0].generation_type, GenerationType::Hint);
    }
}
