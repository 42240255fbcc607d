use super::{non_blank, Store};
use crate::error::ServiceError;
use common::model::content::{ContentInfo, ContentPayload};
use common::requests::ContentSearch;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_CONTENT: &str =
    "SELECT id, title, content, category, created_at, updated_at FROM content_info";

fn content_from_row(row: &Row<'_>) -> rusqlite::Result<ContentInfo> {
    Ok(ContentInfo {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        category: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}

fn validate(payload: &ContentPayload) -> Result<(), ServiceError> {
    if payload.title.trim().is_empty() {
        return Err(ServiceError::InvalidRequest("content title must not be empty".into()));
    }
    Ok(())
}

fn fetch_content(conn: &Connection, id: i64) -> Result<ContentInfo, ServiceError> {
    conn.query_row(&format!("{} WHERE id = ?1", SELECT_CONTENT), [id], content_from_row)
        .optional()?
        .ok_or_else(|| ServiceError::NotFound(format!("Content {}", id)))
}

fn matches_search(entry: &ContentInfo, search: &ContentSearch) -> bool {
    if let Some(category) = non_blank(&search.category) {
        if entry.category != category {
            return false;
        }
    }
    match non_blank(&search.search_term) {
        Some(term) => {
            let term = term.to_lowercase();
            entry.title.to_lowercase().contains(&term)
                || entry.content.to_lowercase().contains(&term)
        }
        None => true,
    }
}

impl Store {
    pub fn create_content(&self, payload: &ContentPayload) -> Result<ContentInfo, ServiceError> {
        validate(payload)?;
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO content_info (title, content, category) VALUES (?1, ?2, ?3)",
            params![payload.title, payload.content, payload.category],
        )
        .map_err(|e| ServiceError::from_write(e, format!("Content '{}'", payload.title)))?;
        fetch_content(&conn, conn.last_insert_rowid())
    }

    /// All entries, newest first.
    pub fn list_content(&self) -> Result<Vec<ContentInfo>, ServiceError> {
        let conn = self.connect()?;
        let mut stmt =
            conn.prepare(&format!("{} ORDER BY created_at DESC, id DESC", SELECT_CONTENT))?;
        let rows = stmt.query_map([], content_from_row)?;
        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }

    pub fn get_content(&self, id: i64) -> Result<ContentInfo, ServiceError> {
        let conn = self.connect()?;
        fetch_content(&conn, id)
    }

    pub fn update_content(
        &self,
        id: i64,
        payload: &ContentPayload,
    ) -> Result<ContentInfo, ServiceError> {
        validate(payload)?;
        let conn = self.connect()?;
        let changed = conn
            .execute(
                "UPDATE content_info SET title = ?1, content = ?2, category = ?3, \
                 updated_at = CURRENT_TIMESTAMP WHERE id = ?4",
                params![payload.title, payload.content, payload.category, id],
            )
            .map_err(|e| ServiceError::from_write(e, format!("Content '{}'", payload.title)))?;
        if changed == 0 {
            return Err(ServiceError::NotFound(format!("Content {}", id)));
        }
        fetch_content(&conn, id)
    }

    pub fn delete_content(&self, id: i64) -> Result<(), ServiceError> {
        let conn = self.connect()?;
        if conn.execute("DELETE FROM content_info WHERE id = ?1", [id])? == 0 {
            return Err(ServiceError::NotFound(format!("Content {}", id)));
        }
        Ok(())
    }

    /// Full scan filtered by category equality and a case-insensitive search
    /// over title and body.
    pub fn search_content(&self, search: &ContentSearch) -> Result<Vec<ContentInfo>, ServiceError> {
        Ok(self
            .list_content()?
            .into_iter()
            .filter(|entry| matches_search(entry, search))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support;

    fn entry(title: &str, content: &str, category: &str) -> ContentPayload {
        ContentPayload {
            title: title.into(),
            content: content.into(),
            category: category.into(),
        }
    }

    #[test]
    fn titles_are_unique() {
        let (_dir, store) = test_support::store();
        store.create_content(&entry("미니특공대", "변신 로봇", "애니메이션")).unwrap();
        let err = store.create_content(&entry("미니특공대", "다른 설명", "로봇")).unwrap_err();
        assert!(matches!(err, ServiceError::DuplicateName(_)));
        assert_eq!(store.list_content().unwrap().len(), 1);
    }

    #[test]
    fn search_by_term_and_category() {
        let (_dir, store) = test_support::store();
        store.create_content(&entry("미니특공대", "볼트는 파란 로봇", "애니메이션")).unwrap();
        store.create_content(&entry("Pinkfong", "상어 가족 노래", "유튜브")).unwrap();
        store.create_content(&entry("또봇", "자동차 로봇", "로봇")).unwrap();

        let robots = ContentSearch {
            search_term: Some("로봇".into()),
            category: None,
        };
        assert_eq!(store.search_content(&robots).unwrap().len(), 2);

        let robots_in_toys = ContentSearch {
            search_term: Some("로봇".into()),
            category: Some("로봇".into()),
        };
        let found = store.search_content(&robots_in_toys).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "또봇");

        let by_title = ContentSearch {
            search_term: Some("PINK".into()),
            category: None,
        };
        assert_eq!(store.search_content(&by_title).unwrap()[0].category, "유튜브");
    }

    #[test]
    fn update_and_delete_report_missing_rows() {
        let (_dir, store) = test_support::store();
        let created = store.create_content(&entry("a", "b", "c")).unwrap();
        let updated = store.update_content(created.id, &entry("a", "바뀜", "c")).unwrap();
        assert_eq!(updated.content, "바뀜");

        store.delete_content(created.id).unwrap();
        assert!(matches!(store.get_content(created.id).unwrap_err(), ServiceError::NotFound(_)));
        assert!(matches!(
            store.update_content(created.id, &entry("a", "b", "c")).unwrap_err(),
            ServiceError::NotFound(_)
        ));
    }
}
