use super::Store;
use crate::error::ServiceError;
use common::model::folder::{Folder, FolderPayload, DEFAULT_FOLDER_ID};
use log::info;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_FOLDER: &str = "SELECT id, name, description, color, created_at FROM folders";

fn folder_from_row(row: &Row<'_>) -> rusqlite::Result<Folder> {
    Ok(Folder {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        color: row.get(3)?,
        created_at: row.get(4)?,
    })
}

fn validate(payload: &FolderPayload) -> Result<(), ServiceError> {
    if payload.name.trim().is_empty() {
        return Err(ServiceError::InvalidRequest("folder name must not be empty".into()));
    }
    Ok(())
}

fn fetch_folder(conn: &Connection, id: i64) -> Result<Folder, ServiceError> {
    conn.query_row(&format!("{} WHERE id = ?1", SELECT_FOLDER), [id], folder_from_row)
        .optional()?
        .ok_or_else(|| ServiceError::NotFound(format!("Folder {}", id)))
}

impl Store {
    pub fn create_folder(&self, payload: &FolderPayload) -> Result<Folder, ServiceError> {
        validate(payload)?;
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO folders (name, description, color) VALUES (?1, ?2, ?3)",
            params![payload.name, payload.description, payload.color],
        )
        .map_err(|e| ServiceError::from_write(e, format!("Folder '{}'", payload.name)))?;
        let id = conn.last_insert_rowid();
        info!("Created folder {} '{}'", id, payload.name);
        fetch_folder(&conn, id)
    }

    pub fn list_folders(&self) -> Result<Vec<Folder>, ServiceError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("{} ORDER BY id", SELECT_FOLDER))?;
        let rows = stmt.query_map([], folder_from_row)?;
        let mut folders = Vec::new();
        for row in rows {
            folders.push(row?);
        }
        Ok(folders)
    }

    pub fn get_folder(&self, id: i64) -> Result<Folder, ServiceError> {
        let conn = self.connect()?;
        fetch_folder(&conn, id)
    }

    pub fn update_folder(&self, id: i64, payload: &FolderPayload) -> Result<Folder, ServiceError> {
        validate(payload)?;
        let conn = self.connect()?;
        let changed = conn
            .execute(
                "UPDATE folders SET name = ?1, description = ?2, color = ?3 WHERE id = ?4",
                params![payload.name, payload.description, payload.color, id],
            )
            .map_err(|e| ServiceError::from_write(e, format!("Folder '{}'", payload.name)))?;
        if changed == 0 {
            return Err(ServiceError::NotFound(format!("Folder {}", id)));
        }
        fetch_folder(&conn, id)
    }

    /// Moves the folder's templates to the default folder, then removes the
    /// folder, in one transaction. The default folder itself cannot be deleted.
    pub fn delete_folder(&self, id: i64) -> Result<usize, ServiceError> {
        if id == DEFAULT_FOLDER_ID {
            return Err(ServiceError::InvalidRequest("the default folder cannot be deleted".into()));
        }
        let mut conn = self.connect()?;
        fetch_folder(&conn, id)?;

        let tx = conn.transaction()?;
        let moved = tx.execute(
            "UPDATE templates SET folder_id = ?1, updated_at = CURRENT_TIMESTAMP \
             WHERE folder_id = ?2",
            [DEFAULT_FOLDER_ID, id],
        )?;
        tx.execute("DELETE FROM folders WHERE id = ?1", [id])?;
        tx.commit()?;

        info!("Deleted folder {} ({} templates moved to folder {})", id, moved, DEFAULT_FOLDER_ID);
        Ok(moved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support;
    use common::model::template::TemplatePayload;

    fn folder(name: &str) -> FolderPayload {
        FolderPayload {
            name: name.to_string(),
            description: String::new(),
            color: "#000000".to_string(),
        }
    }

    fn template_in(name: &str, folder_id: i64) -> TemplatePayload {
        TemplatePayload {
            name: name.to_string(),
            fixed_content: "내용".to_string(),
            folder_id: Some(folder_id),
            ..Default::default()
        }
    }

    #[test]
    fn folder_names_are_unique() {
        let (_dir, store) = test_support::store();
        store.create_folder(&folder("새 폴더")).unwrap();
        let err = store.create_folder(&folder("새 폴더")).unwrap_err();
        assert!(matches!(err, ServiceError::DuplicateName(_)));
        let err = store.update_folder(1, &folder("새 폴더")).unwrap_err();
        assert!(matches!(err, ServiceError::DuplicateName(_)));
    }

    #[test]
    fn deleting_a_folder_reassigns_its_templates_to_the_default() {
        let (_dir, store) = test_support::store();
        let f = store.create_folder(&folder("임시")).unwrap();
        let a = store.create_template(&template_in("a", f.id)).unwrap();
        let b = store.create_template(&template_in("b", f.id)).unwrap();
        let other = store.create_template(&template_in("c", 2)).unwrap();

        assert_eq!(store.delete_folder(f.id).unwrap(), 2);

        assert!(matches!(store.get_folder(f.id).unwrap_err(), ServiceError::NotFound(_)));
        assert_eq!(store.get_template(a.id).unwrap().folder_id, Some(DEFAULT_FOLDER_ID));
        assert_eq!(store.get_template(b.id).unwrap().folder_id, Some(DEFAULT_FOLDER_ID));
        assert_eq!(store.get_template(other.id).unwrap().folder_id, Some(2));
    }

    #[test]
    fn default_folder_and_missing_folders_cannot_be_deleted() {
        let (_dir, store) = test_support::store();
        assert!(matches!(
            store.delete_folder(DEFAULT_FOLDER_ID).unwrap_err(),
            ServiceError::InvalidRequest(_)
        ));
        assert!(matches!(store.delete_folder(42).unwrap_err(), ServiceError::NotFound(_)));
    }

    #[test]
    fn update_changes_all_fields() {
        let (_dir, store) = test_support::store();
        let updated = store
            .update_folder(
                2,
                &FolderPayload {
                    name: "인사".into(),
                    description: "설명".into(),
                    color: "#ffffff".into(),
                },
            )
            .unwrap();
        assert_eq!(updated.name, "인사");
        assert_eq!(updated.color, "#ffffff");
        assert!(matches!(
            store.update_folder(99, &folder("x")).unwrap_err(),
            ServiceError::NotFound(_)
        ));
    }
}
