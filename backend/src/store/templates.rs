use super::{json_or_default, non_blank, Store};
use crate::error::ServiceError;
use common::model::template::{
    Template, TemplatePayload, RECOGNIZED_TAG_KEYS, TAG_CHILD_TYPE, TAG_PURPOSE, TAG_SESSION,
};
use common::requests::TemplateFilter;
use log::info;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::collections::{BTreeMap, BTreeSet};

const SELECT_TEMPLATE: &str = "SELECT id, name, description, fixed_content, variables, tags, \
                               folder_id, created_at, updated_at FROM templates";

fn template_from_row(row: &Row<'_>) -> rusqlite::Result<Template> {
    Ok(Template {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        fixed_content: row.get(3)?,
        variables: json_or_default(row.get(4)?),
        tags: json_or_default(row.get(5)?),
        folder_id: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}

fn validate(payload: &TemplatePayload) -> Result<(), ServiceError> {
    if payload.name.trim().is_empty() {
        return Err(ServiceError::InvalidRequest("template name must not be empty".into()));
    }
    Ok(())
}

/// True when `template` satisfies every non-blank criterion of `filter`:
/// exact equality of the tag's text for the tag filters (so a numeric `회기`
/// of 1 matches `"1"`) and a case-insensitive substring
/// match of the search term against name or description.
pub fn matches_filter(template: &Template, filter: &TemplateFilter) -> bool {
    let tag_filters = [
        (TAG_PURPOSE, non_blank(&filter.purpose)),
        (TAG_SESSION, non_blank(&filter.session)),
        (TAG_CHILD_TYPE, non_blank(&filter.child_type)),
    ];
    for (key, wanted) in tag_filters {
        if let Some(wanted) = wanted {
            if template.tag(key).as_deref() != Some(wanted) {
                return false;
            }
        }
    }

    match non_blank(&filter.search_term) {
        Some(term) => {
            let term = term.to_lowercase();
            template.name.to_lowercase().contains(&term)
                || template.description.to_lowercase().contains(&term)
        }
        None => true,
    }
}

impl Store {
    pub fn create_template(&self, payload: &TemplatePayload) -> Result<Template, ServiceError> {
        validate(payload)?;
        let conn = self.connect()?;
        if let Some(folder_id) = payload.folder_id {
            ensure_folder(&conn, folder_id)?;
        }

        conn.execute(
            "INSERT INTO templates (name, description, fixed_content, variables, tags, folder_id) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                payload.name,
                payload.description,
                payload.fixed_content,
                serde_json::to_string(&payload.variables)?,
                serde_json::to_string(&payload.tags)?,
                payload.folder_id,
            ],
        )
        .map_err(|e| ServiceError::from_write(e, format!("Template '{}'", payload.name)))?;

        let id = conn.last_insert_rowid();
        info!("Created template {} '{}'", id, payload.name);
        fetch_template(&conn, id)
    }

    pub fn get_template(&self, id: i64) -> Result<Template, ServiceError> {
        let conn = self.connect()?;
        fetch_template(&conn, id)
    }

    /// All templates, newest first.
    pub fn list_templates(&self) -> Result<Vec<Template>, ServiceError> {
        let conn = self.connect()?;
        query_templates(
            &conn,
            &format!("{} ORDER BY created_at DESC, id DESC", SELECT_TEMPLATE),
            [],
        )
    }

    /// Templates of one folder, oldest first.
    pub fn list_templates_in_folder(&self, folder_id: i64) -> Result<Vec<Template>, ServiceError> {
        let conn = self.connect()?;
        query_templates(
            &conn,
            &format!("{} WHERE folder_id = ?1 ORDER BY id", SELECT_TEMPLATE),
            [folder_id],
        )
    }

    /// Replaces the writable fields. A payload without `folder_id` keeps the
    /// current folder.
    pub fn update_template(
        &self,
        id: i64,
        payload: &TemplatePayload,
    ) -> Result<Template, ServiceError> {
        validate(payload)?;
        let conn = self.connect()?;
        if let Some(folder_id) = payload.folder_id {
            ensure_folder(&conn, folder_id)?;
        }

        let changed = conn
            .execute(
                "UPDATE templates SET name = ?1, description = ?2, fixed_content = ?3, \
                 variables = ?4, tags = ?5, folder_id = COALESCE(?6, folder_id), \
                 updated_at = CURRENT_TIMESTAMP WHERE id = ?7",
                params![
                    payload.name,
                    payload.description,
                    payload.fixed_content,
                    serde_json::to_string(&payload.variables)?,
                    serde_json::to_string(&payload.tags)?,
                    payload.folder_id,
                    id,
                ],
            )
            .map_err(|e| ServiceError::from_write(e, format!("Template '{}'", payload.name)))?;
        if changed == 0 {
            return Err(ServiceError::NotFound(format!("Template {}", id)));
        }
        fetch_template(&conn, id)
    }

    pub fn delete_template(&self, id: i64) -> Result<(), ServiceError> {
        let conn = self.connect()?;
        let deleted = conn.execute("DELETE FROM templates WHERE id = ?1", [id])?;
        if deleted == 0 {
            return Err(ServiceError::NotFound(format!("Template {}", id)));
        }
        info!("Deleted template {}", id);
        Ok(())
    }

    pub fn move_template(&self, id: i64, folder_id: Option<i64>) -> Result<Template, ServiceError> {
        let folder_id =
            folder_id.ok_or_else(|| ServiceError::InvalidRequest("folder_id is required".into()))?;
        let conn = self.connect()?;
        ensure_folder(&conn, folder_id)?;

        let changed = conn.execute(
            "UPDATE templates SET folder_id = ?1, updated_at = CURRENT_TIMESTAMP WHERE id = ?2",
            [folder_id, id],
        )?;
        if changed == 0 {
            return Err(ServiceError::NotFound(format!("Template {}", id)));
        }
        info!("Moved template {} to folder {}", id, folder_id);
        fetch_template(&conn, id)
    }

    /// Full scan followed by [`matches_filter`]; keeps the newest-first order.
    pub fn filter_templates(&self, filter: &TemplateFilter) -> Result<Vec<Template>, ServiceError> {
        Ok(self
            .list_templates()?
            .into_iter()
            .filter(|t| matches_filter(t, filter))
            .collect())
    }

    /// Distinct values seen for each recognized tag key. Every key is present
    /// in the result, possibly with an empty list.
    pub fn list_available_tag_values(
        &self,
    ) -> Result<BTreeMap<String, Vec<String>>, ServiceError> {
        let mut seen: BTreeMap<&str, BTreeSet<String>> =
            RECOGNIZED_TAG_KEYS.iter().map(|k| (*k, BTreeSet::new())).collect();

        for template in self.list_templates()? {
            for (key, values) in seen.iter_mut() {
                if let Some(value) = template.tag(key) {
                    values.insert(value);
                }
            }
        }

        Ok(seen
            .into_iter()
            .map(|(key, values)| (key.to_string(), values.into_iter().collect()))
            .collect())
    }
}

fn fetch_template(conn: &Connection, id: i64) -> Result<Template, ServiceError> {
    conn.query_row(&format!("{} WHERE id = ?1", SELECT_TEMPLATE), [id], template_from_row)
        .optional()?
        .ok_or_else(|| ServiceError::NotFound(format!("Template {}", id)))
}

fn query_templates<P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> Result<Vec<Template>, ServiceError> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, template_from_row)?;
    let mut templates = Vec::new();
    for row in rows {
        templates.push(row?);
    }
    Ok(templates)
}

pub(super) fn ensure_folder(conn: &Connection, folder_id: i64) -> Result<(), ServiceError> {
    let exists: Option<i64> = conn
        .query_row("SELECT id FROM folders WHERE id = ?1", [folder_id], |row| row.get(0))
        .optional()?;
    exists
        .map(|_| ())
        .ok_or_else(|| ServiceError::NotFound(format!("Folder {}", folder_id)))
}
