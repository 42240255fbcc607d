use crate::services::failure;
use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};
use common::model::folder::DEFAULT_FOLDER_ID;

/// `DELETE /folders/{folder_id}`. Responds with how many templates were
/// moved into the default folder.
pub async fn process(store: web::Data<Store>, folder_id: web::Path<i64>) -> impl Responder {
    match store.delete_folder(folder_id.into_inner()) {
        Ok(moved) => HttpResponse::Ok().json(serde_json::json!({
            "result": "success",
            "moved_templates": moved,
            "moved_to": DEFAULT_FOLDER_ID,
        })),
        Err(e) => failure("Error deleting folder", e),
    }
}
