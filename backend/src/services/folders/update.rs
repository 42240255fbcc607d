use crate::services::failure;
use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};
use common::model::folder::FolderPayload;

pub async fn process(
    store: web::Data<Store>,
    folder_id: web::Path<i64>,
    payload: web::Json<FolderPayload>,
) -> impl Responder {
    match store.update_folder(folder_id.into_inner(), &payload) {
        Ok(folder) => HttpResponse::Ok().json(folder),
        Err(e) => failure("Error updating folder", e),
    }
}
