use crate::services::failure;
use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};
use common::model::folder::FolderPayload;

/// `POST /folders/`: `409 Conflict` when the name is taken.
pub async fn process(store: web::Data<Store>, payload: web::Json<FolderPayload>) -> impl Responder {
    match store.create_folder(&payload) {
        Ok(folder) => HttpResponse::Ok().json(folder),
        Err(e) => failure("Error creating folder", e),
    }
}
