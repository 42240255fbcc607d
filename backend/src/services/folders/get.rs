use crate::services::failure;
use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};

pub async fn process(store: web::Data<Store>, folder_id: web::Path<i64>) -> impl Responder {
    match store.get_folder(folder_id.into_inner()) {
        Ok(folder) => HttpResponse::Ok().json(folder),
        Err(e) => failure("Error retrieving folder", e),
    }
}

pub async fn list(store: web::Data<Store>) -> impl Responder {
    match store.list_folders() {
        Ok(folders) => HttpResponse::Ok().json(folders),
        Err(e) => failure("Error listing folders", e),
    }
}
