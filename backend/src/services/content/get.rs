use crate::services::failure;
use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};

pub async fn process(store: web::Data<Store>, content_id: web::Path<i64>) -> impl Responder {
    match store.get_content(content_id.into_inner()) {
        Ok(entry) => HttpResponse::Ok().json(entry),
        Err(e) => failure("Error retrieving content", e),
    }
}

/// Every entry, newest first.
pub async fn list(store: web::Data<Store>) -> impl Responder {
    match store.list_content() {
        Ok(entries) => HttpResponse::Ok().json(entries),
        Err(e) => failure("Error listing content", e),
    }
}
