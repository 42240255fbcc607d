use crate::services::failure;
use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};

/// `GET /templates/tags/`: `{"용도": [...], "회기": [...], "아동유형": [...]}`.
pub async fn process(store: web::Data<Store>) -> impl Responder {
    match store.list_available_tag_values() {
        Ok(values) => HttpResponse::Ok().json(values),
        Err(e) => failure("Error collecting tag values", e),
    }
}
