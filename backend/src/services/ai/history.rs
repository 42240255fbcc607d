use crate::services::failure;
use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};

/// `GET /ai/history/`: the last 100 generated sentences, newest first.
pub async fn process(store: web::Data<Store>) -> impl Responder {
    match store.list_generation_history() {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(e) => failure("Error reading generation history", e),
    }
}
