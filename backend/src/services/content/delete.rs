use crate::services::failure;
use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};

pub async fn process(store: web::Data<Store>, content_id: web::Path<i64>) -> impl Responder {
    match store.delete_content(content_id.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "result": "success" })),
        Err(e) => failure("Error deleting content", e),
    }
}
