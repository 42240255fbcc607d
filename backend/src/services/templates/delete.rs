use crate::services::failure;
use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};

/// `DELETE /templates/{template_id}`.
pub async fn process(store: web::Data<Store>, template_id: web::Path<i64>) -> impl Responder {
    match store.delete_template(template_id.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "result": "success" })),
        Err(e) => failure("Error deleting template", e),
    }
}
