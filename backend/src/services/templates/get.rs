use crate::services::failure;
use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};

/// `GET /templates/{template_id}`.
pub async fn process(store: web::Data<Store>, template_id: web::Path<i64>) -> impl Responder {
    match store.get_template(template_id.into_inner()) {
        Ok(template) => HttpResponse::Ok().json(template),
        Err(e) => failure("Error retrieving template", e),
    }
}

/// `GET /templates/`: every template, newest first.
pub async fn list(store: web::Data<Store>) -> impl Responder {
    match store.list_templates() {
        Ok(templates) => HttpResponse::Ok().json(templates),
        Err(e) => failure("Error listing templates", e),
    }
}
