use crate::services::failure;
use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};
use common::model::template::TemplatePayload;

/// `POST /templates/`: `200 OK` with the stored template, `409 Conflict`
/// when the name is taken.
pub async fn process(
    store: web::Data<Store>,
    payload: web::Json<TemplatePayload>,
) -> impl Responder {
    match store.create_template(&payload) {
        Ok(template) => HttpResponse::Ok().json(template),
        Err(e) => failure("Error creating template", e),
    }
}
