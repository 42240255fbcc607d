use crate::services::failure;
use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};
use common::model::template::TemplatePayload;

/// `PUT /templates/{template_id}`.
pub async fn process(
    store: web::Data<Store>,
    template_id: web::Path<i64>,
    payload: web::Json<TemplatePayload>,
) -> impl Responder {
    match store.update_template(template_id.into_inner(), &payload) {
        Ok(template) => HttpResponse::Ok().json(template),
        Err(e) => failure("Error updating template", e),
    }
}
