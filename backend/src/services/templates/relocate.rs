use crate::services::failure;
use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};
use common::requests::MoveTemplateRequest;

/// `PUT /templates/{template_id}/move`. A body without `folder_id` is a
/// `400 Bad Request`.
pub async fn process(
    store: web::Data<Store>,
    template_id: web::Path<i64>,
    payload: web::Json<MoveTemplateRequest>,
) -> impl Responder {
    match store.move_template(template_id.into_inner(), payload.folder_id) {
        Ok(template) => HttpResponse::Ok().json(template),
        Err(e) => failure("Error moving template", e),
    }
}
