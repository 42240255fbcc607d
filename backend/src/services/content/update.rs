use crate::services::failure;
use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};
use common::model::content::ContentPayload;

pub async fn process(
    store: web::Data<Store>,
    content_id: web::Path<i64>,
    payload: web::Json<ContentPayload>,
) -> impl Responder {
    match store.update_content(content_id.into_inner(), &payload) {
        Ok(entry) => HttpResponse::Ok().json(entry),
        Err(e) => failure("Error updating content", e),
    }
}
