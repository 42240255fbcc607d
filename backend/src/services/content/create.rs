use crate::services::failure;
use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};
use common::model::content::ContentPayload;

pub async fn process(
    store: web::Data<Store>,
    payload: web::Json<ContentPayload>,
) -> impl Responder {
    match store.create_content(&payload) {
        Ok(entry) => HttpResponse::Ok().json(entry),
        Err(e) => failure("Error creating content", e),
    }
}
