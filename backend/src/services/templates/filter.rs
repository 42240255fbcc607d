use crate::services::failure;
use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};
use common::requests::TemplateFilter;

/// `GET /templates/filter/`. Blank parameters are ignored.
pub async fn process(store: web::Data<Store>, query: web::Query<TemplateFilter>) -> impl Responder {
    match store.filter_templates(&query) {
        Ok(templates) => HttpResponse::Ok().json(templates),
        Err(e) => failure("Error filtering templates", e),
    }
}
