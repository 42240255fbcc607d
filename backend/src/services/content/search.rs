use crate::services::failure;
use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};
use common::requests::ContentSearch;

pub async fn process(store: web::Data<Store>, query: web::Query<ContentSearch>) -> impl Responder {
    match store.search_content(&query) {
        Ok(entries) => HttpResponse::Ok().json(entries),
        Err(e) => failure("Error searching content", e),
    }
}
