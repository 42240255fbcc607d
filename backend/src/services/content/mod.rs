//! # Content Service Module
//!
//! Routes under `/content` for the reference entries counselors consult
//! while writing scripts (animations, channels, toys). Titles are unique.

mod create;
mod delete;
mod get;
mod search;
mod update;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/content";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/", post().to(create::process))
        .route("/", get().to(get::list))
        // Query keys: `검색어`/`search`, `카테고리`/`category`.
        .route("/search/", get().to(search::process))
        .route("/{content_id}", get().to(get::process))
        .route("/{content_id}", put().to(update::process))
        .route("/{content_id}", delete().to(delete::process))
}

#[cfg(test)]
mod tests {
    use crate::store::test_support;
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn content_crud_and_search_over_http() {
        let (_dir, store) = test_support::store();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .service(super::configure_routes()),
        )
        .await;

        let entry = json!({"title": "미니특공대", "content": "변신 로봇 애니메이션", "category": "애니메이션"});
        let req = test::TestRequest::post().uri("/content/").set_json(&entry).to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::post().uri("/content/").set_json(&entry).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);

        let req = test::TestRequest::get()
            .uri("/content/search/?search=%EB%A1%9C%EB%B4%87")
            .to_request();
        let found: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(found.len(), 1);

        let req = test::TestRequest::delete()
            .uri(&format!("/content/{}", created["id"]))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri(&format!("/content/{}", created["id"]))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }
}
