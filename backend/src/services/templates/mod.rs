//! # Template Service Module
//!
//! Routes under `/templates` for managing counselor script templates and
//! rendering them with placeholder bindings.
//!
//! ## Sub-modules:
//! - `create`: inserts a new template; names are unique.
//! - `get`: lists all templates or fetches one by id.
//! - `update`: replaces a template's writable fields.
//! - `delete`: removes a template.
//! - `relocate`: moves a template into another folder.
//! - `filter`: tag and keyword filtering over the full template list.
//! - `tags`: the distinct values in use for each recognized tag key.
//! - `generate`: substitutes `{{{name}}}` placeholders with caller values.

mod create;
mod delete;
mod filter;
pub(crate) mod generate;
mod get;
mod relocate;
mod tags;
mod update;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/templates";

/// Configures and returns the Actix `Scope` for all template routes.
///
/// Static segments are registered before `/{template_id}` so they are never
/// taken for an id.
///
/// # Registered Routes:
///
/// *   **`POST /`** → `create::process`
/// *   **`GET /`** → `get::list`
/// *   **`GET /filter/`** → `filter::process`; query keys `용도`, `회기`,
///     `아동유형`, `검색어` (or `purpose`, `session`, `child_type`, `search`).
/// *   **`GET /tags/`** → `tags::process`
/// *   **`POST /generate/`** → `generate::process`; body `{template_id, variables}`.
/// *   **`GET /{template_id}`** → `get::process`
/// *   **`PUT /{template_id}`** → `update::process`
/// *   **`DELETE /{template_id}`** → `delete::process`
/// *   **`PUT /{template_id}/move`** → `relocate::process`; body `{folder_id}`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/", post().to(create::process))
        .route("/", get().to(get::list))
        .route("/filter/", get().to(filter::process))
        .route("/tags/", get().to(tags::process))
        .route("/generate/", post().to(generate::process))
        .route("/{template_id}", get().to(get::process))
        .route("/{template_id}", put().to(update::process))
        .route("/{template_id}", delete().to(delete::process))
        .route("/{template_id}/move", put().to(relocate::process))
}

#[cfg(test)]
mod tests {
    use crate::store::test_support;
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn create_list_and_duplicate_over_http() {
        let (_dir, store) = test_support::store();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .service(super::configure_routes()),
        )
        .await;

        let body = json!({
            "name": "테스트 템플릿",
            "description": "태그 테스트용",
            "fixed_content": "안녕하세요 {{{이름}}}님! 오늘은 {{{날짜}}}입니다.",
            "variables": {},
            "tags": {"용도": "체크인", "회기": "1회기", "아동유형": "소극형"}
        });

        let req = test::TestRequest::post().uri("/templates/").set_json(&body).to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["id"].as_i64().unwrap();

        let req = test::TestRequest::post().uri("/templates/").set_json(&body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let req = test::TestRequest::get().uri("/templates/").to_request();
        let listed: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0]["tags"]["회기"], "1회기");

        let req = test::TestRequest::get()
            .uri("/templates/filter/?%EC%9A%A9%EB%8F%84=%EC%B2%B4%ED%81%AC%EC%9D%B8")
            .to_request();
        let filtered: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(filtered.len(), 1);

        let req = test::TestRequest::get().uri("/templates/filter/?purpose=education").to_request();
        let filtered: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert!(filtered.is_empty());

        let req = test::TestRequest::post()
            .uri("/templates/generate/")
            .set_json(json!({"template_id": id, "variables": {"이름": "민수", "날짜": "월요일"}}))
            .to_request();
        let generated: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(generated["final_prompt"], "안녕하세요 민수님! 오늘은 월요일입니다.");
    }

    #[actix_web::test]
    async fn missing_template_and_bad_move_over_http() {
        let (_dir, store) = test_support::store();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .service(super::configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/templates/404").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Template 404 not found");

        let req = test::TestRequest::post()
            .uri("/templates/")
            .set_json(json!({"name": "a", "fixed_content": "x"}))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::put()
            .uri(&format!("/templates/{}/move", created["id"]))
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
