//! HTTP services, one sub-module per resource. Each sub-module exposes a
//! `configure_routes` that returns its Actix scope.

pub mod ai;
pub mod content;
pub mod folders;
pub mod health;
pub mod templates;

use crate::error::ServiceError;
use actix_web::{web, HttpResponse, ResponseError};
use log::{error, warn};

/// Largest accepted JSON body.
const JSON_LIMIT: usize = 10 * 1024 * 1024; // 10 MB

/// JSON extractor settings: the body size limit, and unreadable bodies
/// answered as `InvalidRequest` like every other client error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(|err, _req| {
            warn!("Rejected JSON body: {}", err);
            ServiceError::InvalidRequest(err.to_string()).into()
        })
}

/// Logs a failed request and turns the error into its HTTP response.
pub(crate) fn failure(context: &str, err: ServiceError) -> HttpResponse {
    match &err {
        ServiceError::NotFound(_)
        | ServiceError::DuplicateName(_)
        | ServiceError::InvalidRequest(_) => warn!("{}: {}", context, err),
        _ => error!("{}: {}", context, err),
    }
    err.error_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support;
    use actix_web::http::header::ContentType;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn malformed_json_gets_a_detail_body() {
        let (_dir, store) = test_support::store();
        let app = test::init_service(
            App::new()
                .app_data(json_config())
                .app_data(web::Data::new(store))
                .service(templates::configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/templates/")
            .insert_header(ContentType::json())
            .set_payload("{\"name\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["detail"].as_str().unwrap().starts_with("Invalid request"));

        let req = test::TestRequest::post()
            .uri("/templates/")
            .set_json(serde_json::json!({"name": "내용 없음"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["detail"].is_string());
    }
}
