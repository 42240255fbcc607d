//! `GET /health`: liveness plus whether the database answers and whether
//! AI generation is configured.

use crate::llm::{CompletionBackend, Generator};
use crate::store::Store;
use actix_web::web::{get, scope};
use actix_web::{web, HttpResponse, Responder, Scope};
use log::error;
use serde_json::json;

pub fn configure_routes<B: CompletionBackend + 'static>() -> Scope {
    scope("/health").route("", get().to(process::<B>))
}

async fn process<B: CompletionBackend + 'static>(
    store: web::Data<Store>,
    generator: web::Data<Generator<B>>,
) -> impl Responder {
    let database = match store.ping() {
        Ok(()) => "ok".to_string(),
        Err(e) => {
            error!("Health check database failure: {}", e);
            e.to_string()
        }
    };
    let healthy = database == "ok";
    let body = json!({
        "status": if healthy { "ok" } else { "degraded" },
        "database": database,
        "generation_configured": generator.is_configured(),
    });
    if healthy {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::client::OpenAiClient;
    use crate::store::test_support;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn reports_generation_state() {
        let (_dir, store) = test_support::store();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .app_data(web::Data::new(Generator::<OpenAiClient>::new(None, "gpt-3.5-turbo")))
                .service(configure_routes::<OpenAiClient>()),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["generation_configured"], false);
    }
}
