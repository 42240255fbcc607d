//! # AI Generation Service Module
//!
//! Routes under `/ai`. Each generation endpoint sends a type-specific prompt
//! to the language model, parses the reply into sentences, appends one
//! history row per sentence and returns the sentences.
//!
//! The handlers are generic over the [`CompletionBackend`] so the scope can
//! be mounted with the real client in `main` and with a scripted backend in
//! tests. When the backend is missing the endpoints answer
//! `503 Service Unavailable` without calling out.

mod generate;
mod history;

use crate::llm::CompletionBackend;
use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/ai";

/// # Registered Routes:
///
/// *   **`POST /sample-phrase/`**: sentences a child might say about the keyword.
/// *   **`POST /experience/`**: statements about the child's experience.
/// *   **`POST /hint/`**: guessing-game hints whose answer is the keyword.
/// *   **`GET /history/`**: the last 100 generated sentences, newest first.
///
/// Every generation body is `{keyword, count = 10}`.
pub fn configure_routes<B: CompletionBackend + 'static>() -> Scope {
    scope(API_PATH)
        .route("/sample-phrase/", post().to(generate::sample_phrase::<B>))
        .route("/experience/", post().to(generate::experience::<B>))
        .route("/hint/", post().to(generate::hint::<B>))
        .route("/history/", get().to(history::process))
}
