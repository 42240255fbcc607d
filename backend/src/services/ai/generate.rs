use crate::error::ServiceError;
use crate::llm::output::parse_generated_lines;
use crate::llm::{prompts, CompletionBackend, Generator};
use crate::services::failure;
use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};
use common::model::generation::GenerationType;
use common::requests::AiGenerationRequest;
use common::responses::AiGenerationResponse;
use log::info;

pub async fn sample_phrase<B: CompletionBackend + 'static>(
    store: web::Data<Store>,
    generator: web::Data<Generator<B>>,
    payload: web::Json<AiGenerationRequest>,
) -> impl Responder {
    respond(store.get_ref(), generator.get_ref(), GenerationType::SamplePhrase, &payload).await
}

pub async fn experience<B: CompletionBackend + 'static>(
    store: web::Data<Store>,
    generator: web::Data<Generator<B>>,
    payload: web::Json<AiGenerationRequest>,
) -> impl Responder {
    respond(store.get_ref(), generator.get_ref(), GenerationType::Experience, &payload).await
}

pub async fn hint<B: CompletionBackend + 'static>(
    store: web::Data<Store>,
    generator: web::Data<Generator<B>>,
    payload: web::Json<AiGenerationRequest>,
) -> impl Responder {
    respond(store.get_ref(), generator.get_ref(), GenerationType::Hint, &payload).await
}

async fn respond<B: CompletionBackend>(
    store: &Store,
    generator: &Generator<B>,
    kind: GenerationType,
    request: &AiGenerationRequest,
) -> HttpResponse {
    match generate_sentences(store, generator, kind, request).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => failure(&format!("Error generating {}", kind), e),
    }
}

/// Prompts the model, parses its reply and records every parsed sentence.
///
/// Fails with `ServiceUnavailable` before any network call when the
/// generator is unconfigured. Anything that goes wrong afterwards, in the
/// model call or while recording, is reported as `UpstreamFailure`.
pub async fn generate_sentences<B: CompletionBackend>(
    store: &Store,
    generator: &Generator<B>,
    kind: GenerationType,
    request: &AiGenerationRequest,
) -> Result<AiGenerationResponse, ServiceError> {
    let keyword = request.keyword.trim();
    if keyword.is_empty() {
        return Err(ServiceError::InvalidRequest("keyword must not be empty".into()));
    }
    if request.count == 0 {
        return Err(ServiceError::InvalidRequest("count must be at least 1".into()));
    }
    let backend = generator.backend().ok_or_else(|| {
        ServiceError::ServiceUnavailable("OPENAI_API_KEY is not configured".into())
    })?;

    let prompt = prompts::build(kind, keyword, request.count);
    let chat = generator.request(prompt.system, &prompt.user, prompt.temperature);
    let text = backend
        .complete(&chat)
        .await
        .map_err(|e| ServiceError::UpstreamFailure(e.to_string()))?;

    let sentences = parse_generated_lines(&text, kind);
    for sentence in &sentences {
        store
            .record_generation(keyword, kind, sentence)
            .map_err(|e| ServiceError::UpstreamFailure(e.to_string()))?;
    }
    info!(
        "Generated {} {} sentences for '{}' (requested {})",
        sentences.len(),
        kind,
        keyword,
        request.count
    );

    Ok(AiGenerationResponse {
        keyword: keyword.to_string(),
        generation_type: kind,
        generated_sentences: sentences,
        created_at: chrono::Local::now().to_rfc3339(),
    })
}
