//! Language-model integration: the chat-completions client, the prompts per
//! generation type and the parser for the model's free-form replies.

pub mod client;
pub mod output;
pub mod prompts;
pub mod schemas;

use schemas::{ChatMessage, ChatRequest};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response contained no choices")]
    EmptyResponse,
}

/// Something that answers a chat-completion request with a single text blob.
#[allow(async_fn_in_trait)]
pub trait CompletionBackend {
    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError>;
}

/// Generation capability handed to the AI handlers.
///
/// Built once at startup. Without an API credential it holds no backend and
/// callers get a `ServiceUnavailable` error instead of a network call.
pub struct Generator<B> {
    backend: Option<B>,
    model: String,
}

impl<B: CompletionBackend> Generator<B> {
    pub fn new(backend: Option<B>, model: impl Into<String>) -> Self {
        Generator {
            backend,
            model: model.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    pub fn backend(&self) -> Option<&B> {
        self.backend.as_ref()
    }

    /// Builds the request for the given persona and task text.
    pub fn request(&self, system: &str, user: &str, temperature: f32) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            max_tokens: prompts::MAX_TOKENS,
            temperature,
        }
    }
}
