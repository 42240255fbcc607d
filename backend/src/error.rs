//! Error taxonomy shared by the store, the generation service and the HTTP
//! handlers.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0} already exists")]
    DuplicateName(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Generation service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Generation failed: {0}")]
    UpstreamFailure(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ServiceError {
    /// Translates a failed insert/update into `DuplicateName` when the
    /// database rejected it on a UNIQUE constraint.
    pub fn from_write(err: rusqlite::Error, what: impl Into<String>) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _)
                if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                ServiceError::DuplicateName(what.into())
            }
            _ => ServiceError::Database(err),
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::DuplicateName(_) => StatusCode::CONFLICT,
            ServiceError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServiceError::UpstreamFailure(_) => StatusCode::BAD_GATEWAY,
            ServiceError::Database(_) | ServiceError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "detail": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_its_own_status() {
        let errors = [
            ServiceError::NotFound("Template 3".into()),
            ServiceError::DuplicateName("Template 'a'".into()),
            ServiceError::InvalidRequest("folder_id is required".into()),
            ServiceError::ServiceUnavailable("OPENAI_API_KEY is not set".into()),
            ServiceError::UpstreamFailure("timeout".into()),
            ServiceError::Database(rusqlite::Error::QueryReturnedNoRows),
        ];
        let codes: Vec<u16> = errors.iter().map(|e| e.status_code().as_u16()).collect();
        assert_eq!(codes, vec![404, 409, 400, 503, 502, 500]);
    }

    #[test]
    fn message_carries_the_subject() {
        let err = ServiceError::NotFound("Folder 7".into());
        assert_eq!(err.to_string(), "Folder 7 not found");
    }
}
