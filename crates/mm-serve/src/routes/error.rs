use axum::Json;
use axum::http::StatusCode;
use mm_core::error::{AnswerError, IdentityError, InterviewError, MockmateError};
use mm_core::feedback::TRANSIENT_NOTICE;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub code: &'static str,
    pub message: String,
    pub correlation_id: Option<String>,
}

pub fn map_error(
    err: &MockmateError,
    correlation_id: Option<String>,
) -> (StatusCode, Json<ErrorEnvelope>) {
    let (status, code, message) = match err {
        MockmateError::Interview(interview) => map_interview_error(interview),
        MockmateError::Answer(answer) => map_answer_error(answer),
        MockmateError::Identity(identity) => map_identity_error(identity),
        MockmateError::Internal { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            TRANSIENT_NOTICE.to_string(),
        ),
    };

    (
        status,
        Json(ErrorEnvelope {
            code,
            message,
            correlation_id,
        }),
    )
}

fn map_interview_error(err: &InterviewError) -> (StatusCode, &'static str, String) {
    match err {
        InterviewError::NotFound => (StatusCode::NOT_FOUND, "not_found", err.to_string()),
        InterviewError::InvalidInput { .. } => {
            (StatusCode::BAD_REQUEST, "invalid_input", err.to_string())
        }
        // Store detail goes to the diagnostic log, never to the client.
        InterviewError::Store { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "store_error",
            TRANSIENT_NOTICE.to_string(),
        ),
    }
}

fn map_answer_error(err: &AnswerError) -> (StatusCode, &'static str, String) {
    match err {
        AnswerError::InvalidInput { .. } => {
            (StatusCode::BAD_REQUEST, "invalid_input", err.to_string())
        }
        AnswerError::Store { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "store_error",
            TRANSIENT_NOTICE.to_string(),
        ),
    }
}

fn map_identity_error(err: &IdentityError) -> (StatusCode, &'static str, String) {
    match err {
        IdentityError::Unauthenticated => {
            (StatusCode::UNAUTHORIZED, "unauthenticated", err.to_string())
        }
    }
}
