use crate::middleware::correlation::CorrelationId;
use crate::middleware::identity::Identity;
use crate::routes::error::map_error;
use crate::{AppState, build_mockmate};
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use mm_core::error::AnswerError;
use mm_core::types::answer::AnswerRecord;
use mm_core::types::ids::InterviewId;
use mm_core::types::io::CreateAnswerInput;
use std::str::FromStr;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/interviews/{id}/answers",
            get(list_answers).post(create_answer),
        )
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/interviews/{id}/answers",
    request_body = CreateAnswerInput,
    params(("id" = String, Path, description = "Interview ID")),
    responses((status = 200, body = AnswerRecord), (status = 401), (status = 404))
)]
pub(crate) async fn create_answer(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Identity(user_id): Identity,
    Path(id): Path<String>,
    Json(input): Json<CreateAnswerInput>,
) -> Response {
    let mockmate = match build_mockmate(&state) {
        Ok(mockmate) => mockmate,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    let interview_id = match InterviewId::from_str(&id) {
        Ok(value) => value,
        Err(err) => {
            return map_error(
                &mm_core::MockmateError::Answer(AnswerError::InvalidInput {
                    message: err.to_string(),
                }),
                Some(correlation.0),
            )
            .into_response();
        }
    };
    match mockmate.answers().create(&interview_id, &user_id, input) {
        Ok(record) => Json(record).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/interviews/{id}/answers",
    params(("id" = String, Path, description = "Interview ID")),
    responses((status = 200, body = Vec<AnswerRecord>), (status = 401))
)]
pub(crate) async fn list_answers(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Identity(user_id): Identity,
    Path(id): Path<String>,
) -> Response {
    let mockmate = match build_mockmate(&state) {
        Ok(mockmate) => mockmate,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    let interview_id = match InterviewId::from_str(&id) {
        Ok(value) => value,
        Err(err) => {
            return map_error(
                &mm_core::MockmateError::Answer(AnswerError::InvalidInput {
                    message: err.to_string(),
                }),
                Some(correlation.0),
            )
            .into_response();
        }
    };
    match mockmate.answers().list_for_scope(&interview_id, &user_id) {
        Ok(records) => Json(records).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}
