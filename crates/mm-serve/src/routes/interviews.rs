use crate::middleware::correlation::CorrelationId;
use crate::middleware::identity::Identity;
use crate::routes::error::map_error;
use crate::{AppState, build_mockmate};
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use mm_core::error::InterviewError;
use mm_core::types::ids::InterviewId;
use mm_core::types::interview::Interview;
use mm_core::types::io::CreateInterviewInput;
use std::str::FromStr;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/interviews", get(list_interviews).post(create_interview))
        .route("/interviews/{id}", get(get_interview))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/interviews",
    request_body = CreateInterviewInput,
    responses((status = 200, body = Interview), (status = 401))
)]
pub(crate) async fn create_interview(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Identity(user_id): Identity,
    Json(input): Json<CreateInterviewInput>,
) -> Response {
    let mockmate = match build_mockmate(&state) {
        Ok(mockmate) => mockmate,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match mockmate.interviews().create(&user_id, input) {
        Ok(interview) => Json(interview).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/interviews",
    responses((status = 200, body = Vec<Interview>), (status = 401))
)]
pub(crate) async fn list_interviews(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Identity(user_id): Identity,
) -> Response {
    let mockmate = match build_mockmate(&state) {
        Ok(mockmate) => mockmate,
        Err(err) => return map_error(&err, Some(correlation.0)).into_response(),
    };
    match mockmate.interviews().list_for_user(&user_id) {
        Ok(interviews) => Json(interviews).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/interviews/{id}",
    params(("id" = String, Path, description = "Interview ID")),
    responses((status = 200, body = Interview), (status = 404))
)]
pub(crate) async fn get_interview(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
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
                &mm_core::MockmateError::Interview(InterviewError::InvalidInput {
                    message: err.to_string(),
                }),
                Some(correlation.0),
            )
            .into_response();
        }
    };
    match mockmate.interviews().require(&interview_id) {
        Ok(interview) => Json(interview).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}
