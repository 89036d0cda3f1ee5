use crate::routes;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use mm_core::feedback::FeedbackView;
use mm_core::types::answer::AnswerRecord;
use mm_core::types::ids::{AnswerId, InterviewId, UserId};
use mm_core::types::interview::Interview;
use mm_core::types::io::{CreateAnswerInput, CreateInterviewInput};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Mockmate API", description = "Mock-interview feedback service"),
    paths(
        routes::interviews::create_interview,
        routes::interviews::list_interviews,
        routes::interviews::get_interview,
        routes::answers::create_answer,
        routes::answers::list_answers,
        routes::feedback::get_feedback,
    ),
    components(schemas(
        Interview,
        AnswerRecord,
        FeedbackView,
        CreateInterviewInput,
        CreateAnswerInput,
        InterviewId,
        AnswerId,
        UserId,
    ))
)]
struct ApiDoc;

pub fn generate_spec() -> String {
    ApiDoc::openapi().to_pretty_json().unwrap_or_default()
}

pub fn router() -> Router {
    Router::new().route("/openapi.json", get(serve_spec))
}

async fn serve_spec() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
