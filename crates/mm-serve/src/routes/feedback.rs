use crate::middleware::correlation::CorrelationId;
use crate::middleware::identity::Identity;
use crate::routes::error::map_error;
use crate::{AppState, build_mockmate};
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use mm_core::MockmateError;
use mm_core::error::InterviewError;
use mm_core::feedback::{FeedbackView, FeedbackViewModel};
use mm_core::types::ids::InterviewId;
use std::str::FromStr;

/// Where the client lands when it asks for feedback without an interview.
const FALLBACK_ROUTE: &str = "/generate";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/interviews/{id}/feedback", get(get_feedback))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/interviews/{id}/feedback",
    params(("id" = String, Path, description = "Interview ID")),
    responses(
        (status = 200, body = FeedbackView),
        (status = 307, description = "Blank interview id; redirect to the generate page"),
        (status = 401)
    )
)]
pub(crate) async fn get_feedback(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Identity(user_id): Identity,
    Path(id): Path<String>,
) -> Response {
    // Navigation fallback, not a data-layer error: with no interview id
    // there is nothing to load.
    if id.trim().is_empty() {
        return Redirect::temporary(FALLBACK_ROUTE).into_response();
    }
    let interview_id = match InterviewId::from_str(&id) {
        Ok(value) => value,
        Err(err) => {
            return map_error(
                &MockmateError::Interview(InterviewError::InvalidInput {
                    message: err.to_string(),
                }),
                Some(correlation.0),
            )
            .into_response();
        }
    };

    let mut view_model = FeedbackViewModel::new();
    let ticket = view_model.begin_load();

    let interview_state = state.clone();
    let lookup_id = interview_id.clone();
    let interview_read = tokio::task::spawn_blocking(move || {
        build_mockmate(&interview_state).and_then(|mockmate| mockmate.interviews().get(&lookup_id))
    });

    let answers_read = tokio::task::spawn_blocking(move || {
        build_mockmate(&state)
            .and_then(|mockmate| mockmate.answers().list_for_scope(&interview_id, &user_id))
    });

    // The two reads are independent and may finish in either order; the view
    // stays in its busy phase until both have settled.
    let (interview_joined, answers_joined) = tokio::join!(interview_read, answers_read);

    // The correlation id is already on the request span.
    let interview_result = flatten_join(interview_joined);
    if let Err(err) = &interview_result {
        tracing::error!(error = %err, "interview read failed");
    }
    view_model.complete_interview(ticket, interview_result);

    let answers_result = flatten_join(answers_joined);
    if let Err(err) = &answers_result {
        tracing::error!(error = %err, "answer records read failed");
    }
    view_model.complete_answers(ticket, answers_result);

    Json(view_model.into_view()).into_response()
}

fn flatten_join<T>(
    joined: Result<Result<T, MockmateError>, tokio::task::JoinError>,
) -> Result<T, MockmateError> {
    match joined {
        Ok(result) => result,
        Err(err) => Err(MockmateError::Internal {
            message: err.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use crate::{AppState, app, build_mockmate};
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use mm_core::types::ids::{InterviewId, UserId};
    use mm_core::types::io::{CreateAnswerInput, CreateInterviewInput};
    use tower::ServiceExt;

    fn test_state(dir: &tempfile::TempDir) -> AppState {
        AppState {
            db_path: dir
                .path()
                .join("mockmate.db")
                .to_string_lossy()
                .into_owned(),
        }
    }

    fn seed_interview(state: &AppState, user: &str) -> InterviewId {
        let mockmate = build_mockmate(state).unwrap();
        let user_id = UserId::new(user.to_string()).unwrap();
        mockmate
            .interviews()
            .create(
                &user_id,
                CreateInterviewInput {
                    position: "Backend Engineer".to_string(),
                    description: "Rust services".to_string(),
                    experience_years: 3,
                    tech_stack: "rust, axum".to_string(),
                },
            )
            .unwrap()
            .id
    }

    fn seed_answer(state: &AppState, interview_id: &InterviewId, user: &str, rating: f64) {
        let mockmate = build_mockmate(state).unwrap();
        let user_id = UserId::new(user.to_string()).unwrap();
        mockmate
            .answers()
            .create(
                interview_id,
                &user_id,
                CreateAnswerInput {
                    question: "Explain ownership".to_string(),
                    user_answer: "Single owner per value".to_string(),
                    correct_answer: "Single owner, moves transfer it".to_string(),
                    feedback: "Solid".to_string(),
                    rating,
                },
            )
            .unwrap();
    }

    async fn get_feedback_response(
        state: AppState,
        path: &str,
        user: Option<&str>,
    ) -> axum::response::Response {
        let mut request = Request::builder().uri(path);
        if let Some(user) = user {
            request = request.header("x-user-id", user);
        }
        app(state)
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn blank_interview_id_redirects_to_generate() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);
        let db_path = state.db_path.clone();
        let response =
            get_feedback_response(state, "/api/interviews/%20/feedback", Some("user_alice")).await;

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/generate"
        );
        // The guard fires before any store access: opening the store would
        // have created the database file.
        assert!(!std::path::Path::new(&db_path).exists());
    }

    #[tokio::test]
    async fn missing_identity_is_unauthenticated() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);
        let interview_id = seed_interview(&state, "user_alice");

        let response = get_feedback_response(
            state,
            &format!("/api/interviews/{interview_id}/feedback"),
            None,
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = json_body(response).await;
        assert_eq!(body["code"], "unauthenticated");
    }

    #[tokio::test]
    async fn feedback_aggregates_only_the_callers_records() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);
        let interview_id = seed_interview(&state, "user_alice");
        seed_answer(&state, &interview_id, "user_alice", 7.0);
        seed_answer(&state, &interview_id, "user_alice", 9.0);
        // Same interview, different user: must never enter the aggregate.
        seed_answer(&state, &interview_id, "user_bob", 0.0);

        let response = get_feedback_response(
            state,
            &format!("/api/interviews/{interview_id}/feedback"),
            Some("user_alice"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["overall_rating"], "8.0");
        assert_eq!(body["answers"].as_array().unwrap().len(), 2);
        assert_eq!(body["interview"]["position"], "Backend Engineer");
        assert!(body["notice"].is_null());
    }

    #[tokio::test]
    async fn unknown_interview_yields_an_empty_view() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);
        // Migrate the database so the reads succeed against empty tables.
        build_mockmate(&state).unwrap();

        let response = get_feedback_response(
            state,
            &format!("/api/interviews/{}/feedback", InterviewId::generate()),
            Some("user_alice"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert!(body["interview"].is_null());
        assert_eq!(body["overall_rating"], "0.0");
        assert_eq!(body["answers"].as_array().unwrap().len(), 0);
    }
}
