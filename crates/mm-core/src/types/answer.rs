use crate::types::ids::{AnswerId, InterviewId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One graded question/answer/feedback tuple, written by the external
/// grading pipeline. The rating is carried as-is; the expected 0-10 domain
/// is the grader's contract, not validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnswerRecord {
    pub id: AnswerId,
    pub interview_id: InterviewId,
    pub user_id: UserId,
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub feedback: String,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}
