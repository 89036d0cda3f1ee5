use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateInterviewInput {
    pub position: String,
    pub description: String,
    pub experience_years: u32,
    pub tech_stack: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateAnswerInput {
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub feedback: String,
    pub rating: f64,
}
