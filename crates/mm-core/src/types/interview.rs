use crate::types::ids::{InterviewId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A generated mock-interview session. Authored by the interview-generation
/// subsystem; this service ingests and reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Interview {
    pub id: InterviewId,
    pub user_id: UserId,
    pub position: String,
    pub description: String,
    pub experience_years: u32,
    pub tech_stack: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
