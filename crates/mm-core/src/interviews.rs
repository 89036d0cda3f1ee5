use crate::error::InterviewError;
use crate::types::ids::{InterviewId, UserId};
use crate::types::interview::Interview;
use crate::types::io::CreateInterviewInput;

pub trait InterviewRepository {
    fn create(
        &self,
        user_id: &UserId,
        input: &CreateInterviewInput,
    ) -> Result<Interview, InterviewError>;
    fn get(&self, id: &InterviewId) -> Result<Option<Interview>, InterviewError>;
    fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Interview>, InterviewError>;
}
