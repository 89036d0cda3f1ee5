use crate::error::AnswerError;
use crate::types::answer::AnswerRecord;
use crate::types::ids::{InterviewId, UserId};
use crate::types::io::CreateAnswerInput;

pub trait AnswerRepository {
    fn create(
        &self,
        interview_id: &InterviewId,
        user_id: &UserId,
        input: &CreateAnswerInput,
    ) -> Result<AnswerRecord, AnswerError>;

    /// All graded answers for one (interview, user) scope. The store must
    /// apply both equality predicates itself; callers never post-filter.
    fn list_for_scope(
        &self,
        interview_id: &InterviewId,
        user_id: &UserId,
    ) -> Result<Vec<AnswerRecord>, AnswerError>;
}
