use crate::answers::AnswerRepository;
use crate::error::{AnswerError, InterviewError, MockmateError};
use crate::interviews::InterviewRepository;
use crate::store::Store;
use crate::types::answer::AnswerRecord;
use crate::types::ids::{InterviewId, UserId};
use crate::types::interview::Interview;
use crate::types::io::{CreateAnswerInput, CreateInterviewInput};

/// Service facade over a store, mirroring the document collections the
/// original data lives in: interviews and per-user graded answers.
pub struct Mockmate<S: Store> {
    store: S,
}

impl<S: Store> Mockmate<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn interviews(&self) -> InterviewsApi<'_, S> {
        InterviewsApi { core: self }
    }

    pub fn answers(&self) -> AnswersApi<'_, S> {
        AnswersApi { core: self }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub struct InterviewsApi<'a, S: Store> {
    core: &'a Mockmate<S>,
}

impl<'a, S: Store> InterviewsApi<'a, S> {
    pub fn create(
        &self,
        user_id: &UserId,
        input: CreateInterviewInput,
    ) -> Result<Interview, MockmateError> {
        if input.position.trim().is_empty() {
            return Err(MockmateError::Interview(InterviewError::InvalidInput {
                message: "position must not be empty".to_string(),
            }));
        }
        let interview = self.core.store.interviews().create(user_id, &input)?;
        Ok(interview)
    }

    pub fn get(&self, id: &InterviewId) -> Result<Option<Interview>, MockmateError> {
        let interview = self.core.store.interviews().get(id)?;
        Ok(interview)
    }

    pub fn require(&self, id: &InterviewId) -> Result<Interview, MockmateError> {
        self.get(id)?
            .ok_or(MockmateError::Interview(InterviewError::NotFound))
    }

    pub fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Interview>, MockmateError> {
        let interviews = self.core.store.interviews().list_for_user(user_id)?;
        Ok(interviews)
    }
}

pub struct AnswersApi<'a, S: Store> {
    core: &'a Mockmate<S>,
}

impl<'a, S: Store> AnswersApi<'a, S> {
    /// Ingests one graded answer from the grading pipeline. The referenced
    /// interview must exist; the rating is stored as-is.
    pub fn create(
        &self,
        interview_id: &InterviewId,
        user_id: &UserId,
        input: CreateAnswerInput,
    ) -> Result<AnswerRecord, MockmateError> {
        if input.question.trim().is_empty() {
            return Err(MockmateError::Answer(AnswerError::InvalidInput {
                message: "question must not be empty".to_string(),
            }));
        }
        self.core.store.with_tx(|store| {
            if store.interviews().get(interview_id)?.is_none() {
                return Err(MockmateError::Interview(InterviewError::NotFound));
            }
            let record = store.answers().create(interview_id, user_id, &input)?;
            Ok(record)
        })
    }

    /// Graded answers scoped to exactly one (interview, user) pair. The
    /// compound filter lives in the store; records from other users or other
    /// interviews are never fetched.
    pub fn list_for_scope(
        &self,
        interview_id: &InterviewId,
        user_id: &UserId,
    ) -> Result<Vec<AnswerRecord>, MockmateError> {
        let records = self.core.store.answers().list_for_scope(interview_id, user_id)?;
        Ok(records)
    }
}
