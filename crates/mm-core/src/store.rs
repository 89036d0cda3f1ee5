use crate::MockmateError;
use crate::answers::AnswerRepository;
use crate::interviews::InterviewRepository;

pub trait Store {
    type Interviews<'a>: InterviewRepository
    where
        Self: 'a;
    type Answers<'a>: AnswerRepository
    where
        Self: 'a;

    fn interviews(&self) -> Self::Interviews<'_>;
    fn answers(&self) -> Self::Answers<'_>;

    fn with_tx<F, T>(&self, f: F) -> Result<T, MockmateError>
    where
        F: FnOnce(&Self) -> Result<T, MockmateError>;
}
