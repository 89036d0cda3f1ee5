use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterviewError {
    #[error("interview not found")]
    NotFound,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("store read failed: {message}")]
    Store { message: String },
}

#[derive(Debug, Error)]
pub enum AnswerError {
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("store read failed: {message}")]
    Store { message: String },
}

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("unauthenticated")]
    Unauthenticated,
}

#[derive(Debug, Error)]
pub enum MockmateError {
    #[error(transparent)]
    Interview(#[from] InterviewError),
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error(transparent)]
    Identity(#[from] IdentityError),
    #[error("internal error: {message}")]
    Internal { message: String },
}
