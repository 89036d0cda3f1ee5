pub mod answer;
pub mod ids;
pub mod interview;
pub mod io;

pub use answer::AnswerRecord;
pub use ids::{AnswerId, IdError, InterviewId, UserId};
pub use interview::Interview;
