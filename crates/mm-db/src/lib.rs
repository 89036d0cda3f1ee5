pub mod answer_repo;
pub mod interview_repo;
pub mod schema;
pub mod store;
pub mod util;
