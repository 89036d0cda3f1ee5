pub mod answers;
pub mod error;
pub mod feedback;
pub mod interviews;
pub mod mockmate;
pub mod store;

pub mod types;

pub use crate::error::MockmateError;
pub use crate::mockmate::Mockmate;
pub use crate::store::Store;
