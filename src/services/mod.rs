pub mod errors;
pub mod screens;

pub use errors::{ServiceError, ServiceResult};
