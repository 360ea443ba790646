pub mod error_code;
pub mod response;

pub use error_code::{ErrorCode, ResultCategory};
pub use response::ApiResponse;
