pub mod caller;
pub mod parameter_error_handler;
pub mod password;
pub mod sql;
pub mod validate;

pub use caller::{caller_identity, client_address};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::is_unique_violation;
