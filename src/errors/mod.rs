pub mod codes;
pub mod error;

pub use codes::RouterErrorCode;
pub use error::{RouterError, RouterResult};
