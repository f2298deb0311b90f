pub use error::{ApiError, ApiResult};
pub use request::*;
pub use response::*;
pub use utils::*;

pub mod application;
pub mod error;
pub mod request;
pub mod response;
pub mod utils;
