pub mod check;
pub mod error;
pub mod exists;
pub mod login;
pub mod logout;
pub mod register;

pub use check::check;
pub use error::{AccountApiError, ConflictResponse, ErrorResponse};
pub use exists::{ExistsResponse, exists};
pub use login::{LoginRequest, login};
pub use logout::logout;
pub use register::{RegisterRequest, register};
