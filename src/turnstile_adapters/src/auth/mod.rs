pub mod cookie;
pub mod jwt;

pub use cookie::{CookieConfig, create_access_token_cookie, create_removal_cookie};
pub use jwt::{Claims, JwtConfig, JwtTokenIssuer};
