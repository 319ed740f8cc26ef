pub mod account;
pub mod account_key;
pub mod email;
pub mod password;
pub mod session;
pub mod username;
