pub mod hashmap_account_store;
pub mod password;
pub mod postgres_account_store;

pub use hashmap_account_store::HashMapAccountStore;
pub use password::{compute_password_hash, verify_password_hash};
pub use postgres_account_store::PostgresAccountStore;
