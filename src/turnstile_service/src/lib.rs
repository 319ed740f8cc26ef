pub mod account_service;
pub mod helpers;
pub mod tracing;

pub use account_service::{ACCOUNT_ROUTES_PREFIX, AccountService};
pub use helpers::{configure_postgresql, get_postgres_pool};
pub use crate::tracing::init_tracing;
