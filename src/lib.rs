//! # Turnstile - Account Service Library
//!
//! Facade crate that re-exports the public API of the account service components:
//! local registration, login, existence checks, logout and session checks over HTTP,
//! with the session carried in an `access_token` cookie.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Username`, `Password`, `Account`, `Profile`, etc.
//! - **Ports**: `AccountStore`, `TokenIssuer`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, `ExistsUseCase`, `ResolveSessionUseCase`
//! - **Adapters**: `HashMapAccountStore`, `PostgresAccountStore`, `JwtTokenIssuer`, axum routes
//! - **Service**: `AccountService` - router assembly and standalone server

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use turnstile_core::*;
}

pub use turnstile_core::{
    ACCESS_TOKEN_COOKIE_NAME, Account, AccountError, AccountId, AccountKey, AuthenticatedAccount,
    Email, NewAccount, Password, Profile, SessionToken, Username,
};

// ============================================================================
// Ports
// ============================================================================

pub use turnstile_core::{AccountStore, AccountStoreError, TokenError, TokenIssuer};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use turnstile_application::*;
}

pub use turnstile_application::{
    ExistsUseCase, LoginUseCase, RegisterUseCase, ResolveSessionUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP routes, extractors and session middleware
    pub mod http {
        pub use turnstile_adapters::http::*;
    }

    /// Account store implementations
    pub mod persistence {
        pub use turnstile_adapters::persistence::*;
    }

    /// Session tokens and cookies
    pub mod auth {
        pub use turnstile_adapters::auth::*;
    }

    /// Configuration
    pub mod config {
        pub use turnstile_adapters::config::*;
    }
}

pub use turnstile_adapters::{
    AccountServiceSettings, CookieConfig, HashMapAccountStore, JwtConfig, JwtTokenIssuer,
    PostgresAccountStore,
};

// ============================================================================
// Account Service (Main Entry Point)
// ============================================================================

pub use turnstile_service::{AccountService, configure_postgresql, get_postgres_pool};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
