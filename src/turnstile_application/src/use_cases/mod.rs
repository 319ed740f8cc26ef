pub mod exists;
pub mod login;
pub mod register;
pub mod resolve_session;

#[cfg(test)]
mod test_support;

use turnstile_core::{Account, SessionToken};

/// Outcome of a successful register or login: the account plus its new session token.
#[derive(Debug)]
pub struct Authenticated {
    pub account: Account,
    pub token: SessionToken,
}

pub use exists::{ExistsError, ExistsUseCase};
pub use login::{LoginError, LoginUseCase};
pub use register::{RegisterError, RegisterUseCase};
pub use resolve_session::{ResolveSessionUseCase, ResolvedSession};
