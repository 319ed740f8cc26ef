use chrono::{DateTime, Duration, Utc};
use turnstile_core::{AuthenticatedAccount, SessionToken, TokenIssuer};

/// A request's session after its token was checked.
#[derive(Debug, Clone)]
pub struct ResolvedSession {
    pub account: AuthenticatedAccount,
    /// Set when the token was close to expiry and a new one was issued.
    pub refreshed_token: Option<SessionToken>,
}

/// Resolve session use case - turns a presented token into the authenticated account
///
/// Never fails: a missing or invalid token simply means the request is anonymous.
pub struct ResolveSessionUseCase<'a, T>
where
    T: TokenIssuer,
{
    token_issuer: &'a T,
    refresh_threshold: Duration,
}

impl<'a, T> ResolveSessionUseCase<'a, T>
where
    T: TokenIssuer,
{
    pub fn new(token_issuer: &'a T, refresh_threshold: Duration) -> Self {
        Self {
            token_issuer,
            refresh_threshold,
        }
    }

    #[tracing::instrument(name = "ResolveSessionUseCase::execute", skip_all)]
    pub async fn execute(&self, token: &str) -> Option<ResolvedSession> {
        self.execute_at(token, Utc::now()).await
    }

    pub async fn execute_at(&self, token: &str, now: DateTime<Utc>) -> Option<ResolvedSession> {
        let session = match self.token_issuer.validate_token(token) {
            Ok(session) => session,
            Err(e) => {
                tracing::debug!(error = %e, "ignoring invalid session token");
                return None;
            }
        };

        let refreshed_token = if session.expires_within(self.refresh_threshold, now) {
            match self.token_issuer.generate_token(&session.account).await {
                Ok(token) => Some(token),
                Err(e) => {
                    tracing::warn!(error = %e, "failed to refresh session token");
                    None
                }
            }
        } else {
            None
        };

        Some(ResolvedSession {
            account: session.account,
            refreshed_token,
        })
    }
}
