use chrono::{DateTime, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use turnstile_core::{
    AccountId, AuthenticatedAccount, Profile, SessionToken, TokenError, TokenIssuer,
    ValidatedSession,
};
use uuid::Uuid;

/// Value of the `sub` claim on every session token.
const SESSION_SUBJECT: &str = "account";

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: Secret<String>,
    pub issuer: String,
    pub time_to_live_in_seconds: i64,
}

impl JwtConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "_id")]
    pub id: AccountId,
    pub profile: Profile,
    pub iss: String,
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    /// Unique per token, so two tokens issued in the same second still differ.
    pub jti: Uuid,
}

/// HS256 JWT session tokens.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    config: JwtConfig,
}

impl JwtTokenIssuer {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    pub fn generate_token_at(
        &self,
        account: &AuthenticatedAccount,
        now: DateTime<Utc>,
    ) -> Result<SessionToken, TokenError> {
        let delta = chrono::Duration::try_seconds(self.config.time_to_live_in_seconds).ok_or(
            TokenError::UnexpectedError("Failed to create token duration".to_string()),
        )?;

        let exp = now
            .checked_add_signed(delta)
            .ok_or(TokenError::UnexpectedError(
                "Duration out of range".to_string(),
            ))?
            .timestamp();

        let claims = Claims {
            id: account.id,
            profile: account.profile.clone(),
            iss: self.config.issuer.clone(),
            sub: SESSION_SUBJECT.to_string(),
            iat: now.timestamp(),
            exp,
            jti: Uuid::new_v4(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.config.as_bytes()),
        )
        .map(SessionToken::new)
        .map_err(|e| TokenError::UnexpectedError(e.to_string()))
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[self.config.issuer.as_str()]);
        validation.sub = Some(SESSION_SUBJECT.to_string());
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation
    }
}

#[async_trait::async_trait]
impl TokenIssuer for JwtTokenIssuer {
    async fn generate_token(
        &self,
        account: &AuthenticatedAccount,
    ) -> Result<SessionToken, TokenError> {
        self.generate_token_at(account, Utc::now())
    }

    fn validate_token(&self, token: &str) -> Result<ValidatedSession, TokenError> {
        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.as_bytes()),
            &self.validation(),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::InvalidToken(e.to_string()),
        })?;

        let expires_at = DateTime::from_timestamp(claims.exp, 0).ok_or(
            TokenError::InvalidToken("exp out of range".to_string()),
        )?;

        Ok(ValidatedSession {
            account: AuthenticatedAccount {
                id: claims.id,
                profile: claims.profile,
            },
            expires_at,
        })
    }
}
