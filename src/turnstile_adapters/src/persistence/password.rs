use argon2::{
    Algorithm, Argon2, Params, PasswordHash as PhcHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher, SaltString, rand_core},
};
use secrecy::{ExposeSecret, Secret};
use turnstile_core::{AccountStoreError, Password, PasswordHash};

fn hasher() -> Result<Argon2<'static>, String> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
    ))
}

/// Hashes `password` into a PHC string on the blocking pool.
#[tracing::instrument(name = "Computing password hash", skip_all)]
pub async fn compute_password_hash(password: Password) -> Result<PasswordHash, AccountStoreError> {
    let current_span: tracing::Span = tracing::Span::current();

    let result = tokio::task::spawn_blocking(move || {
        current_span.in_scope(move || {
            let salt: SaltString = SaltString::generate(rand_core::OsRng);
            hasher()?
                .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                .map(|h| PasswordHash::new(Secret::new(h.to_string())))
                .map_err(|e| e.to_string())
        })
    })
    .await
    .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

    result.map_err(AccountStoreError::UnexpectedError)
}

/// Checks `candidate` against a stored PHC string.
///
/// A mismatch is `Ok(false)`; only a malformed hash or a failed task is an error.
#[tracing::instrument(name = "Verify password hash", skip_all)]
pub async fn verify_password_hash(
    expected_password_hash: PasswordHash,
    candidate: Password,
) -> Result<bool, AccountStoreError> {
    let current_span: tracing::Span = tracing::Span::current();

    let result = tokio::task::spawn_blocking(move || {
        current_span.in_scope(|| {
            let expected = PhcHash::new(expected_password_hash.as_ref().expose_secret())
                .map_err(|e| e.to_string())?;

            match hasher()?.verify_password(candidate.as_ref().expose_secret().as_bytes(), &expected)
            {
                Ok(()) => Ok(true),
                Err(argon2::password_hash::Error::Password) => Ok(false),
                Err(e) => Err(e.to_string()),
            }
        })
    })
    .await
    .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

    result.map_err(AccountStoreError::UnexpectedError)
}
