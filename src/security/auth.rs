use crate::security::errors::AuthError;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use tokio::task;

/// Argon2 password hashing, run on the blocking pool.
pub struct AuthService {
    argon2: Argon2<'static>,
}

impl AuthService {
    pub fn new() -> Self {
        AuthService {
            argon2: Argon2::default(),
        }
    }

    /// PHC string with a fresh random salt.
    pub async fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        let argon2 = self.argon2.clone();
        let password = password.to_owned();

        blocking(AuthError::HashingError, move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| AuthError::HashingError)
        })
        .await
    }

    /// `Ok(false)` on a wrong password; `Err` only if the stored hash is unusable.
    pub async fn verify_password(&self, password: &str, stored_hash: &str) -> Result<bool, AuthError> {
        let argon2 = self.argon2.clone();
        let password = password.to_owned();
        let stored_hash = stored_hash.to_owned();

        blocking(AuthError::VerificationError, move || {
            let parsed = PasswordHash::new(&stored_hash).map_err(|_| AuthError::VerificationError)?;

            match argon2.verify_password(password.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(password_hash::Error::Password) => Ok(false),
                Err(_) => Err(AuthError::VerificationError),
            }
        })
        .await
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}

async fn blocking<T, F>(on_join_error: AuthError, job: F) -> Result<T, AuthError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, AuthError> + Send + 'static,
{
    task::spawn_blocking(job).await.unwrap_or_else(|e| {
        tracing::error!("Password hashing task failed: {}", e);
        Err(on_join_error)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hashed_password_verifies() {
        let auth = AuthService::new();
        let hash = auth.hash_password("s3creto").await.unwrap();

        assert_ne!(hash, "s3creto");
        assert!(auth.verify_password("s3creto", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn wrong_password_does_not_verify() {
        let auth = AuthService::new();
        let hash = auth.hash_password("s3creto").await.unwrap();

        assert!(!auth.verify_password("otra", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn same_password_gets_distinct_salts() {
        let auth = AuthService::new();
        let first = auth.hash_password("s3creto").await.unwrap();
        let second = auth.hash_password("s3creto").await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn malformed_hash_is_an_error() {
        let auth = AuthService::new();
        let result = auth.verify_password("s3creto", "not-a-phc-string").await;

        assert_eq!(result, Err(AuthError::VerificationError));
    }
}
