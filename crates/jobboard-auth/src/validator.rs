use tracing::warn;

use jobboard_core::{AppError, AuthError};

use crate::claims::Principal;
use crate::codec::TokenCodec;
use crate::revocation::{RevocationList, StoreError};

/// Strips an optional `Bearer ` prefix and surrounding whitespace.
pub fn strip_bearer(credential: &str) -> &str {
    let credential = credential.trim();
    match credential.strip_prefix("Bearer") {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest.trim(),
        _ => credential,
    }
}

/// Turns a presented credential into a [`Principal`].
#[derive(Debug, Clone)]
pub struct TokenValidator {
    codec: TokenCodec,
    revocations: RevocationList,
}

impl TokenValidator {
    pub fn new(codec: TokenCodec, revocations: RevocationList) -> Self {
        Self { codec, revocations }
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    pub fn issue(&self, principal: &Principal) -> Result<String, AppError> {
        self.codec.issue(principal)
    }

    pub async fn authenticate(&self, credential: &str) -> Result<Principal, AuthError> {
        self.authenticate_at(credential, chrono::Utc::now().timestamp())
            .await
    }

    /// Revocation is checked before the signature.
    pub async fn authenticate_at(&self, credential: &str, now: i64) -> Result<Principal, AuthError> {
        let token = strip_bearer(credential);
        if token.is_empty() {
            return Err(AuthError::Malformed);
        }

        if self.revocations.is_revoked_at(token, now).await? {
            return Err(AuthError::Revoked);
        }

        self.codec.verify_at(token, now).inspect_err(|e| {
            if matches!(e, AuthError::Invalid) {
                warn!("Rejected token with bad signature");
            }
        })
    }

    pub fn get_expiration(&self, credential: &str) -> Option<i64> {
        self.codec.expiration(strip_bearer(credential))
    }

    pub async fn revoke(&self, credential: &str, expires_at: i64) -> Result<(), StoreError> {
        self.revocations
            .revoke(strip_bearer(credential), expires_at)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::{Role, TokenPayload};
    use jobboard_config::JwtConfig;

    fn get_test_validator() -> TokenValidator {
        let codec = TokenCodec::new(&JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            access_token_expiry: 3600,
        });
        TokenValidator::new(codec, RevocationList::in_memory())
    }

    fn candidate() -> Principal {
        Principal::new(42, "candidate@example.com", Role::Candidate)
    }

    #[test]
    fn test_strip_bearer() {
        assert_eq!(strip_bearer("Bearer abc"), "abc");
        assert_eq!(strip_bearer("  Bearer   abc  "), "abc");
        assert_eq!(strip_bearer("abc"), "abc");
        assert_eq!(strip_bearer("Bearer "), "");
        assert_eq!(strip_bearer(""), "");
    }

    #[tokio::test]
    async fn test_round_trip_with_bearer_prefix() {
        let validator = get_test_validator();
        let token = validator.issue(&candidate()).unwrap();

        let principal = validator
            .authenticate(&format!("Bearer {}", token))
            .await
            .unwrap();
        assert_eq!(principal, candidate());

        let principal = validator.authenticate(&token).await.unwrap();
        assert_eq!(principal, candidate());
    }

    #[tokio::test]
    async fn test_empty_credential_is_malformed() {
        let validator = get_test_validator();
        assert_eq!(
            validator.authenticate("Bearer ").await,
            Err(AuthError::Malformed)
        );
        assert_eq!(validator.authenticate("   ").await, Err(AuthError::Malformed));
    }

    #[tokio::test]
    async fn test_two_segment_credential_is_malformed() {
        let validator = get_test_validator();
        assert_eq!(
            validator.authenticate("Bearer abc.def").await,
            Err(AuthError::Malformed)
        );
    }

    #[tokio::test]
    async fn test_revoked_token_is_rejected() {
        let validator = get_test_validator();
        let token = validator.issue(&candidate()).unwrap();
        let exp = validator.get_expiration(&token).unwrap();

        validator
            .revoke(&format!("Bearer {}", token), exp)
            .await
            .unwrap();

        assert_eq!(
            validator.authenticate(&token).await,
            Err(AuthError::Revoked)
        );
    }

    #[tokio::test]
    async fn test_revocation_checked_before_signature() {
        let validator = get_test_validator();
        let garbage = "not-even.a-real.token";
        validator.revoke(garbage, i64::MAX).await.unwrap();

        assert_eq!(
            validator.authenticate(garbage).await,
            Err(AuthError::Revoked)
        );
    }

    #[tokio::test]
    async fn test_revocation_purged_after_expiry() {
        let validator = get_test_validator();
        let issued_at = 1_000;
        let old = validator.codec().issue_at(&candidate(), issued_at).unwrap();
        let exp = validator.get_expiration(&old).unwrap();

        validator.revocations.revoke_at(&old, exp, issued_at).await.unwrap();
        assert_eq!(
            validator.authenticate_at(&old, exp).await,
            Err(AuthError::Revoked)
        );

        // Past exp the entry is swept and the old token simply expires.
        let later = exp + 10;
        assert_eq!(
            validator.authenticate_at(&old, later).await,
            Err(AuthError::Expired)
        );

        let fresh = validator.codec().issue_at(&candidate(), later).unwrap();
        assert_eq!(
            validator.authenticate_at(&fresh, later).await.unwrap(),
            candidate()
        );
    }

    #[tokio::test]
    async fn test_expired_token() {
        let validator = get_test_validator();
        let now = chrono::Utc::now().timestamp();
        let token = validator
            .codec()
            .sign(&TokenPayload {
                iat: now - 100,
                exp: now - 1,
                data: candidate(),
            })
            .unwrap();

        assert_eq!(
            validator.authenticate(&token).await,
            Err(AuthError::Expired)
        );
        // Expiration is still readable for logout bookkeeping.
        assert_eq!(validator.get_expiration(&token), Some(now - 1));
    }
}
