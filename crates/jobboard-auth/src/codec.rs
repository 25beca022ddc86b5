//! Signed token encoding and verification.
//!
//! Tokens use the compact JWT layout with HMAC-SHA256:
//!
//! ```text
//! base64url(header_json) "." base64url(payload_json) "." base64url(hmac_sha256(secret, header "." payload))
//! ```
//!
//! Segments are base64url without padding. The codec is a pure function of its
//! input and the [`JwtConfig`] it was built from; revocation lives elsewhere
//! (see [`crate::revocation`]).
//!
//! # Example
//!
//! ```ignore
//! use jobboard_auth::{Principal, Role, TokenCodec};
//! use jobboard_config::JwtConfig;
//!
//! let codec = TokenCodec::new(&JwtConfig::from_env());
//! let token = codec.issue(&Principal::new(10, "r@example.com", Role::Recruiter))?;
//! let principal = codec.verify(&token)?;
//! ```

use std::fmt;
use std::sync::Arc;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::de::DeserializeOwned;
use sha2::Sha256;

use jobboard_config::JwtConfig;
use jobboard_core::{AppError, AuthError};

use crate::claims::{Principal, TokenHeader, TokenPayload};

type HmacSha256 = Hmac<Sha256>;

/// The three raw segments of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedToken<'a> {
    pub header: &'a str,
    pub payload: &'a str,
    pub signature: &'a str,
}

impl<'a> ParsedToken<'a> {
    /// Splits `token` into exactly three non-empty segments.
    pub fn parse(token: &'a str) -> Result<Self, AuthError> {
        let mut parts = token.split('.');

        let (Some(header), Some(payload), Some(signature), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(AuthError::Malformed);
        };

        if header.is_empty() || payload.is_empty() || signature.is_empty() {
            return Err(AuthError::Malformed);
        }

        Ok(Self {
            header,
            payload,
            signature,
        })
    }

    pub fn decode_header(&self) -> Result<TokenHeader, AuthError> {
        decode_segment(self.header)
    }

    pub fn decode_payload(&self) -> Result<TokenPayload, AuthError> {
        decode_segment(self.payload)
    }
}

fn decode_segment<T: DeserializeOwned>(segment: &str) -> Result<T, AuthError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|_| AuthError::Malformed)?;
    serde_json::from_slice(&bytes).map_err(|_| AuthError::Malformed)
}

fn encode_segment<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    let json = serde_json::to_vec(value)
        .map_err(|e| AppError::internal_error(format!("Failed to serialize token segment: {}", e)))?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Issues and verifies signed tokens.
#[derive(Clone)]
pub struct TokenCodec {
    secret: Arc<[u8]>,
    ttl: i64,
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenCodec {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            secret: Arc::from(config.secret.as_bytes()),
            ttl: config.access_token_expiry,
        }
    }

    /// Token lifetime in seconds.
    pub fn ttl(&self) -> i64 {
        self.ttl
    }

    fn mac(&self) -> HmacSha256 {
        // HMAC accepts keys of any length, so this cannot fail.
        <HmacSha256 as Mac>::new_from_slice(&self.secret)
            .unwrap_or_else(|_| unreachable!("HMAC accepts keys of any length"))
    }

    /// MAC primed with the signing input `header.payload`.
    fn mac_for(&self, header: &str, payload: &str) -> HmacSha256 {
        let mut mac = self.mac();
        mac.update(header.as_bytes());
        mac.update(b".");
        mac.update(payload.as_bytes());
        mac
    }

    /// Issues a token for `principal` valid for the configured lifetime.
    pub fn issue(&self, principal: &Principal) -> Result<String, AppError> {
        self.issue_at(principal, Utc::now().timestamp())
    }

    /// Issues a token as if the current time were `issued_at`.
    pub fn issue_at(&self, principal: &Principal, issued_at: i64) -> Result<String, AppError> {
        self.sign(&TokenPayload::new(principal.clone(), issued_at, self.ttl))
    }

    /// Signs an explicit payload with the default header.
    pub fn sign(&self, payload: &TokenPayload) -> Result<String, AppError> {
        let header = encode_segment(&TokenHeader::default())?;
        let payload = encode_segment(payload)?;
        let mac = self.mac_for(&header, &payload);
        let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        Ok(format!("{}.{}.{}", header, payload, signature))
    }

    /// Verifies signature and expiry against the current time.
    pub fn verify(&self, token: &str) -> Result<Principal, AuthError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Verifies a token as if the current time were `now`.
    ///
    /// Checks run in order: structure, signature, segment decoding, expiry.
    pub fn verify_at(&self, token: &str, now: i64) -> Result<Principal, AuthError> {
        let parsed = ParsedToken::parse(token)?;

        let received = URL_SAFE_NO_PAD
            .decode(parsed.signature)
            .map_err(|_| AuthError::Invalid)?;

        // verify_slice compares in constant time
        self.mac_for(parsed.header, parsed.payload)
            .verify_slice(&received)
            .map_err(|_| AuthError::Invalid)?;

        parsed.decode_header()?;
        let payload = parsed.decode_payload()?;

        if payload.is_expired_at(now) {
            return Err(AuthError::Expired);
        }

        Ok(payload.data)
    }

    /// Reads `exp` without checking the signature or expiry.
    pub fn expiration(&self, token: &str) -> Option<i64> {
        let parsed = ParsedToken::parse(token).ok()?;
        let bytes = URL_SAFE_NO_PAD.decode(parsed.payload).ok()?;
        let payload: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
        payload.get("exp")?.as_i64()
    }
}
