//! Token claim structures.
//!
//! - [`Principal`]: the identity carried in the token's `data` field
//! - [`Role`]: the closed set of account roles
//! - [`TokenHeader`] / [`TokenPayload`]: the JSON documents behind the first
//!   two token segments

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Account role. Candidates and recruiters are disjoint; neither outranks the
/// other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Role {
    Candidate,
    Recruiter,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Candidate => "Candidate",
            Role::Recruiter => "Recruiter",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Candidate" => Ok(Role::Candidate),
            "Recruiter" => Ok(Role::Recruiter),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = UnknownRole;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The authenticated identity for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Principal {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub email: String,
    pub role: Role,
}

impl Principal {
    pub fn new(id: i64, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            email: email.into(),
            role,
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}

/// Accepts ids encoded either as JSON numbers or as numeric strings, which is
/// how some older issuers serialized database ids.
fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// First token segment. Field order is part of the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHeader {
    pub typ: String,
    pub alg: String,
}

impl Default for TokenHeader {
    fn default() -> Self {
        Self {
            typ: "JWT".to_string(),
            alg: "HS256".to_string(),
        }
    }
}

/// Second token segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    /// Issued-at (Unix timestamp, seconds)
    pub iat: i64,
    /// Expiration (Unix timestamp, seconds)
    pub exp: i64,
    pub data: Principal,
}

impl TokenPayload {
    pub fn new(principal: Principal, issued_at: i64, ttl: i64) -> Self {
        Self {
            iat: issued_at,
            exp: issued_at + ttl,
            data: principal,
        }
    }

    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp < now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_serializes_in_wire_order() {
        let header = serde_json::to_string(&TokenHeader::default()).unwrap();
        assert_eq!(header, r#"{"typ":"JWT","alg":"HS256"}"#);
    }

    #[test]
    fn test_payload_serialize() {
        let payload = TokenPayload::new(
            Principal::new(10, "recruiter@example.com", Role::Recruiter),
            1_700_000_000,
            3600,
        );
        let serialized = serde_json::to_string(&payload).unwrap();
        assert_eq!(
            serialized,
            r#"{"iat":1700000000,"exp":1700003600,"data":{"id":10,"email":"recruiter@example.com","role":"Recruiter"}}"#
        );
    }

    #[test]
    fn test_principal_accepts_string_id() {
        let json = r#"{"id":"42","email":"cand@example.com","role":"Candidate"}"#;
        let principal: Principal = serde_json::from_str(json).unwrap();
        assert_eq!(principal.id, 42);
        assert_eq!(principal.role, Role::Candidate);
    }

    #[test]
    fn test_principal_rejects_unknown_role() {
        let json = r#"{"id":1,"email":"a@example.com","role":"Admin"}"#;
        assert!(serde_json::from_str::<Principal>(json).is_err());
    }

    #[test]
    fn test_role_round_trips_through_str() {
        for role in [Role::Candidate, Role::Recruiter] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("recruiter".parse::<Role>().is_err());
    }

    #[test]
    fn test_expiry_boundary() {
        let payload = TokenPayload::new(Principal::new(1, "a@example.com", Role::Candidate), 100, 10);
        assert!(!payload.is_expired_at(110));
        assert!(payload.is_expired_at(111));
    }
}
