//! Revocation store backend selection.
//!
//! # Environment Variables
//!
//! - `REVOCATION_BACKEND`: `postgres` (default) or `memory`
//!
//! The in-memory backend forgets revoked tokens on restart and is not shared
//! between processes; use it for local development and tests only.

use std::env;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevocationBackend {
    #[default]
    Postgres,
    Memory,
}

#[derive(Clone, Debug)]
pub struct RevocationConfig {
    pub backend: RevocationBackend,
}

impl RevocationConfig {
    pub fn from_env() -> Self {
        let backend = env::var("REVOCATION_BACKEND")
            .map(|v| parse_backend(&v))
            .unwrap_or_default();

        Self { backend }
    }
}

fn parse_backend(value: &str) -> RevocationBackend {
    match value.trim().to_lowercase().as_str() {
        "memory" => RevocationBackend::Memory,
        _ => RevocationBackend::Postgres,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_backend() {
        assert_eq!(parse_backend("memory"), RevocationBackend::Memory);
        assert_eq!(parse_backend(" Memory "), RevocationBackend::Memory);
        assert_eq!(parse_backend("postgres"), RevocationBackend::Postgres);
        assert_eq!(parse_backend("anything-else"), RevocationBackend::Postgres);
    }
}
