//! # Jobboard Config
//!
//! Configuration types for the Jobboard API, loaded from environment variables:
//!
//! - [`jwt`]: token secret and lifetime
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`revocation`]: revocation store backend selection
//!
//! # Example
//!
//! ```ignore
//! use jobboard_config::{CorsConfig, JwtConfig, RevocationConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let revocation_config = RevocationConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod revocation;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use revocation::{RevocationBackend, RevocationConfig};
