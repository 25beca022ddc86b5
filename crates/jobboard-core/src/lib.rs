//! # Jobboard Core
//!
//! Core types, errors, and utilities for the Jobboard API.
//!
//! - [`errors`]: [`AppError`] plus the authentication/authorization taxonomy
//! - [`response`]: the `{ success, data, message }` envelope
//! - [`password`]: bcrypt password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use jobboard_core::{AccessError, ApiResponse, AppError};
//!
//! async fn handler() -> Result<ApiResponse<Vec<JobOffer>>, AppError> {
//!     let offers = load_offers().await?;
//!     Ok(ApiResponse::ok(offers, "Job offers retrieved successfully"))
//! }
//! ```

pub mod errors;
pub mod password;
pub mod response;

// Re-export commonly used types at crate root
pub use errors::{AccessError, AppError, AuthError};
pub use password::{hash_password, verify_password};
pub use response::ApiResponse;
