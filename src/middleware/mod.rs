//! Request extractors and authorization checks.
//!
//! - [`auth`]: `AuthUser` and the role-gated extractors built on it
//! - [`guard`]: ownership checks that load the target resource
//!
//! A protected handler runs only after every extractor in its signature
//! succeeded:
//!
//! 1. `AuthUser` reads `Authorization`, strips `Bearer ` and validates the token
//!    (revocation first, then signature and expiry)
//! 2. `RequireRecruiter` / `RequireCandidate` check the principal's role
//! 3. the handler calls a [`guard`] check before touching an owned resource
//!
//! ```ignore
//! use crate::middleware::auth::RequireRecruiter;
//! use crate::middleware::guard::require_offer_owner;
//!
//! async fn delete_job_offer(
//!     State(state): State<AppState>,
//!     RequireRecruiter(auth_user): RequireRecruiter,
//!     Path(id): Path<i64>,
//! ) -> Result<ApiResponse<()>, AppError> {
//!     require_offer_owner(&state.db, id, &auth_user.0).await?;
//!     // ...
//! }
//! ```

pub mod auth;
pub mod guard;
