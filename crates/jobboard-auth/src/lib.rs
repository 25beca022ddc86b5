//! # Jobboard Auth
//!
//! Everything between an `Authorization` header and a permitted action.
//!
//! - [`codec`]: HMAC-SHA256 signed tokens
//! - [`revocation`]: the list of logged-out tokens and its storage backends
//! - [`validator`]: credential to [`Principal`], honouring revocation
//! - [`guard`]: role and ownership checks

pub mod claims;
pub mod codec;
pub mod guard;
pub mod revocation;
pub mod validator;

pub use claims::{Principal, Role, TokenHeader, TokenPayload, UnknownRole};
pub use codec::{ParsedToken, TokenCodec};
pub use guard::{
    OwnedResource, OwnerField, ResourceLoader, require_owner_or_parent_owner,
    require_ownership, require_parent_ownership, require_resource_then_ownership, require_role,
};
pub use revocation::{
    MemoryRevocationStore, PgRevocationStore, RevocationList, RevocationStore, StoreError,
    token_hash,
};
pub use validator::{TokenValidator, strip_bearer};
