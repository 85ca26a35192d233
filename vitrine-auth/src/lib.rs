//! # vitrine-auth
//!
//! HS256 JWT adapter for the `IIdentityVerifier` seam. Token issuance is
//! included so integration callers and tests can mint valid tokens
//! against the same secret.

pub mod verifier;

pub use verifier::{Claims, JwtVerifier};
