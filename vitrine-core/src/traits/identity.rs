use crate::errors::AuthError;
use crate::models::UserId;

/// Token verification seam. The recommendation engine treats a failed
/// `verify` and an absent token identically (unauthenticated path);
/// the side-effecting operations turn the failure into an error.
pub trait IIdentityVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<UserId, AuthError>;
}
