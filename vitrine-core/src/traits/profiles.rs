use crate::errors::VitrineResult;
use crate::models::{ProductId, UserId, UserProfile};

/// Per-user behavior profiles: capped view/search histories and the
/// favorites set. Capped appends are atomic per call (insert + trim in
/// one storage transaction); concurrent writers to the same profile get
/// last-write-wins.
pub trait IProfileStore: Send + Sync {
    /// Fetch a profile. `Ok(None)` when the user has no profile yet.
    fn get(&self, user: &UserId) -> VitrineResult<Option<UserProfile>>;

    /// Prepend a view event, evicting the oldest beyond the cap of 20.
    /// Creates the profile if absent.
    fn append_view(&self, user: &UserId, product: &ProductId) -> VitrineResult<()>;

    /// Prepend a search event, evicting the oldest beyond the cap of 20.
    /// Creates the profile if absent.
    fn append_search(&self, user: &UserId, term: &str) -> VitrineResult<()>;

    /// Flip favorite membership. Returns the new state: `true` when the
    /// product is now favorited. Creates the profile if absent.
    fn toggle_favorite(&self, user: &UserId, product: &ProductId) -> VitrineResult<bool>;
}
