/// Identity verification errors. Only the side-effecting operations
/// (`track_view`, `toggle_favorite`, `add_review`) surface these;
/// `recommend` degrades to the unauthenticated path instead.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("authentication required")]
    MissingToken,

    #[error("invalid or expired token")]
    InvalidToken,
}
