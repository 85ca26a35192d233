//! Trait seams between the engines and their collaborators. The engines
//! only ever see these interfaces; concrete adapters live in
//! `vitrine-storage` (SQLite) and `vitrine-auth` (JWT).

pub mod identity;
pub mod products;
pub mod profiles;
pub mod reviews;

pub use identity::IIdentityVerifier;
pub use products::IProductRepository;
pub use profiles::IProfileStore;
pub use reviews::IReviewStore;
