//! Category affinity: which categories does this profile's behavior
//! point at?

use std::collections::HashSet;

use vitrine_core::errors::VitrineResult;
use vitrine_core::models::{ProductId, UserProfile};
use vitrine_core::traits::IProductRepository;

/// Union of categories from the profile's recent views and current
/// favorites. Products that no longer exist in the catalog are skipped,
/// so a stale view history degrades to a smaller set rather than an
/// error.
pub fn preferred_categories(
    profile: &UserProfile,
    products: &dyn IProductRepository,
) -> VitrineResult<HashSet<String>> {
    let mut ids: Vec<ProductId> = profile
        .view_history
        .iter()
        .map(|view| view.product_id.clone())
        .collect();
    ids.extend(profile.favorites.iter().cloned());
    ids.sort_by(|a, b| a.0.cmp(&b.0));
    ids.dedup();

    if ids.is_empty() {
        return Ok(HashSet::new());
    }

    let referenced = products.get_bulk(&ids)?;
    Ok(referenced.into_iter().map(|p| p.category).collect())
}
