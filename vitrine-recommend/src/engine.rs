//! RecommendationEngine: three ranked fallbacks behind one call.
//!
//! Branch order: category affinity → query override → top-rated.
//! An invalid token never fails `recommend`; it degrades to the
//! unauthenticated path. The side-effecting siblings (`track_view`,
//! `toggle_favorite`, `favorites`) do require authentication.

use tracing::{debug, info};

use vitrine_core::config::RecommendConfig;
use vitrine_core::errors::{AuthError, VitrineResult};
use vitrine_core::models::{Product, ProductId, RecommendationResult, UserId};
use vitrine_core::traits::{IIdentityVerifier, IProductRepository, IProfileStore};

use crate::affinity;

/// The main recommendation engine. Composes over the product repository,
/// the profile store, and the identity verifier; owns no state beyond
/// its config.
pub struct RecommendationEngine<'a> {
    products: &'a dyn IProductRepository,
    profiles: &'a dyn IProfileStore,
    identity: &'a dyn IIdentityVerifier,
    config: RecommendConfig,
}

impl<'a> RecommendationEngine<'a> {
    pub fn new(
        products: &'a dyn IProductRepository,
        profiles: &'a dyn IProfileStore,
        identity: &'a dyn IIdentityVerifier,
        config: RecommendConfig,
    ) -> Self {
        Self {
            products,
            profiles,
            identity,
            config,
        }
    }

    /// Produce an ordered list of products for display.
    ///
    /// Both arguments are optional: an absent or invalid token serves
    /// the general path, an absent or blank query skips the override.
    pub fn recommend(
        &self,
        token: Option<&str>,
        query: Option<&str>,
    ) -> VitrineResult<RecommendationResult> {
        // Soft identity resolution: a bad token must never block the page.
        let user = token.and_then(|t| match self.identity.verify(t) {
            Ok(user) => Some(user),
            Err(e) => {
                debug!(error = %e, "token rejected, serving general recommendations");
                None
            }
        });

        let query = query.map(str::trim).filter(|q| !q.is_empty());

        let mut result: Option<RecommendationResult> = None;

        // Step 1: category affinity, authenticated callers only.
        if let Some(user) = &user {
            // The query is profile signal before it is a filter.
            if let Some(q) = query {
                self.profiles.append_search(user, q)?;
            }

            if let Some(profile) = self.profiles.get(user)? {
                let preferred = affinity::preferred_categories(&profile, self.products)?;
                debug!(user = %user, categories = preferred.len(), "derived category affinity");

                if !preferred.is_empty() {
                    let hits = self.products.find_by_categories(
                        &preferred,
                        &profile.favorites,
                        self.config.max_results,
                    )?;
                    if !hits.is_empty() {
                        result = Some(RecommendationResult::personalized(hits));
                    }
                }
            }
        }

        // Step 2: query override. Replaces the affinity result when the
        // override policy is on; otherwise only fills an empty slot.
        if let Some(q) = query {
            if self.config.query_override || result.is_none() {
                let hits = self.products.search_text(q, self.config.max_results)?;
                if !hits.is_empty() {
                    result = Some(RecommendationResult {
                        products: hits,
                        personalized: user.is_some(),
                    });
                }
            }
        }

        // Step 3: top-rated fallback.
        let result = match result {
            Some(r) => r,
            None => RecommendationResult::general(
                self.products.top_rated(self.config.max_results)?,
            ),
        };

        info!(
            products = result.products.len(),
            personalized = result.personalized,
            authenticated = user.is_some(),
            "recommendation complete"
        );
        Ok(result)
    }

    /// Record a product view in the caller's profile.
    /// Requires a valid token.
    pub fn track_view(&self, token: Option<&str>, product: &ProductId) -> VitrineResult<()> {
        let user = self.authenticate(token)?;
        self.profiles.append_view(&user, product)?;
        debug!(user = %user, product = %product, "view tracked");
        Ok(())
    }

    /// Flip favorite membership for the caller. Requires a valid token.
    /// Returns the new state so the caller can render without a
    /// follow-up read.
    pub fn toggle_favorite(
        &self,
        token: Option<&str>,
        product: &ProductId,
    ) -> VitrineResult<bool> {
        let user = self.authenticate(token)?;
        let favorited = self.profiles.toggle_favorite(&user, product)?;
        debug!(user = %user, product = %product, favorited, "favorite toggled");
        Ok(favorited)
    }

    /// The caller's favorited products, rating descending.
    /// Requires a valid token.
    pub fn favorites(&self, token: Option<&str>) -> VitrineResult<Vec<Product>> {
        let user = self.authenticate(token)?;
        let Some(profile) = self.profiles.get(&user)? else {
            return Ok(Vec::new());
        };
        let ids: Vec<ProductId> = profile.favorites.into_iter().collect();
        self.products.get_bulk(&ids)
    }

    fn authenticate(&self, token: Option<&str>) -> Result<UserId, AuthError> {
        let token = token.ok_or(AuthError::MissingToken)?;
        self.identity.verify(token)
    }
}
