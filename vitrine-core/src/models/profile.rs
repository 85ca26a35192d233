use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::product::ProductId;
use crate::constants::{HISTORY_CAP, SEARCH_HISTORY_CAP};

/// User identifier (UUID v4 content).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One product view, most-recent-first in the profile history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewEvent {
    pub product_id: ProductId,
    pub at: DateTime<Utc>,
}

/// One search, most-recent-first in the profile history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchEvent {
    pub term: String,
    pub at: DateTime<Utc>,
}

/// Per-user behavior profile. View and search histories are capped
/// (FIFO eviction, most-recent-first); favorites is a set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    /// Most recent view first, never longer than [`HISTORY_CAP`].
    pub view_history: Vec<ViewEvent>,
    /// Most recent search first, never longer than [`SEARCH_HISTORY_CAP`].
    pub search_history: Vec<SearchEvent>,
    pub favorites: HashSet<ProductId>,
}

impl UserProfile {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            view_history: Vec::new(),
            search_history: Vec::new(),
            favorites: HashSet::new(),
        }
    }

    /// Prepend a view event, evicting the oldest beyond the cap.
    pub fn record_view(&mut self, product_id: ProductId, at: DateTime<Utc>) {
        self.view_history.insert(0, ViewEvent { product_id, at });
        self.view_history.truncate(HISTORY_CAP);
    }

    /// Prepend a search event, evicting the oldest beyond the cap.
    pub fn record_search(&mut self, term: impl Into<String>, at: DateTime<Utc>) {
        self.search_history.insert(
            0,
            SearchEvent {
                term: term.into(),
                at,
            },
        );
        self.search_history.truncate(SEARCH_HISTORY_CAP);
    }

    /// Flip favorite membership for a product. Returns the new state:
    /// `true` when the product is now favorited.
    pub fn toggle_favorite(&mut self, product_id: &ProductId) -> bool {
        if self.favorites.remove(product_id) {
            false
        } else {
            self.favorites.insert(product_id.clone());
            true
        }
    }

    pub fn is_favorite(&self, product_id: &ProductId) -> bool {
        self.favorites.contains(product_id)
    }
}
