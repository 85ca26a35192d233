/// Vitrine system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of entries retained in a profile's view history.
pub const HISTORY_CAP: usize = 20;

/// Maximum number of entries retained in a profile's search history.
pub const SEARCH_HISTORY_CAP: usize = 20;

/// Maximum number of products returned by a recommendation call.
pub const MAX_RECOMMENDATIONS: usize = 8;

/// Maximum number of products returned by autosuggest search.
pub const MAX_SUGGESTIONS: usize = 5;
