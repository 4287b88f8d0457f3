//! Tab state for the top-reviews page.

/// Entries shown per ranking tab.
pub const TOP_LIMIT: usize = 20;

/// The two ranking tabs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ReviewsTab {
    /// Catalog-wide top-rated movies.
    #[default]
    Remote,
    /// Movies ranked by locally stored review counts.
    Local,
}
