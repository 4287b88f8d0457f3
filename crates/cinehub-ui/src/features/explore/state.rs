//! Genre taxonomy and rail paging for the explore page.
//!
//! # Design
//! - The taxonomy is fixed client-side; only the movies come from the
//!   catalog.
//! - Each rail holds up to 18 records paged six at a time over three pages;
//!   page three is a hard stop even if the catalog returned more.

use cinehub_models::MovieSummary;

/// One catalog genre with its fixed display metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Genre {
    /// Catalog genre identifier.
    pub id: u64,
    /// Display name.
    pub name: &'static str,
    /// Decorative icon.
    pub icon: &'static str,
}

/// Fixed taxonomy shown on the explore page.
pub const GENRES: [Genre; 8] = [
    Genre {
        id: 28,
        name: "Acción",
        icon: "💥",
    },
    Genre {
        id: 35,
        name: "Comedia",
        icon: "😂",
    },
    Genre {
        id: 18,
        name: "Drama",
        icon: "🎭",
    },
    Genre {
        id: 27,
        name: "Terror",
        icon: "👻",
    },
    Genre {
        id: 878,
        name: "Ciencia Ficción",
        icon: "🚀",
    },
    Genre {
        id: 10749,
        name: "Romance",
        icon: "💕",
    },
    Genre {
        id: 16,
        name: "Animación",
        icon: "🎨",
    },
    Genre {
        id: 12,
        name: "Aventura",
        icon: "🗺️",
    },
];

/// Records kept per genre rail.
pub const ROW_CAPACITY: usize = 18;
/// Records visible per rail page.
pub const PAGE_SIZE: usize = 6;
/// Pages per rail.
pub const PAGE_COUNT: usize = 3;

/// Pager over one genre rail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RailPager {
    /// Current 0-based page.
    pub page: usize,
}

impl RailPager {
    /// Whether the previous-page control is enabled.
    #[must_use]
    pub const fn has_prev(self) -> bool {
        self.page > 0
    }

    /// Whether the next-page control is enabled for a rail of `total` items.
    ///
    /// The last page is a hard stop regardless of how many items remain.
    #[must_use]
    pub const fn has_next(self, total: usize) -> bool {
        self.page + 1 < PAGE_COUNT && total > (self.page + 1) * PAGE_SIZE
    }

    /// Step back one page, clamped at the first.
    #[must_use]
    pub const fn prev(self) -> Self {
        Self {
            page: self.page.saturating_sub(1),
        }
    }

    /// Step forward one page when the rail has more to show.
    #[must_use]
    pub const fn next(self, total: usize) -> Self {
        if self.has_next(total) {
            Self { page: self.page + 1 }
        } else {
            self
        }
    }

    /// The rail window visible on the current page.
    #[must_use]
    pub fn window<'a>(self, items: &'a [MovieSummary]) -> &'a [MovieSummary] {
        let start = (self.page * PAGE_SIZE).min(items.len());
        let end = (start + PAGE_SIZE).min(items.len());
        &items[start..end]
    }
}

/// Toggle the single-genre filter: selecting the active genre clears it.
#[must_use]
pub const fn toggle_filter(current: Option<u64>, genre_id: u64) -> Option<u64> {
    match current {
        Some(active) if active == genre_id => None,
        _ => Some(genre_id),
    }
}

/// Genres visible under the current filter.
#[must_use]
pub fn visible_genres(filter: Option<u64>) -> Vec<Genre> {
    GENRES
        .iter()
        .copied()
        .filter(|genre| filter.is_none_or(|active| active == genre.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movies(count: usize) -> Vec<MovieSummary> {
        (0..count as u64)
            .map(|id| MovieSummary {
                id,
                title: format!("movie-{id}"),
                poster_path: None,
                vote_average: 7.0,
                release_date: None,
                overview: None,
            })
            .collect()
    }

    #[test]
    fn first_page_disables_prev_and_enables_next() {
        let pager = RailPager::default();
        assert!(!pager.has_prev());
        assert!(pager.has_next(18));
    }

    #[test]
    fn last_page_disables_next_regardless_of_remaining_items() {
        let pager = RailPager { page: 2 };
        assert!(pager.has_prev());
        assert!(!pager.has_next(18));
        assert!(!pager.has_next(100));
        assert_eq!(pager.next(100), pager);
    }

    #[test]
    fn next_requires_items_beyond_the_window() {
        let pager = RailPager { page: 1 };
        assert!(!pager.has_next(12));
        assert!(pager.has_next(13));
    }

    #[test]
    fn window_slices_the_current_page() {
        let rail = movies(18);
        let pager = RailPager { page: 2 };
        let window = pager.window(&rail);
        assert_eq!(window.len(), PAGE_SIZE);
        assert_eq!(window[0].id, 12);

        let short = movies(8);
        let pager = RailPager { page: 1 };
        assert_eq!(pager.window(&short).len(), 2);
    }

    #[test]
    fn filter_toggles_off_on_reselect() {
        assert_eq!(toggle_filter(None, 28), Some(28));
        assert_eq!(toggle_filter(Some(28), 28), None);
        assert_eq!(toggle_filter(Some(28), 35), Some(35));
    }

    #[test]
    fn visible_genres_narrow_under_a_filter() {
        assert_eq!(visible_genres(None).len(), GENRES.len());
        let narrowed = visible_genres(Some(18));
        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed[0].name, "Drama");
    }
}
