//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - The overlay slice is the single source of truth for the open detail
//!   panels; nested panels switch movies through it instead of broadcasting
//!   DOM events.
//! - Overlay resolution carries the loading movie id so a response that
//!   arrives after a close or a replacement is dropped, not applied.

use crate::core::library;
use cinehub_models::{MovieDetail, MovieList, SavedMovie, UserReview};
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Locally persisted collections plus the browser identity.
    pub library: LibraryState,
    /// Detail overlay state.
    pub overlay: OverlayState,
    /// Transient notification stack.
    pub toasts: ToastsState,
}

/// In-memory mirror of the four persisted stores.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LibraryState {
    /// Favorite movie snapshots.
    pub favorites: Vec<SavedMovie>,
    /// Watched movie snapshots.
    pub watched: Vec<SavedMovie>,
    /// User-created lists.
    pub lists: Vec<MovieList>,
    /// User-authored reviews.
    pub reviews: Vec<UserReview>,
    /// Per-browser user id, set during hydration.
    pub user_id: String,
    /// Whether the slices were loaded from storage yet.
    pub hydrated: bool,
}

/// Count shown on the My Movies navigation badge: watched movies plus list
/// memberships.
#[must_use]
pub fn my_movies_count(state: &LibraryState) -> usize {
    state.watched.len() + library::list_movie_total(&state.lists)
}

/// Detail overlay slice.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct OverlayState {
    /// Movie overlay lifecycle.
    pub movie: MovieOverlay,
    /// Open person overlay, stacked above the movie overlay.
    pub person: Option<u64>,
}

/// Movie overlay lifecycle: closed, loading a movie, or open.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum MovieOverlay {
    /// No overlay visible.
    #[default]
    Closed,
    /// Detail fetch in flight for the given movie id.
    Loading(u64),
    /// Overlay open with a full movie record.
    Open(MovieDetail),
}

/// Begin opening the movie overlay; closes any person overlay so a nested
/// filmography click replaces the whole stack.
pub fn request_movie(overlay: &mut OverlayState, movie_id: u64) {
    overlay.movie = MovieOverlay::Loading(movie_id);
    overlay.person = None;
}

/// Apply a fetched movie record; dropped unless the overlay is still loading
/// that id.
pub fn resolve_movie(overlay: &mut OverlayState, detail: MovieDetail) -> bool {
    if overlay.movie == MovieOverlay::Loading(detail.id) {
        overlay.movie = MovieOverlay::Open(detail);
        true
    } else {
        false
    }
}

/// Drop a failed movie fetch back to closed, unless a newer request took
/// over in the meantime.
pub fn abort_movie(overlay: &mut OverlayState, movie_id: u64) {
    if overlay.movie == MovieOverlay::Loading(movie_id) {
        overlay.movie = MovieOverlay::Closed;
    }
}

/// Close the movie overlay (and the person overlay stacked on it).
pub fn close_movie(overlay: &mut OverlayState) {
    overlay.movie = MovieOverlay::Closed;
    overlay.person = None;
}

/// Open the person overlay above the current movie overlay.
pub const fn open_person(overlay: &mut OverlayState, person_id: u64) {
    overlay.person = Some(person_id);
}

/// Close only the person overlay.
pub const fn close_person(overlay: &mut OverlayState) {
    overlay.person = None;
}

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Informational toast.
    Info,
    /// Success toast.
    Success,
    /// Error toast.
    Error,
}

/// A single transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast id, used for dismissal.
    pub id: u64,
    /// Severity of the notification.
    pub kind: ToastKind,
    /// Message shown to the user.
    pub message: String,
}

const MAX_VISIBLE_TOASTS: usize = 4;

/// Notification stack slice.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ToastsState {
    /// Visible toasts, oldest first.
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastsState {
    /// Push a toast, dropping the oldest beyond the visible cap.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.next_id += 1;
        self.items.push(Toast {
            id: self.next_id,
            kind,
            message: message.into(),
        });
        if self.items.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.items.len() - MAX_VISIBLE_TOASTS;
            self.items.drain(0..overflow);
        }
    }

    /// Remove a toast by id.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(id: u64) -> MovieDetail {
        MovieDetail {
            id,
            title: format!("movie-{id}"),
            poster_path: None,
            vote_average: 7.0,
            vote_count: 100,
            release_date: None,
            overview: None,
            popularity: 10.0,
            original_language: Some("en".to_string()),
        }
    }

    #[test]
    fn overlay_walks_closed_loading_open() {
        let mut overlay = OverlayState::default();
        request_movie(&mut overlay, 5);
        assert_eq!(overlay.movie, MovieOverlay::Loading(5));
        assert!(resolve_movie(&mut overlay, detail(5)));
        assert!(matches!(overlay.movie, MovieOverlay::Open(_)));
        close_movie(&mut overlay);
        assert_eq!(overlay.movie, MovieOverlay::Closed);
    }

    #[test]
    fn stale_resolution_is_dropped() {
        let mut overlay = OverlayState::default();
        request_movie(&mut overlay, 5);
        request_movie(&mut overlay, 6);
        assert!(!resolve_movie(&mut overlay, detail(5)));
        assert_eq!(overlay.movie, MovieOverlay::Loading(6));

        close_movie(&mut overlay);
        assert!(!resolve_movie(&mut overlay, detail(6)));
        assert_eq!(overlay.movie, MovieOverlay::Closed);
    }

    #[test]
    fn abort_only_cancels_its_own_request() {
        let mut overlay = OverlayState::default();
        request_movie(&mut overlay, 5);
        abort_movie(&mut overlay, 9);
        assert_eq!(overlay.movie, MovieOverlay::Loading(5));
        abort_movie(&mut overlay, 5);
        assert_eq!(overlay.movie, MovieOverlay::Closed);
    }

    #[test]
    fn filmography_click_replaces_the_stack() {
        let mut overlay = OverlayState::default();
        request_movie(&mut overlay, 5);
        assert!(resolve_movie(&mut overlay, detail(5)));
        open_person(&mut overlay, 77);
        assert_eq!(overlay.person, Some(77));

        request_movie(&mut overlay, 6);
        assert_eq!(overlay.person, None);
        assert_eq!(overlay.movie, MovieOverlay::Loading(6));
    }

    #[test]
    fn toast_stack_is_capped() {
        let mut toasts = ToastsState::default();
        for n in 0..6 {
            toasts.push(ToastKind::Info, format!("toast {n}"));
        }
        assert_eq!(toasts.items.len(), 4);
        assert_eq!(toasts.items[0].message, "toast 2");
        let last_id = toasts.items.last().unwrap().id;
        toasts.dismiss(last_id);
        assert_eq!(toasts.items.len(), 3);
    }

    #[test]
    fn my_movies_badge_counts_watched_and_list_entries() {
        let mut state = LibraryState::default();
        assert_eq!(my_movies_count(&state), 0);
        state.watched.push(cinehub_models::SavedMovie {
            id: 1,
            title: "a".to_string(),
            poster_path: None,
            vote_average: 5.0,
            release_date: None,
            added_at: chrono::Utc::now(),
        });
        assert_eq!(my_movies_count(&state), 1);
    }
}
