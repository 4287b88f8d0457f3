//! Pure transformations over the locally persisted movie collections.
//!
//! # Design
//! - Uniqueness is by movie id, enforced with a linear scan before each
//!   mutation; the stores are small, flat arrays.
//! - Mutation functions return whether anything changed so callers can skip
//!   a storage write when nothing did.
//! - Timestamps are passed in by the caller; nothing here reads a clock.

use chrono::{DateTime, Utc};
use cinehub_models::{MovieList, SavedMovie};
use uuid::Uuid;

/// Whether a store already holds the given movie id.
#[must_use]
pub fn contains(movies: &[SavedMovie], movie_id: u64) -> bool {
    movies.iter().any(|movie| movie.id == movie_id)
}

/// Add a snapshot unless its movie id is already present.
pub fn add(movies: &mut Vec<SavedMovie>, record: SavedMovie) -> bool {
    if contains(movies, record.id) {
        return false;
    }
    movies.push(record);
    true
}

/// Remove a snapshot by movie id.
pub fn remove(movies: &mut Vec<SavedMovie>, movie_id: u64) -> bool {
    let before = movies.len();
    movies.retain(|movie| movie.id != movie_id);
    movies.len() != before
}

/// Toggle membership and return the new state (`true` when now present).
///
/// Two consecutive toggles with the same record leave the store exactly as
/// it started.
pub fn toggle(movies: &mut Vec<SavedMovie>, record: SavedMovie) -> bool {
    if contains(movies, record.id) {
        remove(movies, record.id);
        false
    } else {
        add(movies, record);
        true
    }
}

/// Create a new list with a generated id and fresh timestamps.
pub fn create_list(
    lists: &mut Vec<MovieList>,
    name: &str,
    description: &str,
    now: DateTime<Utc>,
) -> MovieList {
    let list = MovieList {
        id: Uuid::new_v4(),
        name: name.trim().to_string(),
        description: description.trim().to_string(),
        movies: Vec::new(),
        created_at: now,
        updated_at: now,
    };
    lists.push(list.clone());
    list
}

/// Update a list's name and description.
pub fn rename_list(
    lists: &mut [MovieList],
    list_id: Uuid,
    name: &str,
    description: &str,
    now: DateTime<Utc>,
) -> bool {
    let Some(list) = lists.iter_mut().find(|list| list.id == list_id) else {
        return false;
    };
    list.name = name.trim().to_string();
    list.description = description.trim().to_string();
    list.updated_at = now;
    true
}

/// Delete a list wholesale.
pub fn delete_list(lists: &mut Vec<MovieList>, list_id: Uuid) -> bool {
    let before = lists.len();
    lists.retain(|list| list.id != list_id);
    lists.len() != before
}

/// Add a movie snapshot to a list; a no-op when the movie id already exists
/// in that list.
pub fn add_movie_to_list(
    lists: &mut [MovieList],
    list_id: Uuid,
    record: SavedMovie,
    now: DateTime<Utc>,
) -> bool {
    let Some(list) = lists.iter_mut().find(|list| list.id == list_id) else {
        return false;
    };
    if contains(&list.movies, record.id) {
        return false;
    }
    list.movies.push(record);
    list.updated_at = now;
    true
}

/// Remove a movie from a list by id.
pub fn remove_movie_from_list(
    lists: &mut [MovieList],
    list_id: Uuid,
    movie_id: u64,
    now: DateTime<Utc>,
) -> bool {
    let Some(list) = lists.iter_mut().find(|list| list.id == list_id) else {
        return false;
    };
    let before = list.movies.len();
    list.movies.retain(|movie| movie.id != movie_id);
    if list.movies.len() == before {
        return false;
    }
    list.updated_at = now;
    true
}

/// Whether one list holds the given movie id.
#[must_use]
pub fn list_contains_movie(lists: &[MovieList], list_id: Uuid, movie_id: u64) -> bool {
    lists
        .iter()
        .find(|list| list.id == list_id)
        .is_some_and(|list| contains(&list.movies, movie_id))
}

/// Total movie memberships across all lists.
#[must_use]
pub fn list_movie_total(lists: &[MovieList]) -> usize {
    lists.iter().map(|list| list.movies.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn saved(id: u64) -> SavedMovie {
        SavedMovie {
            id,
            title: format!("movie-{id}"),
            poster_path: None,
            vote_average: 6.5,
            release_date: Some("2020-01-01".to_string()),
            added_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn at(secs: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, secs).unwrap()
    }

    #[test]
    fn add_is_unique_by_id() {
        let mut store = vec![saved(1)];
        assert!(!add(&mut store, saved(1)));
        assert!(add(&mut store, saved(2)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn double_toggle_restores_the_store() {
        let mut store = vec![saved(7), saved(9)];
        let snapshot = store.clone();
        assert!(toggle(&mut store, saved(42)));
        assert!(contains(&store, 42));
        assert!(!toggle(&mut store, saved(42)));
        assert_eq!(store, snapshot);
    }

    #[test]
    fn toggle_reports_membership_after_the_call() {
        let mut store = Vec::new();
        assert!(toggle(&mut store, saved(3)));
        assert!(contains(&store, 3));
        assert!(!toggle(&mut store, saved(3)));
        assert!(!contains(&store, 3));
    }

    #[test]
    fn list_membership_is_a_no_op_on_duplicates() {
        let mut lists = Vec::new();
        let list = create_list(&mut lists, "  Noir  ", "", at(0));
        assert_eq!(list.name, "Noir");
        assert!(add_movie_to_list(&mut lists, list.id, saved(1), at(1)));
        assert!(!add_movie_to_list(&mut lists, list.id, saved(1), at(2)));
        assert_eq!(lists[0].movies.len(), 1);
        assert_eq!(lists[0].updated_at, at(1));
    }

    #[test]
    fn removing_a_movie_refreshes_updated_at() {
        let mut lists = Vec::new();
        let list = create_list(&mut lists, "Noir", "", at(0));
        add_movie_to_list(&mut lists, list.id, saved(1), at(1));
        assert!(remove_movie_from_list(&mut lists, list.id, 1, at(5)));
        assert!(!remove_movie_from_list(&mut lists, list.id, 1, at(6)));
        assert_eq!(lists[0].updated_at, at(5));
        assert!(lists[0].movies.is_empty());
    }

    #[test]
    fn rename_updates_metadata_and_timestamp() {
        let mut lists = Vec::new();
        let list = create_list(&mut lists, "Noir", "old", at(0));
        assert!(rename_list(&mut lists, list.id, " Cine Negro ", " nuevo ", at(3)));
        assert_eq!(lists[0].name, "Cine Negro");
        assert_eq!(lists[0].description, "nuevo");
        assert_eq!(lists[0].updated_at, at(3));
        assert!(!rename_list(&mut lists, Uuid::new_v4(), "x", "", at(4)));
    }

    #[test]
    fn delete_list_removes_only_the_target() {
        let mut lists = Vec::new();
        let first = create_list(&mut lists, "A", "", at(0));
        let second = create_list(&mut lists, "B", "", at(0));
        assert!(delete_list(&mut lists, first.id));
        assert!(!delete_list(&mut lists, first.id));
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].id, second.id);
    }

    #[test]
    fn totals_count_memberships_across_lists() {
        let mut lists = Vec::new();
        let a = create_list(&mut lists, "A", "", at(0));
        let b = create_list(&mut lists, "B", "", at(0));
        add_movie_to_list(&mut lists, a.id, saved(1), at(1));
        add_movie_to_list(&mut lists, b.id, saved(1), at(1));
        add_movie_to_list(&mut lists, b.id, saved(2), at(1));
        assert_eq!(list_movie_total(&lists), 3);
        assert!(list_contains_movie(&lists, b.id, 2));
        assert!(!list_contains_movie(&lists, a.id, 2));
    }
}
