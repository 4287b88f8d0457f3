//! Browser storage bindings for the library collections.
//!
//! # Design
//! - One JSON-array blob per collection under a fixed key; every write
//!   rewrites the whole blob.
//! - Reads treat an absent key or a parse failure as an empty collection.
//! - Write failures are logged to the console and otherwise ignored; the
//!   in-memory state stays authoritative for the session.

use cinehub_models::{MovieList, SavedMovie, UserReview};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

pub(crate) const FAVORITES_KEY: &str = "cinehub.favorites";
pub(crate) const WATCHED_KEY: &str = "cinehub.watched";
pub(crate) const LISTS_KEY: &str = "cinehub.lists";
pub(crate) const REVIEWS_KEY: &str = "cinehub.reviews";
pub(crate) const USER_ID_KEY: &str = "cinehub.user_id";

/// Load the favorites store.
#[must_use]
pub fn load_favorites() -> Vec<SavedMovie> {
    load_collection(FAVORITES_KEY)
}

/// Persist the favorites store.
pub fn persist_favorites(movies: &[SavedMovie]) {
    set_storage(FAVORITES_KEY, movies);
}

/// Load the watched store.
#[must_use]
pub fn load_watched() -> Vec<SavedMovie> {
    load_collection(WATCHED_KEY)
}

/// Persist the watched store.
pub fn persist_watched(movies: &[SavedMovie]) {
    set_storage(WATCHED_KEY, movies);
}

/// Load the custom lists store.
#[must_use]
pub fn load_lists() -> Vec<MovieList> {
    load_collection(LISTS_KEY)
}

/// Persist the custom lists store.
pub fn persist_lists(lists: &[MovieList]) {
    set_storage(LISTS_KEY, lists);
}

/// Load the reviews store.
#[must_use]
pub fn load_reviews() -> Vec<UserReview> {
    load_collection(REVIEWS_KEY)
}

/// Persist the reviews store.
pub fn persist_reviews(reviews: &[UserReview]) {
    set_storage(REVIEWS_KEY, reviews);
}

/// Load the per-browser user id, generating and persisting one on first use.
#[must_use]
pub fn load_or_create_user_id() -> String {
    if let Ok(value) = LocalStorage::get::<String>(USER_ID_KEY)
        && !value.trim().is_empty()
    {
        return value;
    }
    let user_id = format!("user_{}", Uuid::new_v4().simple());
    set_storage(USER_ID_KEY, &user_id);
    user_id
}

fn load_collection<T: DeserializeOwned>(key: &'static str) -> Vec<T> {
    LocalStorage::get::<Vec<T>>(key).unwrap_or_default()
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        console::error!("storage operation failed", "set", key, err.to_string());
    }
}
