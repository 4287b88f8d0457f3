//! Actions shared by the pages and the detail overlay.
//!
//! # Design
//! - Opening a movie routes through the overlay slice; the fetched record is
//!   applied only while that request is still the active one.
//! - Library mutations run through the pure store transforms and persist the
//!   full updated blob in the same reduction.

use crate::core::store::{self, AppStore, ToastKind};
use crate::core::{library, reviews};
use crate::features::movie_detail::state;
use crate::i18n::TranslationBundle;
use crate::services::library as storage;
use crate::services::share::{ShareOutcome, share_movie};
use crate::services::tmdb::TmdbClient;
use chrono::Utc;
use cinehub_models::{MovieDetail, ReviewDraft, SavedMovie};
use gloo::console;
use std::rc::Rc;
use uuid::Uuid;
use yewdux::prelude::Dispatch;

/// Open the movie overlay for `movie_id`, fetching the full record.
pub(crate) fn open_movie(dispatch: &Dispatch<AppStore>, client: &Rc<TmdbClient>, movie_id: u64) {
    dispatch.reduce_mut(|store| store::request_movie(&mut store.overlay, movie_id));
    let dispatch = dispatch.clone();
    let client = client.clone();
    yew::platform::spawn_local(async move {
        match client.movie_details(movie_id).await {
            Ok(detail) => dispatch.reduce_mut(|store| {
                store::resolve_movie(&mut store.overlay, detail);
            }),
            Err(err) => {
                console::error!("failed to load movie detail", err.to_string());
                dispatch.reduce_mut(|store| store::abort_movie(&mut store.overlay, movie_id));
            }
        }
    });
}

pub(crate) fn toggle_favorite(dispatch: &Dispatch<AppStore>, movie: &MovieDetail) {
    let record = SavedMovie::from_detail(movie, Utc::now());
    dispatch.reduce_mut(move |store| {
        library::toggle(&mut store.library.favorites, record);
        storage::persist_favorites(&store.library.favorites);
    });
}

pub(crate) fn toggle_watched(dispatch: &Dispatch<AppStore>, movie: &MovieDetail) {
    let record = SavedMovie::from_detail(movie, Utc::now());
    dispatch.reduce_mut(move |store| {
        library::toggle(&mut store.library.watched, record);
        storage::persist_watched(&store.library.watched);
    });
}

pub(crate) fn remove_favorite(dispatch: &Dispatch<AppStore>, movie_id: u64) {
    dispatch.reduce_mut(|store| {
        library::remove(&mut store.library.favorites, movie_id);
        storage::persist_favorites(&store.library.favorites);
    });
}

pub(crate) fn remove_watched(dispatch: &Dispatch<AppStore>, movie_id: u64) {
    dispatch.reduce_mut(|store| {
        library::remove(&mut store.library.watched, movie_id);
        storage::persist_watched(&store.library.watched);
    });
}

pub(crate) fn create_list(dispatch: &Dispatch<AppStore>, name: &str, description: &str) {
    let name = name.to_string();
    let description = description.to_string();
    dispatch.reduce_mut(move |store| {
        library::create_list(&mut store.library.lists, &name, &description, Utc::now());
        storage::persist_lists(&store.library.lists);
    });
}

pub(crate) fn delete_list(dispatch: &Dispatch<AppStore>, list_id: Uuid) {
    dispatch.reduce_mut(move |store| {
        library::delete_list(&mut store.library.lists, list_id);
        storage::persist_lists(&store.library.lists);
    });
}

pub(crate) fn add_movie_to_list(
    dispatch: &Dispatch<AppStore>,
    bundle: &TranslationBundle,
    list_id: Uuid,
    movie: &MovieDetail,
) {
    let record = SavedMovie::from_detail(movie, Utc::now());
    let message = bundle.text("toast.list_added", "");
    dispatch.reduce_mut(move |store| {
        if library::add_movie_to_list(&mut store.library.lists, list_id, record, Utc::now()) {
            storage::persist_lists(&store.library.lists);
            store.toasts.push(ToastKind::Success, message);
        }
    });
}

pub(crate) fn remove_movie_from_list(
    dispatch: &Dispatch<AppStore>,
    bundle: &TranslationBundle,
    list_id: Uuid,
    movie_id: u64,
) {
    let message = bundle.text("toast.list_removed", "");
    dispatch.reduce_mut(move |store| {
        if library::remove_movie_from_list(&mut store.library.lists, list_id, movie_id, Utc::now())
        {
            storage::persist_lists(&store.library.lists);
            store.toasts.push(ToastKind::Info, message);
        }
    });
}

pub(crate) fn submit_review(
    dispatch: &Dispatch<AppStore>,
    bundle: &TranslationBundle,
    draft: ReviewDraft,
) {
    let message = bundle.text("toast.review_saved", "");
    dispatch.reduce_mut(move |store| {
        let user_id = store.library.user_id.clone();
        reviews::upsert_review(&mut store.library.reviews, &draft, &user_id, Utc::now());
        storage::persist_reviews(&store.library.reviews);
        store.toasts.push(ToastKind::Success, message);
    });
}

pub(crate) fn delete_review(
    dispatch: &Dispatch<AppStore>,
    bundle: &TranslationBundle,
    review_id: Uuid,
) {
    let message = bundle.text("toast.review_deleted", "");
    dispatch.reduce_mut(move |store| {
        if reviews::delete_review(&mut store.library.reviews, review_id) {
            storage::persist_reviews(&store.library.reviews);
            store.toasts.push(ToastKind::Info, message);
        }
    });
}

pub(crate) fn like_review(dispatch: &Dispatch<AppStore>, review_id: Uuid) {
    dispatch.reduce_mut(move |store| {
        if reviews::like_review(&mut store.library.reviews, review_id).is_some() {
            storage::persist_reviews(&store.library.reviews);
        }
    });
}

/// Share a movie via the platform sheet, falling back to the clipboard.
pub(crate) fn share(dispatch: &Dispatch<AppStore>, bundle: &TranslationBundle, movie: &MovieDetail) {
    let url = state::share_url(movie.id);
    let text = format!("{} {}", bundle.text("detail.share_text", ""), movie.title);
    let title = movie.title.clone();
    let copied = bundle.text("toast.share_copied", "");
    let failed = bundle.text("toast.share_failed", "");
    let dispatch = dispatch.clone();
    yew::platform::spawn_local(async move {
        match share_movie(&title, &text, &url).await {
            ShareOutcome::Shared => {}
            ShareOutcome::Copied => {
                dispatch.reduce_mut(|store| store.toasts.push(ToastKind::Success, copied));
            }
            ShareOutcome::Failed => {
                dispatch.reduce_mut(|store| store.toasts.push(ToastKind::Error, failed));
            }
        }
    });
}

/// Launch a trailer in a new tab.
pub(crate) fn open_trailer(key: &str) {
    let url = state::trailer_url(key);
    if let Err(err) = gloo::utils::window().open_with_url_and_target(&url, "_blank") {
        console::error!("failed to open trailer", format!("{err:?}"));
    }
}
