//! Favorites page view.

use crate::app::api::use_api;
use crate::components::empty_state::EmptyState;
use crate::components::movie_card::MovieCard;
use crate::core::images;
use crate::core::store::AppStore;
use crate::features::movie_detail::actions;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(FavoritesPage)]
pub(crate) fn favorites_page() -> Html {
    let api = use_api();
    let dispatch = Dispatch::<AppStore>::new();
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let favorites = use_selector(|store: &AppStore| store.library.favorites.clone());

    let on_open = {
        let dispatch = dispatch.clone();
        let client = api.client.clone();
        Callback::from(move |movie_id: u64| {
            actions::open_movie(&dispatch, &client, movie_id);
        })
    };

    if favorites.is_empty() {
        return html! {
            <div class="favorites-page">
                <h1 class="page-title">{t("favorites.title")}</h1>
                <EmptyState
                    icon="💔"
                    title={t("favorites.empty_title")}
                    description={t("favorites.empty_body")}
                />
            </div>
        };
    }

    html! {
        <div class="favorites-page">
            <h1 class="page-title">{t("favorites.title")}</h1>
            <p class="results-count">{favorites.len()}</p>
            <div class="movies-grid">
                {for favorites.iter().map(|movie| {
                    let on_remove = {
                        let dispatch = dispatch.clone();
                        let movie_id = movie.id;
                        Callback::from(move |event: MouseEvent| {
                            event.stop_propagation();
                            actions::remove_favorite(&dispatch, movie_id);
                        })
                    };
                    html! {
                        <MovieCard
                            key={movie.id}
                            movie_id={movie.id}
                            title={movie.title.clone()}
                            poster_url={images::poster_url(movie.poster_path.as_deref())}
                            rating={Some(movie.vote_average)}
                            meta={movie.release_date.clone().map(AttrValue::from)}
                            on_open={on_open.clone()}
                        >
                            <button class="corner-button remove" onclick={on_remove}>{"✕"}</button>
                        </MovieCard>
                    }
                })}
            </div>
        </div>
    }
}
