//! Explore page view: genre filters and paged rails.

use crate::app::api::use_api;
use crate::components::loader::CinematicLoader;
use crate::core::images;
use crate::core::store::AppStore;
use crate::features::explore::state::{
    GENRES, RailPager, ROW_CAPACITY, toggle_filter, visible_genres,
};
use crate::features::movie_detail::actions;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use cinehub_models::MovieSummary;
use gloo::console;
use std::collections::HashMap;
use yew::prelude::*;
use yewdux::prelude::Dispatch;

#[function_component(ExplorePage)]
pub(crate) fn explore_page() -> Html {
    let api = use_api();
    let dispatch = Dispatch::<AppStore>::new();
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let rails = use_state(HashMap::<u64, Vec<MovieSummary>>::new);
    let pagers = use_state(HashMap::<u64, RailPager>::new);
    let filter = use_state(|| None::<u64>);
    let loading = use_state(|| true);

    {
        let rails = rails.clone();
        let loading = loading.clone();
        let client = api.client.clone();
        use_effect_with_deps(
            move |_| {
                yew::platform::spawn_local(async move {
                    let mut loaded = HashMap::new();
                    for genre in GENRES {
                        match client.movies_by_genre(genre.id, 1).await {
                            Ok(page) => {
                                let mut movies = page.results;
                                movies.truncate(ROW_CAPACITY);
                                loaded.insert(genre.id, movies);
                            }
                            Err(err) => {
                                console::error!("failed to load genre", genre.name, err.to_string());
                            }
                        }
                    }
                    rails.set(loaded);
                    loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    let on_open = {
        let dispatch = dispatch.clone();
        let client = api.client.clone();
        Callback::from(move |movie_id: u64| {
            actions::open_movie(&dispatch, &client, movie_id);
        })
    };

    if *loading {
        return html! { <CinematicLoader message={t("explore.loading")} /> };
    }

    let set_page = {
        let pagers = pagers.clone();
        Callback::from(move |(genre_id, pager): (u64, RailPager)| {
            let mut next = (*pagers).clone();
            next.insert(genre_id, pager);
            pagers.set(next);
        })
    };

    html! {
        <div class="explore-page">
            <h1 class="page-title">{t("explore.title")}</h1>
            <div class="genre-filters">
                {for GENRES.iter().map(|genre| {
                    let active = *filter == Some(genre.id);
                    let onclick = {
                        let filter = filter.clone();
                        let genre_id = genre.id;
                        Callback::from(move |_| filter.set(toggle_filter(*filter, genre_id)))
                    };
                    html! {
                        <button
                            key={genre.id}
                            class={classes!("genre-filter-button", active.then_some("active"))}
                            onclick={onclick}
                        >
                            <span class="genre-icon">{genre.icon}</span>
                            <span>{genre.name}</span>
                        </button>
                    }
                })}
            </div>
            {for visible_genres(*filter).into_iter().map(|genre| {
                let movies = rails.get(&genre.id).cloned().unwrap_or_default();
                let pager = pagers.get(&genre.id).copied().unwrap_or_default();
                let window: Vec<MovieSummary> = pager.window(&movies).to_vec();
                let total = movies.len();

                let go_prev = {
                    let set_page = set_page.clone();
                    let genre_id = genre.id;
                    Callback::from(move |_| set_page.emit((genre_id, pager.prev())))
                };
                let go_next = {
                    let set_page = set_page.clone();
                    let genre_id = genre.id;
                    Callback::from(move |_| set_page.emit((genre_id, pager.next(total))))
                };

                html! {
                    <section key={genre.id} class="genre-section">
                        <h2 class="genre-title">{genre.name}</h2>
                        <div class="genre-rail">
                            <button
                                class="genre-nav-button prev"
                                disabled={!pager.has_prev()}
                                onclick={go_prev}
                            >{"‹"}</button>
                            <div class="genre-movies">
                                {for window.iter().map(|movie| {
                                    let on_click = {
                                        let on_open = on_open.clone();
                                        let movie_id = movie.id;
                                        Callback::from(move |_| on_open.emit(movie_id))
                                    };
                                    html! {
                                        <div key={movie.id} class="genre-movie-card" onclick={on_click}>
                                            <img
                                                src={images::thumb_url(movie.poster_path.as_deref())}
                                                alt={movie.title.clone()}
                                                class="genre-movie-poster"
                                                loading="lazy"
                                            />
                                            <div class="genre-movie-info">
                                                <h4 class="genre-movie-title">{movie.title.clone()}</h4>
                                                <p class="genre-movie-rating">{format!("★ {:.1}", movie.vote_average)}</p>
                                            </div>
                                        </div>
                                    }
                                })}
                            </div>
                            <button
                                class="genre-nav-button next"
                                disabled={!pager.has_next(total)}
                                onclick={go_next}
                            >{"›"}</button>
                        </div>
                    </section>
                }
            })}
        </div>
    }
}
