//! Top-reviews page view.

use crate::app::api::use_api;
use crate::components::empty_state::EmptyState;
use crate::components::loader::CinematicLoader;
use crate::components::movie_card::MovieCard;
use crate::core::images;
use crate::core::reviews::{review_stats, top_reviewed_movies};
use crate::core::store::AppStore;
use crate::features::movie_detail::actions;
use crate::features::top_reviews::state::{ReviewsTab, TOP_LIMIT};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use cinehub_models::MovieSummary;
use gloo::console;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(TopReviewsPage)]
pub(crate) fn top_reviews_page() -> Html {
    let api = use_api();
    let dispatch = Dispatch::<AppStore>::new();
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let top_rated = use_state(Vec::<MovieSummary>::new);
    let loading = use_state(|| true);
    let tab = use_state(ReviewsTab::default);
    let top_local = use_selector(|store: &AppStore| {
        top_reviewed_movies(&store.library.reviews, TOP_LIMIT)
    });
    let local_stats = use_selector(|store: &AppStore| {
        review_stats(&store.library.reviews, &store.library.user_id)
    });

    {
        let top_rated = top_rated.clone();
        let loading = loading.clone();
        let client = api.client.clone();
        use_effect_with_deps(
            move |_| {
                yew::platform::spawn_local(async move {
                    match client.top_rated_movies(1).await {
                        Ok(page) => {
                            let mut movies = page.results;
                            movies.truncate(TOP_LIMIT);
                            top_rated.set(movies);
                        }
                        Err(err) => {
                            console::error!("failed to load top rated movies", err.to_string());
                        }
                    }
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
        return html! { <CinematicLoader message={t("top_reviews.loading")} /> };
    }

    let tab_button = |target: ReviewsTab, label: String, count: usize| {
        let active = *tab == target;
        let onclick = {
            let tab = tab.clone();
            Callback::from(move |_| tab.set(target))
        };
        html! {
            <button class={classes!("tab-button", active.then_some("active"))} onclick={onclick}>
                {label}
                <span class="tab-count">{count}</span>
            </button>
        }
    };

    html! {
        <div class="top-reviews-page">
            <h1 class="page-title">{t("top_reviews.title")}</h1>
            <div class="tabs-container">
                {tab_button(ReviewsTab::Remote, t("top_reviews.tab_remote"), top_rated.len())}
                {tab_button(ReviewsTab::Local, t("top_reviews.tab_user"), top_local.len())}
            </div>
            {match *tab {
                ReviewsTab::Remote => {
                    if top_rated.is_empty() {
                        html! { <EmptyState title={t("top_reviews.empty_remote")} /> }
                    } else {
                        html! {
                            <div class="movies-grid">
                                {for top_rated.iter().enumerate().map(|(index, movie)| html! {
                                    <MovieCard
                                        key={movie.id}
                                        movie_id={movie.id}
                                        title={movie.title.clone()}
                                        poster_url={images::poster_url(movie.poster_path.as_deref())}
                                        rating={Some(movie.vote_average)}
                                        rank={Some(index + 1)}
                                        on_open={on_open.clone()}
                                    />
                                })}
                            </div>
                        }
                    }
                }
                ReviewsTab::Local => {
                    if top_local.is_empty() {
                        html! {
                            <EmptyState
                                title={t("top_reviews.empty_user_title")}
                                description={t("top_reviews.empty_user_body")}
                            />
                        }
                    } else {
                        html! {
                            <>
                            <p class="results-count">{format!(
                                "{} {} · ★ {}",
                                local_stats.total,
                                t("top_reviews.reviews"),
                                local_stats.average_rating,
                            )}</p>
                            <div class="movies-grid">
                                {for top_local.iter().enumerate().map(|(index, stat)| html! {
                                    <MovieCard
                                        key={stat.movie_id}
                                        movie_id={stat.movie_id}
                                        title={stat.movie_title.clone()}
                                        poster_url={images::poster_url(stat.movie_poster.as_deref())}
                                        meta={AttrValue::from(format!(
                                            "★ {} · {} {}",
                                            stat.average_rating,
                                            stat.review_count,
                                            t("top_reviews.reviews"),
                                        ))}
                                        rank={Some(index + 1)}
                                        on_open={on_open.clone()}
                                    />
                                })}
                            </div>
                            </>
                        }
                    }
                }
            }}
        </div>
    }
}
