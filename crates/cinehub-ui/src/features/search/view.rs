//! Search page view.

use crate::app::api::use_api;
use crate::components::movie_card::MovieCard;
use crate::components::skeleton::SkeletonGrid;
use crate::core::images;
use crate::core::store::AppStore;
use crate::features::movie_detail::actions;
use crate::features::search::state::SearchState;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use cinehub_models::MovieSummary;
use gloo::console;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::Dispatch;

enum SearchAction {
    Begin { seq: u32 },
    Finish { seq: u32, results: Vec<MovieSummary> },
    Fail { seq: u32 },
}

impl Reducible for SearchState {
    type Action = SearchAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SearchAction::Begin { seq } => next.begin(seq),
            SearchAction::Finish { seq, results } => {
                next.finish(seq, results);
            }
            SearchAction::Fail { seq } => {
                next.fail(seq);
            }
        }
        Rc::new(next)
    }
}

#[function_component(SearchPage)]
pub(crate) fn search_page() -> Html {
    let api = use_api();
    let dispatch = Dispatch::<AppStore>::new();
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let state = use_reducer(SearchState::default);
    let query = use_state(String::new);
    let next_seq = use_mut_ref(|| 0u32);

    let on_input = {
        let query = query.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_submit = {
        let state = state.clone();
        let query = query.clone();
        let client = api.client.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let text = query.trim().to_string();
            if text.is_empty() {
                return;
            }
            let seq = {
                let mut counter = next_seq.borrow_mut();
                *counter += 1;
                *counter
            };
            state.dispatch(SearchAction::Begin { seq });
            let state = state.clone();
            let client = client.clone();
            yew::platform::spawn_local(async move {
                match client.search_movies(&text, 1).await {
                    Ok(page) => state.dispatch(SearchAction::Finish {
                        seq,
                        results: page.results,
                    }),
                    Err(err) => {
                        console::error!("search failed", err.to_string());
                        state.dispatch(SearchAction::Fail { seq });
                    }
                }
            });
        })
    };

    let on_open = {
        let dispatch = dispatch.clone();
        let client = api.client.clone();
        Callback::from(move |movie_id: u64| {
            actions::open_movie(&dispatch, &client, movie_id);
        })
    };

    html! {
        <div class="search-page">
            <h1 class="page-title">{t("search.title")}</h1>
            <form onsubmit={on_submit} class="search-form-large">
                <input
                    type="text"
                    placeholder={t("search.placeholder")}
                    value={(*query).clone()}
                    oninput={on_input}
                    class="search-input-large"
                />
                <button type="submit" class="search-button-large">{format!("⌕ {}", t("search.submit"))}</button>
            </form>
            {if state.loading {
                html! { <SkeletonGrid count={10} /> }
            } else if state.shows_empty_state() {
                html! {
                    <div class="no-results">
                        <p>{t("search.no_results")}</p>
                        <p class="no-results-hint">{t("search.no_results_hint")}</p>
                    </div>
                }
            } else if state.results.is_empty() {
                html! {}
            } else {
                html! {
                    <div>
                        <p class="results-count">{format!("{} {}", state.results.len(), t("search.results_count"))}</p>
                        <div class="movies-grid">
                            {for state.results.iter().map(|movie| html! {
                                <MovieCard
                                    key={movie.id}
                                    movie_id={movie.id}
                                    title={movie.title.clone()}
                                    poster_url={images::poster_url(movie.poster_path.as_deref())}
                                    rating={Some(movie.vote_average)}
                                    meta={movie.release_date.clone().map(AttrValue::from)}
                                    on_open={on_open.clone()}
                                />
                            })}
                        </div>
                    </div>
                }
            }}
        </div>
    }
}
