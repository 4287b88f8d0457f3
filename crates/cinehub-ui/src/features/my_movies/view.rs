//! My Movies page view: watched grid and custom lists.

use crate::app::api::use_api;
use crate::components::empty_state::EmptyState;
use crate::components::modal::Modal;
use crate::components::movie_card::MovieCard;
use crate::core::images;
use crate::core::store::AppStore;
use crate::features::movie_detail::actions;
use crate::features::my_movies::state::{LIST_PREVIEW_LEN, LibraryTab, normalized_list_input};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use cinehub_models::MovieList;
use gloo::dialogs::confirm;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(MyMoviesPage)]
pub(crate) fn my_movies_page() -> Html {
    let api = use_api();
    let dispatch = Dispatch::<AppStore>::new();
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let watched = use_selector(|store: &AppStore| store.library.watched.clone());
    let lists = use_selector(|store: &AppStore| store.library.lists.clone());
    let tab = use_state(LibraryTab::default);
    let show_create_modal = use_state(|| false);
    let new_name = use_state(String::new);
    let new_description = use_state(String::new);

    let on_open = {
        let dispatch = dispatch.clone();
        let client = api.client.clone();
        Callback::from(move |movie_id: u64| {
            actions::open_movie(&dispatch, &client, movie_id);
        })
    };

    let close_create_modal = {
        let show_create_modal = show_create_modal.clone();
        let new_name = new_name.clone();
        let new_description = new_description.clone();
        Callback::from(move |()| {
            show_create_modal.set(false);
            new_name.set(String::new());
            new_description.set(String::new());
        })
    };

    let on_create = {
        let dispatch = dispatch.clone();
        let new_name = new_name.clone();
        let new_description = new_description.clone();
        let close_create_modal = close_create_modal.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if let Some((name, description)) = normalized_list_input(&new_name, &new_description) {
                actions::create_list(&dispatch, &name, &description);
                close_create_modal.emit(());
            }
        })
    };

    let tab_button = |target: LibraryTab, label: String, count: usize| {
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
        <div class="my-movies-page">
            <h1 class="page-title">{t("my_movies.title")}</h1>
            <div class="tabs-container">
                {tab_button(LibraryTab::Watched, t("my_movies.tab_watched"), watched.len())}
                {tab_button(LibraryTab::Lists, t("my_movies.tab_lists"), lists.len())}
            </div>
            {match *tab {
                LibraryTab::Watched => watched_tab(&watched, &dispatch, &on_open, &t),
                LibraryTab::Lists => lists_tab(&lists, &dispatch, &on_open, &show_create_modal, &t),
            }}
            <Modal open={*show_create_modal} on_close={close_create_modal.clone()} class="create-list-modal">
                <h2>{t("my_movies.modal_title")}</h2>
                <form onsubmit={on_create}>
                    <input
                        type="text"
                        placeholder={t("my_movies.name_placeholder")}
                        value={(*new_name).clone()}
                        oninput={{
                            let new_name = new_name.clone();
                            Callback::from(move |event: InputEvent| {
                                let input: HtmlInputElement = event.target_unchecked_into();
                                new_name.set(input.value());
                            })
                        }}
                        class="modal-input"
                    />
                    <textarea
                        placeholder={t("my_movies.description_placeholder")}
                        value={(*new_description).clone()}
                        oninput={{
                            let new_description = new_description.clone();
                            Callback::from(move |event: InputEvent| {
                                let input: HtmlTextAreaElement = event.target_unchecked_into();
                                new_description.set(input.value());
                            })
                        }}
                        class="modal-textarea"
                        rows="3"
                    />
                    <div class="modal-actions">
                        <button
                            type="button"
                            class="modal-button cancel"
                            onclick={Callback::from(move |_| close_create_modal.emit(()))}
                        >{t("my_movies.cancel")}</button>
                        <button type="submit" class="modal-button confirm">{t("my_movies.create")}</button>
                    </div>
                </form>
            </Modal>
        </div>
    }
}

fn watched_tab(
    watched: &[cinehub_models::SavedMovie],
    dispatch: &Dispatch<AppStore>,
    on_open: &Callback<u64>,
    t: &dyn Fn(&str) -> String,
) -> Html {
    if watched.is_empty() {
        return html! {
            <EmptyState
                title={t("my_movies.empty_watched_title")}
                description={t("my_movies.empty_watched_body")}
            />
        };
    }
    html! {
        <div class="tab-content">
            <div class="movies-grid">
                {for watched.iter().map(|movie| {
                    let on_unmark = {
                        let dispatch = dispatch.clone();
                        let movie_id = movie.id;
                        Callback::from(move |event: MouseEvent| {
                            event.stop_propagation();
                            actions::remove_watched(&dispatch, movie_id);
                        })
                    };
                    html! {
                        <MovieCard
                            key={movie.id}
                            movie_id={movie.id}
                            title={movie.title.clone()}
                            poster_url={images::poster_url(movie.poster_path.as_deref())}
                            rating={Some(movie.vote_average)}
                            on_open={on_open.clone()}
                        >
                            <button class="corner-button watched" onclick={on_unmark}>{"✓"}</button>
                        </MovieCard>
                    }
                })}
            </div>
        </div>
    }
}

fn lists_tab(
    lists: &[MovieList],
    dispatch: &Dispatch<AppStore>,
    on_open: &Callback<u64>,
    show_create_modal: &UseStateHandle<bool>,
    t: &dyn Fn(&str) -> String,
) -> Html {
    let open_modal = {
        let show_create_modal = show_create_modal.clone();
        Callback::from(move |_| show_create_modal.set(true))
    };

    html! {
        <div class="tab-content">
            <button class="create-list-button" onclick={open_modal}>
                {format!("+ {}", t("my_movies.create_list"))}
            </button>
            {if lists.is_empty() {
                html! {
                    <EmptyState
                        title={t("my_movies.empty_lists_title")}
                        description={t("my_movies.empty_lists_body")}
                    />
                }
            } else {
                html! {
                    <div class="lists-container">
                        {for lists.iter().map(|list| list_card(list, dispatch, on_open, t))}
                    </div>
                }
            }}
        </div>
    }
}

fn list_card(
    list: &MovieList,
    dispatch: &Dispatch<AppStore>,
    on_open: &Callback<u64>,
    t: &dyn Fn(&str) -> String,
) -> Html {
    let on_delete = {
        let dispatch = dispatch.clone();
        let list_id = list.id;
        let prompt = t("my_movies.delete_confirm");
        Callback::from(move |_| {
            if confirm(&prompt) {
                actions::delete_list(&dispatch, list_id);
            }
        })
    };
    let spillover = list.movies.len().saturating_sub(LIST_PREVIEW_LEN);

    html! {
        <div key={list.id.to_string()} class="list-card">
            <div class="list-header">
                <h3 class="list-title">{&list.name}</h3>
                <button class="delete-list-button" onclick={on_delete}>{"✕"}</button>
            </div>
            {if list.description.is_empty() { html!{} } else {
                html! { <p class="list-description">{&list.description}</p> }
            }}
            <p class="list-count">{format!("{} {}", list.movies.len(), t("my_movies.movies"))}</p>
            {if list.movies.is_empty() { html!{} } else {
                html! {
                    <div class="list-movies">
                        {for list.movies.iter().take(LIST_PREVIEW_LEN).map(|movie| {
                            let on_click = {
                                let on_open = on_open.clone();
                                let movie_id = movie.id;
                                Callback::from(move |_| on_open.emit(movie_id))
                            };
                            html! {
                                <div key={movie.id} class="list-movie-mini" onclick={on_click}>
                                    <img
                                        src={images::thumb_url(movie.poster_path.as_deref())}
                                        alt={movie.title.clone()}
                                        loading="lazy"
                                    />
                                </div>
                            }
                        })}
                        {if spillover > 0 {
                            html! { <div class="list-movie-more">{format!("+{spillover}")}</div> }
                        } else {
                            html! {}
                        }}
                    </div>
                }
            }}
        </div>
    }
}
