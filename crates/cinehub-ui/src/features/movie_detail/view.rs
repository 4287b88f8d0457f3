//! Movie detail overlay view.

use crate::app::api::use_api;
use crate::components::loader::CinematicLoader;
use crate::components::modal::Modal;
use crate::components::rating::{StarDisplay, StarRating};
use crate::core::images;
use crate::core::store::{self, AppStore, MovieOverlay};
use crate::core::{library, reviews};
use crate::features::movie_detail::actions;
use crate::features::movie_detail::state::{
    OverlayCredits, overlay_credits, review_text_valid, select_trailer, trim_remote_reviews,
};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use chrono::DateTime;
use cinehub_models::{MovieDetail, RemoteReview, ReviewDraft, UserReview};
use gloo::console;
use gloo::dialogs::confirm;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(MovieDetailOverlay)]
pub(crate) fn movie_detail_overlay() -> Html {
    let api = use_api();
    let dispatch = Dispatch::<AppStore>::new();
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let overlay = use_selector(|store: &AppStore| store.overlay.movie.clone());
    let library_state = use_selector(|store: &AppStore| store.library.clone());

    let trailer = use_state(|| None::<String>);
    let credits = use_state(OverlayCredits::default);
    let remote_reviews = use_state(Vec::<RemoteReview>::new);
    let reviews_open = use_state(|| false);
    let show_lists_modal = use_state(|| false);
    let show_review_modal = use_state(|| false);
    let review_rating = use_state(|| 5u8);
    let review_text = use_state(String::new);

    let open_movie_id = match &*overlay {
        MovieOverlay::Open(movie) => Some(movie.id),
        _ => None,
    };

    // Section fetches and review-form prefill, keyed by the open movie.
    {
        let trailer = trailer.clone();
        let credits = credits.clone();
        let remote_reviews = remote_reviews.clone();
        let reviews_open = reviews_open.clone();
        let show_lists_modal = show_lists_modal.clone();
        let show_review_modal = show_review_modal.clone();
        let review_rating = review_rating.clone();
        let review_text = review_text.clone();
        let client = api.client.clone();
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |movie_id: &Option<u64>| {
                trailer.set(None);
                credits.set(OverlayCredits::default());
                remote_reviews.set(Vec::new());
                reviews_open.set(false);
                show_lists_modal.set(false);
                show_review_modal.set(false);
                if let Some(movie_id) = *movie_id {
                    let snapshot = dispatch.get();
                    match reviews::review_for(
                        &snapshot.library.reviews,
                        movie_id,
                        &snapshot.library.user_id,
                    ) {
                        Some(review) => {
                            review_rating.set(review.rating);
                            review_text.set(review.text.clone());
                        }
                        None => {
                            review_rating.set(5);
                            review_text.set(String::new());
                        }
                    }
                    {
                        let trailer = trailer.clone();
                        let client = client.clone();
                        yew::platform::spawn_local(async move {
                            match client.movie_videos(movie_id).await {
                                Ok(videos) => trailer.set(select_trailer(&videos)),
                                Err(err) => {
                                    console::error!("failed to load videos", err.to_string());
                                }
                            }
                        });
                    }
                    {
                        let credits = credits.clone();
                        let client = client.clone();
                        yew::platform::spawn_local(async move {
                            match client.movie_credits(movie_id).await {
                                Ok(payload) => credits.set(overlay_credits(payload)),
                                Err(err) => {
                                    console::error!("failed to load credits", err.to_string());
                                }
                            }
                        });
                    }
                }
                || ()
            },
            open_movie_id,
        );
    }

    let close = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(|store| store::close_movie(&mut store.overlay));
        })
    };

    let movie = match &*overlay {
        MovieOverlay::Closed => return html! {},
        MovieOverlay::Loading(_) => {
            return html! {
                <div class="movie-detail-backdrop">
                    <div class="movie-detail-panel loading">
                        <CinematicLoader message={t("person.loading")} />
                    </div>
                </div>
            };
        }
        MovieOverlay::Open(movie) => movie.clone(),
    };

    let is_favorite = library::contains(&library_state.favorites, movie.id);
    let is_watched = library::contains(&library_state.watched, movie.id);
    let has_reviewed =
        reviews::has_user_reviewed(&library_state.reviews, movie.id, &library_state.user_id);
    let user_reviews = reviews::reviews_for_movie(&library_state.reviews, movie.id);

    let toggle_reviews = {
        let reviews_open = reviews_open.clone();
        let remote_reviews = remote_reviews.clone();
        let client = api.client.clone();
        let movie_id = movie.id;
        Callback::from(move |_| {
            if !*reviews_open && remote_reviews.is_empty() {
                let remote_reviews = remote_reviews.clone();
                let client = client.clone();
                yew::platform::spawn_local(async move {
                    match client.movie_reviews(movie_id, 1).await {
                        Ok(page) => remote_reviews.set(trim_remote_reviews(page.results)),
                        Err(err) => {
                            console::error!("failed to load remote reviews", err.to_string());
                        }
                    }
                });
            }
            reviews_open.set(!*reviews_open);
        })
    };

    let on_submit_review = {
        let dispatch = dispatch.clone();
        let bundle = bundle.clone();
        let show_review_modal = show_review_modal.clone();
        let review_rating = review_rating.clone();
        let review_text = review_text.clone();
        let movie = movie.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if !review_text_valid(&review_text) {
                return;
            }
            actions::submit_review(
                &dispatch,
                &bundle,
                ReviewDraft {
                    movie_id: movie.id,
                    movie_title: movie.title.clone(),
                    movie_poster: movie.poster_path.clone(),
                    rating: *review_rating,
                    text: (*review_text).clone(),
                },
            );
            show_review_modal.set(false);
        })
    };

    let panel_guard = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <>
        <div class="movie-detail-backdrop" onclick={close.clone()}>
            <div class="movie-detail-panel" onclick={panel_guard}>
                <button class="close-button" onclick={close}>{"✕"}</button>
                <div class="movie-detail-poster">
                    <img src={images::poster_url(movie.poster_path.as_deref())} alt={movie.title.clone()} />
                </div>
                <div class="movie-detail-content">
                    <h2 class="detail-title">{movie.title.clone()}</h2>

                    <div class="detail-actions">
                        <button
                            class={classes!("action-button", "favorite-button", is_favorite.then_some("active"))}
                            onclick={{
                                let dispatch = dispatch.clone();
                                let movie = movie.clone();
                                Callback::from(move |_| actions::toggle_favorite(&dispatch, &movie))
                            }}
                        >{format!("♥ {}", t("detail.favorite"))}</button>
                        <button
                            class={classes!("action-button", "watched-button", is_watched.then_some("active"))}
                            onclick={{
                                let dispatch = dispatch.clone();
                                let movie = movie.clone();
                                Callback::from(move |_| actions::toggle_watched(&dispatch, &movie))
                            }}
                        >{format!("✓ {}", t("detail.watched"))}</button>
                        {(*trailer).clone().map(|key| html! {
                            <button
                                class="action-button theater-button"
                                onclick={Callback::from(move |_| actions::open_trailer(&key))}
                            >{format!("🎬 {}", t("detail.trailer"))}</button>
                        }).unwrap_or_default()}
                        <button
                            class="action-button share-button"
                            onclick={{
                                let dispatch = dispatch.clone();
                                let bundle = bundle.clone();
                                let movie = movie.clone();
                                Callback::from(move |_| actions::share(&dispatch, &bundle, &movie))
                            }}
                        >{format!("📤 {}", t("detail.share"))}</button>
                        <button
                            class="action-button lists-button"
                            onclick={{
                                let show_lists_modal = show_lists_modal.clone();
                                Callback::from(move |_| show_lists_modal.set(true))
                            }}
                        >{format!("+ {}", t("detail.add_to_list"))}</button>
                        <button
                            class="action-button review-button"
                            onclick={{
                                let show_review_modal = show_review_modal.clone();
                                Callback::from(move |_| show_review_modal.set(true))
                            }}
                        >{if has_reviewed {
                            format!("✏️ {}", t("detail.review_edit"))
                        } else {
                            format!("✍️ {}", t("detail.review_write"))
                        }}</button>
                    </div>

                    <div class="detail-rating">
                        <span class="rating-value">{format!("⭐ {:.1}", movie.vote_average)}</span>
                        <span class="rating-count">{format!("({} {})", movie.vote_count, t("detail.votes"))}</span>
                    </div>

                    <div class="detail-meta">
                        {movie.release_date.clone().map(|date| html! {
                            <span class="meta-date">{date}</span>
                        }).unwrap_or_default()}
                        {movie.original_language.clone().map(|language| html! {
                            <span class="meta-language">{language.to_uppercase()}</span>
                        }).unwrap_or_default()}
                    </div>

                    <div class="detail-overview">
                        <h3>{t("detail.synopsis")}</h3>
                        <p>{movie.overview.clone().filter(|text| !text.is_empty())
                            .unwrap_or_else(|| t("detail.synopsis_missing"))}</p>
                    </div>

                    {if movie.popularity > 0.0 {
                        html! {
                            <div class="detail-popularity">
                                <span>{format!("🔥 {} ", t("detail.popularity"))}</span>
                                <strong>{format!("{}", movie.popularity.round() as i64)}</strong>
                            </div>
                        }
                    } else { html!{} }}

                    {credits_section(&credits, &dispatch, &t)}
                    {reviews_section(
                        &movie,
                        &user_reviews,
                        &remote_reviews,
                        *reviews_open,
                        &library_state.user_id,
                        &toggle_reviews,
                        &dispatch,
                        &bundle,
                    )}
                </div>
            </div>
        </div>

            <Modal open={*show_lists_modal} class="lists-modal" on_close={{
                let show_lists_modal = show_lists_modal.clone();
                Callback::from(move |()| show_lists_modal.set(false))
            }}>
                <h3>{t("lists_modal.title")}</h3>
                <button class="modal-close" onclick={{
                    let show_lists_modal = show_lists_modal.clone();
                    Callback::from(move |_| show_lists_modal.set(false))
                }}>{"✕"}</button>
                {if library_state.lists.is_empty() {
                    html! {
                        <div class="lists-modal-empty">
                            <p>{t("lists_modal.empty_title")}</p>
                            <p class="muted">{t("lists_modal.empty_body")}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="lists-modal-list">
                            {for library_state.lists.iter().map(|list| {
                                let in_list = library::list_contains_movie(
                                    &library_state.lists, list.id, movie.id,
                                );
                                let on_toggle = {
                                    let dispatch = dispatch.clone();
                                    let bundle = bundle.clone();
                                    let movie = movie.clone();
                                    let list_id = list.id;
                                    Callback::from(move |_| {
                                        if in_list {
                                            actions::remove_movie_from_list(
                                                &dispatch, &bundle, list_id, movie.id,
                                            );
                                        } else {
                                            actions::add_movie_to_list(
                                                &dispatch, &bundle, list_id, &movie,
                                            );
                                        }
                                    })
                                };
                                html! {
                                    <div key={list.id.to_string()} class={classes!("list-option", in_list.then_some("in-list"))}>
                                        <div class="list-option-info">
                                            <h4>{&list.name}</h4>
                                            <span class="list-option-count">
                                                {format!("{} {}", list.movies.len(), t("my_movies.movies"))}
                                            </span>
                                        </div>
                                        <button
                                            class={classes!("list-option-button", if in_list { "remove" } else { "add" })}
                                            onclick={on_toggle}
                                        >
                                            {if in_list {
                                                format!("✓ {}", t("lists_modal.in_list"))
                                            } else {
                                                format!("+ {}", t("lists_modal.add"))
                                            }}
                                        </button>
                                    </div>
                                }
                            })}
                        </div>
                    }
                }}
            </Modal>

            <Modal open={*show_review_modal} class="review-modal" on_close={{
                let show_review_modal = show_review_modal.clone();
                Callback::from(move |()| show_review_modal.set(false))
            }}>
                <h3>{if has_reviewed { t("review_modal.title_edit") } else { t("review_modal.title_new") }}</h3>
                <form onsubmit={on_submit_review} class="review-form">
                    <div class="rating-selector">
                        <label>{t("review_modal.rating_label")}</label>
                        <StarRating
                            value={*review_rating}
                            onchange={{
                                let review_rating = review_rating.clone();
                                Callback::from(move |value: u8| review_rating.set(value))
                            }}
                        />
                    </div>
                    <textarea
                        placeholder={t("review_modal.placeholder")}
                        value={(*review_text).clone()}
                        oninput={{
                            let review_text = review_text.clone();
                            Callback::from(move |event: InputEvent| {
                                let input: HtmlTextAreaElement = event.target_unchecked_into();
                                review_text.set(input.value());
                            })
                        }}
                        class="review-textarea"
                        rows="6"
                        required=true
                        minlength="10"
                    />
                    <div class="modal-actions">
                        <button
                            type="button"
                            class="modal-button cancel"
                            onclick={{
                                let show_review_modal = show_review_modal.clone();
                                Callback::from(move |_| show_review_modal.set(false))
                            }}
                        >{t("review_modal.cancel")}</button>
                        <button
                            type="submit"
                            class="modal-button confirm"
                            disabled={!review_text_valid(&review_text)}
                        >{t("review_modal.submit")}</button>
                    </div>
                </form>
            </Modal>
        </>
    }
}

fn credits_section(
    credits: &OverlayCredits,
    dispatch: &Dispatch<AppStore>,
    t: &dyn Fn(&str) -> String,
) -> Html {
    let person_card = |id: u64, name: &str, sub: Option<&str>, profile: Option<&str>| {
        let on_click = {
            let dispatch = dispatch.clone();
            Callback::from(move |_| {
                dispatch.reduce_mut(|store| store::open_person(&mut store.overlay, id));
            })
        };
        html! {
            <div key={id} class="person-card" onclick={on_click}>
                <img src={images::profile_url(profile)} alt={name.to_string()} class="person-photo" loading="lazy" />
                <div class="person-card-info">
                    <p class="person-card-name">{name}</p>
                    {sub.map(|sub| html! { <p class="person-card-role">{sub}</p> }).unwrap_or_default()}
                </div>
            </div>
        }
    };

    html! {
        <>
            {if credits.directors.is_empty() { html!{} } else {
                html! {
                    <div class="credits-section">
                        <h3>{format!("🎥 {}", t("detail.directors"))}</h3>
                        <div class="person-row">
                            {for credits.directors.iter().map(|director| person_card(
                                director.id,
                                &director.name,
                                None,
                                director.profile_path.as_deref(),
                            ))}
                        </div>
                    </div>
                }
            }}
            {if credits.cast.is_empty() { html!{} } else {
                html! {
                    <div class="credits-section">
                        <h3>{format!("🎬 {}", t("detail.cast"))}</h3>
                        <div class="person-grid">
                            {for credits.cast.iter().map(|actor| person_card(
                                actor.id,
                                &actor.name,
                                actor.character.as_deref(),
                                actor.profile_path.as_deref(),
                            ))}
                        </div>
                    </div>
                }
            }}
        </>
    }
}

#[allow(clippy::too_many_arguments)]
fn reviews_section(
    movie: &MovieDetail,
    user_reviews: &[UserReview],
    remote_reviews: &[RemoteReview],
    open: bool,
    user_id: &str,
    on_toggle: &Callback<MouseEvent>,
    dispatch: &Dispatch<AppStore>,
    bundle: &TranslationBundle,
) -> Html {
    let t = |key: &str| bundle.text(key, "");
    let own_review_id = user_reviews
        .iter()
        .find(|review| review.user_id == user_id)
        .map(|review| review.id);

    html! {
        <div class="reviews-section">
            <div class="reviews-header">
                <h3>{format!("📝 {}", t("detail.reviews"))}</h3>
                <button class="reviews-toggle" onclick={on_toggle.clone()}>
                    {if open {
                        format!("▼ {}", t("detail.reviews_hide"))
                    } else {
                        format!("▶ {}", t("detail.reviews_show"))
                    }}
                </button>
            </div>
            {if !open { html!{} } else if user_reviews.is_empty() && remote_reviews.is_empty() {
                html! { <p class="no-reviews">{t("detail.reviews_empty")}</p> }
            } else {
                html! {
                    <div class="reviews-content">
                        {if user_reviews.is_empty() { html!{} } else {
                            html! {
                                <div class="user-reviews-section">
                                    <h4>{format!("👤 {}", t("detail.reviews_user"))}</h4>
                                    {for user_reviews.iter().map(|review| {
                                        let deletable = Some(review.id) == own_review_id;
                                        let on_delete = {
                                            let dispatch = dispatch.clone();
                                            let bundle = bundle.clone();
                                            let review_id = review.id;
                                            let prompt = t("detail.review_delete_confirm");
                                            Callback::from(move |_| {
                                                if confirm(&prompt) {
                                                    actions::delete_review(&dispatch, &bundle, review_id);
                                                }
                                            })
                                        };
                                        let on_like = {
                                            let dispatch = dispatch.clone();
                                            let review_id = review.id;
                                            Callback::from(move |_| actions::like_review(&dispatch, review_id))
                                        };
                                        html! {
                                            <div key={review.id.to_string()} class="review-card user-review">
                                                <div class="review-header">
                                                    <strong>{&review.username}</strong>
                                                    <StarDisplay value={review.rating} />
                                                    {if deletable {
                                                        html! { <button class="review-delete" onclick={on_delete}>{"🗑️"}</button> }
                                                    } else { html!{} }}
                                                </div>
                                                <p class="review-text">{&review.text}</p>
                                                <div class="review-footer">
                                                    <span class="review-date">
                                                        {review.created_at.format("%d/%m/%Y").to_string()}
                                                    </span>
                                                    <button class="review-like" onclick={on_like}>
                                                        {format!("👍 {}", review.likes)}
                                                    </button>
                                                </div>
                                            </div>
                                        }
                                    })}
                                </div>
                            }
                        }}
                        {if remote_reviews.is_empty() { html!{} } else {
                            html! {
                                <div class="tmdb-reviews-section">
                                    <h4>{format!("🌐 {}", t("detail.reviews_remote"))}</h4>
                                    {for remote_reviews.iter().enumerate().map(|(n, review)| html! {
                                        <div key={format!("{}-{n}", movie.id)} class="review-card tmdb-review">
                                            <div class="review-header">
                                                <strong>{&review.author}</strong>
                                                {review.author_details.as_ref()
                                                    .and_then(|details| details.rating)
                                                    .map(|rating| html! {
                                                        <span class="review-rating">{format!("⭐ {rating}/10")}</span>
                                                    }).unwrap_or_default()}
                                            </div>
                                            <p class="review-text">{&review.content}</p>
                                            {review.created_at.clone().map(|date| html! {
                                                <span class="review-date">{format_remote_date(&date)}</span>
                                            }).unwrap_or_default()}
                                        </div>
                                    })}
                                </div>
                            }
                        }}
                    </div>
                }
            }}
        </div>
    }
}

fn format_remote_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map_or_else(|_| raw.to_string(), |date| date.format("%d/%m/%Y").to_string())
}
