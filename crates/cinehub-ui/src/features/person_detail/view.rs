//! Person detail overlay view.

use crate::app::api::use_api;
use crate::components::loader::CinematicLoader;
use crate::core::images;
use crate::core::store::{self, AppStore};
use crate::core::text::excerpt;
use crate::features::movie_detail::actions;
use crate::features::person_detail::state::{
    BIOGRAPHY_EXCERPT, featured_filmography, is_acting_department, release_year,
};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use cinehub_models::{Person, PersonCredit};
use gloo::console;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(PersonDetailOverlay)]
pub(crate) fn person_detail_overlay() -> Html {
    let api = use_api();
    let dispatch = Dispatch::<AppStore>::new();
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let person_id = use_selector(|store: &AppStore| store.overlay.person);
    let person = use_state(|| None::<Person>);
    let movies = use_state(Vec::<PersonCredit>::new);
    let loading = use_state(|| true);

    {
        let person = person.clone();
        let movies = movies.clone();
        let loading = loading.clone();
        let client = api.client.clone();
        use_effect_with_deps(
            move |person_id: &Option<u64>| {
                person.set(None);
                movies.set(Vec::new());
                if let Some(person_id) = *person_id {
                    loading.set(true);
                    yew::platform::spawn_local(async move {
                        let (details, credits) = futures::future::join(
                            client.person_details(person_id),
                            client.person_movie_credits(person_id),
                        )
                        .await;
                        match details {
                            Ok(record) => person.set(Some(record)),
                            Err(err) => {
                                console::error!("failed to load person", err.to_string());
                            }
                        }
                        match credits {
                            Ok(payload) => movies.set(featured_filmography(payload)),
                            Err(err) => {
                                console::error!("failed to load filmography", err.to_string());
                            }
                        }
                        loading.set(false);
                    });
                }
                || ()
            },
            *person_id,
        );
    }

    if person_id.is_none() {
        return html! {};
    }

    let close = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(|store| store::close_person(&mut store.overlay));
        })
    };
    let panel_guard = Callback::from(|event: MouseEvent| event.stop_propagation());

    let on_movie = {
        let dispatch = dispatch.clone();
        let client = api.client.clone();
        Callback::from(move |movie_id: u64| {
            // Replaces the whole overlay stack with the selected movie.
            actions::open_movie(&dispatch, &client, movie_id);
        })
    };

    html! {
        <div class="person-detail-backdrop" onclick={close.clone()}>
            <div class="person-detail-panel" onclick={panel_guard}>
                <button class="close-button" onclick={close}>{"✕"}</button>
                {if *loading {
                    html! { <CinematicLoader message={t("person.loading")} /> }
                } else if let Some(person) = (*person).clone() {
                    html! {
                        <>
                            {person_header(&person, &t)}
                            {if movies.is_empty() { html!{} } else {
                                html! {
                                    <div class="person-movies-section">
                                        <h3>{format!("🎬 {}", t("person.filmography"))}</h3>
                                        <div class="person-movies-grid">
                                            {for movies.iter().map(|credit| filmography_card(credit, &on_movie))}
                                        </div>
                                    </div>
                                }
                            }}
                        </>
                    }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}

fn person_header(person: &Person, t: &dyn Fn(&str) -> String) -> Html {
    let department = if is_acting_department(person.known_for_department.as_deref()) {
        format!("🎭 {}", t("person.acting"))
    } else {
        format!("🎬 {}", t("person.directing"))
    };

    html! {
        <div class="person-detail-header">
            <div class="person-photo-section">
                <img
                    src={images::poster_url(person.profile_path.as_deref())}
                    alt={person.name.clone()}
                    class="person-photo-large"
                />
            </div>
            <div class="person-info-section">
                <h2 class="person-name">{&person.name}</h2>
                {person.birthday.clone().map(|birthday| html! {
                    <p class="person-meta">{format!("📅 {birthday}")}</p>
                }).unwrap_or_default()}
                {person.place_of_birth.clone().map(|place| html! {
                    <p class="person-meta">{format!("📍 {place}")}</p>
                }).unwrap_or_default()}
                {if person.known_for_department.is_some() {
                    html! { <p class="person-department">{department}</p> }
                } else { html!{} }}
                {person.biography.clone().filter(|text| !text.is_empty()).map(|biography| html! {
                    <div class="person-biography">
                        <h3>{t("person.biography")}</h3>
                        <p>{excerpt(&biography, BIOGRAPHY_EXCERPT)}</p>
                    </div>
                }).unwrap_or_default()}
            </div>
        </div>
    }
}

fn filmography_card(credit: &PersonCredit, on_movie: &Callback<u64>) -> Html {
    let on_click = {
        let on_movie = on_movie.clone();
        let movie_id = credit.id;
        Callback::from(move |_| on_movie.emit(movie_id))
    };
    html! {
        <div key={credit.id} class="person-movie-card" onclick={on_click}>
            <img
                src={images::thumb_url(credit.poster_path.as_deref())}
                alt={credit.title.clone()}
                class="person-movie-poster"
                loading="lazy"
            />
            <div class="person-movie-info">
                <h4 class="person-movie-title">{credit.title.clone()}</h4>
                {credit.character.clone().map(|role| html! {
                    <p class="person-movie-role">{role}</p>
                }).unwrap_or_default()}
                {credit.job.clone().map(|job| html! {
                    <p class="person-movie-role">{job}</p>
                }).unwrap_or_default()}
                {release_year(credit.release_date.as_deref()).map(|year| html! {
                    <p class="person-movie-year">{year.to_string()}</p>
                }).unwrap_or_default()}
                {if credit.vote_average > 0.0 {
                    html! { <p class="person-movie-rating">{format!("⭐ {:.1}", credit.vote_average)}</p> }
                } else { html!{} }}
            </div>
        </div>
    }
}
