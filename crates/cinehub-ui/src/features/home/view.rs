//! Home page view: hero, ticker lanes and ranked rails.

use crate::app::api::use_api;
use crate::components::particles::FloatingParticles;
use crate::components::skeleton::SkeletonRail;
use crate::components::ticker::TickerLane;
use crate::core::images;
use crate::core::store::AppStore;
use crate::features::home::state::{HomeRails, TOP_RAIL_LEN, partition_popular, ticker_lanes};
use crate::features::movie_detail::actions;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use cinehub_models::MovieSummary;
use gloo::console;
use yew::prelude::*;
use yewdux::prelude::Dispatch;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    let api = use_api();
    let dispatch = Dispatch::<AppStore>::new();
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let rails = use_state(HomeRails::default);
    let loading = use_state(|| true);

    {
        let rails = rails.clone();
        let loading = loading.clone();
        let client = api.client.clone();
        use_effect_with_deps(
            move |_| {
                yew::platform::spawn_local(async move {
                    let (first, second) =
                        futures::future::join(client.popular_movies(1), client.popular_movies(2))
                            .await;
                    let mut combined = first.map(|page| page.results).unwrap_or_else(|err| {
                        console::error!("failed to load popular movies", err.to_string());
                        Vec::new()
                    });
                    combined.extend(second.map(|page| page.results).unwrap_or_else(|err| {
                        console::error!("failed to load popular movies", err.to_string());
                        Vec::new()
                    }));
                    rails.set(partition_popular(combined));
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

    let hero = html! {
        <div class="hero-section">
            {if *loading { html!{} } else { html! { <FloatingParticles count={30} /> } }}
            <h1 class="hero-title">
                <span class="title-word">{t("home.welcome")}</span>
                {" "}
                <span class="title-word title-highlight">{"CineHub"}</span>
            </h1>
            <p class="hero-subtitle">{t("home.subtitle")}</p>
        </div>
    };

    if *loading {
        return html! {
            <div class="home-page">
                {hero}
                <section class="rail-section">
                    <h2 class="section-title">{t("home.recent")}</h2>
                    <SkeletonRail count={TOP_RAIL_LEN} />
                </section>
                <section class="rail-section">
                    <h2 class="section-title">{t("home.top")}</h2>
                    <SkeletonRail count={TOP_RAIL_LEN} />
                </section>
            </div>
        };
    }

    let lanes = ticker_lanes(&rails.ticker);
    let recent: Vec<MovieSummary> = rails.ticker.iter().take(TOP_RAIL_LEN).cloned().collect();

    html! {
        <div class="home-page">
            {hero}
            {if rails.ticker.is_empty() { html!{} } else { html! {
                <div class="ticker-triple-container">
                    {for lanes.into_iter().enumerate().map(|(n, (items, direction))| html! {
                        <div key={n} class={format!("ticker-lane ticker-lane-{n}")}>
                            <TickerLane items={items} direction={direction} on_open={on_open.clone()} />
                        </div>
                    })}
                </div>
            } }}
            <section class="rail-section">
                <h2 class="section-title">{t("home.recent")}</h2>
                <div class="movies-rail">
                    {for recent.iter().map(|movie| rail_card(movie, None, &on_open))}
                </div>
            </section>
            <section class="rail-section">
                <h2 class="section-title">{t("home.top")}</h2>
                <div class="movies-rail">
                    {for rails.top.iter().enumerate().map(|(index, movie)| {
                        rail_card(movie, Some(index + 1), &on_open)
                    })}
                </div>
            </section>
        </div>
    }
}

fn rail_card(movie: &MovieSummary, rank: Option<usize>, on_open: &Callback<u64>) -> Html {
    let on_click = {
        let on_open = on_open.clone();
        let movie_id = movie.id;
        Callback::from(move |_| on_open.emit(movie_id))
    };
    html! {
        <div key={movie.id} class="top-movie-card" onclick={on_click}>
            {rank.map(|rank| html! { <div class="movie-rank-number">{rank}</div> }).unwrap_or_default()}
            <img
                src={images::poster_url(movie.poster_path.as_deref())}
                alt={movie.title.clone()}
                class="top-movie-poster"
                loading="lazy"
            />
            <div class="top-movie-overlay">
                <h3 class="top-movie-title">{movie.title.clone()}</h3>
                <p class="top-movie-rating">{format!("⭐ {:.1}", movie.vote_average)}</p>
            </div>
        </div>
    }
}
