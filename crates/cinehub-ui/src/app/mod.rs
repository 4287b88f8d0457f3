//! Application shell wiring: routing, contexts, hydration and overlays.

use crate::app::api::ApiCtx;
use crate::components::empty_state::EmptyState;
use crate::components::shell::{AppShell, NavLabels};
use crate::components::toast::ToastHost;
use crate::core::store::{AppStore, my_movies_count};
use crate::core::theme::ThemeMode;
use crate::features::explore::view::ExplorePage;
use crate::features::favorites::view::FavoritesPage;
use crate::features::home::view::HomePage;
use crate::features::movie_detail::view::MovieDetailOverlay;
use crate::features::my_movies::view::MyMoviesPage;
use crate::features::person_detail::view::PersonDetailOverlay;
use crate::features::search::view::SearchPage;
use crate::features::top_reviews::view::TopReviewsPage;
use crate::i18n::{LocaleCode, TranslationBundle};
use crate::services::library as storage;
use gloo::utils::window;
use preferences::{load_locale, load_theme, persist_locale, persist_theme};
pub(crate) use routes::Route;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

pub(crate) mod api;
pub(crate) mod config;
mod preferences;
mod routes;

#[function_component(CineHubApp)]
fn cinehub_app() -> Html {
    html! {
        <BrowserRouter>
            <AppInner />
        </BrowserRouter>
    }
}

#[function_component(AppInner)]
fn app_inner() -> Html {
    let theme = use_state(load_theme);
    let locale = use_state(load_locale);
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_memo(
        |_| ApiCtx::new(config::TMDB_BASE_URL, config::TMDB_BEARER_TOKEN),
        (),
    );
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };
    let favorites_count = use_selector(|store: &AppStore| store.library.favorites.len());
    let my_movies_badge = use_selector(|store: &AppStore| my_movies_count(&store.library));
    let toasts = use_selector(|store: &AppStore| store.toasts.items.clone());
    let current_route = use_route::<Route>().unwrap_or(Route::Home);

    // Hydrate the library slices from storage once per boot.
    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                let user_id = storage::load_or_create_user_id();
                dispatch.reduce_mut(|store| {
                    store.library.favorites = storage::load_favorites();
                    store.library.watched = storage::load_watched();
                    store.library.lists = storage::load_lists();
                    store.library.reviews = storage::load_reviews();
                    store.library.user_id = user_id;
                    store.library.hydrated = true;
                });
                || ()
            },
            (),
        );
    }
    {
        let theme = *theme;
        use_effect_with_deps(
            move |_| {
                apply_theme(theme);
                persist_theme(theme);
                || ()
            },
            theme,
        );
    }
    {
        let locale = *locale;
        use_effect_with_deps(
            move |_| {
                persist_locale(locale);
                || ()
            },
            locale,
        );
    }

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |()| {
            let next = if *theme == ThemeMode::Light {
                ThemeMode::Dark
            } else {
                ThemeMode::Light
            };
            theme.set(next);
        })
    };

    let locale_selector = {
        let locale = locale.clone();
        html! {
            <select onchange={{
                let locale = locale.clone();
                Callback::from(move |event: Event| {
                    let target: web_sys::HtmlSelectElement =
                        event.target().unwrap().dyn_into().unwrap();
                    if let Some(next) = LocaleCode::from_lang_tag(&target.value()) {
                        locale.set(next);
                    }
                })
            }}>
                {for LocaleCode::all().iter().map(|code| html! {
                    <option value={code.code()} selected={*code == *locale}>{code.label()}</option>
                })}
            </select>
        }
    };

    let nav_labels = NavLabels {
        home: bundle.text("nav.home", "Inicio"),
        search: bundle.text("nav.search", "Buscar"),
        explore: bundle.text("nav.explore", "Explorar"),
        favorites: bundle.text("nav.favorites", "Favoritos"),
        my_movies: bundle.text("nav.my_movies", "Mis Películas"),
        top_reviews: bundle.text("nav.top_reviews", "Top Reseñas"),
    };

    let on_dismiss_toast = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: u64| {
            dispatch.reduce_mut(|store| store.toasts.dismiss(id));
        })
    };

    let bundle_routes = bundle.clone();
    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
                <AppShell
                    theme={*theme}
                    on_toggle_theme={toggle_theme}
                    active={current_route}
                    locale_selector={locale_selector}
                    nav={nav_labels}
                    tagline={bundle.text("shell.tagline", "")}
                    theme_label={bundle.text("shell.theme", "")}
                    locale_label={bundle.text("shell.locale", "")}
                    favorites_count={*favorites_count}
                    my_movies_count={*my_movies_badge}
                >
                    <Switch<Route> render={move |route| {
                        let bundle = (*bundle_routes).clone();
                        match route {
                            Route::Home => html! { <HomePage /> },
                            Route::Search => html! { <SearchPage /> },
                            Route::Explore => html! { <ExplorePage /> },
                            Route::Favorites => html! { <FavoritesPage /> },
                            Route::MyMovies => html! { <MyMoviesPage /> },
                            Route::TopReviews => html! { <TopReviewsPage /> },
                            Route::NotFound => html! {
                                <EmptyState title={bundle.text("search.no_results", "404")} />
                            },
                        }
                    }} />
                </AppShell>
                <MovieDetailOverlay />
                <PersonDetailOverlay />
                <ToastHost toasts={(*toasts).clone()} on_dismiss={on_dismiss_toast} />
            </ContextProvider<TranslationBundle>>
        </ContextProvider<ApiCtx>>
    }
}

fn apply_theme(theme: ThemeMode) {
    if let Some(document) = window().document()
        && let Some(body) = document.body()
    {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<CineHubApp>::with_root(root).render();
    } else {
        yew::Renderer::<CineHubApp>::new().render();
    }
}
