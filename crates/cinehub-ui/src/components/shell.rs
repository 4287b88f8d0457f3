use crate::app::Route;
use crate::core::theme::ThemeMode;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Clone, PartialEq)]
pub(crate) struct NavLabels {
    pub home: String,
    pub search: String,
    pub explore: String,
    pub favorites: String,
    pub my_movies: String,
    pub top_reviews: String,
}

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    pub theme: ThemeMode,
    pub on_toggle_theme: Callback<()>,
    pub active: Route,
    pub locale_selector: Html,
    pub nav: NavLabels,
    pub tagline: String,
    pub theme_label: String,
    pub locale_label: String,
    pub favorites_count: usize,
    pub my_movies_count: usize,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let nav_open = use_state(|| false);
    let toggle_nav = {
        let nav_open = nav_open.clone();
        Callback::from(move |_| nav_open.set(!*nav_open))
    };

    let theme_name = match props.theme {
        ThemeMode::Light => "Light",
        ThemeMode::Dark => "Dark",
    };

    html! {
        <div class={classes!("app-shell", format!("theme-{}", props.theme.as_str()))}>
            <aside class={classes!("sidebar", if *nav_open { "open" } else { "closed" })}>
                <div class="brand">
                    <button class="ghost mobile-only" onclick={toggle_nav.clone()} aria-label="Cerrar navegación">{"✕"}</button>
                    <strong>{"▶ CineHub"}</strong>
                    <span class="muted">{&props.tagline}</span>
                </div>
                <nav>
                    {nav_item(Route::Home, &props.nav.home, "▶", None, &props.active)}
                    {nav_item(Route::Search, &props.nav.search, "⌕", None, &props.active)}
                    {nav_item(Route::Explore, &props.nav.explore, "◈", None, &props.active)}
                    {nav_item(Route::Favorites, &props.nav.favorites, "♥", Some(props.favorites_count), &props.active)}
                    {nav_item(Route::MyMovies, &props.nav.my_movies, "☰", Some(props.my_movies_count), &props.active)}
                    {nav_item(Route::TopReviews, &props.nav.top_reviews, "★", None, &props.active)}
                </nav>
                <div class="sidebar-footer">
                    <div class="theme-toggle">
                        <small>{&props.theme_label}</small>
                        <button class="ghost" onclick={{
                            let on_toggle_theme = props.on_toggle_theme.clone();
                            Callback::from(move |_| on_toggle_theme.emit(()))
                        }}>{theme_name}</button>
                    </div>
                    <div class="locale-toggle">
                        <small>{&props.locale_label}</small>
                        {props.locale_selector.clone()}
                    </div>
                </div>
            </aside>
            <div class="main">
                <header class="topbar mobile-only">
                    <button class="ghost" aria-label="Abrir navegación" onclick={toggle_nav}>{"☰"}</button>
                    <strong>{"CineHub"}</strong>
                </header>
                <main>
                    {for props.children.iter()}
                </main>
            </div>
        </div>
    }
}

fn nav_item(route: Route, label: &str, icon: &str, count: Option<usize>, active: &Route) -> Html {
    let classes = classes!("nav-item", (*active == route).then_some("active"));
    html! {
        <Link<Route> to={route} classes={classes}>
            <span class="nav-icon">{icon}</span>
            <span>{label}</span>
            {count.filter(|count| *count > 0).map(|count| html! {
                <span class="nav-count">{count}</span>
            }).unwrap_or_default()}
        </Link<Route>>
    }
}
