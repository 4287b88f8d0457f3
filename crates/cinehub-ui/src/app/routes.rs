//! Routing definitions for the CineHub UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/search")]
    Search,
    #[at("/explore")]
    Explore,
    #[at("/favorites")]
    Favorites,
    #[at("/my-movies")]
    MyMovies,
    #[at("/top-reviews")]
    TopReviews,
    #[not_found]
    #[at("/404")]
    NotFound,
}
