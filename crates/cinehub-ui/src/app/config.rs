//! Remote catalog configuration.
//!
//! The bearer credential is a read-only API token injected at build time;
//! builds without one still render, with every catalog call failing closed.

pub(crate) const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

pub(crate) const TMDB_BEARER_TOKEN: &str = match option_env!("CINEHUB_TMDB_TOKEN") {
    Some(token) => token,
    None => "",
};
