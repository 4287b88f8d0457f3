//! Feature slices: one module per page plus the detail overlays.
pub mod explore;
pub mod favorites;
pub mod home;
pub mod movie_detail;
pub mod my_movies;
pub mod person_detail;
pub mod search;
pub mod top_reviews;
