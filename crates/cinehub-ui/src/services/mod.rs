//! Browser-facing service layer: catalog HTTP, local storage, platform APIs.
pub mod library;
pub mod share;
pub mod tmdb;
