//! HTTP client for the remote movie catalog.
//!
//! # Design
//! - Every call is an independent, uncached GET with the static bearer
//!   credential; no retry, no timeout.
//! - Paths come from the pure builders in [`crate::core::endpoints`].
//! - Failures collapse into one [`ApiError`] carrying the HTTP status
//!   (0 when the request never reached the server).

use crate::core::endpoints;
use cinehub_models::{
    CreditsResponse, MovieDetail, MovieSummary, PageResponse, Person, PersonCredits, RemoteReview,
    VideosResponse,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Error surfaced by catalog calls.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("catalog request failed ({status}): {message}")]
pub struct ApiError {
    /// HTTP status code; 0 when the request never reached the server.
    pub status: u16,
    /// Human-oriented description of the failure.
    pub message: String,
}

/// Result alias for catalog calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Read-only catalog client.
#[derive(Clone, Debug)]
pub struct TmdbClient {
    base_url: String,
    bearer_token: String,
}

impl TmdbClient {
    /// Create a client for the given API root and bearer credential.
    pub fn new(base_url: impl Into<String>, bearer_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bearer_token: bearer_token.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = format!("{}{path}", self.base_url.trim_end_matches('/'));
        let response = Request::get(&url)
            .header("Authorization", &format!("Bearer {}", self.bearer_token))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|err| ApiError {
                status: 0,
                message: err.to_string(),
            })?;
        if !response.ok() {
            return Err(ApiError {
                status: response.status(),
                message: response.status_text(),
            });
        }
        response.json::<T>().await.map_err(|err| ApiError {
            status: response.status(),
            message: err.to_string(),
        })
    }

    /// Popular movies, one page.
    pub async fn popular_movies(&self, page: u32) -> ApiResult<PageResponse<MovieSummary>> {
        self.get_json(&endpoints::popular_movies(page)).await
    }

    /// Top-rated movies, one page.
    pub async fn top_rated_movies(&self, page: u32) -> ApiResult<PageResponse<MovieSummary>> {
        self.get_json(&endpoints::top_rated_movies(page)).await
    }

    /// Free-text movie search, one page.
    pub async fn search_movies(
        &self,
        query: &str,
        page: u32,
    ) -> ApiResult<PageResponse<MovieSummary>> {
        self.get_json(&endpoints::search_movies(query, page)).await
    }

    /// Discover movies for a genre, most popular first.
    pub async fn movies_by_genre(
        &self,
        genre_id: u64,
        page: u32,
    ) -> ApiResult<PageResponse<MovieSummary>> {
        self.get_json(&endpoints::movies_by_genre(genre_id, page))
            .await
    }

    /// Full record for one movie.
    pub async fn movie_details(&self, movie_id: u64) -> ApiResult<MovieDetail> {
        self.get_json(&endpoints::movie_details(movie_id)).await
    }

    /// Videos attached to one movie.
    pub async fn movie_videos(&self, movie_id: u64) -> ApiResult<VideosResponse> {
        self.get_json(&endpoints::movie_videos(movie_id)).await
    }

    /// Cast and crew for one movie.
    pub async fn movie_credits(&self, movie_id: u64) -> ApiResult<CreditsResponse> {
        self.get_json(&endpoints::movie_credits(movie_id)).await
    }

    /// Editorial reviews for one movie, one page.
    pub async fn movie_reviews(
        &self,
        movie_id: u64,
        page: u32,
    ) -> ApiResult<PageResponse<RemoteReview>> {
        self.get_json(&endpoints::movie_reviews(movie_id, page))
            .await
    }

    /// Single person record.
    pub async fn person_details(&self, person_id: u64) -> ApiResult<Person> {
        self.get_json(&endpoints::person_details(person_id)).await
    }

    /// A person's movie filmography.
    pub async fn person_movie_credits(&self, person_id: u64) -> ApiResult<PersonCredits> {
        self.get_json(&endpoints::person_movie_credits(person_id))
            .await
    }
}
