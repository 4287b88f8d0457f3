//! Remote catalog endpoint paths.
//!
//! # Design
//! - Keep path/query building pure so it can be tested off-wasm.
//! - Pin the catalog language here rather than at every call site.
//! - Encode user input; numeric ids interpolate directly.

use urlencoding::encode;

/// Language requested for catalog metadata.
pub const CATALOG_LANGUAGE: &str = "es-ES";
/// Language requested for editorial reviews (the upstream corpus is English).
pub const REVIEWS_LANGUAGE: &str = "en-US";

/// Popular movies listing.
#[must_use]
pub fn popular_movies(page: u32) -> String {
    format!("/movie/popular?language={CATALOG_LANGUAGE}&page={page}")
}

/// Top-rated movies listing.
#[must_use]
pub fn top_rated_movies(page: u32) -> String {
    format!("/movie/top_rated?language={CATALOG_LANGUAGE}&page={page}")
}

/// Free-text movie search.
#[must_use]
pub fn search_movies(query: &str, page: u32) -> String {
    format!(
        "/search/movie?query={}&language={CATALOG_LANGUAGE}&page={page}",
        encode(query)
    )
}

/// Discover movies for one genre, most popular first.
#[must_use]
pub fn movies_by_genre(genre_id: u64, page: u32) -> String {
    format!(
        "/discover/movie?language={CATALOG_LANGUAGE}&with_genres={genre_id}&sort_by=popularity.desc&page={page}"
    )
}

/// Full record for a single movie.
#[must_use]
pub fn movie_details(movie_id: u64) -> String {
    format!("/movie/{movie_id}?language={CATALOG_LANGUAGE}")
}

/// Videos (trailers, teasers) attached to a movie.
#[must_use]
pub fn movie_videos(movie_id: u64) -> String {
    format!("/movie/{movie_id}/videos?language={CATALOG_LANGUAGE}")
}

/// Cast and crew for a movie.
#[must_use]
pub fn movie_credits(movie_id: u64) -> String {
    format!("/movie/{movie_id}/credits?language={CATALOG_LANGUAGE}")
}

/// Editorial reviews for a movie.
#[must_use]
pub fn movie_reviews(movie_id: u64, page: u32) -> String {
    format!("/movie/{movie_id}/reviews?language={REVIEWS_LANGUAGE}&page={page}")
}

/// Single person record.
#[must_use]
pub fn person_details(person_id: u64) -> String {
    format!("/person/{person_id}?language={CATALOG_LANGUAGE}")
}

/// A person's movie filmography.
#[must_use]
pub fn person_movie_credits(person_id: u64) -> String {
    format!("/person/{person_id}/movie_credits?language={CATALOG_LANGUAGE}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_encodes_the_query() {
        let path = search_movies("blade runner 2049", 1);
        assert_eq!(
            path,
            "/search/movie?query=blade%20runner%202049&language=es-ES&page=1"
        );
    }

    #[test]
    fn discover_pins_sort_order() {
        let path = movies_by_genre(878, 2);
        assert!(path.starts_with("/discover/movie?"));
        assert!(path.contains("with_genres=878"));
        assert!(path.contains("sort_by=popularity.desc"));
        assert!(path.ends_with("page=2"));
    }

    #[test]
    fn reviews_use_the_english_corpus() {
        assert!(movie_reviews(603, 1).contains("language=en-US"));
        assert!(movie_details(603).contains("language=es-ES"));
    }
}
