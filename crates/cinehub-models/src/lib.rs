#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared record types for CineHub.
//!
//! The wire types mirror the remote catalog's JSON payloads and are parsed
//! as-is; the library types are the shapes persisted in browser storage.
//! Normalization of optional remote fields (missing poster paths, empty
//! release dates) happens once at the conversion boundary so render code
//! never re-checks them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Paged envelope returned by the catalog's list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageResponse<T> {
    /// 1-based page number of this response.
    #[serde(default)]
    pub page: u32,
    /// Records on this page.
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    /// Total pages available upstream.
    #[serde(default)]
    pub total_pages: u32,
    /// Total records available upstream.
    #[serde(default)]
    pub total_results: u32,
}

/// Compact movie record used by list, search and discover endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSummary {
    /// Catalog-wide movie identifier.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Poster image path fragment, when the catalog has art.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Average rating on the catalog's 0–10 scale.
    #[serde(default)]
    pub vote_average: f64,
    /// Release date as `YYYY-MM-DD`, when known.
    #[serde(default)]
    pub release_date: Option<String>,
    /// Short synopsis, when present.
    #[serde(default)]
    pub overview: Option<String>,
}

/// Full movie record returned by the single-movie endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetail {
    /// Catalog-wide movie identifier.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Poster image path fragment, when the catalog has art.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Average rating on the catalog's 0–10 scale.
    #[serde(default)]
    pub vote_average: f64,
    /// Number of votes behind the average.
    #[serde(default)]
    pub vote_count: u64,
    /// Release date as `YYYY-MM-DD`, when known.
    #[serde(default)]
    pub release_date: Option<String>,
    /// Synopsis, when present.
    #[serde(default)]
    pub overview: Option<String>,
    /// Catalog popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// ISO-639-1 original language code.
    #[serde(default)]
    pub original_language: Option<String>,
}

/// A single video entry attached to a movie (trailers, teasers, clips).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoEntry {
    /// Provider-side video key (e.g. a YouTube id).
    pub key: String,
    /// Hosting site name as reported by the catalog.
    pub site: String,
    /// Video kind, e.g. `Trailer` or `Teaser`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Envelope for a movie's video entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideosResponse {
    /// Video entries in catalog order.
    #[serde(default = "Vec::new")]
    pub results: Vec<VideoEntry>,
}

/// Cast credit for a movie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CastMember {
    /// Person identifier.
    pub id: u64,
    /// Person display name.
    pub name: String,
    /// Character played in this movie.
    #[serde(default)]
    pub character: Option<String>,
    /// Profile photo path fragment, when available.
    #[serde(default)]
    pub profile_path: Option<String>,
}

/// Crew credit for a movie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrewMember {
    /// Person identifier.
    pub id: u64,
    /// Person display name.
    pub name: String,
    /// Crew job, e.g. `Director`.
    #[serde(default)]
    pub job: Option<String>,
    /// Profile photo path fragment, when available.
    #[serde(default)]
    pub profile_path: Option<String>,
}

/// Cast and crew for a single movie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreditsResponse {
    /// Cast credits in billing order.
    #[serde(default = "Vec::new")]
    pub cast: Vec<CastMember>,
    /// Crew credits.
    #[serde(default = "Vec::new")]
    pub crew: Vec<CrewMember>,
}

/// Editorial review fetched from the remote catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemoteReview {
    /// Author display name.
    pub author: String,
    /// Full review text.
    #[serde(default)]
    pub content: String,
    /// Creation timestamp string as reported upstream.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Extra author metadata, when present.
    #[serde(default)]
    pub author_details: Option<RemoteReviewAuthor>,
}

/// Author metadata attached to a remote review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemoteReviewAuthor {
    /// Author's rating on the catalog's 0–10 scale, when given.
    #[serde(default)]
    pub rating: Option<f64>,
}

/// Person record (actor or crew member).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Person {
    /// Person identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Birthday as `YYYY-MM-DD`, when known.
    #[serde(default)]
    pub birthday: Option<String>,
    /// Birthplace, when known.
    #[serde(default)]
    pub place_of_birth: Option<String>,
    /// Biography text, possibly empty.
    #[serde(default)]
    pub biography: Option<String>,
    /// Department the person is primarily known for, e.g. `Acting`.
    #[serde(default)]
    pub known_for_department: Option<String>,
    /// Profile photo path fragment, when available.
    #[serde(default)]
    pub profile_path: Option<String>,
}

/// One movie in a person's filmography.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonCredit {
    /// Movie identifier.
    pub id: u64,
    /// Movie title.
    pub title: String,
    /// Poster path fragment, when available.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Average rating on the catalog's 0–10 scale.
    #[serde(default)]
    pub vote_average: f64,
    /// Release date as `YYYY-MM-DD`, when known.
    #[serde(default)]
    pub release_date: Option<String>,
    /// Catalog popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Character played, for cast credits.
    #[serde(default)]
    pub character: Option<String>,
    /// Crew job, for crew credits.
    #[serde(default)]
    pub job: Option<String>,
}

/// Cast and crew filmography for a person.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonCredits {
    /// Movies the person acted in.
    #[serde(default = "Vec::new")]
    pub cast: Vec<PersonCredit>,
    /// Movies the person crewed on.
    #[serde(default = "Vec::new")]
    pub crew: Vec<PersonCredit>,
}

/// Movie snapshot persisted in the favorites/watched stores and inside lists.
///
/// A saved snapshot is deliberately detached from the remote catalog; it can
/// go stale if the upstream record changes or disappears.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedMovie {
    /// Catalog-wide movie identifier; unique within one store.
    pub id: u64,
    /// Title at the time the snapshot was taken.
    pub title: String,
    /// Poster path fragment at the time the snapshot was taken.
    pub poster_path: Option<String>,
    /// Average rating at the time the snapshot was taken.
    pub vote_average: f64,
    /// Release date at the time the snapshot was taken.
    pub release_date: Option<String>,
    /// When the snapshot entered the store.
    pub added_at: DateTime<Utc>,
}

impl SavedMovie {
    /// Snapshot a list/search record into a storable entry.
    #[must_use]
    pub fn from_summary(movie: &MovieSummary, added_at: DateTime<Utc>) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            poster_path: non_blank(movie.poster_path.as_deref()),
            vote_average: movie.vote_average,
            release_date: non_blank(movie.release_date.as_deref()),
            added_at,
        }
    }

    /// Snapshot a full movie record into a storable entry.
    #[must_use]
    pub fn from_detail(movie: &MovieDetail, added_at: DateTime<Utc>) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            poster_path: non_blank(movie.poster_path.as_deref()),
            vote_average: movie.vote_average,
            release_date: non_blank(movie.release_date.as_deref()),
            added_at,
        }
    }
}

/// User-created movie list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieList {
    /// Stable list identifier.
    pub id: Uuid,
    /// List name as entered by the user (trimmed).
    pub name: String,
    /// Optional free-text description (trimmed, possibly empty).
    pub description: String,
    /// Ordered member snapshots, unique by movie id.
    pub movies: Vec<SavedMovie>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp (membership or metadata changes).
    pub updated_at: DateTime<Utc>,
}

/// A review written by the local browser user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserReview {
    /// Stable review identifier.
    pub id: Uuid,
    /// Movie the review is about.
    pub movie_id: u64,
    /// Movie title snapshot taken at submission time.
    pub movie_title: String,
    /// Movie poster snapshot taken at submission time.
    pub movie_poster: Option<String>,
    /// Per-browser author identifier.
    pub user_id: String,
    /// Display name derived from the author identifier.
    pub username: String,
    /// Star rating, 1–5.
    pub rating: u8,
    /// Review body (trimmed).
    pub text: String,
    /// Submission timestamp; refreshed when the review is edited.
    pub created_at: DateTime<Utc>,
    /// Like counter.
    pub likes: u32,
}

/// Input for creating or replacing a review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    /// Movie the review is about.
    pub movie_id: u64,
    /// Movie title snapshot.
    pub movie_title: String,
    /// Movie poster snapshot.
    pub movie_poster: Option<String>,
    /// Star rating, 1–5.
    pub rating: u8,
    /// Review body; callers trim and length-check before submitting.
    pub text: String,
}

fn non_blank(value: Option<&str>) -> Option<String> {
    match value {
        Some(path) if !path.trim().is_empty() => Some(path.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_summary() -> MovieSummary {
        MovieSummary {
            id: 42,
            title: "Arrival".to_string(),
            poster_path: Some("/arrival.jpg".to_string()),
            vote_average: 7.9,
            release_date: Some("2016-11-11".to_string()),
            overview: Some("Aliens land.".to_string()),
        }
    }

    #[test]
    fn page_response_tolerates_missing_fields() {
        let parsed: PageResponse<MovieSummary> =
            serde_json::from_str(r#"{"results":[{"id":1,"title":"Solo"}]}"#).expect("parse");
        assert_eq!(parsed.page, 0);
        assert_eq!(parsed.results.len(), 1);
        assert_eq!(parsed.results[0].title, "Solo");
        assert!(parsed.results[0].poster_path.is_none());
    }

    #[test]
    fn video_entry_maps_reserved_type_field() {
        let parsed: VideoEntry =
            serde_json::from_str(r#"{"key":"abc","site":"YouTube","type":"Trailer"}"#)
                .expect("parse");
        assert_eq!(parsed.kind, "Trailer");
    }

    #[test]
    fn saved_movie_snapshot_keeps_identity_and_art() {
        let added_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let saved = SavedMovie::from_summary(&sample_summary(), added_at);
        assert_eq!(saved.id, 42);
        assert_eq!(saved.poster_path.as_deref(), Some("/arrival.jpg"));
        assert_eq!(saved.added_at, added_at);
    }

    #[test]
    fn saved_movie_snapshot_normalizes_blank_fields() {
        let mut summary = sample_summary();
        summary.poster_path = Some("  ".to_string());
        summary.release_date = Some(String::new());
        let saved = SavedMovie::from_summary(&summary, Utc::now());
        assert!(saved.poster_path.is_none());
        assert!(saved.release_date.is_none());
    }

    #[test]
    fn user_review_round_trips_through_json() {
        let review = UserReview {
            id: Uuid::nil(),
            movie_id: 7,
            movie_title: "Heat".to_string(),
            movie_poster: None,
            user_id: "user_abcdef123".to_string(),
            username: "Usuario_def123".to_string(),
            rating: 4,
            text: "Great pacing throughout.".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            likes: 2,
        };
        let encoded = serde_json::to_string(&review).expect("encode");
        let decoded: UserReview = serde_json::from_str(&encoded).expect("decode");
        assert_eq!(decoded, review);
    }
}
