//! Pure section selection for the movie overlay.
//!
//! # Design
//! - Section payloads are trimmed here, once, to the shapes the overlay
//!   renders; failed fetches simply leave a section empty.
//! - Review form validation is a minimum trimmed length, enforced before
//!   the submit action fires.

use crate::core::text::excerpt;
use cinehub_models::{CastMember, CreditsResponse, CrewMember, RemoteReview, VideosResponse};

/// Cast entries shown in the overlay.
pub const CAST_LIMIT: usize = 6;
/// Remote reviews shown in the overlay.
pub const REMOTE_REVIEWS_LIMIT: usize = 3;
/// Characters kept of a remote review body.
pub const REMOTE_REVIEW_EXCERPT: usize = 300;
/// Minimum trimmed review body length accepted by the form.
pub const REVIEW_MIN_LEN: usize = 10;

/// Pick the trailer to surface: the first YouTube entry of kind `Trailer`.
#[must_use]
pub fn select_trailer(videos: &VideosResponse) -> Option<String> {
    videos
        .results
        .iter()
        .find(|video| video.kind == "Trailer" && video.site == "YouTube")
        .map(|video| video.key.clone())
}

/// Credits trimmed for the overlay: top-billed cast and directing crew.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct OverlayCredits {
    /// Top-billed cast.
    pub cast: Vec<CastMember>,
    /// Directors only.
    pub directors: Vec<CrewMember>,
}

/// Trim a credits payload to what the overlay shows.
#[must_use]
pub fn overlay_credits(credits: CreditsResponse) -> OverlayCredits {
    let mut cast = credits.cast;
    cast.truncate(CAST_LIMIT);
    let directors = credits
        .crew
        .into_iter()
        .filter(|member| member.job.as_deref() == Some("Director"))
        .collect();
    OverlayCredits { cast, directors }
}

/// Trim remote reviews to the overlay's count and excerpt rules.
#[must_use]
pub fn trim_remote_reviews(mut reviews: Vec<RemoteReview>) -> Vec<RemoteReview> {
    reviews.truncate(REMOTE_REVIEWS_LIMIT);
    for review in &mut reviews {
        review.content = excerpt(&review.content, REMOTE_REVIEW_EXCERPT);
    }
    reviews
}

/// Whether a review body passes the minimum-length rule.
#[must_use]
pub fn review_text_valid(text: &str) -> bool {
    text.trim().chars().count() >= REVIEW_MIN_LEN
}

/// Watch URL for a trailer key.
#[must_use]
pub fn trailer_url(key: &str) -> String {
    format!("https://www.youtube.com/watch?v={key}")
}

/// Public catalog URL shared for a movie.
#[must_use]
pub fn share_url(movie_id: u64) -> String {
    format!("https://www.themoviedb.org/movie/{movie_id}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinehub_models::VideoEntry;

    fn video(kind: &str, site: &str, key: &str) -> VideoEntry {
        VideoEntry {
            key: key.to_string(),
            site: site.to_string(),
            kind: kind.to_string(),
        }
    }

    #[test]
    fn trailer_selection_skips_other_entries() {
        let videos = VideosResponse {
            results: vec![
                video("Teaser", "YouTube", "t1"),
                video("Trailer", "Vimeo", "t2"),
                video("Trailer", "YouTube", "t3"),
                video("Trailer", "YouTube", "t4"),
            ],
        };
        assert_eq!(select_trailer(&videos).as_deref(), Some("t3"));
        assert!(select_trailer(&VideosResponse { results: vec![] }).is_none());
    }

    #[test]
    fn credits_keep_top_cast_and_directors_only() {
        let credits = CreditsResponse {
            cast: (0..10)
                .map(|id| CastMember {
                    id,
                    name: format!("actor-{id}"),
                    character: None,
                    profile_path: None,
                })
                .collect(),
            crew: vec![
                CrewMember {
                    id: 100,
                    name: "dp".to_string(),
                    job: Some("Director of Photography".to_string()),
                    profile_path: None,
                },
                CrewMember {
                    id: 101,
                    name: "director".to_string(),
                    job: Some("Director".to_string()),
                    profile_path: None,
                },
            ],
        };
        let trimmed = overlay_credits(credits);
        assert_eq!(trimmed.cast.len(), CAST_LIMIT);
        assert_eq!(trimmed.directors.len(), 1);
        assert_eq!(trimmed.directors[0].name, "director");
    }

    #[test]
    fn remote_reviews_are_trimmed_and_excerpted() {
        let long = "x".repeat(400);
        let reviews: Vec<RemoteReview> = (0..5)
            .map(|n| RemoteReview {
                author: format!("author-{n}"),
                content: long.clone(),
                created_at: None,
                author_details: None,
            })
            .collect();
        let trimmed = trim_remote_reviews(reviews);
        assert_eq!(trimmed.len(), REMOTE_REVIEWS_LIMIT);
        assert_eq!(
            trimmed[0].content.chars().count(),
            REMOTE_REVIEW_EXCERPT + 3
        );
        assert!(trimmed[0].content.ends_with("..."));
    }

    #[test]
    fn review_validation_trims_before_counting() {
        assert!(!review_text_valid("   corto   "));
        assert!(review_text_valid("suficientemente larga"));
    }

    #[test]
    fn urls_embed_their_ids() {
        assert_eq!(trailer_url("abc"), "https://www.youtube.com/watch?v=abc");
        assert_eq!(share_url(42), "https://www.themoviedb.org/movie/42");
    }
}
