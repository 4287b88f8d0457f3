//! Pure transformations over the locally persisted review store.
//!
//! # Design
//! - At most one review per (movie id, user id): a second submission
//!   replaces the stored review in place, keeping its id and likes.
//! - Aggregation groups in first-review order and sorts stably, so equal
//!   review counts keep a deterministic ranking.
//! - Averages are formatted to one decimal at this boundary (`"3.0"`), the
//!   shape the views render directly.

use chrono::{DateTime, Utc};
use cinehub_models::{ReviewDraft, UserReview};
use uuid::Uuid;

/// Display name derived from a per-browser user id (its last six characters).
#[must_use]
pub fn username_for(user_id: &str) -> String {
    let count = user_id.chars().count();
    let tail: String = user_id.chars().skip(count.saturating_sub(6)).collect();
    format!("Usuario_{tail}")
}

/// Create or replace the user's review for a movie.
///
/// When a review by this user for this movie exists it is overwritten in
/// place (rating, text, snapshot and timestamp refresh; id and likes stay).
pub fn upsert_review(
    reviews: &mut Vec<UserReview>,
    draft: &ReviewDraft,
    user_id: &str,
    now: DateTime<Utc>,
) -> UserReview {
    let position = reviews
        .iter()
        .position(|review| review.movie_id == draft.movie_id && review.user_id == user_id);
    match position {
        Some(index) => {
            let existing = &mut reviews[index];
            existing.movie_title = draft.movie_title.clone();
            existing.movie_poster = draft.movie_poster.clone();
            existing.rating = draft.rating;
            existing.text = draft.text.trim().to_string();
            existing.created_at = now;
            existing.clone()
        }
        None => {
            let review = UserReview {
                id: Uuid::new_v4(),
                movie_id: draft.movie_id,
                movie_title: draft.movie_title.clone(),
                movie_poster: draft.movie_poster.clone(),
                user_id: user_id.to_string(),
                username: username_for(user_id),
                rating: draft.rating,
                text: draft.text.trim().to_string(),
                created_at: now,
                likes: 0,
            };
            reviews.push(review.clone());
            review
        }
    }
}

/// Delete a review by id.
pub fn delete_review(reviews: &mut Vec<UserReview>, review_id: Uuid) -> bool {
    let before = reviews.len();
    reviews.retain(|review| review.id != review_id);
    reviews.len() != before
}

/// Whether the user has a stored review for the movie.
#[must_use]
pub fn has_user_reviewed(reviews: &[UserReview], movie_id: u64, user_id: &str) -> bool {
    review_for(reviews, movie_id, user_id).is_some()
}

/// The user's stored review for a movie, when present.
#[must_use]
pub fn review_for<'a>(
    reviews: &'a [UserReview],
    movie_id: u64,
    user_id: &str,
) -> Option<&'a UserReview> {
    reviews
        .iter()
        .find(|review| review.movie_id == movie_id && review.user_id == user_id)
}

/// All stored reviews for one movie, in submission order.
#[must_use]
pub fn reviews_for_movie(reviews: &[UserReview], movie_id: u64) -> Vec<UserReview> {
    reviews
        .iter()
        .filter(|review| review.movie_id == movie_id)
        .cloned()
        .collect()
}

/// Increment a review's like counter; returns the new count when found.
pub fn like_review(reviews: &mut [UserReview], review_id: Uuid) -> Option<u32> {
    let review = reviews.iter_mut().find(|review| review.id == review_id)?;
    review.likes = review.likes.saturating_add(1);
    Some(review.likes)
}

/// Store-wide review statistics for one user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewStats {
    /// Total stored reviews.
    pub total: usize,
    /// Reviews written by the given user.
    pub by_user: usize,
    /// Mean rating over the whole store, formatted to one decimal
    /// (`"0"` when empty).
    pub average_rating: String,
}

/// Compute store-wide statistics.
#[must_use]
pub fn review_stats(reviews: &[UserReview], user_id: &str) -> ReviewStats {
    let by_user = reviews
        .iter()
        .filter(|review| review.user_id == user_id)
        .count();
    let average_rating = if reviews.is_empty() {
        "0".to_string()
    } else {
        let total: u32 = reviews.iter().map(|review| u32::from(review.rating)).sum();
        format_average(total, reviews.len())
    };
    ReviewStats {
        total: reviews.len(),
        by_user,
        average_rating,
    }
}

/// Per-movie review aggregate used by the top-reviews view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovieReviewStats {
    /// Movie the aggregate is about.
    pub movie_id: u64,
    /// Title snapshot from the first stored review.
    pub movie_title: String,
    /// Poster snapshot from the first stored review.
    pub movie_poster: Option<String>,
    /// Number of stored reviews for the movie.
    pub review_count: usize,
    /// Mean of the stored ratings, formatted to one decimal.
    pub average_rating: String,
}

/// At most `limit` movies, strictly ordered by descending review count
/// (stable on first-review order for ties).
#[must_use]
pub fn top_reviewed_movies(reviews: &[UserReview], limit: usize) -> Vec<MovieReviewStats> {
    struct Bucket {
        movie_id: u64,
        movie_title: String,
        movie_poster: Option<String>,
        count: usize,
        rating_total: u32,
    }

    let mut buckets: Vec<Bucket> = Vec::new();
    for review in reviews {
        match buckets
            .iter_mut()
            .find(|bucket| bucket.movie_id == review.movie_id)
        {
            Some(bucket) => {
                bucket.count += 1;
                bucket.rating_total += u32::from(review.rating);
            }
            None => buckets.push(Bucket {
                movie_id: review.movie_id,
                movie_title: review.movie_title.clone(),
                movie_poster: review.movie_poster.clone(),
                count: 1,
                rating_total: u32::from(review.rating),
            }),
        }
    }
    buckets.sort_by(|a, b| b.count.cmp(&a.count));
    buckets
        .into_iter()
        .take(limit)
        .map(|bucket| MovieReviewStats {
            movie_id: bucket.movie_id,
            movie_title: bucket.movie_title,
            movie_poster: bucket.movie_poster,
            review_count: bucket.count,
            average_rating: format_average(bucket.rating_total, bucket.count),
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn format_average(rating_total: u32, count: usize) -> String {
    format!("{:.1}", f64::from(rating_total) / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const USER: &str = "user_abcdef123";
    const OTHER: &str = "user_zzzzzz999";

    fn at(secs: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, secs).unwrap()
    }

    fn draft(movie_id: u64, rating: u8) -> ReviewDraft {
        ReviewDraft {
            movie_id,
            movie_title: format!("movie-{movie_id}"),
            movie_poster: None,
            rating,
            text: "A memorable watch overall.".to_string(),
        }
    }

    #[test]
    fn username_uses_the_id_tail() {
        assert_eq!(username_for("user_abcdef123"), "Usuario_def123");
        assert_eq!(username_for("abc"), "Usuario_abc");
    }

    #[test]
    fn second_submission_replaces_instead_of_duplicating() {
        let mut store = Vec::new();
        let first = upsert_review(&mut store, &draft(1, 4), USER, at(0));
        let second = upsert_review(&mut store, &draft(1, 2), USER, at(10));
        assert_eq!(store.len(), 1);
        assert_eq!(second.id, first.id);
        assert_eq!(store[0].rating, 2);
        assert_eq!(store[0].created_at, at(10));
    }

    #[test]
    fn different_users_review_the_same_movie_independently() {
        let mut store = Vec::new();
        upsert_review(&mut store, &draft(1, 4), USER, at(0));
        upsert_review(&mut store, &draft(1, 5), OTHER, at(1));
        assert_eq!(store.len(), 2);
        assert!(has_user_reviewed(&store, 1, USER));
        assert!(has_user_reviewed(&store, 1, OTHER));
    }

    #[test]
    fn has_user_reviewed_tracks_submission_and_deletion() {
        let mut store = Vec::new();
        assert!(!has_user_reviewed(&store, 1, USER));
        let review = upsert_review(&mut store, &draft(1, 5), USER, at(0));
        assert!(has_user_reviewed(&store, 1, USER));
        assert!(delete_review(&mut store, review.id));
        assert!(!has_user_reviewed(&store, 1, USER));
    }

    #[test]
    fn likes_accumulate_on_the_target_review() {
        let mut store = Vec::new();
        let review = upsert_review(&mut store, &draft(1, 5), USER, at(0));
        assert_eq!(like_review(&mut store, review.id), Some(1));
        assert_eq!(like_review(&mut store, review.id), Some(2));
        assert_eq!(like_review(&mut store, Uuid::new_v4()), None);
    }

    #[test]
    fn top_reviewed_orders_by_count_and_formats_averages() {
        let mut store = Vec::new();
        upsert_review(&mut store, &draft(1, 4), USER, at(0));
        upsert_review(&mut store, &draft(1, 2), OTHER, at(1));
        upsert_review(&mut store, &draft(2, 5), USER, at(2));
        let top = top_reviewed_movies(&store, 10);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].movie_id, 1);
        assert_eq!(top[0].review_count, 2);
        assert_eq!(top[0].average_rating, "3.0");
        assert_eq!(top[1].movie_id, 2);
        assert_eq!(top[1].review_count, 1);
        assert_eq!(top[1].average_rating, "5.0");
    }

    #[test]
    fn top_reviewed_honours_the_limit() {
        let mut store = Vec::new();
        for movie_id in 1..=5 {
            upsert_review(&mut store, &draft(movie_id, 3), USER, at(0));
        }
        assert_eq!(top_reviewed_movies(&store, 2).len(), 2);
    }

    #[test]
    fn stats_cover_totals_and_average() {
        let mut store = Vec::new();
        upsert_review(&mut store, &draft(1, 4), USER, at(0));
        upsert_review(&mut store, &draft(2, 5), OTHER, at(1));
        let stats = review_stats(&store, USER);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.by_user, 1);
        assert_eq!(stats.average_rating, "4.5");
    }
}
