//! Image URL helpers.
//!
//! Poster and profile paths arrive from the catalog as optional fragments;
//! every render site goes through these helpers so missing art degrades to a
//! fixed placeholder exactly once.

/// Base URL for full-size poster art.
pub const POSTER_BASE: &str = "https://image.tmdb.org/t/p/w500";
/// Base URL for row/ticker thumbnails.
pub const THUMB_BASE: &str = "https://image.tmdb.org/t/p/w300";
/// Base URL for person profile photos.
pub const PROFILE_BASE: &str = "https://image.tmdb.org/t/p/w185";

const POSTER_PLACEHOLDER: &str = "https://via.placeholder.com/500x750?text=No+Image";
const THUMB_PLACEHOLDER: &str = "https://via.placeholder.com/300x450?text=No+Image";
const PROFILE_PLACEHOLDER: &str = "https://via.placeholder.com/185x278?text=No+Photo";

/// Full-size poster URL, or the placeholder when the catalog has no art.
#[must_use]
pub fn poster_url(path: Option<&str>) -> String {
    join(POSTER_BASE, path, POSTER_PLACEHOLDER)
}

/// Thumbnail poster URL, or the placeholder when the catalog has no art.
#[must_use]
pub fn thumb_url(path: Option<&str>) -> String {
    join(THUMB_BASE, path, THUMB_PLACEHOLDER)
}

/// Profile photo URL, or the placeholder when the catalog has no photo.
#[must_use]
pub fn profile_url(path: Option<&str>) -> String {
    join(PROFILE_BASE, path, PROFILE_PLACEHOLDER)
}

fn join(base: &str, path: Option<&str>, placeholder: &str) -> String {
    match path {
        Some(fragment) if !fragment.trim().is_empty() => format!("{base}{fragment}"),
        _ => placeholder.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_paths_join_with_the_base() {
        assert_eq!(
            poster_url(Some("/abc.jpg")),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
        assert_eq!(
            profile_url(Some("/face.jpg")),
            "https://image.tmdb.org/t/p/w185/face.jpg"
        );
    }

    #[test]
    fn missing_paths_fall_back_to_placeholders() {
        assert!(poster_url(None).contains("placeholder"));
        assert!(thumb_url(Some("   ")).contains("placeholder"));
    }
}
