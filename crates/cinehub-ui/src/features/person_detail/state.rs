//! Featured filmography selection for the person overlay.

use cinehub_models::{PersonCredit, PersonCredits};
use std::cmp::Ordering;

/// Filmography entries shown in the overlay.
pub const FILMOGRAPHY_LIMIT: usize = 12;
/// Characters kept of a biography.
pub const BIOGRAPHY_EXCERPT: usize = 600;

/// Combine acting and directing credits into the featured filmography:
/// unique by movie id, most popular first, top twelve.
#[must_use]
pub fn featured_filmography(credits: PersonCredits) -> Vec<PersonCredit> {
    let mut combined = credits.cast;
    combined.extend(
        credits
            .crew
            .into_iter()
            .filter(|credit| credit.job.as_deref() == Some("Director")),
    );
    combined.sort_by(|a, b| {
        b.popularity
            .partial_cmp(&a.popularity)
            .unwrap_or(Ordering::Equal)
    });
    let mut seen = Vec::new();
    combined.retain(|credit| {
        if seen.contains(&credit.id) {
            false
        } else {
            seen.push(credit.id);
            true
        }
    });
    combined.truncate(FILMOGRAPHY_LIMIT);
    combined
}

/// Whether the person's primary department is acting.
#[must_use]
pub fn is_acting_department(department: Option<&str>) -> bool {
    department == Some("Acting")
}

/// Release year from a `YYYY-MM-DD` date string.
#[must_use]
pub fn release_year(date: Option<&str>) -> Option<&str> {
    let date = date?;
    let year = date.split('-').next()?;
    if year.len() == 4 { Some(year) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credit(id: u64, popularity: f64, job: Option<&str>) -> PersonCredit {
        PersonCredit {
            id,
            title: format!("movie-{id}"),
            poster_path: None,
            vote_average: 7.0,
            release_date: Some("1999-03-31".to_string()),
            popularity,
            character: None,
            job: job.map(ToString::to_string),
        }
    }

    #[test]
    fn filmography_sorts_by_popularity_and_dedupes() {
        let credits = PersonCredits {
            cast: vec![credit(1, 5.0, None), credit(2, 50.0, None)],
            crew: vec![
                credit(2, 48.0, Some("Director")),
                credit(3, 70.0, Some("Director")),
                credit(4, 90.0, Some("Producer")),
            ],
        };
        let featured = featured_filmography(credits);
        let ids: Vec<u64> = featured.iter().map(|credit| credit.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn filmography_is_capped() {
        let credits = PersonCredits {
            cast: (0..20u32)
                .map(|n| credit(u64::from(n), f64::from(n), None))
                .collect(),
            crew: Vec::new(),
        };
        assert_eq!(featured_filmography(credits).len(), FILMOGRAPHY_LIMIT);
    }

    #[test]
    fn department_label_detects_acting() {
        assert!(is_acting_department(Some("Acting")));
        assert!(!is_acting_department(Some("Directing")));
        assert!(!is_acting_department(None));
    }

    #[test]
    fn release_year_parses_well_formed_dates() {
        assert_eq!(release_year(Some("1999-03-31")), Some("1999"));
        assert_eq!(release_year(Some("bad")), None);
        assert_eq!(release_year(None), None);
    }
}
