//! Pure partitioning and ticker math for the home page.
//!
//! # Design
//! - The two popular pages are combined and split once: a ranked top rail
//!   and a pool feeding three ticker lanes.
//! - Lane offsets advance one pixel per tick and wrap at the width of a
//!   single item sequence, so the repeated sequences loop seamlessly.

use cinehub_models::MovieSummary;

/// Entries in the ranked top rail.
pub const TOP_RAIL_LEN: usize = 5;
/// Entries feeding the ticker lanes.
pub const TICKER_POOL_LEN: usize = 30;
/// Entries per ticker lane.
pub const LANE_LEN: usize = 10;
/// Pixel width of one ticker slot (card plus gap).
pub const TICKER_ITEM_WIDTH: f64 = 150.0;
/// Copies of the lane sequence rendered for a seamless loop.
pub const TICKER_REPEATS: usize = 6;

/// Scroll direction of a ticker lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickerDirection {
    /// Content moves right-to-left.
    Left,
    /// Content moves left-to-right.
    Right,
}

/// Partition of the combined popular pages into the home rails.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct HomeRails {
    /// Ranked top rail.
    pub top: Vec<MovieSummary>,
    /// Pool feeding the ticker lanes.
    pub ticker: Vec<MovieSummary>,
}

/// Split combined popular results into the top rail and the ticker pool.
#[must_use]
pub fn partition_popular(mut movies: Vec<MovieSummary>) -> HomeRails {
    movies.truncate(TOP_RAIL_LEN + TICKER_POOL_LEN);
    let ticker = if movies.len() > TOP_RAIL_LEN {
        movies.split_off(TOP_RAIL_LEN)
    } else {
        Vec::new()
    };
    HomeRails {
        top: movies,
        ticker,
    }
}

/// The three home lanes: consecutive pool slices with alternating directions.
#[must_use]
pub fn ticker_lanes(pool: &[MovieSummary]) -> [(Vec<MovieSummary>, TickerDirection); 3] {
    [
        (lane(pool, 0), TickerDirection::Left),
        (lane(pool, 1), TickerDirection::Right),
        (lane(pool, 2), TickerDirection::Left),
    ]
}

fn lane(pool: &[MovieSummary], index: usize) -> Vec<MovieSummary> {
    pool.iter()
        .skip(index * LANE_LEN)
        .take(LANE_LEN)
        .cloned()
        .collect()
}

/// Offset a lane starts from, given its direction.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn initial_offset(direction: TickerDirection, item_count: usize) -> f64 {
    match direction {
        TickerDirection::Left => 0.0,
        TickerDirection::Right => -(item_count as f64 * TICKER_ITEM_WIDTH),
    }
}

/// Advance a lane offset by one tick, wrapping past one sequence width.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn advance_offset(offset: f64, direction: TickerDirection, item_count: usize) -> f64 {
    let total = item_count as f64 * TICKER_ITEM_WIDTH;
    if total <= 0.0 {
        return 0.0;
    }
    match direction {
        TickerDirection::Left => {
            let next = offset - 1.0;
            if next.abs() >= total { 0.0 } else { next }
        }
        TickerDirection::Right => {
            let next = offset + 1.0;
            if next >= 0.0 { -total } else { next }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movies(count: usize) -> Vec<MovieSummary> {
        (0..count as u64)
            .map(|id| MovieSummary {
                id,
                title: format!("movie-{id}"),
                poster_path: None,
                vote_average: 7.0,
                release_date: None,
                overview: None,
            })
            .collect()
    }

    #[test]
    fn partition_splits_top_and_ticker() {
        let rails = partition_popular(movies(40));
        assert_eq!(rails.top.len(), TOP_RAIL_LEN);
        assert_eq!(rails.ticker.len(), TICKER_POOL_LEN);
        assert_eq!(rails.top[0].id, 0);
        assert_eq!(rails.ticker[0].id, 5);
    }

    #[test]
    fn partition_handles_short_responses() {
        let rails = partition_popular(movies(3));
        assert_eq!(rails.top.len(), 3);
        assert!(rails.ticker.is_empty());
    }

    #[test]
    fn lanes_slice_the_pool_in_thirds() {
        let rails = partition_popular(movies(40));
        let lanes = ticker_lanes(&rails.ticker);
        assert_eq!(lanes[0].0.len(), LANE_LEN);
        assert_eq!(lanes[0].1, TickerDirection::Left);
        assert_eq!(lanes[1].1, TickerDirection::Right);
        assert_eq!(lanes[1].0[0].id, 15);
        assert_eq!(lanes[2].0[0].id, 25);
    }

    #[test]
    fn leftward_offset_wraps_at_sequence_width() {
        let almost = -(10.0 * TICKER_ITEM_WIDTH) + 1.0;
        assert!((advance_offset(almost, TickerDirection::Left, 10) - 0.0).abs() < f64::EPSILON);
        assert!(
            (advance_offset(-10.0, TickerDirection::Left, 10) - (-11.0)).abs() < f64::EPSILON
        );
    }

    #[test]
    fn rightward_offset_resets_to_negative_width() {
        let width = 10.0 * TICKER_ITEM_WIDTH;
        assert!(
            (advance_offset(-1.0, TickerDirection::Right, 10) - (-width)).abs() < f64::EPSILON
        );
        assert!((initial_offset(TickerDirection::Right, 10) + width).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_lane_stays_parked() {
        assert!((advance_offset(-5.0, TickerDirection::Left, 0) - 0.0).abs() < f64::EPSILON);
    }
}
