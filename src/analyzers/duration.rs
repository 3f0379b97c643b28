use chrono::TimeDelta;
use tracing::{debug, warn};

use crate::analyzers::types::{DurationStats, Section, TimeSpan};
use crate::error::StatsError;
use crate::model::{Dataset, TripRecord};

/// Mean and total trip duration.
///
/// Trips whose end precedes their start are left out of both figures; they
/// stay in the dataset for every other section. The mean is rounded to the
/// nearest second with ties to even, the total truncated to whole seconds.
#[tracing::instrument(skip_all, fields(trips = dataset.len()))]
pub fn duration_stats(dataset: &Dataset) -> Section<DurationStats> {
    let mut total_ms: i64 = 0;
    let mut trips = 0usize;

    for duration in dataset.iter().map(TripRecord::duration) {
        if duration < TimeDelta::zero() {
            continue;
        }
        total_ms += duration.num_milliseconds();
        trips += 1;
    }

    let excluded = dataset.len() - trips;
    if excluded > 0 {
        warn!(excluded, "Skipping trips that end before they start");
    }
    if trips == 0 {
        return Err(StatsError::EmptySelection);
    }

    let total_seconds = (total_ms / 1000) as u64;
    let mean_seconds = div_round_even(total_ms, trips as i64 * 1000) as u64;

    debug!(trips, mean_seconds, total_seconds, "Duration stats computed");

    Ok(DurationStats {
        trips,
        excluded,
        mean_seconds,
        total_seconds,
        mean: TimeSpan::from_seconds(mean_seconds),
        total: TimeSpan::from_seconds(total_seconds),
    })
}

/// `num / den` rounded to the nearest integer, ties to even. Both operands
/// are non-negative.
fn div_round_even(num: i64, den: i64) -> i64 {
    let (q, r) = (num / den, num % den);
    match (2 * r).cmp(&den) {
        std::cmp::Ordering::Greater => q + 1,
        std::cmp::Ordering::Equal if q % 2 == 1 => q + 1,
        _ => q,
    }
}
