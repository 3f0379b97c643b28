use tracing::debug;

use crate::analyzers::types::{Section, TimeStats};
use crate::analyzers::utility::mode;
use crate::error::StatsError;
use crate::model::{Dataset, TripRecord};

/// Most frequent start month, weekday and hour.
///
/// Ties resolve to the lowest ordinal: January before February, Monday
/// before Tuesday, hour 8 before hour 9.
#[tracing::instrument(skip_all, fields(trips = dataset.len()))]
pub fn time_stats(dataset: &Dataset) -> Section<TimeStats> {
    let month = mode(dataset.iter().map(TripRecord::month)).ok_or(StatsError::EmptySelection)?;
    let weekday =
        mode(dataset.iter().map(TripRecord::weekday)).ok_or(StatsError::EmptySelection)?;
    let hour = mode(dataset.iter().map(TripRecord::hour)).ok_or(StatsError::EmptySelection)?;

    debug!(month = %month.value, weekday = %weekday.value, hour = hour.value, "Time stats computed");

    Ok(TimeStats {
        month,
        weekday,
        hour,
    })
}
