use tracing::debug;

use crate::analyzers::types::{Section, StationStats};
use crate::analyzers::utility::mode;
use crate::error::StatsError;
use crate::model::{Dataset, TripRecord};

/// Label for the trip between two stations.
pub fn route_label(start: &str, end: &str) -> String {
    if start == end {
        format!("roundtrip at {start}")
    } else {
        format!("{start} to {end}")
    }
}

pub fn route(trip: &TripRecord) -> String {
    route_label(&trip.start_station, &trip.end_station)
}

/// Most popular start station, end station and route.
///
/// Ties resolve to the lexicographically smallest name.
#[tracing::instrument(skip_all, fields(trips = dataset.len()))]
pub fn station_stats(dataset: &Dataset) -> Section<StationStats> {
    let start_station = mode(dataset.iter().map(|t| t.start_station.as_str()))
        .ok_or(StatsError::EmptySelection)?
        .map(str::to_string);
    let end_station = mode(dataset.iter().map(|t| t.end_station.as_str()))
        .ok_or(StatsError::EmptySelection)?
        .map(str::to_string);
    let route = mode(dataset.iter().map(route)).ok_or(StatsError::EmptySelection)?;

    debug!(
        start = %start_station.value,
        end = %end_station.value,
        route = %route.value,
        "Station stats computed"
    );

    Ok(StationStats {
        start_station,
        end_station,
        route,
    })
}
