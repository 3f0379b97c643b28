use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{Span, info};

use crate::analyzers::duration::duration_stats;
use crate::analyzers::stations::station_stats;
use crate::analyzers::time::time_stats;
use crate::analyzers::types::{
    DurationStats, Section, StationStats, TimeStats, UserStats, serialize_section,
};
use crate::analyzers::users::user_stats;
use crate::model::{Dataset, FilterSelection};

/// All four statistics sections for one filtered selection of a city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub city: String,
    pub selection: FilterSelection,
    pub trips: usize,
    #[serde(serialize_with = "serialize_section")]
    pub time: Section<TimeStats>,
    #[serde(serialize_with = "serialize_section")]
    pub stations: Section<StationStats>,
    #[serde(serialize_with = "serialize_section")]
    pub durations: Section<DurationStats>,
    #[serde(serialize_with = "serialize_section")]
    pub users: Section<UserStats>,
}

/// Runs every aggregator on its own blocking task over the shared dataset.
///
/// Empty or missing data only affects the section concerned; an error is
/// returned only if a worker task fails to complete.
#[tracing::instrument(skip(selection, dataset), fields(trips = dataset.len()))]
pub async fn build_report(
    city: &str,
    selection: FilterSelection,
    dataset: Arc<Dataset>,
) -> Result<Report> {
    let time = spawn_section(&dataset, time_stats);
    let stations = spawn_section(&dataset, station_stats);
    let durations = spawn_section(&dataset, duration_stats);
    let users = spawn_section(&dataset, user_stats);

    let (time, stations, durations, users) = tokio::try_join!(time, stations, durations, users)?;

    info!(
        time = time.is_ok(),
        stations = stations.is_ok(),
        durations = durations.is_ok(),
        users = users.is_ok(),
        "Report built"
    );

    Ok(Report {
        city: city.to_string(),
        selection,
        trips: dataset.len(),
        time,
        stations,
        durations,
        users,
    })
}

fn spawn_section<T, F>(dataset: &Arc<Dataset>, aggregate: F) -> JoinHandle<Section<T>>
where
    T: Send + 'static,
    F: FnOnce(&Dataset) -> Section<T> + Send + 'static,
{
    let dataset = Arc::clone(dataset);
    let span = Span::current();
    tokio::task::spawn_blocking(move || span.in_scope(|| aggregate(&dataset)))
}
