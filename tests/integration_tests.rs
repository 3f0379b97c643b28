use bikeshare_stats::analyzers::analyzer::build_report;
use bikeshare_stats::error::{LoadError, StatsError};
use bikeshare_stats::filter::{apply, filter};
use bikeshare_stats::infra::{CityCatalog, LocalDirSource};
use bikeshare_stats::loader::load_city;
use bikeshare_stats::model::{Dataset, DayOfWeek, FilterSelection, Month, Selector};
use std::path::PathBuf;
use std::sync::Arc;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn catalog() -> CityCatalog {
    CityCatalog::load(&fixtures().join("cities.json")).expect("Failed to load catalog")
}

async fn load(city: &str) -> Result<Dataset, LoadError> {
    let source = LocalDirSource::new(fixtures());
    load_city(&catalog(), &source, city).await
}

#[tokio::test]
async fn test_full_pipeline_chicago() {
    let dataset = load("Chicago").await.expect("Failed to load chicago");
    assert_eq!(dataset.len(), 10);

    let selection = FilterSelection::default();
    let report = build_report("Chicago", selection, Arc::new(apply(&dataset, &selection)))
        .await
        .unwrap();

    let time = report.time.unwrap();
    assert_eq!(time.month.value, Month::January);
    assert_eq!(time.month.count, 3);
    assert_eq!(time.weekday.value, DayOfWeek::Monday);
    assert_eq!(time.hour.value, 9);

    let stations = report.stations.unwrap();
    assert_eq!(stations.start_station.value, "Clinton St & Washington Blvd");
    assert_eq!(stations.end_station.value, "Canal St & Taylor St");
    assert_eq!(
        stations.route.value,
        "Clinton St & Washington Blvd to Canal St & Taylor St"
    );
    assert_eq!(stations.route.count, 3);

    let durations = report.durations.unwrap();
    assert_eq!(durations.total_seconds, 6172);
    assert_eq!(durations.mean_seconds, 617);
    assert_eq!(durations.excluded, 0);

    let users = report.users.unwrap();
    assert_eq!(users.user_types[0].value, "Subscriber");
    assert_eq!(users.user_types[0].count, 8);
    let genders: Vec<_> = users
        .genders
        .unwrap()
        .into_iter()
        .map(|c| (c.value, c.count))
        .collect();
    assert_eq!(
        genders,
        vec![
            ("Male".to_string(), 6),
            ("Female".to_string(), 2),
            ("Unknown".to_string(), 2)
        ]
    );
    let years = users.birth_years.unwrap();
    assert_eq!(years.earliest, 1975);
    assert_eq!(years.latest, 1992);
    assert_eq!(years.most_common.value, 1990);
}

#[tokio::test]
async fn test_january_selection() {
    let dataset = load("chicago").await.unwrap();
    let january = filter(&dataset, Selector::Only(Month::January), Selector::All);
    assert_eq!(january.len(), 3);

    let selection = FilterSelection::new(Selector::Only(Month::January), Selector::All);
    let report = build_report("Chicago", selection, Arc::new(january))
        .await
        .unwrap();

    let time = report.time.unwrap();
    assert_eq!(time.hour.value, 14);
    assert_eq!(time.weekday.value, DayOfWeek::Tuesday);
    assert_eq!(
        report.stations.unwrap().start_station.value,
        "Clark St & Randolph St"
    );
}

#[tokio::test]
async fn test_washington_without_demographics() {
    let dataset = load("Washington").await.unwrap();
    assert_eq!(dataset.len(), 8);

    let selection = FilterSelection::default();
    let report = build_report("Washington", selection, Arc::new(dataset))
        .await
        .unwrap();

    let durations = report.durations.unwrap();
    assert_eq!(durations.trips, 7);
    assert_eq!(durations.excluded, 1);
    assert_eq!(durations.total_seconds, 6407);
    assert_eq!(durations.mean_seconds, 915);

    let users = report.users.unwrap();
    assert_eq!(users.user_types[0].count, 7);
    assert_eq!(
        users.genders,
        Err(StatsError::NoDataAvailable { column: "gender" })
    );
    assert!(users.birth_years.is_err());
}

#[tokio::test]
async fn test_negative_trip_still_counts_outside_durations() {
    let dataset = load("Washington").await.unwrap();
    let selection = FilterSelection::new(
        Selector::Only(Month::June),
        Selector::Only(DayOfWeek::Tuesday),
    );
    let filtered = Arc::new(apply(&dataset, &selection));
    assert_eq!(filtered.len(), 2);

    let report = build_report("Washington", selection, filtered).await.unwrap();

    assert_eq!(report.durations.unwrap().trips, 1);
    assert_eq!(report.users.unwrap().user_types[0].count, 2);
    assert_eq!(report.time.unwrap().weekday.count, 2);
}

#[tokio::test]
async fn test_empty_selection() {
    let dataset = load("Washington").await.unwrap();
    let selection = FilterSelection::new(
        Selector::Only(Month::January),
        Selector::Only(DayOfWeek::Sunday),
    );
    let report = build_report("Washington", selection, Arc::new(apply(&dataset, &selection)))
        .await
        .unwrap();

    assert_eq!(report.trips, 0);
    assert_eq!(report.time, Err(StatsError::EmptySelection));
    assert_eq!(report.stations, Err(StatsError::EmptySelection));
    assert_eq!(report.durations, Err(StatsError::EmptySelection));
    assert_eq!(report.users, Err(StatsError::EmptySelection));
}

#[tokio::test]
async fn test_load_errors() {
    assert!(matches!(
        load("Ghost Town").await,
        Err(LoadError::NotFound { .. })
    ));
    assert!(matches!(
        load("Springfield").await,
        Err(LoadError::NotFound { .. })
    ));

    let err = load("Broken Town").await.unwrap_err();
    assert!(err.is_parse());
}
