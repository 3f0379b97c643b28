use tracing::debug;

use crate::analyzers::types::{BirthYearStats, Counted, Section, UserStats};
use crate::analyzers::utility::{count_table, mode};
use crate::error::StatsError;
use crate::model::Dataset;

/// Category that trips without a recorded gender are counted under.
pub const UNKNOWN_GENDER: &str = "Unknown";

/// User type counts plus gender and birth-year figures where the data has them.
#[tracing::instrument(skip_all, fields(trips = dataset.len()))]
pub fn user_stats(dataset: &Dataset) -> Section<UserStats> {
    if dataset.is_empty() {
        return Err(StatsError::EmptySelection);
    }

    let user_types = count_table(dataset.iter().map(|t| t.user_type.as_str()))
        .into_iter()
        .map(|c| c.map(str::to_string))
        .collect();

    Ok(UserStats {
        user_types,
        genders: gender_counts(dataset),
        birth_years: birth_year_stats(dataset),
    })
}

/// Trips per gender, with missing values grouped under [`UNKNOWN_GENDER`].
pub fn gender_counts(dataset: &Dataset) -> Section<Vec<Counted<String>>> {
    if !dataset.columns().gender.is_present() {
        debug!("Dataset has no gender column");
        return Err(StatsError::NoDataAvailable { column: "gender" });
    }
    if dataset.is_empty() {
        return Err(StatsError::EmptySelection);
    }

    Ok(count_table(
        dataset
            .iter()
            .map(|t| t.gender.as_deref().unwrap_or(UNKNOWN_GENDER)),
    )
    .into_iter()
    .map(|c| c.map(str::to_string))
    .collect())
}

/// Earliest, latest and most common birth year among trips that record one.
pub fn birth_year_stats(dataset: &Dataset) -> Section<BirthYearStats> {
    let no_data = StatsError::NoDataAvailable {
        column: "birth year",
    };

    if !dataset.columns().birth_year.is_present() {
        debug!("Dataset has no birth year column");
        return Err(no_data);
    }
    if dataset.is_empty() {
        return Err(StatsError::EmptySelection);
    }

    let years: Vec<i32> = dataset.iter().filter_map(|t| t.birth_year).collect();
    let (Some(&earliest), Some(&latest)) = (years.iter().min(), years.iter().max()) else {
        return Err(no_data);
    };
    let most_common = mode(years.iter().copied()).ok_or(no_data)?;

    Ok(BirthYearStats {
        earliest,
        latest,
        most_common,
    })
}
