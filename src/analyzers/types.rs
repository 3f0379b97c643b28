//! Result types produced by the aggregators.

use serde::{Serialize, Serializer};

use crate::error::StatsError;
use crate::model::{DayOfWeek, Month};

/// Outcome of one statistics section.
pub type Section<T> = Result<T, StatsError>;

/// A value together with how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Counted<T> {
    pub value: T,
    pub count: usize,
}

impl<T> Counted<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Counted<U> {
        Counted {
            value: f(self.value),
            count: self.count,
        }
    }
}

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeStats {
    pub month: Counted<Month>,
    pub weekday: Counted<DayOfWeek>,
    pub hour: Counted<u32>,
}

/// Most popular stations and route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationStats {
    pub start_station: Counted<String>,
    pub end_station: Counted<String>,
    pub route: Counted<String>,
}

/// Whole days/hours/minutes/seconds of a span of seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSpan {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeSpan {
    pub fn from_seconds(total: u64) -> Self {
        Self {
            days: total / 86_400,
            hours: total % 86_400 / 3_600,
            minutes: total % 3_600 / 60,
            seconds: total % 60,
        }
    }
}

/// Mean and total trip duration over the non-corrupt trips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DurationStats {
    /// Trips that entered the computation.
    pub trips: usize,
    /// Trips skipped because they end before they start.
    pub excluded: usize,
    pub mean_seconds: u64,
    pub total_seconds: u64,
    pub mean: TimeSpan,
    pub total: TimeSpan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    /// Oldest rider.
    pub earliest: i32,
    /// Youngest rider.
    pub latest: i32,
    pub most_common: Counted<i32>,
}

/// Rider demographics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub user_types: Vec<Counted<String>>,
    #[serde(serialize_with = "serialize_section")]
    pub genders: Section<Vec<Counted<String>>>,
    #[serde(serialize_with = "serialize_section")]
    pub birth_years: Section<BirthYearStats>,
}

#[derive(Serialize)]
struct Unavailable {
    unavailable: String,
}

/// Serializes `Ok(value)` as the value and `Err(e)` as `{"unavailable": "<e>"}`.
pub fn serialize_section<T, S>(section: &Section<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match section {
        Ok(value) => value.serialize(serializer),
        Err(e) => Unavailable {
            unavailable: e.to_string(),
        }
        .serialize(serializer),
    }
}
