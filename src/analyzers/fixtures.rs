use chrono::NaiveDateTime;

use crate::model::{ColumnPresence, Dataset, OptionalColumns, TripRecord};

pub(crate) fn ts(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").unwrap()
}

pub(crate) fn trip(start: &str, end: &str, from: &str, to: &str, user_type: &str) -> TripRecord {
    TripRecord {
        start_time: ts(start),
        end_time: ts(end),
        start_station: from.to_string(),
        end_station: to.to_string(),
        user_type: user_type.to_string(),
        gender: None,
        birth_year: None,
    }
}

pub(crate) fn without_demographics(records: Vec<TripRecord>) -> Dataset {
    Dataset::new(records, OptionalColumns::default())
}

pub(crate) fn with_demographics(records: Vec<TripRecord>) -> Dataset {
    Dataset::new(
        records,
        OptionalColumns {
            gender: ColumnPresence::Present,
            birth_year: ColumnPresence::Present,
        },
    )
}

/// Three trips: two in January (08:00 and 09:00 starts), one in February.
pub(crate) fn three_trips() -> Dataset {
    without_demographics(vec![
        trip("2023-01-01 08:00:00", "2023-01-01 08:15:00", "S1", "S2", "Subscriber"),
        trip("2023-01-02 09:00:00", "2023-01-02 09:10:00", "S1", "S1", "Customer"),
        trip("2023-02-01 10:00:00", "2023-02-01 10:05:00", "S2", "S1", "Subscriber"),
    ])
}
