//! Trip records, datasets, and the calendar vocabularies used to filter them.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDateTime, TimeDelta, Timelike};
use serde::Serialize;

use crate::error::SelectorError;

/// Calendar month with its 1-based ordinal as discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u8)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Month for an ordinal in `1..=12`.
    pub fn from_number(n: u32) -> Option<Self> {
        let idx = n.checked_sub(1)?;
        Self::ALL.get(idx as usize).copied()
    }

    /// Month in which `timestamp` falls.
    pub fn of(timestamp: &NaiveDateTime) -> Self {
        Self::ALL[timestamp.month0() as usize]
    }

    /// Three-letter abbreviation (`Jan`, `Feb`, ...).
    pub fn label(self) -> &'static str {
        &self.name()[..3]
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = SelectorError;

    /// Accepts `jan`, `january` or `1`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        if let Ok(n) = wanted.parse::<u32>() {
            return Self::from_number(n).ok_or_else(|| SelectorError::month(s));
        }
        Self::ALL
            .into_iter()
            .find(|m| {
                wanted == m.label().to_ascii_lowercase() || wanted == m.name().to_ascii_lowercase()
            })
            .ok_or_else(|| SelectorError::month(s))
    }
}

/// Day of the week, numbered the ISO way (Monday = 1 .. Sunday = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u8)]
pub enum DayOfWeek {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn from_number(n: u32) -> Option<Self> {
        let idx = n.checked_sub(1)?;
        Self::ALL.get(idx as usize).copied()
    }

    /// Weekday of the calendar date of `timestamp`.
    pub fn of(timestamp: &NaiveDateTime) -> Self {
        Self::ALL[timestamp.weekday().num_days_from_monday() as usize]
    }

    /// Two-letter abbreviation (`Mo`, `Tu`, ...).
    pub fn label(self) -> &'static str {
        &self.name()[..2]
    }

    pub fn name(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DayOfWeek {
    type Err = SelectorError;

    /// Accepts `mo`, `mon`, `monday` or `1`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        if let Ok(n) = wanted.parse::<u32>() {
            return Self::from_number(n).ok_or_else(|| SelectorError::weekday(s));
        }
        Self::ALL
            .into_iter()
            .find(|d| {
                let name = d.name().to_ascii_lowercase();
                wanted == d.label().to_ascii_lowercase() || wanted == name[..3] || wanted == name
            })
            .ok_or_else(|| SelectorError::weekday(s))
    }
}

/// A filter constraint: either no constraint at all, or a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Selector<T> {
    All,
    Only(T),
}

// Not derived: the derive would require `T: Default`.
impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: PartialEq> Selector<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(wanted) => wanted == value,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => f.write_str("all"),
            Selector::Only(value) => write!(f, "{value}"),
        }
    }
}

impl<T: FromStr<Err = SelectorError>> FromStr for Selector<T> {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Selector::All)
        } else {
            s.parse().map(Selector::Only)
        }
    }
}

/// The month/weekday window applied to a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FilterSelection {
    pub month: Selector<Month>,
    pub weekday: Selector<DayOfWeek>,
}

impl FilterSelection {
    pub fn new(month: Selector<Month>, weekday: Selector<DayOfWeek>) -> Self {
        Self { month, weekday }
    }

    pub fn accepts(&self, record: &TripRecord) -> bool {
        self.month.matches(&record.month()) && self.weekday.matches(&record.weekday())
    }
}

/// One ride.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub start_station: String,
    pub end_station: String,
    pub user_type: String,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

impl TripRecord {
    pub fn month(&self) -> Month {
        Month::of(&self.start_time)
    }

    pub fn weekday(&self) -> DayOfWeek {
        DayOfWeek::of(&self.start_time)
    }

    /// Start hour in `0..24`.
    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }

    /// `end_time - start_time`. Negative for corrupt records.
    pub fn duration(&self) -> TimeDelta {
        self.end_time - self.start_time
    }
}

/// Whether an optional column exists in the source file at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnPresence {
    Present,
    #[default]
    Missing,
}

impl ColumnPresence {
    pub fn is_present(self) -> bool {
        self == ColumnPresence::Present
    }
}

/// Presence of the optional columns, decided once when the file is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OptionalColumns {
    pub gender: ColumnPresence,
    pub birth_year: ColumnPresence,
}

/// An ordered, read-only collection of trips for one city.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Dataset {
    records: Vec<TripRecord>,
    columns: OptionalColumns,
}

impl Dataset {
    pub fn new(records: Vec<TripRecord>, columns: OptionalColumns) -> Self {
        Self { records, columns }
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TripRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn columns(&self) -> OptionalColumns {
        self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_month_ordinals_round_trip() {
        for (i, month) in Month::ALL.iter().enumerate() {
            assert_eq!(*month as u32, i as u32 + 1);
            assert_eq!(Month::from_number(i as u32 + 1), Some(*month));
        }
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
    }

    #[test]
    fn test_month_parse_variants() {
        assert_eq!("Jan".parse::<Month>().unwrap(), Month::January);
        assert_eq!("january".parse::<Month>().unwrap(), Month::January);
        assert_eq!(" 12 ".parse::<Month>().unwrap(), Month::December);
        assert!("Janu".parse::<Month>().is_err());
        assert!("13".parse::<Month>().is_err());
    }

    #[test]
    fn test_weekday_parse_variants() {
        assert_eq!("Mo".parse::<DayOfWeek>().unwrap(), DayOfWeek::Monday);
        assert_eq!("sun".parse::<DayOfWeek>().unwrap(), DayOfWeek::Sunday);
        assert_eq!("Thursday".parse::<DayOfWeek>().unwrap(), DayOfWeek::Thursday);
        assert_eq!("7".parse::<DayOfWeek>().unwrap(), DayOfWeek::Sunday);
        assert!("funday".parse::<DayOfWeek>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Month::September.label(), "Sep");
        assert_eq!(DayOfWeek::Saturday.label(), "Sa");
    }

    #[test]
    fn test_selector_default_is_all() {
        assert_eq!(Selector::<Month>::default(), Selector::All);
        assert_eq!(
            FilterSelection::default(),
            FilterSelection::new(Selector::All, Selector::All)
        );
    }

    #[test]
    fn test_selector_parse() {
        assert_eq!("ALL".parse::<Selector<Month>>().unwrap(), Selector::All);
        assert_eq!(
            "feb".parse::<Selector<Month>>().unwrap(),
            Selector::Only(Month::February)
        );
        assert!("nope".parse::<Selector<DayOfWeek>>().is_err());
    }

    #[test]
    fn test_derived_fields_follow_start_time() {
        // 2023-01-01 was a Sunday
        let record = TripRecord {
            start_time: at(2023, 1, 1, 23),
            end_time: at(2023, 1, 2, 1),
            start_station: "A".into(),
            end_station: "B".into(),
            user_type: "Subscriber".into(),
            gender: None,
            birth_year: None,
        };

        assert_eq!(record.month(), Month::January);
        assert_eq!(record.weekday(), DayOfWeek::Sunday);
        assert_eq!(record.hour(), 23);
        assert_eq!(record.duration().num_seconds(), 2 * 3600);
    }
}
