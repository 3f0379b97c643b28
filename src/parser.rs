//! CSV parser for city trip logs.

use std::io::Read;

use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::LoadError;
use crate::model::{ColumnPresence, Dataset, OptionalColumns, TripRecord};

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Column positions resolved from the header row.
struct Layout {
    start_time: usize,
    end_time: usize,
    start_station: usize,
    end_station: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl Layout {
    fn from_headers(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let required = |name: &'static str| find(name).ok_or(LoadError::MissingColumn(name));

        Ok(Self {
            start_time: required(START_TIME)?,
            end_time: required(END_TIME)?,
            start_station: required(START_STATION)?,
            end_station: required(END_STATION)?,
            user_type: required(USER_TYPE)?,
            gender: find(GENDER),
            birth_year: find(BIRTH_YEAR),
        })
    }

    fn columns(&self) -> OptionalColumns {
        let presence = |idx: Option<usize>| match idx {
            Some(_) => ColumnPresence::Present,
            None => ColumnPresence::Missing,
        };
        OptionalColumns {
            gender: presence(self.gender),
            birth_year: presence(self.birth_year),
        }
    }
}

/// Reads a header-prefixed CSV trip log into a [`Dataset`].
///
/// # Errors
///
/// Returns [`LoadError::MissingColumn`] when a required header is absent and
/// [`LoadError::Malformed`] when a required cell is empty or unparseable.
/// Row numbers in errors are 1-based and count data rows only. Text cells
/// are kept verbatim; only headers, timestamps and birth years are trimmed.
pub fn parse_trips<R: Read>(input: R) -> Result<Dataset, LoadError> {
    let mut reader = ReaderBuilder::new().trim(Trim::Headers).from_reader(input);
    let layout = Layout::from_headers(reader.headers()?)?;

    let mut records = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        let record = result?;

        records.push(TripRecord {
            start_time: timestamp(&record, layout.start_time, row, START_TIME)?,
            end_time: timestamp(&record, layout.end_time, row, END_TIME)?,
            start_station: text(&record, layout.start_station, row, START_STATION)?,
            end_station: text(&record, layout.end_station, row, END_STATION)?,
            user_type: text(&record, layout.user_type, row, USER_TYPE)?,
            gender: layout
                .gender
                .map(|idx| cell(&record, idx))
                .filter(|v| !v.is_empty())
                .map(str::to_string),
            birth_year: match layout.birth_year {
                Some(idx) => birth_year(&record, idx, row)?,
                None => None,
            },
        });
    }

    let columns = layout.columns();
    debug!(rows = records.len(), ?columns, "Parsed trip log");
    Ok(Dataset::new(records, columns))
}

/// Parses a start/end timestamp in any of the accepted layouts.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

fn cell(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or("")
}

fn malformed(row: usize, column: &'static str, value: &str) -> LoadError {
    LoadError::Malformed {
        row,
        column,
        value: value.to_string(),
    }
}

fn text(
    record: &StringRecord,
    idx: usize,
    row: usize,
    column: &'static str,
) -> Result<String, LoadError> {
    let value = cell(record, idx);
    if value.is_empty() {
        return Err(malformed(row, column, value));
    }
    Ok(value.to_string())
}

fn timestamp(
    record: &StringRecord,
    idx: usize,
    row: usize,
    column: &'static str,
) -> Result<NaiveDateTime, LoadError> {
    let value = cell(record, idx).trim();
    parse_timestamp(value).ok_or_else(|| malformed(row, column, value))
}

/// Birth years are often exported as floats (`1989.0`); only integral
/// values are accepted.
fn birth_year(record: &StringRecord, idx: usize, row: usize) -> Result<Option<i32>, LoadError> {
    let value = cell(record, idx).trim();
    if value.is_empty() {
        return Ok(None);
    }
    if let Ok(year) = value.parse::<i32>() {
        return Ok(Some(year));
    }
    match value.parse::<f64>() {
        Ok(year) if year.fract() == 0.0 && year.abs() <= i32::MAX as f64 => Ok(Some(year as i32)),
        _ => Err(malformed(row, BIRTH_YEAR, value)),
    }
}
