//! Descriptive statistics over a filtered trip dataset.
//!
//! Each aggregator takes a read-only [`Dataset`](crate::model::Dataset) and
//! returns a [`Section`](types::Section): the computed value, or a non-fatal
//! [`StatsError`](crate::error::StatsError) when the selection is empty or an
//! optional column carries no data. The aggregators are independent;
//! [`analyzer::build_report`] runs all four concurrently.

pub mod analyzer;
pub mod duration;
pub mod stations;
pub mod time;
pub mod types;
pub mod users;
pub mod utility;

#[cfg(test)]
pub(crate) mod fixtures;
