//! Month/weekday projection of a dataset.

use tracing::debug;

use crate::model::{Dataset, DayOfWeek, FilterSelection, Month, Selector};

/// Returns the trips whose start time falls in the selected month and weekday.
///
/// The input is left untouched; the result keeps source order and the
/// optional-column presence of the input. `Selector::All` disables the
/// corresponding predicate.
pub fn filter(dataset: &Dataset, month: Selector<Month>, weekday: Selector<DayOfWeek>) -> Dataset {
    apply(dataset, &FilterSelection::new(month, weekday))
}

/// Same as [`filter`], taking both selectors at once.
pub fn apply(dataset: &Dataset, selection: &FilterSelection) -> Dataset {
    let records: Vec<_> = dataset
        .iter()
        .filter(|trip| selection.accepts(trip))
        .cloned()
        .collect();

    debug!(
        month = %selection.month,
        weekday = %selection.weekday,
        before = dataset.len(),
        after = records.len(),
        "Applied time filter"
    );

    Dataset::new(records, dataset.columns())
}
