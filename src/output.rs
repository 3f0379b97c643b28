//! Rendering of analysis reports.
//!
//! Supports human-readable log lines and pretty JSON.

use anyhow::Result;
use tracing::{info, warn};

use crate::analyzers::analyzer::Report;
use crate::analyzers::types::{Section, TimeSpan};

/// Logs every section of a report as readable lines.
pub fn print_pretty(report: &Report) {
    info!(
        city = %report.city,
        month = %report.selection.month,
        weekday = %report.selection.weekday,
        trips = report.trips,
        "Selection"
    );

    section("Most frequent times of travel", &report.time, |t| {
        info!(
            "Most common month: {} ({} trips)",
            t.month.value.label(),
            t.month.count
        );
        info!(
            "Most common day: {} ({} trips)",
            t.weekday.value.label(),
            t.weekday.count
        );
        info!(
            "Most trips started between {}:00 and {}:00 ({} trips)",
            t.hour.value,
            t.hour.value + 1,
            t.hour.count
        );
    });

    section("Most popular stations and trip", &report.stations, |s| {
        info!(
            "Most common start station: {} ({} trips)",
            s.start_station.value, s.start_station.count
        );
        info!(
            "Most common end station: {} ({} trips)",
            s.end_station.value, s.end_station.count
        );
        info!("Most frequent route: {} ({} trips)", s.route.value, s.route.count);
    });

    section("Trip duration", &report.durations, |d| {
        info!("Average trip: {}", span(&d.mean));
        info!("Total travel time: {}", span(&d.total));
        if d.excluded > 0 {
            info!("{} trips ending before they start were left out", d.excluded);
        }
    });

    section("User stats", &report.users, |u| {
        for c in &u.user_types {
            info!("User type {}: {}", c.value, c.count);
        }
        match &u.genders {
            Ok(genders) => {
                for c in genders {
                    info!("Gender {}: {}", c.value, c.count);
                }
            }
            Err(e) => warn!("{e}"),
        }
        match &u.birth_years {
            Ok(y) => info!(
                "Oldest rider born {}, youngest {}, most common {} ({} riders)",
                y.earliest, y.latest, y.most_common.value, y.most_common.count
            ),
            Err(e) => warn!("{e}"),
        }
    });
}

/// Serializes a report as pretty-printed JSON.
pub fn render_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn section<T>(title: &str, outcome: &Section<T>, show: impl FnOnce(&T)) {
    info!("--- {title} ---");
    match outcome {
        Ok(value) => show(value),
        Err(e) => warn!("{e}"),
    }
}

fn span(t: &TimeSpan) -> String {
    format!(
        "{} days {} hours {} minutes {} seconds",
        t.days, t.hours, t.minutes, t.seconds
    )
}
