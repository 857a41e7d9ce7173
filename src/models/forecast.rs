//! Daily forecast summaries derived from raw forecast entries

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ForecastEntry;
use super::weather::title_case;

/// Maximum number of days covered by a forecast summary
pub const MAX_FORECAST_DAYS: usize = 5;

/// Derived aggregate covering one calendar day of forecast entries.
///
/// Never persisted; recomputed from the raw entries on every lookup.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DaySummary {
    /// Calendar date (UTC)
    pub date: NaiveDate,
    /// Highest forecast temperature in Celsius
    pub high_c: f64,
    /// Lowest forecast temperature in Celsius
    pub low_c: f64,
    /// Most frequent conditions description for the day
    pub description: String,
}

impl DaySummary {
    /// Conditions with each word capitalized, e.g. "Scattered Clouds"
    #[must_use]
    pub fn format_description(&self) -> String {
        title_case(&self.description)
    }
}

/// Group forecast entries by UTC calendar date and derive per-day summaries.
///
/// At most [`MAX_FORECAST_DAYS`] summaries are produced, covering the first
/// distinct dates in encounter order (not necessarily the earliest calendar
/// dates when the input is unordered). Per day, high and low are the extreme
/// temperatures and the description is the most frequent one; a frequency tie
/// goes to the description seen earliest among the day's entries.
#[must_use]
pub fn summarize(entries: &[ForecastEntry]) -> Vec<DaySummary> {
    let mut dates_in_order: Vec<NaiveDate> = Vec::new();
    let mut by_day: HashMap<NaiveDate, Vec<&ForecastEntry>> = HashMap::new();

    for entry in entries {
        let date = entry.timestamp.date_naive();
        if !by_day.contains_key(&date) {
            dates_in_order.push(date);
        }
        by_day.entry(date).or_default().push(entry);
    }

    dates_in_order
        .into_iter()
        .take(MAX_FORECAST_DAYS)
        .map(|date| {
            // by_day holds at least one entry for every recorded date
            let day_entries = &by_day[&date];
            let mut high_c = day_entries[0].temperature_c;
            let mut low_c = day_entries[0].temperature_c;
            for entry in day_entries {
                high_c = high_c.max(entry.temperature_c);
                low_c = low_c.min(entry.temperature_c);
            }

            DaySummary {
                date,
                high_c,
                low_c,
                description: modal_description(day_entries),
            }
        })
        .collect()
}

/// Most frequent description among the day's entries. Ties are broken by the
/// earliest first occurrence in entry order.
fn modal_description(entries: &[&ForecastEntry]) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        *counts.entry(entry.description.as_str()).or_insert(0) += 1;
    }

    let mut best_description = "";
    let mut best_count = 0;
    for entry in entries {
        let count = counts[entry.description.as_str()];
        if count > best_count {
            best_description = entry.description.as_str();
            best_count = count;
        }
    }

    best_description.to_string()
}
