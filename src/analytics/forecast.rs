//! Short-horizon spend forecast: daily series, linear fit, extrapolation.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};

use super::{aggregate, ols, Outcome, Unavailable};
use crate::data::Dataset;

/// A single extrapolated day of spend. `predicted_revenue` is never negative.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub predicted_revenue: f64,
}

/// Summed spend per calendar day, ascending. Rebuilt from the dataset on
/// every request; rows with a null date are dropped.
pub fn daily_series(dataset: &Dataset) -> BTreeMap<NaiveDate, f64> {
    let mut series = BTreeMap::new();
    for row in dataset.rows() {
        if let Some(day) = row.date {
            *series.entry(day).or_insert(0.0) += row.spend;
        }
    }
    series
}

/// Extrapolate the daily spend trend `days` calendar days past the last
/// observed day.
///
/// Each day is encoded as its proleptic Gregorian ordinal so the ordinary
/// least-squares fit captures a constant per-day trend. A declining trend may
/// extrapolate below zero; predictions are clamped before they leave the
/// pipeline.
pub fn predict(dataset: &Dataset, days: u32) -> Outcome<Vec<ForecastPoint>> {
    if let Err(unavailable) = aggregate::require_columns(dataset, &["date", "spend"]) {
        return Outcome::Unavailable(unavailable);
    }

    let series = daily_series(dataset);
    if series.len() < 2 {
        // a single point cannot determine a trend
        return Outcome::Unavailable(Unavailable::InsufficientHistory);
    }
    let Some(&last) = series.keys().next_back() else {
        return Outcome::Unavailable(Unavailable::InsufficientHistory);
    };

    let points: Vec<(f64, f64)> = series
        .iter()
        .map(|(day, spend)| (f64::from(day.num_days_from_ce()), *spend))
        .collect();
    let fit = ols::least_squares(&points);

    let mut out = Vec::with_capacity(days as usize);
    for offset in 1..=i64::from(days) {
        let date = last + Duration::days(offset);
        let predicted = fit.at(f64::from(date.num_days_from_ce())).max(0.0);
        out.push(ForecastPoint {
            date,
            predicted_revenue: predicted,
        });
    }
    Outcome::Ready(out)
}
