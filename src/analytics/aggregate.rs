//! Summary totals, advertiser rankings, and calendar-bucketed trends.

use std::{cmp::Ordering, collections::BTreeMap};

use chrono::{Datelike, Duration, NaiveDate};
use indexmap::IndexMap;
use serde::Deserialize;

use super::{Outcome, Unavailable};
use crate::data::Dataset;

/// Column totals, each present only when its source column exists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub total_revenue: Option<f64>,
    pub total_orders: Option<i64>,
    pub total_customers: Option<i64>,
}

/// Per-advertiser spend total.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvertiserSpend {
    pub advertiser: String,
    pub spend: f64,
}

/// One bucket of summed spend, dated at the bucket's start.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub spend: f64,
}

/// Trend bucket granularity, matching the `freq` query values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Freq {
    #[default]
    D,
    W,
    M,
}

impl Freq {
    /// First calendar day of the bucket containing `day`. Weeks anchor on
    /// Monday, months on the 1st.
    fn bucket_start(self, day: NaiveDate) -> NaiveDate {
        match self {
            Freq::D => day,
            Freq::W => day - Duration::days(i64::from(day.weekday().num_days_from_monday())),
            Freq::M => day.with_day(1).unwrap_or(day),
        }
    }
}

/// Total each numeric column that made it through the load.
pub fn summary(dataset: &Dataset) -> Summary {
    let mut out = Summary::default();
    if dataset.has_column("spend") {
        out.total_revenue = Some(dataset.rows().iter().map(|r| r.spend).sum());
    }
    if dataset.has_column("orders") {
        out.total_orders = Some(dataset.rows().iter().map(|r| r.orders).sum());
    }
    if dataset.has_column("customers") {
        out.total_customers = Some(dataset.rows().iter().map(|r| r.customers).sum());
    }
    out
}

/// Rank advertisers by summed spend, descending, keeping at most `limit`.
///
/// Grouping uses an `IndexMap` so advertisers with equal totals stay in first
/// encounter order under the stable sort.
pub fn top_advertisers(dataset: &Dataset, limit: usize) -> Outcome<Vec<AdvertiserSpend>> {
    if let Err(unavailable) = require_columns(dataset, &["advertiser", "spend"]) {
        return Outcome::Unavailable(unavailable);
    }

    let mut totals: IndexMap<&str, f64> = IndexMap::new();
    for row in dataset.rows() {
        if let Some(advertiser) = row.advertiser.as_deref() {
            *totals.entry(advertiser).or_insert(0.0) += row.spend;
        }
    }

    let mut ranked: Vec<AdvertiserSpend> = totals
        .into_iter()
        .map(|(advertiser, spend)| AdvertiserSpend {
            advertiser: advertiser.to_string(),
            spend,
        })
        .collect();
    ranked.sort_by(|a, b| b.spend.partial_cmp(&a.spend).unwrap_or(Ordering::Equal));
    ranked.truncate(limit);
    Outcome::Ready(ranked)
}

/// Sum spend into calendar buckets, ascending by bucket start.
///
/// Rows whose date failed to parse are dropped; buckets with no rows are not
/// emitted.
pub fn trend(dataset: &Dataset, freq: Freq) -> Outcome<Vec<TrendPoint>> {
    if let Err(unavailable) = require_columns(dataset, &["date", "spend"]) {
        return Outcome::Unavailable(unavailable);
    }

    let mut buckets: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for row in dataset.rows() {
        if let Some(day) = row.date {
            *buckets.entry(freq.bucket_start(day)).or_insert(0.0) += row.spend;
        }
    }

    Outcome::Ready(
        buckets
            .into_iter()
            .map(|(date, spend)| TrendPoint { date, spend })
            .collect(),
    )
}

pub(crate) fn require_columns(
    dataset: &Dataset,
    names: &[&'static str],
) -> Result<(), Unavailable> {
    for &name in names {
        if !dataset.has_column(name) {
            return Err(Unavailable::MissingColumn(name));
        }
    }
    Ok(())
}
