//! HTTP route handlers for Axum.

use std::fmt::Display;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::warn;

use super::AppState;
use crate::{
    analytics::{
        aggregate::{self, Freq},
        forecast, Outcome,
    },
    api::types::{
        AdvertiserDto, BannerDto, ForecastPointDto, HealthDto, SummaryDto, TrendPointDto,
    },
};

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

pub async fn root() -> Json<BannerDto> {
    Json(BannerDto {
        status: "API is running",
        message: "Welcome to the Advertiser Analytics API",
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok",
        rows: state.dataset.len(),
        columns: state.dataset.columns().to_vec(),
    })
}

pub async fn summary(State(state): State<AppState>) -> Json<SummaryDto> {
    Json(aggregate::summary(&state.dataset).into())
}

#[derive(Debug, Deserialize)]
pub struct TopQuery {
    pub limit: Option<usize>,
}

pub async fn top_advertisers(
    State(state): State<AppState>,
    Query(query): Query<TopQuery>,
) -> ApiResult<Vec<AdvertiserDto>> {
    let limit = validate_range("limit", query.limit.unwrap_or(5), 1, 50)?;
    let ranked = ready_or_empty(
        aggregate::top_advertisers(&state.dataset, limit),
        "top_advertisers",
    );
    Ok(Json(ranked.into_iter().map(Into::into).collect()))
}

#[derive(Debug, Deserialize)]
pub struct TrendQuery {
    #[serde(default)]
    pub freq: Freq,
}

pub async fn trend(
    State(state): State<AppState>,
    Query(query): Query<TrendQuery>,
) -> Json<Vec<TrendPointDto>> {
    let buckets = ready_or_empty(aggregate::trend(&state.dataset, query.freq), "trend");
    Json(buckets.into_iter().map(Into::into).collect())
}

#[derive(Debug, Deserialize)]
pub struct PredictQuery {
    pub days: Option<u32>,
}

pub async fn predict(
    State(state): State<AppState>,
    Query(query): Query<PredictQuery>,
) -> ApiResult<Vec<ForecastPointDto>> {
    let days = validate_range("days", query.days.unwrap_or(7), 1, 30)?;
    let points = ready_or_empty(forecast::predict(&state.dataset, days), "predict");
    Ok(Json(points.into_iter().map(Into::into).collect()))
}

/// Boundary check: reject out-of-range parameters before any pipeline work.
fn validate_range<T>(name: &str, value: T, min: T, max: T) -> Result<T, (StatusCode, String)>
where
    T: PartialOrd + Display + Copy,
{
    if value < min || value > max {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("{name} must be between {min} and {max}"),
        ));
    }
    Ok(value)
}

fn ready_or_empty<T>(outcome: Outcome<Vec<T>>, endpoint: &'static str) -> Vec<T> {
    match outcome {
        Outcome::Ready(rows) => rows,
        Outcome::Unavailable(reason) => {
            warn!(%reason, endpoint, "serving empty result");
            Vec::new()
        }
    }
}
