//! Shared DTOs for JSON responses.

use serde::Serialize;

use crate::analytics::{aggregate, forecast};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Serialize)]
pub struct BannerDto {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthDto {
    pub status: &'static str,
    pub rows: usize,
    pub columns: Vec<String>,
}

/// Keys are omitted, not nulled, when the source column is absent.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_revenue: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_orders: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_customers: Option<i64>,
}

impl From<aggregate::Summary> for SummaryDto {
    fn from(value: aggregate::Summary) -> Self {
        SummaryDto {
            total_revenue: value.total_revenue,
            total_orders: value.total_orders,
            total_customers: value.total_customers,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AdvertiserDto {
    pub advertiser: String,
    pub spend: f64,
}

impl From<aggregate::AdvertiserSpend> for AdvertiserDto {
    fn from(value: aggregate::AdvertiserSpend) -> Self {
        AdvertiserDto {
            advertiser: value.advertiser,
            spend: value.spend,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendPointDto {
    pub date: String,
    pub spend: f64,
}

impl From<aggregate::TrendPoint> for TrendPointDto {
    fn from(value: aggregate::TrendPoint) -> Self {
        TrendPointDto {
            date: value.date.format(DATE_FORMAT).to_string(),
            spend: value.spend,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ForecastPointDto {
    pub date: String,
    pub predicted_revenue: f64,
}

impl From<forecast::ForecastPoint> for ForecastPointDto {
    fn from(value: forecast::ForecastPoint) -> Self {
        ForecastPointDto {
            date: value.date.format(DATE_FORMAT).to_string(),
            predicted_revenue: value.predicted_revenue,
        }
    }
}
