//! Read-only analytics and short-horizon forecasting over a single table of
//! advertiser spend records.

pub mod analytics;
pub mod api;
pub mod cli;
pub mod config;
pub mod data;
pub mod logging;
