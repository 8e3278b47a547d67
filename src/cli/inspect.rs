//! Operator helper: load the dataset and print its shape and totals.

use anyhow::Result;
use tracing::instrument;

use crate::{analytics::aggregate, config::Settings, data::loader};

#[instrument(skip(settings))]
pub async fn run(settings: Settings) -> Result<()> {
    let dataset = loader::load_dataset(&settings.data_file)?;
    println!("rows: {}", dataset.len());
    println!("columns: {}", dataset.columns().join(", "));

    let summary = aggregate::summary(&dataset);
    if let Some(total) = summary.total_revenue {
        println!("total_revenue: {total}");
    }
    if let Some(total) = summary.total_orders {
        println!("total_orders: {total}");
    }
    if let Some(total) = summary.total_customers {
        println!("total_customers: {total}");
    }
    Ok(())
}
