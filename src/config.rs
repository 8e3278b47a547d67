//! Runtime configuration for adpulse.

use std::{env, path::PathBuf};

use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// CSV file holding the advertiser spend records.
    pub data_file: PathBuf,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let data_file = env::var("DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data/advertisers_clean.csv"));

        Ok(Self { data_file })
    }
}
