// File: crates/statchart/src/error.rs
// Summary: Error type for reading player stats and rendering their charts.

use statchart_core::ChartError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatChartError {
    /// Not JSON, or not an array of player records with every required stat.
    #[error("input: {0}")]
    Input(#[from] serde_json::Error),

    #[error("render {file}")]
    Render {
        file: &'static str,
        #[source]
        source: ChartError,
    },
}

impl StatChartError {
    pub fn render(file: &'static str, source: ChartError) -> Self {
        Self::Render { file, source }
    }
}
