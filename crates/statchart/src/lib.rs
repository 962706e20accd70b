// File: crates/statchart/src/lib.rs
// Summary: Player stat chart generator; parses player records and renders K/D, ADR, wins, KPR
// and kills bar charts as PNGs.

pub mod config;
pub mod error;
pub mod metric;
pub mod record;
pub mod render;
pub mod summary;

use std::path::PathBuf;

pub use config::Config;
pub use error::StatChartError;
pub use metric::{ChartSpec, Metric};
pub use record::{PlayerStatRecord, StatsCollection, SummaryStats};
pub use render::ChartRenderer;
pub use summary::{GameModeStats, SeasonSummary};

/// Parse the whole payload, then render every chart. Nothing is written if parsing fails.
pub fn generate_from_json(input: &str, config: Config) -> Result<Vec<PathBuf>, StatChartError> {
    let stats = StatsCollection::from_json_str(input)?;
    ChartRenderer::new(config).render_all(&stats)
}
