// File: crates/statchart/src/render.rs
// Summary: Chart renderer; turns a stats collection into one bar-chart PNG per metric.

use std::path::PathBuf;

use statchart_core::{parse_color, BarChart, BarSeries, CategoryAxis};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::StatChartError;
use crate::metric::Metric;
use crate::record::StatsCollection;

pub struct ChartRenderer {
    config: Config,
}

impl ChartRenderer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(Config::default())
    }

    /// Chart model for `metric`: one bar per player, in input order.
    pub fn build_chart(
        &self,
        metric: Metric,
        stats: &StatsCollection,
    ) -> Result<BarChart, StatChartError> {
        let spec = metric.spec();
        let color =
            parse_color(spec.color).map_err(|e| StatChartError::render(spec.file_name, e))?;
        let (names, values) = metric.series(stats);
        Ok(BarChart::new(
            spec.title,
            CategoryAxis::new(names),
            spec.y_label,
            BarSeries::with_data(values, color),
        ))
    }

    /// Render one metric, replacing its file in the output directory.
    pub fn render_metric(
        &self,
        metric: Metric,
        stats: &StatsCollection,
    ) -> Result<PathBuf, StatChartError> {
        let spec = metric.spec();
        let chart = self.build_chart(metric, stats)?;
        let path = self.config.output_path(spec.file_name);
        debug!(
            file = spec.file_name,
            bars = chart.bar_count(),
            y_max = chart.y_axis.max,
            "rendering chart"
        );
        chart
            .render_to_png(&self.config.render, &path)
            .map_err(|e| StatChartError::render(spec.file_name, e))?;
        info!(path = %path.display(), "wrote chart");
        Ok(path)
    }

    /// Render all five metrics in table order. Stops at the first failure; charts already
    /// written stay on disk.
    pub fn render_all(&self, stats: &StatsCollection) -> Result<Vec<PathBuf>, StatChartError> {
        if stats.is_empty() {
            warn!("no players in input; rendering empty charts");
        } else {
            debug!(players = stats.len(), "rendering charts");
        }
        Metric::ALL.iter().map(|&m| self.render_metric(m, stats)).collect()
    }
}
