// File: crates/statchart/src/metric.rs
// Summary: The five charted metrics and their fixed chart specs (extractor, labels, colour, file).

use crate::record::{PlayerStatRecord, StatsCollection};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    Kd,
    Adr,
    Wins,
    Kpr,
    Kills,
}

/// Presentation of one metric's chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartSpec {
    pub metric: Metric,
    pub y_label: &'static str,
    pub title: &'static str,
    /// Colour name or `#rrggbb`, parsed by `statchart_core::parse_color`.
    pub color: &'static str,
    pub file_name: &'static str,
}

impl Metric {
    /// Render order.
    pub const ALL: [Metric; 5] =
        [Metric::Kd, Metric::Adr, Metric::Wins, Metric::Kpr, Metric::Kills];

    pub const fn spec(self) -> ChartSpec {
        match self {
            Metric::Kd => ChartSpec {
                metric: self,
                y_label: "K/D Ratio",
                title: "K/D Ratio Comparison",
                color: "skyblue",
                file_name: "kd_chart.png",
            },
            Metric::Adr => ChartSpec {
                metric: self,
                y_label: "Average Damage per Round (ADR)",
                title: "ADR Comparison",
                color: "lightgreen",
                file_name: "adr_chart.png",
            },
            Metric::Wins => ChartSpec {
                metric: self,
                y_label: "Wins",
                title: "Wins Comparison",
                color: "gold",
                file_name: "wins_chart.png",
            },
            Metric::Kpr => ChartSpec {
                metric: self,
                y_label: "Kills per Round (KPR)",
                title: "Kills per Round Comparison",
                color: "lightcoral",
                file_name: "kpr_chart.png",
            },
            Metric::Kills => ChartSpec {
                metric: self,
                y_label: "Kills",
                title: "Kills Comparison",
                color: "#ff9999",
                file_name: "kills_chart.png",
            },
        }
    }

    /// Plotted value for one player. K/D is stored x100 and rescaled here.
    pub fn value_of(self, record: &PlayerStatRecord) -> f64 {
        let s = &record.summary_stats;
        match self {
            Metric::Kd => s.kd / 100.0,
            Metric::Adr => s.adr,
            Metric::Wins => s.wins,
            Metric::Kpr => s.kpr,
            Metric::Kills => s.kills,
        }
    }

    /// Category labels and values, both in input order.
    pub fn series(self, stats: &StatsCollection) -> (Vec<String>, Vec<f64>) {
        let values = stats.players.iter().map(|p| self.value_of(p)).collect();
        (stats.names(), values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SummaryStats;

    fn record(kd: f64) -> PlayerStatRecord {
        PlayerStatRecord {
            name: "Alice".into(),
            summary_stats: SummaryStats { kd, adr: 80.5, wins: 3.0, kpr: 0.75, kills: 20.0 },
        }
    }

    #[test]
    fn kd_is_rescaled() {
        assert!((Metric::Kd.value_of(&record(134.0)) - 1.34).abs() < 1e-12);
        assert_eq!(Metric::Kd.value_of(&record(150.0)), 1.5);
    }

    #[test]
    fn other_metrics_pass_through() {
        let r = record(150.0);
        assert_eq!(Metric::Adr.value_of(&r), 80.5);
        assert_eq!(Metric::Wins.value_of(&r), 3.0);
        assert_eq!(Metric::Kpr.value_of(&r), 0.75);
        assert_eq!(Metric::Kills.value_of(&r), 20.0);
    }

    #[test]
    fn file_names_are_distinct() {
        let mut names: Vec<_> = Metric::ALL.iter().map(|m| m.spec().file_name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn every_colour_parses() {
        for m in Metric::ALL {
            assert!(statchart_core::parse_color(m.spec().color).is_ok(), "{:?}", m);
        }
    }
}
