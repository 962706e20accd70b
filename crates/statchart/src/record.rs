// File: crates/statchart/src/record.rs
// Summary: Player stat records as received on stdin (JSON contract).

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::StatChartError;

/// Per-player aggregates. `kd` arrives scaled by 100 so the transport stays integral.
/// Every field is required; unknown extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub kd: f64,
    pub adr: f64,
    pub wins: f64,
    pub kpr: f64,
    pub kills: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatRecord {
    pub name: String,
    #[serde(rename = "summaryStats")]
    pub summary_stats: SummaryStats,
}

/// Player records in input order; that order is the left-to-right bar order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatsCollection {
    pub players: Vec<PlayerStatRecord>,
}

impl StatsCollection {
    pub fn new(players: Vec<PlayerStatRecord>) -> Self {
        Self { players }
    }

    /// Parse one JSON array. Any missing or non-numeric field fails the whole document.
    pub fn from_json_str(input: &str) -> Result<Self, StatChartError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, StatChartError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Category labels, duplicates included.
    pub fn names(&self) -> Vec<String> {
        self.players.iter().map(|p| p.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_fields_are_ignored() {
        let s = StatsCollection::from_json_str(
            r#"[{"name":"A","id":"account.1","summaryStats":{"kd":100,"adr":1,"wins":2,"kpr":0.1,"kills":3,"deaths":3}}]"#,
        )
        .unwrap();
        assert_eq!(s.players[0].summary_stats.kills, 3.0);
    }

    #[test]
    fn object_instead_of_array_is_rejected() {
        let err = StatsCollection::from_json_str(r#"{"name":"A"}"#).unwrap_err();
        assert!(matches!(err, StatChartError::Input(_)));
    }

    #[test]
    fn null_stat_is_rejected() {
        let err = StatsCollection::from_json_str(
            r#"[{"name":"A","summaryStats":{"kd":null,"adr":1,"wins":2,"kpr":0.1,"kills":3}}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, StatChartError::Input(_)));
    }
}
