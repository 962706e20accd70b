// File: crates/statchart/src/summary.rs
// Summary: Season summary; folds per-game-mode counters into the `summaryStats` a player
// record carries.

use serde::{Deserialize, Serialize};

use crate::record::{PlayerStatRecord, SummaryStats};

/// Raw counters for one game mode (solo, duo, squad-fpp, ...). Missing counters read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameModeStats {
    pub kills: f64,
    pub deaths: f64,
    pub wins: f64,
    pub losses: f64,
    pub damage_dealt: f64,
    pub rounds_played: f64,
    pub assists: f64,
    pub max_kill_streaks: f64,
    pub longest_kill: f64,
}

/// Totals across every game mode of a season.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonSummary {
    pub kills: f64,
    pub deaths: f64,
    pub wins: f64,
    pub losses: f64,
    pub damage_dealt: f64,
    pub rounds_played: f64,
    pub assists: f64,
    pub max_kill_streaks: f64,
    pub longest_kill: f64,
}

impl SeasonSummary {
    /// Counters are summed; streak and longest kill keep the best mode's value.
    pub fn from_game_modes<'a, I>(modes: I) -> Self
    where
        I: IntoIterator<Item = &'a GameModeStats>,
    {
        modes.into_iter().fold(Self::default(), |mut acc, m| {
            acc.kills += m.kills;
            acc.deaths += m.deaths;
            acc.wins += m.wins;
            acc.losses += m.losses;
            acc.damage_dealt += m.damage_dealt;
            acc.rounds_played += m.rounds_played;
            acc.assists += m.assists;
            acc.max_kill_streaks = acc.max_kill_streaks.max(m.max_kill_streaks);
            acc.longest_kill = acc.longest_kill.max(m.longest_kill);
            acc
        })
    }

    /// Kills per death; a deathless season counts its kills.
    pub fn kd(&self) -> f64 {
        if self.deaths > 0.0 { self.kills / self.deaths } else { self.kills }
    }

    pub fn adr(&self) -> f64 {
        if self.rounds_played > 0.0 { self.damage_dealt / self.rounds_played } else { 0.0 }
    }

    pub fn kpr(&self) -> f64 {
        if self.rounds_played > 0.0 { self.kills / self.rounds_played } else { 0.0 }
    }

    /// Transport form: K/D scaled by 100 and rounded.
    pub fn to_summary_stats(&self) -> SummaryStats {
        SummaryStats {
            kd: (self.kd() * 100.0).round(),
            adr: self.adr(),
            wins: self.wins,
            kpr: self.kpr(),
            kills: self.kills,
        }
    }
}

impl PlayerStatRecord {
    pub fn from_season(name: impl Into<String>, season: &SeasonSummary) -> Self {
        Self { name: name.into(), summary_stats: season.to_summary_stats() }
    }
}
