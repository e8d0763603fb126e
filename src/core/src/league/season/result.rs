use crate::league::{
    FormSummary, FormTableRow, LeagueTableEntry, PlayerMatchState, Schedule, SeasonStatistics,
    TeamDynamicState,
};
use crate::r#match::{MatchState, SelectionError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A fixture that could not be played because one side was short of players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedFixture {
    pub round: u32,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub reason: SelectionError,
}

/// Outcome of one committed matchday.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchdayReport {
    pub round: u32,
    pub date: NaiveDate,
    pub matches: Vec<MatchState>,
    pub skipped: Vec<SkippedFixture>,
}

impl MatchdayReport {
    pub fn played(&self) -> usize {
        self.matches.len()
    }

    pub fn goals(&self) -> u32 {
        self.matches.iter().map(|m| m.total_goals() as u32).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EuropeanSpots {
    pub champions_league: Vec<u32>,
    pub europa_league: Vec<u32>,
}

/// Everything a finished season leaves behind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonResult {
    /// Final table, best first.
    pub standings: Vec<LeagueTableEntry>,
    pub schedule: Schedule,
    pub matches: Vec<MatchState>,
    pub statistics: SeasonStatistics,
    pub team_states: BTreeMap<u32, TeamDynamicState>,
    pub player_states: BTreeMap<u32, PlayerMatchState>,
}

impl SeasonResult {
    pub fn champion(&self) -> Option<&LeagueTableEntry> {
        self.standings.first()
    }

    /// The bottom `count` teams, lowest placed last.
    pub fn relegated(&self, count: usize) -> &[LeagueTableEntry] {
        let from = self.standings.len().saturating_sub(count);
        &self.standings[from..]
    }

    pub fn european_spots(&self, champions_league: usize, europa_league: usize) -> EuropeanSpots {
        let mut teams = self.standings.iter().map(|e| e.team_id);

        EuropeanSpots {
            champions_league: teams.by_ref().take(champions_league).collect(),
            europa_league: teams.take(europa_league).collect(),
        }
    }

    pub fn form_table(&self) -> Vec<FormTableRow> {
        FormTableRow::build(self.team_states.values())
    }

    pub fn team_form_summary(&self, team_id: u32) -> Option<FormSummary> {
        self.team_states.get(&team_id).map(|s| s.form_summary())
    }

    pub fn unresolved_fixtures(&self) -> usize {
        self.schedule.unresolved_count()
    }

    /// `(team_id, longest winning run)`, longest first.
    pub fn longest_win_streaks(&self, limit: usize) -> Vec<(u32, u32)> {
        let mut streaks: Vec<(u32, u32)> = self
            .team_states
            .values()
            .map(|s| (s.team_id, s.max_win_streak))
            .collect();

        streaks.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        streaks.truncate(limit);
        streaks
    }
}
