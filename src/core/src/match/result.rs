use crate::r#match::{MatchEvent, MatchSquad};
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchSide {
    Home,
    Away,
}

impl MatchSide {
    pub const BOTH: [MatchSide; 2] = [MatchSide::Home, MatchSide::Away];

    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            MatchSide::Home => MatchSide::Away,
            MatchSide::Away => MatchSide::Home,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    Live,
    FullTime,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    pub fn from_goals(goals_for: u16, goals_against: u16) -> Self {
        match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => MatchOutcome::Win,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
            std::cmp::Ordering::Less => MatchOutcome::Loss,
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            MatchOutcome::Win => 3,
            MatchOutcome::Draw => 1,
            MatchOutcome::Loss => 0,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            MatchOutcome::Win => 'W',
            MatchOutcome::Draw => 'D',
            MatchOutcome::Loss => 'L',
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamMatchStatistics {
    pub shots: u16,
    pub shots_on_target: u16,
    pub shots_saved: u16,
    pub shots_missed: u16,
    pub yellow_cards: u16,
    pub red_cards: u16,
}

/// Complete record of a single match. Produced by the engine and never
/// mutated after the final whistle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub home_team_name: String,
    pub away_team_name: String,

    pub status: MatchStatus,
    pub minute: u8,

    pub home_score: u16,
    pub away_score: u16,

    /// Home share of possession in percent, away is the remainder.
    pub home_possession: f32,

    pub home_stats: TeamMatchStatistics,
    pub away_stats: TeamMatchStatistics,

    pub home_lineup: Vec<u32>,
    pub away_lineup: Vec<u32>,

    pub events: Vec<MatchEvent>,
}

impl MatchState {
    pub fn new(home: &MatchSquad, away: &MatchSquad) -> Self {
        MatchState {
            home_team_id: home.team_id,
            away_team_id: away.team_id,
            home_team_name: home.team_name.clone(),
            away_team_name: away.team_name.clone(),
            status: MatchStatus::Live,
            minute: 0,
            home_score: 0,
            away_score: 0,
            home_possession: 50.0,
            home_stats: TeamMatchStatistics::default(),
            away_stats: TeamMatchStatistics::default(),
            home_lineup: home.player_ids(),
            away_lineup: away.player_ids(),
            events: Vec::new(),
        }
    }

    pub fn team_id(&self, side: MatchSide) -> u32 {
        match side {
            MatchSide::Home => self.home_team_id,
            MatchSide::Away => self.away_team_id,
        }
    }

    pub fn side_of(&self, team_id: u32) -> Option<MatchSide> {
        if team_id == self.home_team_id {
            Some(MatchSide::Home)
        } else if team_id == self.away_team_id {
            Some(MatchSide::Away)
        } else {
            None
        }
    }

    pub fn score(&self, side: MatchSide) -> u16 {
        match side {
            MatchSide::Home => self.home_score,
            MatchSide::Away => self.away_score,
        }
    }

    pub fn stats(&self, side: MatchSide) -> &TeamMatchStatistics {
        match side {
            MatchSide::Home => &self.home_stats,
            MatchSide::Away => &self.away_stats,
        }
    }

    pub(crate) fn stats_mut(&mut self, side: MatchSide) -> &mut TeamMatchStatistics {
        match side {
            MatchSide::Home => &mut self.home_stats,
            MatchSide::Away => &mut self.away_stats,
        }
    }

    pub fn possession(&self, side: MatchSide) -> f32 {
        match side {
            MatchSide::Home => self.home_possession,
            MatchSide::Away => 100.0 - self.home_possession,
        }
    }

    pub fn lineup(&self, side: MatchSide) -> &[u32] {
        match side {
            MatchSide::Home => &self.home_lineup,
            MatchSide::Away => &self.away_lineup,
        }
    }

    pub(crate) fn add_goal(&mut self, side: MatchSide) {
        match side {
            MatchSide::Home => self.home_score += 1,
            MatchSide::Away => self.away_score += 1,
        }
    }

    pub fn outcome(&self, side: MatchSide) -> MatchOutcome {
        MatchOutcome::from_goals(self.score(side), self.score(side.opposite()))
    }

    pub fn winner(&self) -> Option<u32> {
        match self.outcome(MatchSide::Home) {
            MatchOutcome::Win => Some(self.home_team_id),
            MatchOutcome::Loss => Some(self.away_team_id),
            MatchOutcome::Draw => None,
        }
    }

    pub fn total_goals(&self) -> u16 {
        self.home_score + self.away_score
    }

    pub fn goal_margin(&self) -> u16 {
        self.home_score.abs_diff(self.away_score)
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::FullTime
    }

    /// Goals credited to a player, read from the event log.
    pub fn goals_by(&self, player_id: u32) -> usize {
        self.events
            .iter()
            .filter(|e| e.is_goal() && e.player.as_ref().is_some_and(|p| p.id == player_id))
            .count()
    }

    /// Share of shots that hit the target, in percent.
    pub fn shot_accuracy(&self, side: MatchSide) -> f32 {
        let stats = self.stats(side);
        if stats.shots == 0 {
            return 0.0;
        }

        stats.shots_on_target as f32 / stats.shots as f32 * 100.0
    }

    /// Share of shots on target that became goals, in percent.
    pub fn conversion_rate(&self, side: MatchSide) -> f32 {
        let stats = self.stats(side);
        if stats.shots_on_target == 0 {
            return 0.0;
        }

        self.score(side) as f32 / stats.shots_on_target as f32 * 100.0
    }

    pub fn score_string(&self) -> String {
        format!(
            "{} {} - {} {}",
            self.home_team_name, self.home_score, self.away_score, self.away_team_name
        )
    }
}
