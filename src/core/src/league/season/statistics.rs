use crate::r#match::{MatchOutcome, MatchSide, MatchState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const BIG_WIN_MARGIN: u16 = 3;
const HIGH_SCORING_GOALS: u16 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorerEntry {
    pub player_id: u32,
    pub player_name: String,
    pub team_id: u32,
    pub goals: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotableMatch {
    pub round: u32,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub home_team_name: String,
    pub away_team_name: String,
    pub home_goals: u16,
    pub away_goals: u16,
}

impl NotableMatch {
    fn from_state(round: u32, state: &MatchState) -> Self {
        NotableMatch {
            round,
            home_team_id: state.home_team_id,
            away_team_id: state.away_team_id,
            home_team_name: state.home_team_name.clone(),
            away_team_name: state.away_team_name.clone(),
            home_goals: state.home_score,
            away_goals: state.away_score,
        }
    }

    pub fn margin(&self) -> u16 {
        self.home_goals.abs_diff(self.away_goals)
    }

    pub fn total_goals(&self) -> u16 {
        self.home_goals + self.away_goals
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeRecord {
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
}

impl HomeRecord {
    pub fn points(&self) -> u32 {
        3 * self.won + self.drawn
    }
}

/// League-wide numbers gathered while the season is played.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonStatistics {
    pub total_matches: u32,
    pub total_goals: u32,
    pub home_wins: u32,
    pub away_wins: u32,
    pub draws: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,

    scorers: BTreeMap<u32, ScorerEntry>,
    big_wins: Vec<NotableMatch>,
    high_scoring: Vec<NotableMatch>,
    clean_sheets: BTreeMap<u32, u32>,
    home_records: BTreeMap<u32, HomeRecord>,
}

impl SeasonStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_match(&mut self, round: u32, state: &MatchState) {
        self.total_matches += 1;
        self.total_goals += state.total_goals() as u32;

        for side in MatchSide::BOTH {
            let stats = state.stats(side);
            self.yellow_cards += stats.yellow_cards as u32;
            self.red_cards += stats.red_cards as u32;

            if state.score(side.opposite()) == 0 {
                *self.clean_sheets.entry(state.team_id(side)).or_default() += 1;
            }
        }

        let home_record = self.home_records.entry(state.home_team_id).or_default();
        match state.outcome(MatchSide::Home) {
            MatchOutcome::Win => {
                self.home_wins += 1;
                home_record.won += 1;
            }
            MatchOutcome::Draw => {
                self.draws += 1;
                home_record.drawn += 1;
            }
            MatchOutcome::Loss => {
                self.away_wins += 1;
                home_record.lost += 1;
            }
        }

        for event in state.events.iter().filter(|e| e.is_goal()) {
            let (Some(player), Some(team_id)) = (&event.player, event.team_id) else {
                continue;
            };

            self.scorers
                .entry(player.id)
                .or_insert_with(|| ScorerEntry {
                    player_id: player.id,
                    player_name: player.name.clone(),
                    team_id,
                    goals: 0,
                })
                .goals += 1;
        }

        if state.goal_margin() >= BIG_WIN_MARGIN {
            self.big_wins.push(NotableMatch::from_state(round, state));
        }

        if state.total_goals() >= HIGH_SCORING_GOALS {
            self.high_scoring.push(NotableMatch::from_state(round, state));
        }
    }

    pub fn goals_per_match(&self) -> f32 {
        if self.total_matches == 0 {
            return 0.0;
        }

        self.total_goals as f32 / self.total_matches as f32
    }

    pub fn top_scorers(&self, limit: usize) -> Vec<ScorerEntry> {
        let mut scorers: Vec<ScorerEntry> = self.scorers.values().cloned().collect();
        scorers.sort_by(|a, b| b.goals.cmp(&a.goals).then(a.player_id.cmp(&b.player_id)));
        scorers.truncate(limit);
        scorers
    }

    /// Wins by three or more, widest margin first.
    pub fn biggest_wins(&self, limit: usize) -> Vec<NotableMatch> {
        let mut wins = self.big_wins.clone();
        wins.sort_by(|a, b| b.margin().cmp(&a.margin()).then(a.round.cmp(&b.round)));
        wins.truncate(limit);
        wins
    }

    /// Matches with five or more goals, most goals first.
    pub fn highest_scoring(&self, limit: usize) -> Vec<NotableMatch> {
        let mut matches = self.high_scoring.clone();
        matches.sort_by(|a, b| b.total_goals().cmp(&a.total_goals()).then(a.round.cmp(&b.round)));
        matches.truncate(limit);
        matches
    }

    pub fn clean_sheets(&self, team_id: u32) -> u32 {
        self.clean_sheets.get(&team_id).copied().unwrap_or(0)
    }

    pub fn home_record(&self, team_id: u32) -> Option<&HomeRecord> {
        self.home_records.get(&team_id)
    }

    /// Ranked by home points, then home wins.
    pub fn best_home_records(&self, limit: usize) -> Vec<(u32, HomeRecord)> {
        let mut records: Vec<(u32, HomeRecord)> = self
            .home_records
            .iter()
            .map(|(team_id, record)| (*team_id, record.clone()))
            .collect();

        records.sort_by(|(_, a), (_, b)| b.points().cmp(&a.points()).then(b.won.cmp(&a.won)));
        records.truncate(limit);
        records
    }
}
