use crate::r#match::MatchOutcome;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

const PERFORMANCE_WINDOW: usize = 5;
const MORALE_MIN: f32 = 10.0;
const MORALE_MAX: f32 = 100.0;
const INITIAL_MORALE: f32 = 50.0;
const FORM_MEMORY: f32 = 0.7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamDynamicState {
    pub team_id: u32,
    pub team_name: String,

    pub morale: f32,

    /// Positive while winning, negative while losing, zero after a draw.
    pub current_streak: i32,
    pub max_win_streak: u32,
    pub max_loss_streak: u32,

    pub recent_performance: VecDeque<f32>,
    pub home_form: f32,
    pub away_form: f32,
    pub consistency: f32,

    pub matches_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub clean_sheets: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSummary {
    pub team_id: u32,
    pub team_name: String,
    pub morale: f32,
    pub current_streak: i32,
    pub form: String,
    pub average_performance: f32,
    pub consistency: f32,
    pub home_form: f32,
    pub away_form: f32,
    pub form_modifier: f32,
}

impl TeamDynamicState {
    pub fn new(team_id: u32, team_name: &str) -> Self {
        TeamDynamicState {
            team_id,
            team_name: team_name.to_string(),
            morale: INITIAL_MORALE,
            current_streak: 0,
            max_win_streak: 0,
            max_loss_streak: 0,
            recent_performance: VecDeque::from(vec![50.0; PERFORMANCE_WINDOW]),
            home_form: 50.0,
            away_form: 50.0,
            consistency: 100.0,
            matches_played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            clean_sheets: 0,
        }
    }

    pub fn update_after_match(&mut self, result: MatchOutcome, was_home: bool, performance: f32, goals_for: u16, goals_against: u16) {
        self.matches_played += 1;
        self.goals_for += goals_for as u32;
        self.goals_against += goals_against as u32;

        if goals_against == 0 {
            self.clean_sheets += 1;
        }

        self.update_streak(result);
        self.update_morale(result, performance);

        self.recent_performance.push_back(performance);
        while self.recent_performance.len() > PERFORMANCE_WINDOW {
            self.recent_performance.pop_front();
        }

        if was_home {
            self.home_form = self.home_form * FORM_MEMORY + performance * (1.0 - FORM_MEMORY);
        } else {
            self.away_form = self.away_form * FORM_MEMORY + performance * (1.0 - FORM_MEMORY);
        }

        self.consistency = self.calculate_consistency();
    }

    fn update_streak(&mut self, result: MatchOutcome) {
        match result {
            MatchOutcome::Win => {
                self.wins += 1;
                self.current_streak = self.current_streak.max(0) + 1;
                self.max_win_streak = self.max_win_streak.max(self.current_streak as u32);
            }
            MatchOutcome::Loss => {
                self.losses += 1;
                self.current_streak = self.current_streak.min(0) - 1;
                self.max_loss_streak = self.max_loss_streak.max(self.current_streak.unsigned_abs());
            }
            MatchOutcome::Draw => {
                self.draws += 1;
                self.current_streak = 0;
            }
        }
    }

    /// Win and loss swings grow with the streak; the match performance nudges on top.
    fn update_morale(&mut self, result: MatchOutcome, performance: f32) {
        let streak = self.current_streak as f32;

        let result_change = match result {
            MatchOutcome::Win => 5.0 + streak * 1.5,
            MatchOutcome::Loss => -5.0 + streak * 1.5,
            MatchOutcome::Draw => 0.0,
        };

        let performance_change = (performance - 50.0) * 0.1;

        self.morale = (self.morale + result_change + performance_change).clamp(MORALE_MIN, MORALE_MAX);
    }

    fn calculate_consistency(&self) -> f32 {
        let variance = self
            .recent_performance
            .iter()
            .map(|p| (p - 50.0).powi(2))
            .sum::<f32>()
            / self.recent_performance.len() as f32;

        (100.0 - variance.sqrt()).max(10.0)
    }

    /// Multiplier around 1.0 from morale, pushed up or down by the current streak.
    pub fn form_modifier(&self) -> f32 {
        let base = 0.9 + self.morale / 100.0 * 0.2;
        let streak_effect = (self.current_streak.unsigned_abs() as f32 * 0.02).min(0.1);

        match self.current_streak.signum() {
            1 => base + streak_effect,
            -1 => base - streak_effect,
            _ => base,
        }
    }

    pub fn average_performance(&self) -> f32 {
        if self.recent_performance.is_empty() {
            return 50.0;
        }

        self.recent_performance.iter().sum::<f32>() / self.recent_performance.len() as f32
    }

    pub fn form_string(&self) -> String {
        self.recent_performance
            .iter()
            .map(|p| match *p {
                p if p >= 65.0 => 'W',
                p if p >= 45.0 => 'D',
                _ => 'L',
            })
            .collect()
    }

    pub fn form_summary(&self) -> FormSummary {
        FormSummary {
            team_id: self.team_id,
            team_name: self.team_name.clone(),
            morale: self.morale,
            current_streak: self.current_streak,
            form: self.form_string(),
            average_performance: self.average_performance(),
            consistency: self.consistency,
            home_form: self.home_form,
            away_form: self.away_form,
            form_modifier: self.form_modifier(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_neutral() {
        let state = TeamDynamicState::new(1, "Club");

        assert_eq!(state.form_string(), "DDDDD");
        assert_eq!(state.average_performance(), 50.0);
        assert!((state.form_modifier() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_streaks() {
        let mut state = TeamDynamicState::new(1, "Club");

        state.update_after_match(MatchOutcome::Win, true, 70.0, 2, 0);
        state.update_after_match(MatchOutcome::Win, false, 70.0, 1, 0);
        assert_eq!(state.current_streak, 2);

        state.update_after_match(MatchOutcome::Loss, true, 30.0, 0, 1);
        assert_eq!(state.current_streak, -1);

        state.update_after_match(MatchOutcome::Loss, true, 30.0, 0, 1);
        state.update_after_match(MatchOutcome::Loss, true, 30.0, 0, 1);
        assert_eq!(state.current_streak, -3);

        state.update_after_match(MatchOutcome::Draw, false, 50.0, 1, 1);
        assert_eq!(state.current_streak, 0);

        assert_eq!(state.max_win_streak, 2);
        assert_eq!(state.max_loss_streak, 3);
        assert_eq!((state.wins, state.draws, state.losses), (2, 1, 3));
        assert_eq!(state.clean_sheets, 2);
    }

    #[test]
    fn test_morale_is_bounded_and_follows_results() {
        let mut state = TeamDynamicState::new(1, "Club");

        state.update_after_match(MatchOutcome::Win, true, 80.0, 3, 0);
        assert!(state.morale > INITIAL_MORALE);

        for _ in 0..30 {
            state.update_after_match(MatchOutcome::Win, true, 100.0, 5, 0);
        }
        assert_eq!(state.morale, MORALE_MAX);

        for _ in 0..30 {
            state.update_after_match(MatchOutcome::Loss, false, 10.0, 0, 5);
        }
        assert_eq!(state.morale, MORALE_MIN);
    }

    #[test]
    fn test_form_modifier_bounds() {
        let mut state = TeamDynamicState::new(1, "Club");
        for _ in 0..20 {
            state.update_after_match(MatchOutcome::Win, true, 100.0, 4, 0);
        }
        assert!((state.form_modifier() - 1.2).abs() < 1e-6);

        for _ in 0..20 {
            state.update_after_match(MatchOutcome::Loss, true, 10.0, 0, 4);
        }
        assert!((state.form_modifier() - 0.82).abs() < 1e-6);
    }

    #[test]
    fn test_performance_window_and_form() {
        let mut state = TeamDynamicState::new(1, "Club");

        for performance in [80.0, 20.0, 55.0, 70.0, 40.0, 90.0] {
            state.update_after_match(MatchOutcome::Draw, true, performance, 1, 1);
        }

        assert_eq!(state.recent_performance.len(), PERFORMANCE_WINDOW);
        assert_eq!(state.form_string(), "LDWLW");
        assert!(state.consistency < 100.0);
        assert!(state.home_form > 50.0);
        assert_eq!(state.away_form, 50.0);
    }
}
