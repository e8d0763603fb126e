use crate::club::{FULL_FITNESS, Player, PlayerCondition};
use crate::utils::RandomUtils;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

const RATING_WINDOW: usize = 5;
const FATIGUE_PER_MINUTE: f32 = 0.3;
const RECOVERY_PER_DAY: f32 = 12.0;
const RECOVERY_PER_DAY_EXHAUSTED: f32 = 15.0;
const EXHAUSTED_BELOW: f32 = 50.0;
const RETURN_FROM_INJURY_FITNESS: f32 = 80.0;
const REST_BELOW: f32 = 70.0;
const CONFIDENCE_MIN: f32 = 10.0;
const CONFIDENCE_MAX: f32 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerMatchState {
    pub player_id: u32,
    pub team_id: u32,

    pub fitness: f32,
    pub form: f32,
    pub confidence: f32,

    pub matches_played: u32,
    pub minutes_played: u32,
    pub goals: u32,
    pub recent_ratings: VecDeque<f32>,

    /// Bookings counted toward the next accumulation ban.
    pub yellow_cards: u32,
    pub total_yellow_cards: u32,
    pub red_cards: u32,

    pub injury_days_remaining: u32,
    pub suspension_matches: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStateSummary {
    pub player_id: u32,
    pub team_id: u32,
    pub fitness: f32,
    pub form: f32,
    pub confidence: f32,
    pub matches_played: u32,
    pub goals: u32,
    pub match_rating: f32,
    pub available: bool,
    pub injury_days_remaining: u32,
    pub suspension_matches: u32,
}

impl PlayerMatchState {
    pub fn new(team_id: u32, player: &Player) -> Self {
        let attrs = player.attributes();

        PlayerMatchState {
            player_id: player.id,
            team_id,
            fitness: attrs.fitness,
            form: attrs.form,
            confidence: 50.0,
            matches_played: 0,
            minutes_played: 0,
            goals: 0,
            recent_ratings: VecDeque::with_capacity(RATING_WINDOW),
            yellow_cards: 0,
            total_yellow_cards: 0,
            red_cards: 0,
            injury_days_remaining: 0,
            suspension_matches: 0,
        }
    }

    pub fn play_match(&mut self, minutes: u8, performance: f32) {
        self.matches_played += 1;
        self.minutes_played += minutes as u32;

        self.fitness = (self.fitness - minutes as f32 * FATIGUE_PER_MINUTE).max(0.0);
        self.form = self.form * 0.7 + performance * 0.3;

        self.recent_ratings.push_back(performance);
        while self.recent_ratings.len() > RATING_WINDOW {
            self.recent_ratings.pop_front();
        }

        if performance > 60.0 {
            self.confidence = (self.confidence + 2.0).min(CONFIDENCE_MAX);
        } else if performance < 40.0 {
            self.confidence = (self.confidence - 3.0).max(CONFIDENCE_MIN);
        }
    }

    #[inline]
    pub fn fatigue(&self) -> f32 {
        FULL_FITNESS - self.fitness
    }

    /// Between-matchday step. An injured player only counts down the injury
    /// and comes back at reduced fitness.
    pub fn recover(&mut self, days: u32) {
        if self.is_injured() {
            self.update_injury(days);
            return;
        }

        let rate = if self.fitness < EXHAUSTED_BELOW {
            RECOVERY_PER_DAY_EXHAUSTED
        } else {
            RECOVERY_PER_DAY
        };

        self.fitness = (self.fitness + rate * days as f32).min(FULL_FITNESS);
    }

    pub fn update_injury(&mut self, days: u32) {
        if !self.is_injured() {
            return;
        }

        self.injury_days_remaining = self.injury_days_remaining.saturating_sub(days);

        if self.injury_days_remaining == 0 {
            self.fitness = RETURN_FROM_INJURY_FITNESS;
        }
    }

    /// A red card or reaching the booking threshold costs one match.
    pub fn add_card(&mut self, is_red: bool, yellow_threshold: u32) {
        if is_red {
            self.red_cards += 1;
            self.suspension_matches += 1;
            return;
        }

        self.yellow_cards += 1;
        self.total_yellow_cards += 1;

        if yellow_threshold > 0 && self.yellow_cards >= yellow_threshold {
            self.suspension_matches += 1;
            self.yellow_cards = 0;
        }
    }

    pub fn serve_suspension(&mut self) {
        self.suspension_matches = self.suspension_matches.saturating_sub(1);
    }

    /// Rolls for an injury; the risk grows with fatigue. Returns true on a new injury.
    pub fn check_injury<R: Rng + ?Sized>(&mut self, risk: f32, rng: &mut R) -> bool {
        if self.is_injured() {
            return false;
        }

        let probability = risk * (1.0 + self.fatigue() / 100.0 * 2.0);

        if RandomUtils::chance(rng, probability) {
            self.injury_days_remaining = rng.random_range(1..=4) * 7;
            return true;
        }

        false
    }

    #[inline]
    pub fn is_injured(&self) -> bool {
        self.injury_days_remaining > 0
    }

    #[inline]
    pub fn is_suspended(&self) -> bool {
        self.suspension_matches > 0
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        !self.is_injured() && !self.is_suspended()
    }

    pub fn match_rating(&self) -> f32 {
        ((self.form + self.confidence) / 2.0 - self.fatigue() * 0.3).max(10.0)
    }

    #[inline]
    pub fn should_rest(&self) -> bool {
        self.fitness < REST_BELOW
    }

    /// Condition to carry into the next match; morale stays as on the roster.
    pub fn match_condition(&self, player: &Player) -> PlayerCondition {
        PlayerCondition {
            form: Some(self.form),
            fitness: Some(self.fitness),
            morale: player.condition.morale,
        }
    }

    pub fn summary(&self) -> PlayerStateSummary {
        PlayerStateSummary {
            player_id: self.player_id,
            team_id: self.team_id,
            fitness: self.fitness,
            form: self.form,
            confidence: self.confidence,
            matches_played: self.matches_played,
            goals: self.goals,
            match_rating: self.match_rating(),
            available: self.is_available(),
            injury_days_remaining: self.injury_days_remaining,
            suspension_matches: self.suspension_matches,
        }
    }
}
