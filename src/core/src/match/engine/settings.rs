use crate::r#match::LeagueParameters;
use serde::{Deserialize, Serialize};

/// Tunable constants of the minute-by-minute model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    pub match_length: u8,
    pub league: LeagueParameters,

    pub home_attack_advantage: f32,
    pub home_defense_advantage: f32,

    // possession split, as percent for the home side
    pub possession_floor: f32,
    pub possession_span: f32,

    // shot opportunity per minute
    pub base_shot_chance: f32,
    pub max_shot_chance: f32,
    pub defense_offset: f32,
    pub strength_exponent: f32,

    // on-target roll, in percentage points
    pub on_target_base: f32,
    pub on_target_slope: f32,
    pub on_target_pressure: f32,
    pub shot_quality_sigma: f32,

    // shooter against keeper
    pub shooter_power_sigma: f32,
    pub keeper_sigma: f32,
    pub goal_base_chance: f32,
    pub goal_slope: f32,
    pub min_goal_chance: f32,
    pub max_goal_chance: f32,
    pub save_log_chance: f32,

    // discipline
    pub card_chance: f32,
    pub red_card_ratio: f32,
}

impl MatchSettings {
    #[inline]
    pub fn half_time_minute(&self) -> u8 {
        self.match_length / 2
    }
}

impl Default for MatchSettings {
    fn default() -> Self {
        MatchSettings {
            match_length: 90,
            league: LeagueParameters::default(),
            home_attack_advantage: 1.30,
            home_defense_advantage: 1.15,
            possession_floor: 30.0,
            possession_span: 40.0,
            base_shot_chance: 0.09,
            max_shot_chance: 0.16,
            defense_offset: 30.0,
            strength_exponent: 0.8,
            on_target_base: 40.0,
            on_target_slope: 0.3,
            on_target_pressure: -10.0,
            shot_quality_sigma: 10.0,
            shooter_power_sigma: 8.0,
            keeper_sigma: 5.0,
            goal_base_chance: 0.30,
            goal_slope: 0.4,
            min_goal_chance: 0.05,
            max_goal_chance: 0.70,
            save_log_chance: 0.33,
            card_chance: 0.008,
            red_card_ratio: 0.10,
        }
    }
}
