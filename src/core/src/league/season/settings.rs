use crate::r#match::DEFAULT_FORMATION;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonSettings {
    pub start_date: NaiveDate,
    pub matchday_interval_days: u32,
    pub seed: u64,
    pub formation: String,

    /// Track form, fitness, injuries and suspensions between matches.
    pub dynamic_states: bool,
    /// Simulate the fixtures of a matchday on the rayon pool.
    pub parallel: bool,

    pub injury_risk: f32,
    pub yellow_card_suspension_threshold: u32,
}

impl Default for SeasonSettings {
    fn default() -> Self {
        SeasonSettings {
            start_date: NaiveDate::from_ymd_opt(2024, 8, 1).unwrap_or_default(),
            matchday_interval_days: 7,
            seed: 42,
            formation: DEFAULT_FORMATION.to_string(),
            dynamic_states: true,
            parallel: true,
            injury_risk: 0.02,
            yellow_card_suspension_threshold: 5,
        }
    }
}
