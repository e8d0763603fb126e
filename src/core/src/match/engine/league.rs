use serde::{Deserialize, Serialize};

const NEUTRAL_GOALS_PER_MATCH: f32 = 2.5;
const NEUTRAL_HOME_ADVANTAGE: f32 = 1.15;

/// Character of a competition. Scales the engine's calibrated constants
/// relative to the neutral default, which leaves them unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueParameters {
    pub name: String,
    pub avg_goals_per_match: f32,
    pub home_advantage: f32,
    /// Pace of play: more chances and slightly more accurate shooting.
    pub tempo: f32,
    /// Randomness: widens every noise term and adds chances.
    pub upsets: f32,
}

impl Default for LeagueParameters {
    fn default() -> Self {
        LeagueParameters::new("Default", NEUTRAL_GOALS_PER_MATCH, NEUTRAL_HOME_ADVANTAGE, 1.0, 1.0)
    }
}

impl LeagueParameters {
    pub fn new(name: &str, avg_goals_per_match: f32, home_advantage: f32, tempo: f32, upsets: f32) -> Self {
        LeagueParameters {
            name: name.to_string(),
            avg_goals_per_match,
            home_advantage,
            tempo,
            upsets,
        }
    }

    pub fn premier_league() -> Self {
        Self::new("Premier League", 2.60, 1.12, 1.12, 0.90)
    }

    pub fn la_liga() -> Self {
        Self::new("La Liga", 2.40, 1.12, 1.32, 0.85)
    }

    pub fn bundesliga() -> Self {
        Self::new("Bundesliga", 2.75, 1.15, 1.10, 1.10)
    }

    pub fn serie_a() -> Self {
        Self::new("Serie A", 2.35, 1.12, 0.85, 0.95)
    }

    pub fn ligue_1() -> Self {
        Self::new("Ligue 1", 2.40, 1.10, 1.08, 1.00)
    }

    pub fn presets() -> Vec<LeagueParameters> {
        vec![
            Self::premier_league(),
            Self::la_liga(),
            Self::bundesliga(),
            Self::serie_a(),
            Self::ligue_1(),
        ]
    }

    /// Case-insensitive preset lookup; `_` and `-` match spaces. Unknown names
    /// get the neutral default.
    pub fn by_name(name: &str) -> Self {
        let wanted = Self::normalize(name);

        Self::presets()
            .into_iter()
            .find(|preset| Self::normalize(&preset.name) == wanted)
            .unwrap_or_default()
    }

    fn normalize(name: &str) -> String {
        name.trim().to_lowercase().replace(['_', '-'], " ")
    }

    // ========== ENGINE SCALING ==========

    #[inline]
    pub fn shot_chance_factor(&self) -> f32 {
        self.tempo * self.upsets
    }

    /// Added to the on-target threshold, in percentage points.
    #[inline]
    pub fn on_target_shift(&self) -> f32 {
        (self.tempo - 1.0) * 9.0
    }

    #[inline]
    pub fn noise_factor(&self) -> f32 {
        self.upsets
    }

    /// Added to the shooter-versus-keeper goal probability.
    #[inline]
    pub fn goal_chance_shift(&self) -> f32 {
        (self.avg_goals_per_match - NEUTRAL_GOALS_PER_MATCH) * 0.25
    }

    #[inline]
    pub fn home_advantage_factor(&self) -> f32 {
        self.home_advantage / NEUTRAL_HOME_ADVANTAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_neutral() {
        let neutral = LeagueParameters::default();

        assert_eq!(neutral.shot_chance_factor(), 1.0);
        assert_eq!(neutral.on_target_shift(), 0.0);
        assert_eq!(neutral.noise_factor(), 1.0);
        assert_eq!(neutral.goal_chance_shift(), 0.0);
        assert_eq!(neutral.home_advantage_factor(), 1.0);
    }

    #[test]
    fn test_by_name() {
        assert_eq!(LeagueParameters::by_name("Bundesliga"), LeagueParameters::bundesliga());
        assert_eq!(LeagueParameters::by_name("serie_a"), LeagueParameters::serie_a());
        assert_eq!(LeagueParameters::by_name(" LA-LIGA "), LeagueParameters::la_liga());
        assert_eq!(LeagueParameters::by_name("Eredivisie"), LeagueParameters::default());
    }

    #[test]
    fn test_preset_scaling() {
        let la_liga = LeagueParameters::la_liga();
        assert!(la_liga.on_target_shift() > 2.8);
        assert!(la_liga.home_advantage_factor() < 1.0);

        let bundesliga = LeagueParameters::bundesliga();
        assert!(bundesliga.goal_chance_shift() > 0.06);
        assert!(bundesliga.shot_chance_factor() > LeagueParameters::serie_a().shot_chance_factor());
    }

    #[test]
    fn test_partial_json() {
        let params: LeagueParameters = serde_json::from_str(r#"{"name": "Custom", "tempo": 1.2}"#).unwrap();

        assert_eq!(params.name, "Custom");
        assert_eq!(params.tempo, 1.2);
        assert_eq!(params.upsets, 1.0);
    }
}
