use crate::club::{NEUTRAL_RATING, Player, PlayerFieldPositionGroup, ResolvedAttributes};
use crate::r#match::Formation;
use itertools::Itertools;
use log::debug;
use serde::Serialize;

const FORMATION_PENALTY_PER_PLAYER: f32 = 0.05;
const FORMATION_BONUS_MIN: f32 = 0.85;
const FORMATION_BONUS_MAX: f32 = 1.10;

/// Aggregate strength of a lineup. Line ratings are averages of effective
/// player ratings, the remaining fields are modifiers around 1.0.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct TeamStrength {
    pub overall: f32,

    pub forward_line: f32,
    pub midfield_line: f32,
    pub defense_line: f32,
    pub goalkeeper: f32,

    pub pace: f32,
    pub passing: f32,
    pub shooting: f32,
    pub creativity: f32,
    pub defending: f32,
    pub physical: f32,

    pub formation_bonus: f32,
    pub chemistry: f32,
    pub morale: f32,
    pub fatigue: f32,
}

impl Default for TeamStrength {
    fn default() -> Self {
        TeamStrength {
            overall: NEUTRAL_RATING,
            forward_line: NEUTRAL_RATING,
            midfield_line: NEUTRAL_RATING,
            defense_line: NEUTRAL_RATING,
            goalkeeper: NEUTRAL_RATING,
            pace: NEUTRAL_RATING,
            passing: NEUTRAL_RATING,
            shooting: NEUTRAL_RATING,
            creativity: NEUTRAL_RATING,
            defending: NEUTRAL_RATING,
            physical: NEUTRAL_RATING,
            formation_bonus: 1.0,
            chemistry: 1.0,
            morale: 1.0,
            fatigue: 1.0,
        }
    }
}

impl TeamStrength {
    #[inline]
    fn rating_modifier(value: f32) -> f32 {
        0.5 + value / 100.0
    }

    #[inline]
    fn team_modifier(&self) -> f32 {
        self.formation_bonus * self.chemistry * self.morale * self.fatigue
    }

    #[inline]
    fn finishing_modifier(&self) -> f32 {
        0.75 + self.shooting / 200.0
    }

    pub fn get_attack_strength(&self) -> f32 {
        self.forward_line
            * Self::rating_modifier(self.creativity)
            * Self::rating_modifier(self.pace)
            * self.finishing_modifier()
            * self.team_modifier()
    }

    pub fn get_defense_strength(&self) -> f32 {
        self.defense_line
            * Self::rating_modifier(self.defending)
            * Self::rating_modifier(self.physical)
            * self.team_modifier()
    }

    pub fn get_midfield_control(&self) -> f32 {
        self.midfield_line * Self::rating_modifier(self.passing) * self.team_modifier()
    }

    /// Home boost, applied to the line ratings.
    pub fn with_home_advantage(mut self, attack: f32, defense: f32) -> Self {
        self.forward_line *= attack;
        self.defense_line *= defense;
        self
    }
}

pub struct TeamStrengthCalculator;

impl TeamStrengthCalculator {
    pub fn calculate(lineup: &[Player], formation: &str) -> TeamStrength {
        if lineup.is_empty() {
            return TeamStrength::default();
        }

        let resolved: Vec<(PlayerFieldPositionGroup, ResolvedAttributes)> = lineup
            .iter()
            .map(|p| (p.position.position_group(), p.attributes()))
            .collect();

        let group = |g: PlayerFieldPositionGroup| -> Vec<&ResolvedAttributes> {
            resolved.iter().filter(|(pg, _)| *pg == g).map(|(_, a)| a).collect()
        };

        let goalkeepers = group(PlayerFieldPositionGroup::Goalkeeper);
        let defenders = group(PlayerFieldPositionGroup::Defender);
        let midfielders = group(PlayerFieldPositionGroup::Midfielder);
        let forwards = group(PlayerFieldPositionGroup::Forward);
        let everyone: Vec<&ResolvedAttributes> = resolved.iter().map(|(_, a)| a).collect();

        let forward_line = Self::average(&forwards, |a| a.effective_rating());
        let midfield_line = Self::average(&midfielders, |a| a.effective_rating());
        let defense_line = Self::average(&defenders, |a| a.effective_rating());
        let goalkeeper = Self::average(&goalkeepers, |a| a.effective_rating());

        TeamStrength {
            overall: 0.25 * forward_line + 0.30 * midfield_line + 0.30 * defense_line + 0.15 * goalkeeper,
            forward_line,
            midfield_line,
            defense_line,
            goalkeeper,
            pace: Self::average(&everyone, |a| a.pace),
            passing: Self::average(&everyone, |a| a.passing),
            shooting: Self::average(&everyone, |a| a.shooting),
            creativity: Self::average(&everyone, |a| a.creativity()),
            defending: Self::average(&defenders, |a| a.defensive_rating()),
            physical: Self::average(&everyone, |a| a.strength),
            formation_bonus: Self::formation_bonus(formation, defenders.len(), midfielders.len(), forwards.len()),
            chemistry: Self::chemistry(lineup),
            morale: 0.8 + Self::average(&everyone, |a| a.morale) / 100.0 * 0.4,
            fatigue: 0.7 + Self::average(&everyone, |a| a.fitness) / 100.0 * 0.3,
        }
    }

    /// Mean of `value` over a position group, neutral when the group is empty.
    fn average<F: Fn(&ResolvedAttributes) -> f32>(players: &[&ResolvedAttributes], value: F) -> f32 {
        if players.is_empty() {
            return NEUTRAL_RATING;
        }

        players.iter().map(|a| value(*a)).sum::<f32>() / players.len() as f32
    }

    pub fn formation_bonus(formation: &str, defenders: usize, midfielders: usize, forwards: usize) -> f32 {
        match formation.parse::<Formation>() {
            Ok(formation) => {
                let mismatch = formation.mismatch(defenders, midfielders, forwards);

                (1.0 - FORMATION_PENALTY_PER_PLAYER * mismatch as f32)
                    .clamp(FORMATION_BONUS_MIN, FORMATION_BONUS_MAX)
            }
            Err(e) => {
                debug!("{}, formation bonus left neutral", e);
                1.0
            }
        }
    }

    /// Share of players with a compatriot in the lineup, mapped onto 0.95..=1.05.
    /// Players without a known nationality are ignored.
    pub fn chemistry(lineup: &[Player]) -> f32 {
        let counts = lineup.iter().filter_map(|p| p.nationality.as_deref()).counts();

        let known: usize = counts.values().sum();
        if known < 2 {
            return 1.0;
        }

        let shared: usize = counts.values().filter(|c| **c > 1).sum();

        0.95 + shared as f32 / known as f32 * 0.1
    }
}
