use crate::club::{PlayerCondition, PlayerSkills};
use serde::Serialize;

/// Value used for any rating the roster leaves out.
pub const NEUTRAL_RATING: f32 = 50.0;
pub const FULL_FITNESS: f32 = 100.0;

pub const RATING_MIN: f32 = 1.0;
pub const RATING_MAX: f32 = 99.0;

/// Fully resolved view of a player. Every consumer reads attributes through
/// this type, so default values live in exactly one place.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct ResolvedAttributes {
    pub current_ability: f32,

    pub pace: f32,
    pub passing: f32,
    pub shooting: f32,
    pub vision: f32,
    pub decisions: f32,
    pub strength: f32,

    pub tackling: f32,
    pub marking: f32,
    pub positioning: f32,

    pub reflexes: f32,
    pub handling: f32,

    pub form: f32,
    pub morale: f32,
    pub fitness: f32,
}

impl ResolvedAttributes {
    pub fn resolve(skills: &PlayerSkills, condition: &PlayerCondition) -> Self {
        let rating = |value: Option<f32>| value.unwrap_or(NEUTRAL_RATING);

        ResolvedAttributes {
            current_ability: rating(skills.current_ability),
            pace: rating(skills.pace),
            passing: rating(skills.passing),
            shooting: rating(skills.shooting),
            vision: rating(skills.vision),
            decisions: rating(skills.decisions),
            strength: rating(skills.strength),
            tackling: rating(skills.tackling),
            marking: rating(skills.marking),
            positioning: rating(skills.positioning),
            reflexes: rating(skills.reflexes),
            handling: rating(skills.handling),
            form: rating(condition.form),
            morale: rating(condition.morale),
            fitness: condition.fitness.unwrap_or(FULL_FITNESS),
        }
    }

    /// Current ability scaled by form, morale and fitness, clamped to the rating range.
    pub fn effective_rating(&self) -> f32 {
        let form_factor = (self.form - 50.0) / 100.0;
        let morale_factor = (self.morale - 50.0) / 200.0;
        let fitness_factor = self.fitness / 100.0;

        (self.current_ability * (1.0 + form_factor + morale_factor) * fitness_factor)
            .clamp(RATING_MIN, RATING_MAX)
    }

    pub fn creativity(&self) -> f32 {
        (self.vision + self.decisions) / 2.0
    }

    pub fn defensive_rating(&self) -> f32 {
        (self.tackling + self.marking + self.positioning) / 3.0
    }

    pub fn goalkeeping_rating(&self) -> f32 {
        (self.current_ability + self.reflexes + self.handling) / 3.0
    }
}
