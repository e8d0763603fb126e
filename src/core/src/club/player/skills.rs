use serde::{Deserialize, Serialize};

/// Raw ratings as supplied by the roster. Missing values resolve through
/// [`crate::Player::attributes`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSkills {
    pub current_ability: Option<f32>,

    pub pace: Option<f32>,
    pub passing: Option<f32>,
    pub shooting: Option<f32>,
    pub vision: Option<f32>,
    pub decisions: Option<f32>,
    pub strength: Option<f32>,

    pub tackling: Option<f32>,
    pub marking: Option<f32>,
    pub positioning: Option<f32>,

    // goalkeeping
    pub reflexes: Option<f32>,
    pub handling: Option<f32>,
}

impl PlayerSkills {
    /// Every rating set to the same value.
    pub fn uniform(value: f32) -> Self {
        PlayerSkills {
            current_ability: Some(value),
            pace: Some(value),
            passing: Some(value),
            shooting: Some(value),
            vision: Some(value),
            decisions: Some(value),
            strength: Some(value),
            tackling: Some(value),
            marking: Some(value),
            positioning: Some(value),
            reflexes: Some(value),
            handling: Some(value),
        }
    }
}

/// Per-player condition carried into a match.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerCondition {
    pub form: Option<f32>,
    pub morale: Option<f32>,
    pub fitness: Option<f32>,
}
