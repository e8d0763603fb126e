use crate::club::{PlayerCondition, PlayerPositionType, PlayerSkills, ResolvedAttributes};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub position: PlayerPositionType,

    #[serde(default)]
    pub nationality: Option<String>,

    #[serde(default)]
    pub skills: PlayerSkills,

    #[serde(default)]
    pub condition: PlayerCondition,
}

impl Player {
    pub fn new(id: u32, name: &str, position: PlayerPositionType) -> Self {
        Player {
            id,
            name: name.to_string(),
            position,
            nationality: None,
            skills: PlayerSkills::default(),
            condition: PlayerCondition::default(),
        }
    }

    #[inline]
    pub fn attributes(&self) -> ResolvedAttributes {
        ResolvedAttributes::resolve(&self.skills, &self.condition)
    }

    #[inline]
    pub fn is_goalkeeper(&self) -> bool {
        self.position.is_goalkeeper()
    }

    /// Copy of this player carrying a different match condition.
    pub fn with_condition(&self, condition: PlayerCondition) -> Self {
        Player {
            condition,
            ..self.clone()
        }
    }
}
