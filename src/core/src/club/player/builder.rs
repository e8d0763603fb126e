use crate::club::{Player, PlayerCondition, PlayerPositionType, PlayerSkills};

// Builder for Player
#[derive(Default)]
pub struct PlayerBuilder {
    id: Option<u32>,
    name: Option<String>,
    position: Option<PlayerPositionType>,
    nationality: Option<String>,
    skills: Option<PlayerSkills>,
    condition: Option<PlayerCondition>,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn position(mut self, position: PlayerPositionType) -> Self {
        self.position = Some(position);
        self
    }

    pub fn nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = Some(nationality.into());
        self
    }

    pub fn skills(mut self, skills: PlayerSkills) -> Self {
        self.skills = Some(skills);
        self
    }

    pub fn condition(mut self, condition: PlayerCondition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn build(self) -> Result<Player, String> {
        Ok(Player {
            id: self.id.ok_or("id is required")?,
            name: self.name.ok_or("name is required")?,
            position: self.position.ok_or("position is required")?,
            nationality: self.nationality,
            skills: self.skills.unwrap_or_default(),
            condition: self.condition.unwrap_or_default(),
        })
    }
}
