use crate::club::Player;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Club {
    pub id: u32,
    pub name: String,

    #[serde(default)]
    pub players: Vec<Player>,
}

impl Club {
    pub fn new(id: u32, name: &str, players: Vec<Player>) -> Self {
        Club {
            id,
            name: name.to_string(),
            players,
        }
    }

    pub fn player(&self, player_id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn goalkeepers(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_goalkeeper())
    }
}
