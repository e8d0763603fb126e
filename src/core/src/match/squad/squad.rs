use crate::club::{FULL_FITNESS, Player, PlayerCondition};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SQUAD_SIZE: usize = 11;

/// The players a team fields for one match, with their match-day condition
/// already applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSquad {
    pub team_id: u32,
    pub team_name: String,
    pub formation: String,
    pub players: Vec<Player>,
}

impl MatchSquad {
    pub fn new(team_id: u32, team_name: &str, formation: &str, players: Vec<Player>) -> Self {
        MatchSquad {
            team_id,
            team_name: team_name.to_string(),
            formation: formation.to_string(),
            players,
        }
    }

    pub fn goalkeeper(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_goalkeeper())
    }

    pub fn player(&self, player_id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn player_ids(&self) -> Vec<u32> {
        self.players.iter().map(|p| p.id).collect()
    }

    /// Scales every player's fitness by `modifier`, capped at full fitness.
    /// The squad is a per-match copy, so the team's own records stay untouched.
    pub fn with_form_modifier(mut self, modifier: f32) -> Self {
        for player in &mut self.players {
            let fitness = player.attributes().fitness;

            player.condition = PlayerCondition {
                fitness: Some((fitness * modifier).min(FULL_FITNESS)),
                ..player.condition
            };
        }

        self
    }
}
