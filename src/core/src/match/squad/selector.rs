use crate::club::{Club, Player};
use crate::league::TeamStateManager;
use crate::r#match::{DEFAULT_SQUAD_SIZE, MatchSquad};
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SelectionError {
    #[error("team {team_id} has only {available} available players")]
    NotEnoughPlayers { team_id: u32, available: usize },
}

#[derive(Debug, Clone)]
struct PlayerRating {
    player: Player,
    rating: f32,
}

pub struct SquadSelector;

impl SquadSelector {
    /// Picks the best available eleven using each player's tracked form and fitness.
    /// Injured or suspended players are left out.
    pub fn select(club: &Club, formation: &str, states: &TeamStateManager) -> Result<MatchSquad, SelectionError> {
        let candidates = club
            .players
            .iter()
            .filter_map(|player| match states.player_state(player.id) {
                Some(state) if !state.is_available() => None,
                Some(state) => {
                    let rated = player.with_condition(state.match_condition(player));

                    Some(PlayerRating {
                        rating: Self::selection_rating(&rated),
                        player: rated,
                    })
                }
                None => Some(PlayerRating {
                    rating: Self::selection_rating(player),
                    player: player.clone(),
                }),
            })
            .collect();

        Self::pick(club, formation, candidates)
    }

    /// Picks the eleven with the highest current ability, ignoring tracked state.
    pub fn select_by_ability(club: &Club, formation: &str) -> Result<MatchSquad, SelectionError> {
        let candidates = club
            .players
            .iter()
            .map(|player| PlayerRating {
                rating: player.attributes().current_ability,
                player: player.clone(),
            })
            .collect();

        Self::pick(club, formation, candidates)
    }

    /// Base ability nudged by form and reduced by missing fitness.
    pub fn selection_rating(player: &Player) -> f32 {
        let attrs = player.attributes();

        attrs.current_ability + (attrs.form - 50.0) / 100.0 * 10.0 - (100.0 - attrs.fitness) * 0.2
    }

    fn pick(club: &Club, formation: &str, mut candidates: Vec<PlayerRating>) -> Result<MatchSquad, SelectionError> {
        if candidates.len() < DEFAULT_SQUAD_SIZE {
            debug!(
                "{}: not enough available players ({}/{})",
                club.name,
                candidates.len(),
                DEFAULT_SQUAD_SIZE
            );

            return Err(SelectionError::NotEnoughPlayers {
                team_id: club.id,
                available: candidates.len(),
            });
        }

        candidates.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(Ordering::Equal)
                .then(a.player.id.cmp(&b.player.id))
        });

        let mut selected: Vec<Player> = Vec::with_capacity(DEFAULT_SQUAD_SIZE);

        if let Some(idx) = candidates.iter().position(|c| c.player.is_goalkeeper()) {
            selected.push(candidates.remove(idx).player);
        }

        // outfield first, spare goalkeepers only when nobody else is left
        let (outfield, keepers): (Vec<PlayerRating>, Vec<PlayerRating>) =
            candidates.into_iter().partition(|c| !c.player.is_goalkeeper());

        for rated in outfield.into_iter().chain(keepers) {
            if selected.len() == DEFAULT_SQUAD_SIZE {
                break;
            }
            selected.push(rated.player);
        }

        debug!("{}: selected {} players in {}", club.name, selected.len(), formation);

        Ok(MatchSquad::new(club.id, &club.name, formation, selected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{PlayerPositionType, PlayerSkills};

    #[test]
    fn test_select_by_ability_picks_best_eleven_with_keeper() {
        let club = generate_club(16);

        let squad = SquadSelector::select_by_ability(&club, "4-3-3").unwrap();

        assert_eq!(squad.players.len(), DEFAULT_SQUAD_SIZE);
        assert_eq!(squad.players.iter().filter(|p| p.is_goalkeeper()).count(), 1);
        // best keeper is the second one (id 2, rated higher)
        assert_eq!(squad.players[0].id, 2);
        // the weakest outfielders are left out
        assert!(squad.player(16).is_none());
        assert!(squad.player(15).is_none());
    }

    #[test]
    fn test_short_squad_is_rejected() {
        let club = generate_club(10);

        let result = SquadSelector::select_by_ability(&club, "4-3-3");

        assert_eq!(
            result,
            Err(SelectionError::NotEnoughPlayers {
                team_id: 1,
                available: 10
            })
        );
    }

    #[test]
    fn test_select_skips_unavailable_players() {
        let club = generate_club(13);
        let mut states = TeamStateManager::new();
        states.initialize_club(&club);

        if let Some(state) = states.player_state_mut(3) {
            state.injury_days_remaining = 14;
        }
        if let Some(state) = states.player_state_mut(4) {
            state.suspension_matches = 1;
        }

        let squad = SquadSelector::select(&club, "4-3-3", &states).unwrap();

        assert_eq!(squad.players.len(), DEFAULT_SQUAD_SIZE);
        assert!(squad.player(3).is_none());
        assert!(squad.player(4).is_none());

        if let Some(state) = states.player_state_mut(5) {
            state.injury_days_remaining = 7;
        }

        assert!(SquadSelector::select(&club, "4-3-3", &states).is_err());
    }

    #[test]
    fn test_tired_player_loses_place() {
        let club = generate_club(13);
        let mut states = TeamStateManager::new();
        states.initialize_club(&club);

        // player 3 is the best outfielder but exhausted
        if let Some(state) = states.player_state_mut(3) {
            state.fitness = 20.0;
        }

        let squad = SquadSelector::select(&club, "4-3-3", &states).unwrap();

        assert!(squad.player(3).is_none());
        assert!(squad.player(13).is_some());
    }

    #[test]
    fn test_selection_rating_penalises_missing_fitness() {
        let mut player = Player::new(1, "Mid", PlayerPositionType::MidfielderCenter);
        player.skills = PlayerSkills::uniform(70.0);

        let fresh = SquadSelector::selection_rating(&player);
        player.condition.fitness = Some(80.0);
        let tired = SquadSelector::selection_rating(&player);

        assert!((fresh - 70.0).abs() < 1e-4);
        assert!((tired - 66.0).abs() < 1e-4);
    }

    // Helper functions for tests

    /// Two keepers (ids 1, 2) then outfielders whose rating falls with the id.
    fn generate_club(size: u32) -> Club {
        let players = (1..=size)
            .map(|id| {
                let position = if id <= 2 {
                    PlayerPositionType::Goalkeeper
                } else {
                    PlayerPositionType::MidfielderCenter
                };

                let rating = match id {
                    1 => 60.0,
                    2 => 70.0,
                    _ => 90.0 - id as f32,
                };

                let mut player = Player::new(id, &format!("Player {}", id), position);
                player.skills = PlayerSkills::uniform(rating);
                player
            })
            .collect();

        Club::new(1, "Test Club", players)
    }
}
