use crate::club::{Club, Player};
use crate::league::{PlayerMatchState, TeamDynamicState};
use crate::r#match::MatchOutcome;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormTableRow {
    pub team_id: u32,
    pub team_name: String,
    pub average_performance: f32,
    pub form: String,
    pub current_streak: i32,
}

impl FormTableRow {
    /// Teams ordered by average recent performance, best first.
    pub fn build<'s>(states: impl Iterator<Item = &'s TeamDynamicState>) -> Vec<FormTableRow> {
        let mut rows: Vec<FormTableRow> = states
            .map(|s| FormTableRow {
                team_id: s.team_id,
                team_name: s.team_name.clone(),
                average_performance: s.average_performance(),
                form: s.form_string(),
                current_streak: s.current_streak,
            })
            .collect();

        rows.sort_by(|a, b| {
            b.average_performance
                .partial_cmp(&a.average_performance)
                .unwrap_or(Ordering::Equal)
        });

        rows
    }
}

/// Owns every team's and player's season condition. Nothing else mutates it.
#[derive(Debug, Clone, Default)]
pub struct TeamStateManager {
    team_states: BTreeMap<u32, TeamDynamicState>,
    player_states: BTreeMap<u32, PlayerMatchState>,
}

impl TeamStateManager {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== INITIALIZATION ==========

    /// Creates the team's state unless it already exists.
    pub fn initialize_team(&mut self, team_id: u32, team_name: &str) -> &mut TeamDynamicState {
        self.team_states
            .entry(team_id)
            .or_insert_with(|| TeamDynamicState::new(team_id, team_name))
    }

    /// Creates the player's state unless it already exists.
    pub fn initialize_player(&mut self, team_id: u32, player: &Player) -> &mut PlayerMatchState {
        self.player_states
            .entry(player.id)
            .or_insert_with(|| PlayerMatchState::new(team_id, player))
    }

    pub fn initialize_club(&mut self, club: &Club) {
        self.initialize_team(club.id, &club.name);

        for player in &club.players {
            self.initialize_player(club.id, player);
        }
    }

    // ========== QUERIES ==========

    pub fn team_state(&self, team_id: u32) -> Option<&TeamDynamicState> {
        self.team_states.get(&team_id)
    }

    pub fn player_state(&self, player_id: u32) -> Option<&PlayerMatchState> {
        self.player_states.get(&player_id)
    }

    pub fn player_state_mut(&mut self, player_id: u32) -> Option<&mut PlayerMatchState> {
        self.player_states.get_mut(&player_id)
    }

    pub fn team_states(&self) -> &BTreeMap<u32, TeamDynamicState> {
        &self.team_states
    }

    pub fn player_states(&self) -> &BTreeMap<u32, PlayerMatchState> {
        &self.player_states
    }

    /// Neutral (1.0) for teams without state.
    pub fn get_form_modifier(&self, team_id: u32) -> f32 {
        self.team_states
            .get(&team_id)
            .map(|s| s.form_modifier())
            .unwrap_or(1.0)
    }

    pub fn league_form_table(&self) -> Vec<FormTableRow> {
        FormTableRow::build(self.team_states.values())
    }

    // ========== POST-MATCH ==========

    pub fn update_after_match(
        &mut self,
        team_id: u32,
        result: MatchOutcome,
        was_home: bool,
        performance: f32,
        goals_for: u16,
        goals_against: u16,
    ) {
        if let Some(state) = self.team_states.get_mut(&team_id) {
            state.update_after_match(result, was_home, performance, goals_for, goals_against);
        }
    }

    pub fn record_appearance(&mut self, player_id: u32, minutes: u8, performance: f32) {
        if let Some(state) = self.player_states.get_mut(&player_id) {
            state.play_match(minutes, performance);
        }
    }

    pub fn record_goal(&mut self, player_id: u32) {
        if let Some(state) = self.player_states.get_mut(&player_id) {
            state.goals += 1;
        }
    }

    pub fn record_card(&mut self, player_id: u32, is_red: bool, yellow_threshold: u32) {
        if let Some(state) = self.player_states.get_mut(&player_id) {
            state.add_card(is_red, yellow_threshold);

            if state.is_suspended() {
                debug!("player {} suspended for {} match(es)", player_id, state.suspension_matches);
            }
        }
    }

    pub fn check_injury<R: Rng + ?Sized>(&mut self, player_id: u32, risk: f32, rng: &mut R) -> bool {
        match self.player_states.get_mut(&player_id) {
            Some(state) => {
                let injured = state.check_injury(risk, rng);

                if injured {
                    debug!("player {} injured for {} days", player_id, state.injury_days_remaining);
                }

                injured
            }
            None => false,
        }
    }

    /// Called once for every fixture the team is scheduled in, played or not;
    /// each suspended player of that team sits out one match.
    pub fn serve_suspensions(&mut self, team_id: u32) {
        self.player_states
            .values_mut()
            .filter(|s| s.team_id == team_id && s.is_suspended())
            .for_each(|s| s.serve_suspension());
    }

    // ========== BETWEEN MATCHDAYS ==========

    pub fn recover_all_players(&mut self, days: u32) {
        self.player_states.values_mut().for_each(|s| s.recover(days));
    }

    /// Consumes the manager at season end.
    pub fn into_states(self) -> (BTreeMap<u32, TeamDynamicState>, BTreeMap<u32, PlayerMatchState>) {
        (self.team_states, self.player_states)
    }
}
