use crate::club::Club;
use crate::league::{
    calculate_performance_rating, FixtureGenerator, LeagueTable, MatchdayReport, Schedule,
    SeasonError, SeasonResult, SeasonSettings, SeasonStatistics, SkippedFixture, TeamStateManager,
};
use crate::r#match::{
    MatchEventType, MatchSettings, MatchSide, MatchSimulator, MatchSquad, MatchState,
    SelectionError, SquadSelector,
};
use crate::utils::{Logging, RandomUtils};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use std::collections::{BTreeMap, HashSet};

struct PreparedFixture {
    index: usize,
    home: MatchSquad,
    away: MatchSquad,
}

struct PlayedFixture {
    index: usize,
    state: MatchState,
    rng: StdRng,
}

/// One season in progress. Created at season start, advanced one matchday at a
/// time and consumed by [`SeasonContext::finish`].
///
/// Standings and dynamic state only change when a whole matchday commits, so a
/// caller persisting per matchday never sees a half-applied round.
pub struct SeasonContext<'c> {
    clubs: BTreeMap<u32, &'c Club>,
    settings: SeasonSettings,
    simulator: MatchSimulator,

    schedule: Schedule,
    table: LeagueTable,
    states: TeamStateManager,
    statistics: SeasonStatistics,
    matches: Vec<MatchState>,

    next_matchday: usize,
}

impl<'c> SeasonContext<'c> {
    pub fn create(
        clubs: &'c [Club],
        settings: SeasonSettings,
        match_settings: MatchSettings,
    ) -> Result<Self, SeasonError> {
        if clubs.len() < 2 {
            return Err(SeasonError::NotEnoughTeams { found: clubs.len() });
        }

        if settings.matchday_interval_days == 0 {
            return Err(SeasonError::InvalidMatchdayInterval {
                days: settings.matchday_interval_days,
            });
        }

        let mut seen = HashSet::with_capacity(clubs.len());
        if let Some(club) = clubs.iter().find(|c| !seen.insert(c.id)) {
            return Err(SeasonError::DuplicateTeam { team_id: club.id });
        }

        let mut seen = HashSet::new();
        if let Some(player) = clubs.iter().flat_map(|c| &c.players).find(|p| !seen.insert(p.id)) {
            return Err(SeasonError::DuplicatePlayer { player_id: player.id });
        }

        let team_ids: Vec<u32> = clubs.iter().map(|c| c.id).collect();
        let schedule = FixtureGenerator::generate(
            &team_ids,
            settings.start_date,
            settings.matchday_interval_days,
        )
        .ok_or(SeasonError::InvalidMatchdayInterval {
            days: settings.matchday_interval_days,
        })?;

        let mut states = TeamStateManager::new();
        if settings.dynamic_states {
            for club in clubs {
                states.initialize_club(club);
            }
        }

        info!(
            "season created: {} teams, {} matchdays, {} fixtures",
            clubs.len(),
            schedule.matchdays.len(),
            schedule.total_fixtures()
        );

        Ok(SeasonContext {
            clubs: clubs.iter().map(|c| (c.id, c)).collect(),
            table: LeagueTable::new(clubs),
            simulator: MatchSimulator::new(match_settings),
            settings,
            schedule,
            states,
            statistics: SeasonStatistics::new(),
            matches: Vec::new(),
            next_matchday: 0,
        })
    }

    pub fn is_finished(&self) -> bool {
        self.next_matchday >= self.schedule.matchdays.len()
    }

    /// Round of the next matchday to be played.
    pub fn next_round(&self) -> Option<u32> {
        self.schedule.matchdays.get(self.next_matchday).map(|m| m.round)
    }

    pub fn settings(&self) -> &SeasonSettings {
        &self.settings
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn table(&self) -> &LeagueTable {
        &self.table
    }

    pub fn states(&self) -> &TeamStateManager {
        &self.states
    }

    pub fn statistics(&self) -> &SeasonStatistics {
        &self.statistics
    }

    /// Plays and commits the next matchday. `None` once the schedule is exhausted.
    pub fn play_next_matchday(&mut self) -> Option<MatchdayReport> {
        let matchday_index = self.next_matchday;
        let (round, date) = {
            let matchday = self.schedule.matchdays.get(matchday_index)?;
            (matchday.round, matchday.date)
        };

        let (prepared, skipped) = self.prepare_fixtures(matchday_index);
        let played = self.play_fixtures(round, prepared);

        // Bans from earlier matchdays are served before this matchday's cards count.
        if self.settings.dynamic_states {
            self.serve_suspensions(matchday_index);
        }

        let matches = self.commit(matchday_index, round, played);

        if self.settings.dynamic_states {
            self.states.recover_all_players(self.settings.matchday_interval_days);
        }

        self.next_matchday += 1;

        let report = MatchdayReport {
            round,
            date,
            matches,
            skipped,
        };

        info!(
            "matchday {} ({}): {} played, {} skipped, {} goals",
            round,
            date,
            report.played(),
            report.skipped.len(),
            report.goals()
        );

        Some(report)
    }

    /// Consumes the context and hands back the final table, every match and
    /// the dynamic-state snapshots.
    pub fn finish(self) -> SeasonResult {
        let standings = self.table.standings();

        if let Some(champion) = standings.first() {
            info!("season finished, champion: {} ({} pts)", champion.team_name, champion.points);
        }

        let unresolved = self.schedule.unresolved_count();
        if unresolved > 0 {
            warn!("season finished with {} unresolved fixtures", unresolved);
        }

        let (team_states, player_states) = self.states.into_states();

        SeasonResult {
            standings,
            schedule: self.schedule,
            matches: self.matches,
            statistics: self.statistics,
            team_states,
            player_states,
        }
    }

    // ========== PREPARE ==========

    fn prepare_fixtures(&self, matchday_index: usize) -> (Vec<PreparedFixture>, Vec<SkippedFixture>) {
        let mut prepared = Vec::new();
        let mut skipped = Vec::new();

        let Some(matchday) = self.schedule.matchdays.get(matchday_index) else {
            return (prepared, skipped);
        };

        for (index, fixture) in matchday.fixtures.iter().enumerate() {
            let squads = self
                .prepare_squad(fixture.home_team_id)
                .and_then(|home| Ok((home, self.prepare_squad(fixture.away_team_id)?)));

            match squads {
                Ok((home, away)) => prepared.push(PreparedFixture { index, home, away }),
                Err(reason) => {
                    warn!(
                        "round {}: skipping {} vs {}, {}",
                        fixture.round, fixture.home_team_id, fixture.away_team_id, reason
                    );

                    skipped.push(SkippedFixture {
                        round: fixture.round,
                        home_team_id: fixture.home_team_id,
                        away_team_id: fixture.away_team_id,
                        reason,
                    });
                }
            }
        }

        (prepared, skipped)
    }

    fn prepare_squad(&self, team_id: u32) -> Result<MatchSquad, SelectionError> {
        let club = self
            .clubs
            .get(&team_id)
            .ok_or(SelectionError::NotEnoughPlayers { team_id, available: 0 })?;

        if !self.settings.dynamic_states {
            return SquadSelector::select_by_ability(club, &self.settings.formation);
        }

        let modifier = self.states.get_form_modifier(team_id);

        SquadSelector::select(club, &self.settings.formation, &self.states)
            .map(|squad| squad.with_form_modifier(modifier))
    }

    // ========== PLAY ==========

    fn play_fixtures(&self, round: u32, prepared: Vec<PreparedFixture>) -> Vec<PlayedFixture> {
        let seed = self.settings.seed;
        let simulator = &self.simulator;

        let play = move |fixture: PreparedFixture| {
            let mut rng = StdRng::seed_from_u64(RandomUtils::derive_seed(seed, round, fixture.index));

            let message = format!(
                "play match: {} vs {}",
                fixture.home.team_name, fixture.away.team_name
            );

            let state = Logging::estimate_result(
                || simulator.simulate(&fixture.home, &fixture.away, &mut rng),
                &message,
            );

            debug!("round {}: {}", round, state.score_string());

            PlayedFixture {
                index: fixture.index,
                state,
                rng,
            }
        };

        if self.settings.parallel {
            prepared.into_par_iter().map(play).collect()
        } else {
            prepared.into_iter().map(play).collect()
        }
    }

    // ========== COMMIT ==========

    fn commit(&mut self, matchday_index: usize, round: u32, played: Vec<PlayedFixture>) -> Vec<MatchState> {
        let mut committed = Vec::with_capacity(played.len());

        for PlayedFixture { index, state, mut rng } in played {
            self.schedule
                .update_result(matchday_index, index, state.home_score, state.away_score);
            self.table.record_result(
                state.home_team_id,
                state.away_team_id,
                state.home_score,
                state.away_score,
            );
            self.statistics.record_match(round, &state);

            if self.settings.dynamic_states {
                self.update_states(&state, &mut rng);
            }

            self.matches.push(state.clone());
            committed.push(state);
        }

        committed
    }

    /// Every club with a fixture on the matchday serves one match of its bans,
    /// including clubs whose fixture was skipped.
    fn serve_suspensions(&mut self, matchday_index: usize) {
        let Some(matchday) = self.schedule.matchdays.get(matchday_index) else {
            return;
        };

        for fixture in &matchday.fixtures {
            self.states.serve_suspensions(fixture.home_team_id);
            self.states.serve_suspensions(fixture.away_team_id);
        }
    }

    fn update_states(&mut self, state: &MatchState, rng: &mut StdRng) {
        let yellow_threshold = self.settings.yellow_card_suspension_threshold;
        let match_length = self.simulator.settings().match_length;

        for side in MatchSide::BOTH {
            let goals_for = state.score(side);
            let goals_against = state.score(side.opposite());

            let performance = calculate_performance_rating(
                goals_for,
                goals_against,
                state.possession(side),
                state.stats(side).shots_on_target,
            );

            self.states.update_after_match(
                state.team_id(side),
                state.outcome(side),
                side == MatchSide::Home,
                performance,
                goals_for,
                goals_against,
            );

            for &player_id in state.lineup(side) {
                let rating = (performance + state.goals_by(player_id) as f32 * 10.0).clamp(10.0, 100.0);
                let minutes = Self::minutes_played(state, player_id, match_length);

                self.states.record_appearance(player_id, minutes, rating);
            }
        }

        for event in &state.events {
            let Some(player) = &event.player else {
                continue;
            };

            match event.event_type {
                MatchEventType::Goal => self.states.record_goal(player.id),
                MatchEventType::YellowCard => self.states.record_card(player.id, false, yellow_threshold),
                MatchEventType::RedCard => self.states.record_card(player.id, true, yellow_threshold),
                _ => {}
            }
        }

        for side in MatchSide::BOTH {
            for &player_id in state.lineup(side) {
                self.states.check_injury(player_id, self.settings.injury_risk, rng);
            }
        }
    }

    /// Full match unless the player was sent off.
    fn minutes_played(state: &MatchState, player_id: u32, match_length: u8) -> u8 {
        state
            .events
            .iter()
            .find(|e| {
                e.event_type == MatchEventType::RedCard
                    && e.player.as_ref().is_some_and(|p| p.id == player_id)
            })
            .map(|e| e.minute)
            .unwrap_or(match_length)
    }
}
