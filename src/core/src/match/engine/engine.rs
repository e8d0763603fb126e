use crate::club::{NEUTRAL_RATING, Player};
use crate::r#match::{
    MatchContext, MatchEventType, MatchSettings, MatchSide, MatchSquad, MatchState, MatchStatus,
    SideContext, TeamStrength, TeamStrengthCalculator,
};
use crate::utils::RandomUtils;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Minute-stepped statistical match model. Every random draw comes from the
/// caller's generator, so equal inputs and seed reproduce the same match.
pub struct MatchSimulator {
    settings: MatchSettings,
}

impl Default for MatchSimulator {
    fn default() -> Self {
        Self::new(MatchSettings::default())
    }
}

impl MatchSimulator {
    pub fn new(settings: MatchSettings) -> Self {
        MatchSimulator { settings }
    }

    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    pub fn simulate_seeded(&self, home: &MatchSquad, away: &MatchSquad, seed: u64) -> MatchState {
        let mut rng = StdRng::seed_from_u64(seed);
        self.simulate(home, away, &mut rng)
    }

    pub fn simulate<R: Rng + ?Sized>(&self, home: &MatchSquad, away: &MatchSquad, rng: &mut R) -> MatchState {
        let home_strength = TeamStrengthCalculator::calculate(&home.players, &home.formation)
            .with_home_advantage(
                self.settings.home_attack_advantage * self.settings.league.home_advantage_factor(),
                self.settings.home_defense_advantage,
            );
        let away_strength = TeamStrengthCalculator::calculate(&away.players, &away.formation);

        self.simulate_with_strengths(home, &home_strength, away, &away_strength, rng)
    }

    /// Plays a match from precomputed strengths. No home advantage is added here.
    pub fn simulate_with_strengths<R: Rng + ?Sized>(
        &self,
        home: &MatchSquad,
        home_strength: &TeamStrength,
        away: &MatchSquad,
        away_strength: &TeamStrength,
        rng: &mut R,
    ) -> MatchState {
        let mut context = MatchContext::new(
            SideContext::new(home, home_strength),
            SideContext::new(away, away_strength),
        );

        let half_time = self.settings.half_time_minute();

        for minute in 1..=self.settings.match_length {
            self.play_minute(&mut context, minute, rng);

            if minute == half_time {
                context.record_whistle(MatchEventType::HalfTime);
            }
        }

        context.state.minute = self.settings.match_length;
        context.state.status = MatchStatus::FullTime;
        context.record_whistle(MatchEventType::FullTime);

        context.state
    }

    // ========== MINUTE ==========

    fn play_minute<R: Rng + ?Sized>(&self, context: &mut MatchContext, minute: u8, rng: &mut R) {
        context.state.minute = minute;
        context.update_possession(&self.settings);

        for side in MatchSide::BOTH {
            self.try_shot(context, side, rng);
        }

        if RandomUtils::chance(rng, self.settings.card_chance) {
            let side = if rng.random_bool(0.5) {
                MatchSide::Home
            } else {
                MatchSide::Away
            };

            self.try_card(context, side, rng);
        }
    }

    pub fn shot_probability(&self, attack: f32, defense: f32) -> f32 {
        let ratio = attack / (defense + self.settings.defense_offset);

        (self.settings.base_shot_chance
            * ratio.max(0.0).powf(self.settings.strength_exponent)
            * self.settings.league.shot_chance_factor())
        .min(self.settings.max_shot_chance)
    }

    // ========== SHOTS ==========

    fn try_shot<R: Rng + ?Sized>(&self, context: &mut MatchContext, side: MatchSide, rng: &mut R) {
        let shooters = context.side(side).shooters();
        if shooters.is_empty() {
            return;
        }

        let attack = context.side(side).strength.get_attack_strength();
        let defense = context.side(side.opposite()).strength.get_defense_strength();

        if !RandomUtils::chance(rng, self.shot_probability(attack, defense)) {
            return;
        }

        let weights: Vec<f32> = shooters
            .iter()
            .map(|p| (p.attributes().shooting + 10.0) * p.position.shooting_weight())
            .collect();

        if let Some(idx) = RandomUtils::weighted_index(rng, &weights) {
            self.resolve_shot(context, side, shooters[idx], rng);
        }
    }

    fn resolve_shot<R: Rng + ?Sized>(&self, context: &mut MatchContext, side: MatchSide, shooter: &Player, rng: &mut R) {
        let settings = &self.settings;
        let league = &settings.league;
        let noise = league.noise_factor();
        let attrs = shooter.attributes();

        context.state.stats_mut(side).shots += 1;

        let quality = attrs.shooting + RandomUtils::gaussian(rng, settings.shot_quality_sigma * noise);
        let threshold = settings.on_target_base
            + league.on_target_shift()
            + (quality - 50.0) * settings.on_target_slope
            + settings.on_target_pressure;

        if rng.random::<f32>() * 100.0 >= threshold {
            context.state.stats_mut(side).shots_missed += 1;
            return;
        }

        context.state.stats_mut(side).shots_on_target += 1;

        let keeper = context.side(side.opposite()).goalkeeper();

        let shooter_power = attrs.shooting
            + attrs.decisions * 0.5
            + RandomUtils::gaussian(rng, settings.shooter_power_sigma * noise);
        let keeper_ability = keeper
            .map(|k| k.attributes().goalkeeping_rating())
            .unwrap_or(NEUTRAL_RATING)
            + RandomUtils::gaussian(rng, settings.keeper_sigma * noise);

        let goal_chance = (settings.goal_base_chance
            + league.goal_chance_shift()
            + (shooter_power - keeper_ability) / 100.0 * settings.goal_slope)
            .clamp(settings.min_goal_chance, settings.max_goal_chance);

        if RandomUtils::chance(rng, goal_chance) {
            context.record_goal(side, shooter, keeper);
        } else {
            let log_event = RandomUtils::chance(rng, settings.save_log_chance);
            context.record_save(side, shooter, keeper, log_event);
        }
    }

    // ========== DISCIPLINE ==========

    fn try_card<R: Rng + ?Sized>(&self, context: &mut MatchContext, side: MatchSide, rng: &mut R) {
        let candidates = context.side(side).players_on_pitch();
        if candidates.is_empty() {
            return;
        }

        let player = candidates[rng.random_range(0..candidates.len())];
        let straight_red = RandomUtils::chance(rng, self.settings.red_card_ratio);

        context.record_card(side, player, straight_red);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{PlayerPositionType, PlayerSkills};
    use crate::r#match::{LeagueParameters, MatchEvent};

    const SHAPE_433: [PlayerPositionType; 11] = [
        PlayerPositionType::Goalkeeper,
        PlayerPositionType::DefenderLeft,
        PlayerPositionType::DefenderCenter,
        PlayerPositionType::DefenderCenter,
        PlayerPositionType::DefenderRight,
        PlayerPositionType::DefensiveMidfielder,
        PlayerPositionType::MidfielderCenter,
        PlayerPositionType::AttackingMidfielderCenter,
        PlayerPositionType::ForwardLeft,
        PlayerPositionType::Striker,
        PlayerPositionType::ForwardRight,
    ];

    fn squad(team_id: u32, rating: f32) -> MatchSquad {
        squad_with(team_id, PlayerSkills::uniform(rating))
    }

    fn squad_with(team_id: u32, skills: PlayerSkills) -> MatchSquad {
        let players = SHAPE_433
            .iter()
            .enumerate()
            .map(|(idx, position)| {
                let id = team_id * 100 + idx as u32;
                let mut player = Player::new(id, &format!("Player {}", id), *position);
                player.skills = skills;
                player
            })
            .collect();

        MatchSquad::new(team_id, &format!("Team {}", team_id), "4-3-3", players)
    }

    fn events_of(state: &MatchState, event_type: MatchEventType, side: MatchSide) -> Vec<&MatchEvent> {
        state
            .events
            .iter()
            .filter(|e| e.event_type == event_type && e.side == Some(side))
            .collect()
    }

    #[test]
    fn test_same_seed_same_match() {
        let simulator = MatchSimulator::default();
        let home = squad(1, 70.0);
        let away = squad(2, 68.0);

        let first = simulator.simulate_seeded(&home, &away, 42);
        let second = simulator.simulate_seeded(&home, &away, 42);

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_match_invariants_hold_across_seeds() {
        let simulator = MatchSimulator::default();
        let home = squad(1, 72.0);
        let away = squad(2, 66.0);

        for seed in 0..200 {
            let state = simulator.simulate_seeded(&home, &away, seed);

            assert!(state.is_finished());
            assert_eq!(state.minute, 90);

            for side in MatchSide::BOTH {
                let stats = state.stats(side);
                let goals = events_of(&state, MatchEventType::Goal, side).len() as u16;

                assert_eq!(state.score(side), goals);
                assert!(stats.shots >= stats.shots_on_target);
                assert!(stats.shots_on_target >= state.score(side));
                assert_eq!(stats.shots, stats.shots_on_target + stats.shots_missed);
                assert_eq!(stats.shots_on_target, state.score(side) + stats.shots_saved);
                assert_eq!(
                    stats.yellow_cards as usize,
                    events_of(&state, MatchEventType::YellowCard, side).len()
                );
                assert_eq!(
                    stats.red_cards as usize,
                    events_of(&state, MatchEventType::RedCard, side).len()
                );
            }

            assert!(state.home_possession >= 30.0 && state.home_possession <= 70.0);
            assert!(state.events.windows(2).all(|w| w[0].minute <= w[1].minute));
            assert_eq!(
                state.events.iter().filter(|e| e.event_type == MatchEventType::HalfTime).count(),
                1
            );
            assert_eq!(state.events.last().map(|e| e.event_type), Some(MatchEventType::FullTime));
        }
    }

    #[test]
    fn test_sent_off_players_take_no_further_part() {
        let settings = MatchSettings {
            card_chance: 0.5,
            red_card_ratio: 0.3,
            ..MatchSettings::default()
        };
        let simulator = MatchSimulator::new(settings);
        let home = squad(1, 70.0);
        let away = squad(2, 70.0);

        for seed in 0..50 {
            let state = simulator.simulate_seeded(&home, &away, seed);

            for (idx, event) in state.events.iter().enumerate() {
                if event.event_type != MatchEventType::RedCard {
                    continue;
                }

                let Some(sent_off) = event.player.as_ref().map(|p| p.id) else {
                    continue;
                };

                let later = state.events[idx + 1..].iter().any(|e| {
                    e.player.as_ref().is_some_and(|p| p.id == sent_off)
                        || (e.is_goal() && e.secondary_player.as_ref().is_some_and(|p| p.id == sent_off))
                });

                assert!(!later, "player {} appears after being sent off", sent_off);
            }
        }
    }

    #[test]
    fn test_home_advantage_with_equal_teams() {
        let simulator = MatchSimulator::default();
        let home = squad(1, 70.0);
        let away = squad(2, 70.0);

        let mut home_wins = 0;
        let mut away_wins = 0;
        let mut goals = 0u32;

        for seed in 0..200 {
            let state = simulator.simulate_seeded(&home, &away, seed);

            match state.winner() {
                Some(1) => home_wins += 1,
                Some(_) => away_wins += 1,
                None => {}
            }

            goals += state.total_goals() as u32;
        }

        let average = goals as f32 / 200.0;

        assert!(home_wins > away_wins, "home {} away {}", home_wins, away_wins);
        assert!(away_wins > 0);
        assert!((1.5..=4.0).contains(&average), "average goals {}", average);
    }

    #[test]
    fn test_better_shooting_scores_more() {
        let simulator = MatchSimulator::default();
        let opponent = squad(2, 70.0);

        let mut sharp_skills = PlayerSkills::uniform(70.0);
        sharp_skills.shooting = Some(80.0);
        let mut blunt_skills = PlayerSkills::uniform(70.0);
        blunt_skills.shooting = Some(60.0);

        let sharp = squad_with(1, sharp_skills);
        let blunt = squad_with(1, blunt_skills);

        let mut sharp_goals = 0u32;
        let mut blunt_goals = 0u32;

        for seed in 0..500 {
            sharp_goals += simulator.simulate_seeded(&sharp, &opponent, seed).home_score as u32;
            blunt_goals += simulator.simulate_seeded(&blunt, &opponent, seed).home_score as u32;
        }

        assert!(sharp_goals > blunt_goals, "sharp {} blunt {}", sharp_goals, blunt_goals);
    }

    #[test]
    fn test_side_without_outfielders_never_shoots() {
        let simulator = MatchSimulator::default();
        let home = squad(1, 70.0);

        let keepers = (0..11)
            .map(|idx| {
                let mut player = Player::new(200 + idx, "Keeper", PlayerPositionType::Goalkeeper);
                player.skills = PlayerSkills::uniform(70.0);
                player
            })
            .collect();
        let away = MatchSquad::new(2, "Keepers", "4-3-3", keepers);

        for seed in 0..20 {
            let state = simulator.simulate_seeded(&home, &away, seed);

            assert_eq!(state.away_stats.shots, 0);
            assert_eq!(state.away_score, 0);
        }
    }

    #[test]
    fn test_whistles_follow_match_length() {
        let settings = MatchSettings {
            match_length: 60,
            ..MatchSettings::default()
        };
        let simulator = MatchSimulator::new(settings);
        let state = simulator.simulate_seeded(&squad(1, 70.0), &squad(2, 70.0), 11);

        let half_time: Vec<u8> = state
            .events
            .iter()
            .filter(|e| e.event_type == MatchEventType::HalfTime)
            .map(|e| e.minute)
            .collect();

        assert_eq!(half_time, vec![30]);
        assert_eq!(state.minute, 60);
        assert_eq!(state.status, MatchStatus::FullTime);
        assert!(state.events.iter().all(|e| e.minute <= 60));
    }

    #[test]
    fn test_side_without_keeper_defends_with_neutral_rating() {
        let simulator = MatchSimulator::default();
        let home = squad(1, 70.0);
        let with_keeper = squad(2, 50.0);

        let mut without_keeper = with_keeper.clone();
        without_keeper.players[0].position = PlayerPositionType::DefenderCenter;
        assert!(without_keeper.goalkeeper().is_none());

        let home_strength = TeamStrengthCalculator::calculate(&home.players, &home.formation);
        let away_strength = TeamStrengthCalculator::calculate(&with_keeper.players, &with_keeper.formation);

        let mut goals_with_keeper = 0u32;
        let mut goals_without_keeper = 0u32;

        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            let state =
                simulator.simulate_with_strengths(&home, &home_strength, &without_keeper, &away_strength, &mut rng);

            assert!(state.is_finished());

            let stats = state.stats(MatchSide::Home);
            assert!(stats.shots_on_target <= stats.shots);
            assert_eq!(stats.shots_on_target, state.home_score + stats.shots_saved);
            assert!(events_of(&state, MatchEventType::Goal, MatchSide::Home)
                .iter()
                .all(|e| e.secondary_player.is_none()));
            assert!(events_of(&state, MatchEventType::ShotSaved, MatchSide::Home)
                .iter()
                .all(|e| e.secondary_player.is_none()));

            goals_without_keeper += state.home_score as u32;

            let mut rng = StdRng::seed_from_u64(seed);
            goals_with_keeper += simulator
                .simulate_with_strengths(&home, &home_strength, &with_keeper, &away_strength, &mut rng)
                .home_score as u32;
        }

        let ratio = goals_without_keeper as f32 / goals_with_keeper as f32;
        assert!((0.8..=1.25).contains(&ratio), "without {} with {}", goals_without_keeper, goals_with_keeper);
    }

    #[test]
    fn test_league_character_changes_scoring() {
        let open = MatchSimulator::new(MatchSettings {
            league: LeagueParameters::bundesliga(),
            ..MatchSettings::default()
        });
        let tight = MatchSimulator::new(MatchSettings {
            league: LeagueParameters::serie_a(),
            ..MatchSettings::default()
        });
        let home = squad(1, 70.0);
        let away = squad(2, 70.0);

        let (mut open_shots, mut open_goals) = (0u32, 0u32);
        let (mut tight_shots, mut tight_goals) = (0u32, 0u32);

        for seed in 0..300 {
            let state = open.simulate_seeded(&home, &away, seed);
            open_shots += (state.home_stats.shots + state.away_stats.shots) as u32;
            open_goals += state.total_goals() as u32;

            let state = tight.simulate_seeded(&home, &away, seed);
            tight_shots += (state.home_stats.shots + state.away_stats.shots) as u32;
            tight_goals += state.total_goals() as u32;
        }

        assert!(open_shots > tight_shots, "shots {} vs {}", open_shots, tight_shots);
        assert!(open_goals > tight_goals, "goals {} vs {}", open_goals, tight_goals);
    }

    #[test]
    fn test_neutral_league_keeps_calibration() {
        let neutral = MatchSimulator::new(MatchSettings {
            league: LeagueParameters::new("Custom", 2.5, 1.15, 1.0, 1.0),
            ..MatchSettings::default()
        });
        let home = squad(1, 71.0);
        let away = squad(2, 69.0);

        for seed in 0..20 {
            let custom = neutral.simulate_seeded(&home, &away, seed);
            let default = MatchSimulator::default().simulate_seeded(&home, &away, seed);

            assert_eq!(custom, default);
        }
    }

    #[test]
    fn test_shot_probability_is_capped() {
        let simulator = MatchSimulator::default();

        assert_eq!(simulator.shot_probability(10_000.0, 1.0), 0.16);
        assert!(simulator.shot_probability(50.0, 100.0) < simulator.shot_probability(100.0, 100.0));
    }
}
