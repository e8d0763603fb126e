use crate::club::Player;
use crate::r#match::{MatchEvent, MatchEventType, MatchSettings, MatchSide, MatchSquad, MatchState, TeamStrength};

pub struct SideContext<'s> {
    pub squad: &'s MatchSquad,
    pub strength: &'s TeamStrength,
    sent_off: Vec<u32>,
    booked: Vec<u32>,
}

impl<'s> SideContext<'s> {
    pub fn new(squad: &'s MatchSquad, strength: &'s TeamStrength) -> Self {
        SideContext {
            squad,
            strength,
            sent_off: Vec::new(),
            booked: Vec::new(),
        }
    }

    #[inline]
    pub fn is_on_pitch(&self, player_id: u32) -> bool {
        !self.sent_off.contains(&player_id)
    }

    pub fn players_on_pitch(&self) -> Vec<&'s Player> {
        self.squad.players.iter().filter(|p| self.is_on_pitch(p.id)).collect()
    }

    /// Outfield players still on the pitch.
    pub fn shooters(&self) -> Vec<&'s Player> {
        self.squad
            .players
            .iter()
            .filter(|p| !p.is_goalkeeper() && self.is_on_pitch(p.id))
            .collect()
    }

    pub fn goalkeeper(&self) -> Option<&'s Player> {
        self.squad
            .players
            .iter()
            .find(|p| p.is_goalkeeper() && self.is_on_pitch(p.id))
    }
}

pub struct MatchContext<'s> {
    pub state: MatchState,
    pub home: SideContext<'s>,
    pub away: SideContext<'s>,
}

impl<'s> MatchContext<'s> {
    pub fn new(home: SideContext<'s>, away: SideContext<'s>) -> Self {
        MatchContext {
            state: MatchState::new(home.squad, away.squad),
            home,
            away,
        }
    }

    pub fn side(&self, side: MatchSide) -> &SideContext<'s> {
        match side {
            MatchSide::Home => &self.home,
            MatchSide::Away => &self.away,
        }
    }

    fn side_mut(&mut self, side: MatchSide) -> &mut SideContext<'s> {
        match side {
            MatchSide::Home => &mut self.home,
            MatchSide::Away => &mut self.away,
        }
    }

    pub fn update_possession(&mut self, settings: &MatchSettings) {
        let home = self.home.strength.get_midfield_control();
        let away = self.away.strength.get_midfield_control();

        let total = home + away;
        if total > 0.0 {
            self.state.home_possession = settings.possession_floor + home / total * settings.possession_span;
        }
    }

    pub fn record_goal(&mut self, side: MatchSide, scorer: &Player, keeper: Option<&Player>) {
        let minute = self.state.minute;
        let team_id = self.state.team_id(side);

        self.state.add_goal(side);
        self.state
            .events
            .push(MatchEvent::goal(minute, side, team_id, scorer, keeper));
    }

    pub fn record_save(&mut self, side: MatchSide, shooter: &Player, keeper: Option<&Player>, log_event: bool) {
        self.state.stats_mut(side).shots_saved += 1;

        if log_event {
            let minute = self.state.minute;
            let team_id = self.state.team_id(side);

            self.state
                .events
                .push(MatchEvent::save(minute, side, team_id, shooter, keeper));
        }
    }

    /// A second booking turns into a sending off.
    pub fn record_card(&mut self, side: MatchSide, player: &Player, straight_red: bool) {
        let minute = self.state.minute;
        let team_id = self.state.team_id(side);
        let second_yellow = !straight_red && self.side(side).booked.contains(&player.id);
        let red = straight_red || second_yellow;

        if red {
            self.state.stats_mut(side).red_cards += 1;
            self.side_mut(side).sent_off.push(player.id);
        } else {
            self.state.stats_mut(side).yellow_cards += 1;
            self.side_mut(side).booked.push(player.id);
        }

        self.state
            .events
            .push(MatchEvent::card(minute, side, team_id, player, red, second_yellow));
    }

    pub fn record_whistle(&mut self, event_type: MatchEventType) {
        let event = MatchEvent::whistle(
            self.state.minute,
            event_type,
            self.state.home_score,
            self.state.away_score,
        );

        self.state.events.push(event);
    }
}
