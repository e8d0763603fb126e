use crate::club::Player;
use crate::r#match::MatchSide;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchEventType {
    Goal,
    ShotSaved,
    YellowCard,
    RedCard,
    HalfTime,
    FullTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPlayer {
    pub id: u32,
    pub name: String,
}

impl From<&Player> for EventPlayer {
    fn from(player: &Player) -> Self {
        EventPlayer {
            id: player.id,
            name: player.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub minute: u8,
    pub event_type: MatchEventType,
    pub side: Option<MatchSide>,
    pub team_id: Option<u32>,
    pub player: Option<EventPlayer>,
    pub secondary_player: Option<EventPlayer>,
    pub description: String,
}

impl MatchEvent {
    pub fn goal(minute: u8, side: MatchSide, team_id: u32, scorer: &Player, keeper: Option<&Player>) -> Self {
        MatchEvent {
            minute,
            event_type: MatchEventType::Goal,
            side: Some(side),
            team_id: Some(team_id),
            player: Some(scorer.into()),
            secondary_player: keeper.map(EventPlayer::from),
            description: format!("{}' Goal! {} scores", minute, scorer.name),
        }
    }

    pub fn save(minute: u8, side: MatchSide, team_id: u32, shooter: &Player, keeper: Option<&Player>) -> Self {
        let description = match keeper {
            Some(keeper) => format!("{}' {} saves from {}", minute, keeper.name, shooter.name),
            None => format!("{}' Shot from {} is blocked", minute, shooter.name),
        };

        MatchEvent {
            minute,
            event_type: MatchEventType::ShotSaved,
            side: Some(side),
            team_id: Some(team_id),
            player: Some(shooter.into()),
            secondary_player: keeper.map(EventPlayer::from),
            description,
        }
    }

    pub fn card(minute: u8, side: MatchSide, team_id: u32, player: &Player, red: bool, second_yellow: bool) -> Self {
        let (event_type, description) = match (red, second_yellow) {
            (true, true) => (
                MatchEventType::RedCard,
                format!("{}' Second yellow, {} is sent off", minute, player.name),
            ),
            (true, false) => (
                MatchEventType::RedCard,
                format!("{}' Red card for {}", minute, player.name),
            ),
            _ => (
                MatchEventType::YellowCard,
                format!("{}' Yellow card for {}", minute, player.name),
            ),
        };

        MatchEvent {
            minute,
            event_type,
            side: Some(side),
            team_id: Some(team_id),
            player: Some(player.into()),
            secondary_player: None,
            description,
        }
    }

    pub fn whistle(minute: u8, event_type: MatchEventType, home_score: u16, away_score: u16) -> Self {
        let label = match event_type {
            MatchEventType::HalfTime => "Half time",
            _ => "Full time",
        };

        MatchEvent {
            minute,
            event_type,
            side: None,
            team_id: None,
            player: None,
            secondary_player: None,
            description: format!("{}' {}: {} - {}", minute, label, home_score, away_score),
        }
    }

    #[inline]
    pub fn is_goal(&self) -> bool {
        self.event_type == MatchEventType::Goal
    }

    #[inline]
    pub fn is_card(&self) -> bool {
        matches!(self.event_type, MatchEventType::YellowCard | MatchEventType::RedCard)
    }
}
