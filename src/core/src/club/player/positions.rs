use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerPositionType {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "CB")]
    DefenderCenter,
    #[serde(rename = "LB")]
    DefenderLeft,
    #[serde(rename = "RB")]
    DefenderRight,
    #[serde(rename = "LWB")]
    WingbackLeft,
    #[serde(rename = "RWB")]
    WingbackRight,
    #[serde(rename = "CDM")]
    DefensiveMidfielder,
    #[serde(rename = "CM")]
    MidfielderCenter,
    #[serde(rename = "LM")]
    MidfielderLeft,
    #[serde(rename = "RM")]
    MidfielderRight,
    #[serde(rename = "CAM")]
    AttackingMidfielderCenter,
    #[serde(rename = "LW")]
    ForwardLeft,
    #[serde(rename = "RW")]
    ForwardRight,
    #[serde(rename = "CF")]
    ForwardCenter,
    #[serde(rename = "ST")]
    Striker,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerFieldPositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PlayerPositionType {
    pub const ALL: [PlayerPositionType; 15] = [
        PlayerPositionType::Goalkeeper,
        PlayerPositionType::DefenderCenter,
        PlayerPositionType::DefenderLeft,
        PlayerPositionType::DefenderRight,
        PlayerPositionType::WingbackLeft,
        PlayerPositionType::WingbackRight,
        PlayerPositionType::DefensiveMidfielder,
        PlayerPositionType::MidfielderCenter,
        PlayerPositionType::MidfielderLeft,
        PlayerPositionType::MidfielderRight,
        PlayerPositionType::AttackingMidfielderCenter,
        PlayerPositionType::ForwardLeft,
        PlayerPositionType::ForwardRight,
        PlayerPositionType::ForwardCenter,
        PlayerPositionType::Striker,
    ];

    #[inline]
    pub fn get_short_name(&self) -> &'static str {
        match *self {
            PlayerPositionType::Goalkeeper => "GK",
            PlayerPositionType::DefenderCenter => "CB",
            PlayerPositionType::DefenderLeft => "LB",
            PlayerPositionType::DefenderRight => "RB",
            PlayerPositionType::WingbackLeft => "LWB",
            PlayerPositionType::WingbackRight => "RWB",
            PlayerPositionType::DefensiveMidfielder => "CDM",
            PlayerPositionType::MidfielderCenter => "CM",
            PlayerPositionType::MidfielderLeft => "LM",
            PlayerPositionType::MidfielderRight => "RM",
            PlayerPositionType::AttackingMidfielderCenter => "CAM",
            PlayerPositionType::ForwardLeft => "LW",
            PlayerPositionType::ForwardRight => "RW",
            PlayerPositionType::ForwardCenter => "CF",
            PlayerPositionType::Striker => "ST",
        }
    }

    #[inline]
    pub fn position_group(&self) -> PlayerFieldPositionGroup {
        match *self {
            PlayerPositionType::Goalkeeper => PlayerFieldPositionGroup::Goalkeeper,
            PlayerPositionType::DefenderCenter
            | PlayerPositionType::DefenderLeft
            | PlayerPositionType::DefenderRight => PlayerFieldPositionGroup::Defender,
            PlayerPositionType::WingbackLeft
            | PlayerPositionType::WingbackRight
            | PlayerPositionType::DefensiveMidfielder
            | PlayerPositionType::MidfielderCenter
            | PlayerPositionType::MidfielderLeft
            | PlayerPositionType::MidfielderRight
            | PlayerPositionType::AttackingMidfielderCenter => PlayerFieldPositionGroup::Midfielder,
            PlayerPositionType::ForwardLeft
            | PlayerPositionType::ForwardRight
            | PlayerPositionType::ForwardCenter
            | PlayerPositionType::Striker => PlayerFieldPositionGroup::Forward,
        }
    }

    #[inline]
    pub fn is_goalkeeper(&self) -> bool {
        *self == PlayerPositionType::Goalkeeper
    }

    /// Weight multiplier used when picking who takes a shot.
    pub fn shooting_weight(&self) -> f32 {
        match *self {
            PlayerPositionType::Striker | PlayerPositionType::ForwardCenter => 2.0,
            PlayerPositionType::ForwardLeft | PlayerPositionType::ForwardRight => 1.5,
            PlayerPositionType::AttackingMidfielderCenter => 1.3,
            _ => 0.5,
        }
    }
}

impl Display for PlayerPositionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get_short_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown position: {0}")]
pub struct PositionParseError(pub String);

impl FromStr for PlayerPositionType {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();

        PlayerPositionType::ALL
            .iter()
            .find(|position| position.get_short_name() == code)
            .copied()
            .ok_or_else(|| PositionParseError(s.to_string()))
    }
}
