use thiserror::Error;

/// Setup problems detected before any match is played.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeasonError {
    #[error("a season needs at least two teams, got {found}")]
    NotEnoughTeams { found: usize },
    #[error("team {team_id} is listed more than once")]
    DuplicateTeam { team_id: u32 },
    #[error("player {player_id} is registered with more than one club")]
    DuplicatePlayer { player_id: u32 },
    #[error("matchday interval of {days} days is zero or runs past the calendar")]
    InvalidMatchdayInterval { days: u32 },
}
