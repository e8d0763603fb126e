use league_core::Club;
use log::info;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read roster file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse roster: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads club rosters from JSON: an array of clubs, each with its players.
pub struct RosterLoader;

impl RosterLoader {
    pub fn load(path: impl AsRef<Path>) -> Result<Vec<Club>, LoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let clubs = Self::parse(&content)?;

        info!("roster loaded from {}: {} clubs", path.display(), clubs.len());

        Ok(clubs)
    }

    pub fn parse(content: &str) -> Result<Vec<Club>, LoadError> {
        Ok(serde_json::from_str(content)?)
    }
}
