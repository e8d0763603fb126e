use crate::LoadError;
use serde::Deserialize;

const STATIC_CLUBS_JSON: &str = include_str!("../../data/clubs.json");

#[derive(Debug, Clone, Deserialize)]
pub struct ClubEntity {
    pub id: u32,
    pub name: String,
    pub reputation: u16,
    pub nationality: String,
}

pub struct ClubLoader;

impl ClubLoader {
    pub fn load() -> Result<Vec<ClubEntity>, LoadError> {
        Ok(serde_json::from_str(STATIC_CLUBS_JSON)?)
    }
}
