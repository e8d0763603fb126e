use crate::generators::PlayerGenerator;
use crate::loaders::{ClubEntity, ClubLoader, LoadError};
use league_core::{Club, PlayerPositionType};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

const SQUAD_TEMPLATE: [PlayerPositionType; 18] = [
    PlayerPositionType::Goalkeeper,
    PlayerPositionType::Goalkeeper,
    PlayerPositionType::DefenderCenter,
    PlayerPositionType::DefenderCenter,
    PlayerPositionType::DefenderCenter,
    PlayerPositionType::DefenderLeft,
    PlayerPositionType::DefenderRight,
    PlayerPositionType::DefensiveMidfielder,
    PlayerPositionType::MidfielderCenter,
    PlayerPositionType::MidfielderCenter,
    PlayerPositionType::AttackingMidfielderCenter,
    PlayerPositionType::MidfielderLeft,
    PlayerPositionType::MidfielderRight,
    PlayerPositionType::ForwardLeft,
    PlayerPositionType::ForwardRight,
    PlayerPositionType::Striker,
    PlayerPositionType::Striker,
    PlayerPositionType::ForwardCenter,
];

const DEFAULT_REPUTATION: u16 = 3000;
const DEFAULT_NATIONALITY: &str = "ENG";

#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    pub teams: usize,
    pub squad_size: usize,
    pub seed: u64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        GeneratorSettings {
            teams: 20,
            squad_size: SQUAD_TEMPLATE.len(),
            seed: 42,
        }
    }
}

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    /// Builds a league from the bundled club list.
    pub fn generate(settings: &GeneratorSettings) -> Result<Vec<Club>, LoadError> {
        let entities = ClubLoader::load()?;
        Ok(Self::generate_from(&entities, settings))
    }

    /// Same seed and entities always give the same clubs. When more teams are
    /// requested than entities exist, the rest get generic names.
    pub fn generate_from(entities: &[ClubEntity], settings: &GeneratorSettings) -> Vec<Club> {
        let mut rng = StdRng::seed_from_u64(settings.seed);
        let mut player_generator = PlayerGenerator::default();

        let last_entity_id = entities.iter().map(|e| e.id).max().unwrap_or(0);

        let clubs: Vec<Club> = (0..settings.teams)
            .map(|idx| {
                let (id, name, reputation, nationality) = match entities.get(idx) {
                    Some(entity) => (
                        entity.id,
                        entity.name.clone(),
                        entity.reputation,
                        entity.nationality.as_str(),
                    ),
                    None => {
                        let id = last_entity_id + (idx - entities.len()) as u32 + 1;
                        (id, format!("Club {}", id), DEFAULT_REPUTATION, DEFAULT_NATIONALITY)
                    }
                };

                let base_ability = Self::base_ability(reputation);

                let players = SQUAD_TEMPLATE
                    .iter()
                    .cycle()
                    .take(settings.squad_size)
                    .map(|position| player_generator.generate(&mut rng, *position, base_ability, nationality))
                    .collect();

                Club::new(id, &name, players)
            })
            .collect();

        info!(
            "generated {} clubs with {} players each",
            clubs.len(),
            settings.squad_size
        );

        clubs
    }

    /// Reputation 0..10000 maps to an average ability of 45..80.
    fn base_ability(reputation: u16) -> f32 {
        let factor = (reputation as f32 / 10000.0).clamp(0.0, 1.0);
        45.0 + factor * 35.0
    }
}
