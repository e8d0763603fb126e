use league_core::{
    Player, PlayerBuilder, PlayerCondition, PlayerFieldPositionGroup, PlayerPositionType,
    PlayerSkills,
};
use rand::Rng;

const ABILITY_SPREAD: f32 = 8.0;
const SKILL_SPREAD: f32 = 10.0;

const FIRST_NAMES: [&str; 16] = [
    "James", "Luca", "Mateo", "Noah", "Oliver", "Hugo", "Leo", "Tomas", "Adam", "Rafael", "Samuel",
    "Daniel", "Kai", "Marco", "Jonas", "Elias",
];

const LAST_NAMES: [&str; 16] = [
    "Walker", "Rossi", "Garcia", "Muller", "Silva", "Dubois", "Novak", "Jensen", "Kovac", "Moreau",
    "Santos", "Fischer", "Hughes", "Costa", "Berg", "Lindqvist",
];

const NATIONALITIES: [&str; 8] = ["ENG", "ESP", "FRA", "GER", "ITA", "POR", "BRA", "NED"];

pub struct PlayerGenerator {
    next_id: u32,
}

impl Default for PlayerGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PlayerGenerator {
    pub fn new(first_id: u32) -> Self {
        PlayerGenerator { next_id: first_id }
    }

    /// Generates one player whose ratings centre on `base_ability`.
    /// `home_nationality` is used for roughly half of the squad.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        position: PlayerPositionType,
        base_ability: f32,
        home_nationality: &str,
    ) -> Player {
        let id = self.next_id;
        self.next_id += 1;

        let nationality = if rng.random_bool(0.5) {
            home_nationality
        } else {
            NATIONALITIES[rng.random_range(0..NATIONALITIES.len())]
        };

        let name = format!(
            "{} {}",
            FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())],
            LAST_NAMES[rng.random_range(0..LAST_NAMES.len())]
        );

        let ability = Self::rating(rng, base_ability, ABILITY_SPREAD);

        PlayerBuilder::new()
            .id(id)
            .name(name)
            .position(position)
            .nationality(nationality)
            .skills(Self::generate_skills(rng, position, ability))
            .condition(Self::generate_condition(rng))
            .build()
            .unwrap_or_else(|_| Player::new(id, "Unknown", position))
    }

    fn generate_skills<R: Rng + ?Sized>(rng: &mut R, position: PlayerPositionType, ability: f32) -> PlayerSkills {
        // (attacking, defending, goalkeeping) offsets relative to current ability
        let (attacking, defending, goalkeeping) = match position.position_group() {
            PlayerFieldPositionGroup::Goalkeeper => (-25.0, -20.0, 5.0),
            PlayerFieldPositionGroup::Defender => (-12.0, 5.0, -35.0),
            PlayerFieldPositionGroup::Midfielder => (0.0, -3.0, -35.0),
            PlayerFieldPositionGroup::Forward => (6.0, -15.0, -35.0),
        };

        let mut skill = |offset: f32| Some(Self::rating(rng, ability + offset, SKILL_SPREAD));

        PlayerSkills {
            current_ability: Some(ability),
            pace: skill(attacking / 2.0),
            passing: skill(0.0),
            shooting: skill(attacking),
            vision: skill(attacking / 2.0),
            decisions: skill(0.0),
            strength: skill(0.0),
            tackling: skill(defending),
            marking: skill(defending),
            positioning: skill(defending / 2.0),
            reflexes: skill(goalkeeping),
            handling: skill(goalkeeping),
        }
    }

    fn generate_condition<R: Rng + ?Sized>(rng: &mut R) -> PlayerCondition {
        PlayerCondition {
            form: Some(rng.random_range(40.0..60.0)),
            morale: Some(rng.random_range(45.0..55.0)),
            fitness: Some(rng.random_range(90.0..=100.0)),
        }
    }

    fn rating<R: Rng + ?Sized>(rng: &mut R, centre: f32, spread: f32) -> f32 {
        (centre + rng.random_range(-spread..=spread)).clamp(1.0, 99.0).round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_assigns_sequential_ids() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut generator = PlayerGenerator::new(500);

        let first = generator.generate(&mut rng, PlayerPositionType::Striker, 70.0, "ENG");
        let second = generator.generate(&mut rng, PlayerPositionType::Goalkeeper, 70.0, "ENG");

        assert_eq!(first.id, 500);
        assert_eq!(second.id, 501);
        assert!(first.nationality.is_some());
    }

    #[test]
    fn test_ratings_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut generator = PlayerGenerator::default();

        for _ in 0..200 {
            let player = generator.generate(&mut rng, PlayerPositionType::DefenderCenter, 95.0, "ESP");
            let attributes = player.attributes();

            for value in [attributes.current_ability, attributes.shooting, attributes.reflexes, attributes.tackling] {
                assert!((1.0..=99.0).contains(&value));
            }
        }
    }

    #[test]
    fn test_position_shapes_skills() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut generator = PlayerGenerator::default();

        let mut keeper_reflexes = 0.0;
        let mut striker_reflexes = 0.0;
        let mut striker_shooting = 0.0;
        let mut defender_shooting = 0.0;

        for _ in 0..50 {
            keeper_reflexes += generator.generate(&mut rng, PlayerPositionType::Goalkeeper, 60.0, "ENG").attributes().reflexes;
            let striker = generator.generate(&mut rng, PlayerPositionType::Striker, 60.0, "ENG").attributes();
            striker_reflexes += striker.reflexes;
            striker_shooting += striker.shooting;
            defender_shooting += generator.generate(&mut rng, PlayerPositionType::DefenderCenter, 60.0, "ENG").attributes().shooting;
        }

        assert!(keeper_reflexes > striker_reflexes);
        assert!(striker_shooting > defender_shooting);
    }
}
