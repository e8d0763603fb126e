use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use std::hash::{DefaultHasher, Hash, Hasher};

pub struct RandomUtils;

impl RandomUtils {
    /// Bernoulli trial. Probabilities outside [0, 1] saturate.
    #[inline]
    pub fn chance<R: Rng + ?Sized>(rng: &mut R, probability: f32) -> bool {
        rng.random::<f32>() < probability
    }

    /// Zero-centred normal sample with the given standard deviation.
    #[inline]
    pub fn gaussian<R: Rng + ?Sized>(rng: &mut R, sigma: f32) -> f32 {
        let z: f32 = StandardNormal.sample(rng);
        z * sigma
    }

    /// Index drawn proportionally to `weights`. Non-positive weights are never picked.
    pub fn weighted_index<R: Rng + ?Sized>(rng: &mut R, weights: &[f32]) -> Option<usize> {
        let total: f32 = weights.iter().filter(|w| **w > 0.0).sum();
        if total <= 0.0 {
            return None;
        }

        let mut roll = rng.random::<f32>() * total;
        let mut last_positive = None;

        for (idx, weight) in weights.iter().enumerate() {
            if *weight <= 0.0 {
                continue;
            }

            if roll < *weight {
                return Some(idx);
            }

            roll -= weight;
            last_positive = Some(idx);
        }

        // float rounding can leave a sliver past the last bucket
        last_positive
    }

    /// Seed for a single fixture, derived from the season seed and the fixture's slot.
    pub fn derive_seed(season_seed: u64, matchday: u32, fixture_index: usize) -> u64 {
        let mut hasher = DefaultHasher::new();
        season_seed.hash(&mut hasher);
        matchday.hash(&mut hasher);
        fixture_index.hash(&mut hasher);
        hasher.finish()
    }
}
