use crate::r#match::MatchOutcome;

pub const PERFORMANCE_MIN: f32 = 10.0;
pub const PERFORMANCE_MAX: f32 = 100.0;

/// Team performance score for one match on a 10..=100 scale, 50 being an
/// ordinary showing.
pub fn calculate_performance_rating(goals_for: u16, goals_against: u16, possession: f32, shots_on_target: u16) -> f32 {
    let result_bonus = match MatchOutcome::from_goals(goals_for, goals_against) {
        MatchOutcome::Win => 20.0,
        MatchOutcome::Draw => 5.0,
        MatchOutcome::Loss => -10.0,
    };

    let goal_difference = goals_for as f32 - goals_against as f32;

    (50.0 + result_bonus + goal_difference * 5.0 + (possession - 50.0) * 0.3 + shots_on_target as f32)
        .clamp(PERFORMANCE_MIN, PERFORMANCE_MAX)
}
