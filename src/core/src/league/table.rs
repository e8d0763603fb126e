use crate::club::Club;
use crate::r#match::MatchOutcome;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

const FORM_LENGTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueTableEntry {
    pub team_id: u32,
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
    /// Most recent result last.
    pub form: Vec<MatchOutcome>,
}

impl LeagueTableEntry {
    pub fn new(team_id: u32, team_name: &str) -> Self {
        LeagueTableEntry {
            team_id,
            team_name: team_name.to_string(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
            form: Vec::with_capacity(FORM_LENGTH),
        }
    }

    pub fn add_result(&mut self, goals_for: u16, goals_against: u16) {
        let outcome = MatchOutcome::from_goals(goals_for, goals_against);

        self.played += 1;
        self.goals_for += goals_for as u32;
        self.goals_against += goals_against as u32;

        match outcome {
            MatchOutcome::Win => self.won += 1,
            MatchOutcome::Draw => self.drawn += 1,
            MatchOutcome::Loss => self.lost += 1,
        }

        self.goal_difference = self.goals_for as i32 - self.goals_against as i32;
        self.points = 3 * self.won + self.drawn;

        self.form.push(outcome);
        if self.form.len() > FORM_LENGTH {
            self.form.remove(0);
        }
    }

    pub fn form_string(&self) -> String {
        self.form.iter().map(|o| o.as_char()).collect()
    }

    pub fn points_per_game(&self) -> f32 {
        if self.played == 0 {
            return 0.0;
        }

        self.points as f32 / self.played as f32
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueTable {
    entries: Vec<LeagueTableEntry>,
}

impl LeagueTable {
    pub fn new(clubs: &[Club]) -> Self {
        LeagueTable {
            entries: clubs
                .iter()
                .map(|club| LeagueTableEntry::new(club.id, &club.name))
                .collect(),
        }
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[LeagueTableEntry] {
        &self.entries
    }

    pub fn entry(&self, team_id: u32) -> Option<&LeagueTableEntry> {
        self.entries.iter().find(|e| e.team_id == team_id)
    }

    pub fn record_result(&mut self, home_team_id: u32, away_team_id: u32, home_goals: u16, away_goals: u16) {
        if let Some(home) = self.entries.iter_mut().find(|e| e.team_id == home_team_id) {
            home.add_result(home_goals, away_goals);
        }

        if let Some(away) = self.entries.iter_mut().find(|e| e.team_id == away_team_id) {
            away.add_result(away_goals, home_goals);
        }
    }

    /// Sorted by points, goal difference, then goals scored. Equal rows keep
    /// insertion order; head-to-head is not consulted.
    pub fn standings(&self) -> Vec<LeagueTableEntry> {
        let mut standings = self.entries.clone();
        standings.sort_by(Self::compare);
        standings
    }

    fn compare(a: &LeagueTableEntry, b: &LeagueTableEntry) -> Ordering {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference.cmp(&a.goal_difference))
            .then(b.goals_for.cmp(&a.goals_for))
    }

    pub fn position(&self, team_id: u32) -> Option<usize> {
        self.standings()
            .iter()
            .position(|e| e.team_id == team_id)
            .map(|idx| idx + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> LeagueTable {
        let clubs: Vec<Club> = (1..=4)
            .map(|id| Club::new(id, &format!("Club {}", id), Vec::new()))
            .collect();

        LeagueTable::new(&clubs)
    }

    fn assert_consistent(entry: &LeagueTableEntry) {
        assert_eq!(entry.played, entry.won + entry.drawn + entry.lost);
        assert_eq!(entry.points, 3 * entry.won + entry.drawn);
        assert_eq!(
            entry.goal_difference,
            entry.goals_for as i32 - entry.goals_against as i32
        );
    }

    #[test]
    fn test_record_result_updates_both_sides() {
        let mut table = table();

        table.record_result(1, 2, 3, 1);
        table.record_result(3, 4, 0, 0);

        let home = table.entry(1).unwrap();
        assert_eq!((home.won, home.points, home.goal_difference), (1, 3, 2));

        let away = table.entry(2).unwrap();
        assert_eq!((away.lost, away.points, away.goal_difference), (1, 0, -2));

        assert_eq!(table.entry(3).unwrap().points, 1);
        assert_eq!(table.entry(4).unwrap().drawn, 1);

        table.entries().iter().for_each(assert_consistent);
    }

    #[test]
    fn test_form_is_bounded() {
        let mut entry = LeagueTableEntry::new(1, "Club");

        for (gf, ga) in [(1, 0), (0, 0), (0, 1), (2, 0), (2, 2), (3, 1), (0, 4)] {
            entry.add_result(gf, ga);
        }

        assert_eq!(entry.form.len(), 5);
        assert_eq!(entry.form_string(), "LWDWL");
        assert_consistent(&entry);
    }

    #[test]
    fn test_standings_tie_breaks() {
        let mut table = table();

        table.record_result(1, 3, 1, 0);
        table.record_result(2, 4, 2, 1);

        // level on points and goal difference, goals scored decides
        let order: Vec<u32> = table.standings().iter().map(|e| e.team_id).collect();
        assert_eq!(order, vec![2, 1, 4, 3]);

        table.record_result(1, 4, 2, 0);

        // 3 and 4 level on points, goal difference decides
        let order: Vec<u32> = table.standings().iter().map(|e| e.team_id).collect();
        assert_eq!(order, vec![1, 2, 3, 4]);
        assert_eq!(table.position(4), Some(4));
    }

    #[test]
    fn test_full_ties_keep_insertion_order() {
        let mut table = table();

        table.record_result(4, 3, 1, 1);
        table.record_result(2, 1, 1, 1);

        let order: Vec<u32> = table.standings().iter().map(|e| e.team_id).collect();

        assert_eq!(order, vec![1, 2, 3, 4]);
    }
}
