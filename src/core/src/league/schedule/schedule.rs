use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureResult {
    pub home_goals: u16,
    pub away_goals: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub round: u32,
    pub date: NaiveDate,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub result: Option<FixtureResult>,
}

impl Fixture {
    pub fn new(round: u32, date: NaiveDate, home_team_id: u32, away_team_id: u32) -> Self {
        Fixture {
            round,
            date,
            home_team_id,
            away_team_id,
            result: None,
        }
    }

    #[inline]
    pub fn is_played(&self) -> bool {
        self.result.is_some()
    }

    #[inline]
    pub fn involves(&self, team_id: u32) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matchday {
    pub round: u32,
    pub date: NaiveDate,
    pub fixtures: Vec<Fixture>,
}

impl Matchday {
    pub fn new(round: u32, date: NaiveDate, fixtures: Vec<Fixture>) -> Self {
        Matchday { round, date, fixtures }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub matchdays: Vec<Matchday>,
}

impl Schedule {
    pub fn new(matchdays: Vec<Matchday>) -> Self {
        Schedule { matchdays }
    }

    pub fn matchday(&self, round: u32) -> Option<&Matchday> {
        self.matchdays.iter().find(|m| m.round == round)
    }

    pub fn fixtures(&self) -> impl Iterator<Item = &Fixture> {
        self.matchdays.iter().flat_map(|m| m.fixtures.iter())
    }

    pub fn total_fixtures(&self) -> usize {
        self.matchdays.iter().map(|m| m.fixtures.len()).sum()
    }

    pub fn fixtures_for_team(&self, team_id: u32) -> Vec<&Fixture> {
        self.fixtures().filter(|f| f.involves(team_id)).collect()
    }

    pub fn unresolved_count(&self) -> usize {
        self.fixtures().filter(|f| !f.is_played()).count()
    }

    /// Matchdays dated within `from..=to`.
    pub fn matchdays_between(&self, from: NaiveDate, to: NaiveDate) -> Vec<&Matchday> {
        self.matchdays
            .iter()
            .filter(|m| m.date >= from && m.date <= to)
            .collect()
    }

    /// Writes a final score onto a fixture, addressed by matchday position and
    /// fixture position.
    pub fn update_result(&mut self, matchday_index: usize, fixture_index: usize, home_goals: u16, away_goals: u16) -> bool {
        match self
            .matchdays
            .get_mut(matchday_index)
            .and_then(|m| m.fixtures.get_mut(fixture_index))
        {
            Some(fixture) => {
                fixture.result = Some(FixtureResult {
                    home_goals,
                    away_goals,
                });
                true
            }
            None => false,
        }
    }
}
