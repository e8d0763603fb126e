use crate::league::{Fixture, Matchday, Schedule};
use chrono::{Duration, NaiveDate};
use log::debug;

pub struct FixtureGenerator;

impl FixtureGenerator {
    /// Double round-robin by the circle method. Odd team counts get a bye slot,
    /// and pairings against it are dropped. The second half mirrors the first
    /// with venues swapped.
    ///
    /// `None` when a matchday date falls outside the representable calendar.
    pub fn generate(team_ids: &[u32], start_date: NaiveDate, interval_days: u32) -> Option<Schedule> {
        if team_ids.len() < 2 {
            return Some(Schedule::default());
        }

        let mut slots: Vec<Option<u32>> = team_ids.iter().map(|id| Some(*id)).collect();
        if slots.len() % 2 == 1 {
            slots.push(None);
        }

        let n = slots.len();
        let rounds = n - 1;

        let first_half: Vec<Vec<(u32, u32)>> = (0..rounds)
            .map(|round| {
                (0..n / 2)
                    .filter_map(|i| {
                        let home = (round + i) % rounds;
                        let away = if i == 0 { n - 1 } else { (n - 1 - i + round) % rounds };

                        match (slots[home], slots[away]) {
                            (Some(home), Some(away)) => Some((home, away)),
                            _ => None,
                        }
                    })
                    .collect()
            })
            .collect();

        let second_half = first_half
            .iter()
            .map(|pairs| pairs.iter().map(|(home, away)| (*away, *home)).collect::<Vec<_>>());

        let matchdays: Vec<Matchday> = first_half
            .iter()
            .cloned()
            .chain(second_half)
            .enumerate()
            .map(|(idx, pairs)| {
                let round = idx as u32 + 1;
                let date = Self::matchday_date(start_date, idx, interval_days)?;

                let fixtures = pairs
                    .into_iter()
                    .map(|(home, away)| Fixture::new(round, date, home, away))
                    .collect();

                Some(Matchday::new(round, date, fixtures))
            })
            .collect::<Option<_>>()?;

        debug!(
            "generated schedule: {} teams, {} matchdays",
            team_ids.len(),
            matchdays.len()
        );

        Some(Schedule::new(matchdays))
    }

    fn matchday_date(start_date: NaiveDate, idx: usize, interval_days: u32) -> Option<NaiveDate> {
        let days = (idx as i64).checked_mul(interval_days as i64)?;

        start_date.checked_add_signed(Duration::try_days(days)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 1).unwrap()
    }

    #[test]
    fn test_four_teams() {
        let schedule = FixtureGenerator::generate(&[1, 2, 3, 4], start(), 7).unwrap();

        assert_eq!(schedule.matchdays.len(), 6);
        assert_eq!(schedule.total_fixtures(), 12);
        assert!(schedule.matchdays.iter().all(|m| m.fixtures.len() == 2));

        for team in 1..=4 {
            let fixtures = schedule.fixtures_for_team(team);
            let home = fixtures.iter().filter(|f| f.home_team_id == team).count();
            let away = fixtures.iter().filter(|f| f.away_team_id == team).count();

            assert_eq!(home, 3);
            assert_eq!(away, 3);
        }

        assert_eq!(schedule.matchdays[0].date, start());
        assert_eq!(schedule.matchdays[1].date, NaiveDate::from_ymd_opt(2024, 8, 8).unwrap());
        assert_eq!(schedule.matchdays[5].date, NaiveDate::from_ymd_opt(2024, 9, 5).unwrap());
    }

    #[test]
    fn test_every_ordered_pair_once() {
        for n in [2u32, 4, 6, 10, 20] {
            let ids: Vec<u32> = (1..=n).collect();
            let schedule = FixtureGenerator::generate(&ids, start(), 7).unwrap();

            assert_eq!(schedule.total_fixtures(), (n * (n - 1)) as usize);

            let pairs: HashSet<(u32, u32)> = schedule
                .fixtures()
                .map(|f| (f.home_team_id, f.away_team_id))
                .collect();

            assert_eq!(pairs.len(), (n * (n - 1)) as usize);
            assert!(pairs.iter().all(|(h, a)| h != a));
        }
    }

    #[test]
    fn test_no_team_plays_twice_in_a_round() {
        let ids: Vec<u32> = (1..=8).collect();
        let schedule = FixtureGenerator::generate(&ids, start(), 7).unwrap();

        for matchday in &schedule.matchdays {
            let mut seen = HashSet::new();
            for fixture in &matchday.fixtures {
                assert!(seen.insert(fixture.home_team_id));
                assert!(seen.insert(fixture.away_team_id));
            }
        }
    }

    #[test]
    fn test_odd_team_count_uses_bye() {
        let schedule = FixtureGenerator::generate(&[1, 2, 3, 4, 5], start(), 7).unwrap();

        assert_eq!(schedule.matchdays.len(), 10);
        assert_eq!(schedule.total_fixtures(), 20);

        let mut games: HashMap<u32, usize> = HashMap::new();
        for fixture in schedule.fixtures() {
            *games.entry(fixture.home_team_id).or_default() += 1;
            *games.entry(fixture.away_team_id).or_default() += 1;
        }

        assert!(games.values().all(|played| *played == 8));
    }

    #[test]
    fn test_second_half_mirrors_first() {
        let schedule = FixtureGenerator::generate(&[1, 2, 3, 4, 5, 6], start(), 3).unwrap();

        for round in 0..5 {
            let first = &schedule.matchdays[round].fixtures;
            let second = &schedule.matchdays[round + 5].fixtures;

            for (a, b) in first.iter().zip(second) {
                assert_eq!((a.home_team_id, a.away_team_id), (b.away_team_id, b.home_team_id));
            }
        }
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(FixtureGenerator::generate(&[], start(), 7).unwrap().total_fixtures(), 0);
        assert_eq!(FixtureGenerator::generate(&[1], start(), 7).unwrap().total_fixtures(), 0);
    }

    #[test]
    fn test_dates_past_the_calendar_are_rejected() {
        assert!(FixtureGenerator::generate(&[1, 2, 3, 4], start(), u32::MAX).is_none());

        let late = NaiveDate::MAX - Duration::days(10);
        assert!(FixtureGenerator::generate(&[1, 2, 3, 4], late, 7).is_none());
        assert!(FixtureGenerator::generate(&[1, 2], late, 7).is_some());
    }
}
