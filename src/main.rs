use color_eyre::eyre::{Result, WrapErr};
use database::{DatabaseGenerator, GeneratorSettings, RosterLoader};
use env_logger::Env;
use league_core::utils::TimeEstimation;
use league_core::{Club, LeagueParameters, MatchSettings, SeasonResult, SeasonSettings, SeasonSimulator};
use log::info;
use std::env;
use std::str::FromStr;

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let clubs = load_clubs()?;

    let defaults = SeasonSettings::default();
    let settings = SeasonSettings {
        seed: env_or("SEED", defaults.seed)?,
        start_date: env_or("START_DATE", defaults.start_date)?,
        parallel: env_or("PARALLEL", defaults.parallel)?,
        ..defaults
    };

    let match_settings = MatchSettings {
        league: env::var("LEAGUE")
            .map(|name| LeagueParameters::by_name(&name))
            .unwrap_or_default(),
        ..MatchSettings::default()
    };

    info!(
        "season started: {} clubs, seed {}, start {}, league {}",
        clubs.len(),
        settings.seed,
        settings.start_date,
        match_settings.league.name
    );

    let simulator = SeasonSimulator::new(settings, match_settings);
    let (result, estimated) = TimeEstimation::estimate(|| simulator.simulate(&clubs));
    let result = result?;

    info!("season simulated: {} ms", estimated);

    print_standings(&result);
    print_form_table(&result);
    print_statistics(&result);

    if let Ok(path) = env::var("OUTPUT_FILE") {
        let json = serde_json::to_string_pretty(&result)?;
        std::fs::write(&path, json).wrap_err_with(|| format!("failed to write {}", path))?;

        info!("season result written to {}", path);
    }

    Ok(())
}

fn load_clubs() -> Result<Vec<Club>> {
    if let Ok(path) = env::var("ROSTER_FILE") {
        let (clubs, estimated) = TimeEstimation::estimate(|| RosterLoader::load(&path));
        info!("roster loaded: {} ms", estimated);

        return Ok(clubs?);
    }

    let defaults = GeneratorSettings::default();
    let settings = GeneratorSettings {
        teams: env_or("TEAMS", defaults.teams)?,
        squad_size: env_or("SQUAD_SIZE", defaults.squad_size)?,
        seed: env_or("SEED", defaults.seed)?,
    };

    let (clubs, estimated) = TimeEstimation::estimate(|| DatabaseGenerator::generate(&settings));
    info!("database generated: {} ms", estimated);

    Ok(clubs?)
}

fn env_or<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .parse()
            .wrap_err_with(|| format!("invalid value for {}: {}", name, value)),
        Err(_) => Ok(default),
    }
}

fn print_standings(result: &SeasonResult) {
    info!("{:<3} {:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}  form", "#", "club", "p", "w", "d", "l", "gf", "ga", "gd", "pts");

    for (position, entry) in result.standings.iter().enumerate() {
        info!(
            "{:<3} {:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>+4} {:>4}  {}",
            position + 1,
            entry.team_name,
            entry.played,
            entry.won,
            entry.drawn,
            entry.lost,
            entry.goals_for,
            entry.goals_against,
            entry.goal_difference,
            entry.points,
            entry.form_string()
        );
    }

    if let Some(champion) = result.champion() {
        info!("champion: {}", champion.team_name);
    }

    let spots = result.european_spots(4, 2);
    info!("champions league: {:?}, europa league: {:?}", spots.champions_league, spots.europa_league);

    let relegated: Vec<&str> = result.relegated(3).iter().map(|e| e.team_name.as_str()).collect();
    info!("relegated: {}", relegated.join(", "));

    if result.unresolved_fixtures() > 0 {
        info!("unresolved fixtures: {}", result.unresolved_fixtures());
    }
}

fn print_form_table(result: &SeasonResult) {
    for row in result.form_table().iter().take(5) {
        info!(
            "form: {:<24} {} avg {:.1} streak {}",
            row.team_name, row.form, row.average_performance, row.current_streak
        );
    }
}

fn print_statistics(result: &SeasonResult) {
    let statistics = &result.statistics;

    info!(
        "matches: {}, goals: {} ({:.2} per match), home/draw/away: {}/{}/{}",
        statistics.total_matches,
        statistics.total_goals,
        statistics.goals_per_match(),
        statistics.home_wins,
        statistics.draws,
        statistics.away_wins
    );

    for scorer in statistics.top_scorers(5) {
        info!("top scorer: {} ({}) {} goals", scorer.player_name, scorer.team_id, scorer.goals);
    }

    for notable in statistics.biggest_wins(3) {
        info!(
            "big win, round {}: {} {} - {} {}",
            notable.round, notable.home_team_name, notable.home_goals, notable.away_goals, notable.away_team_name
        );
    }

    for (team_id, streak) in result.longest_win_streaks(3) {
        info!("win streak: team {} won {} in a row", team_id, streak);
    }

    for (team_id, record) in statistics.best_home_records(3) {
        info!("home record: team {} {}W {}D {}L", team_id, record.won, record.drawn, record.lost);
    }
}
