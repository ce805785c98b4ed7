mod generator;

use chrono::{Duration, Local, Weekday};
use color_eyre::eyre::WrapErr;
use env_logger::Env;
use generator::LeagueGenerator;
use league_core::{
    DraftLottery, LeagueConfig, MarketListing, RandomSource, RngSource,
    ScheduleGenerator, TeamPayroll, TeamTraining,
};
use log::{info, warn};
use std::env;
use std::fs;

const TEAMS_PER_CONFERENCE: u32 = 15;
const TRAINING_DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    let config = load_config()?;

    let seed = match env::var("LEAGUE_SEED") {
        Ok(value) => value.parse::<u64>().wrap_err("LEAGUE_SEED must be an unsigned integer")?,
        Err(_) => RngSource::thread().next_below(u64::MAX),
    };

    info!("off-season run started, seed = {}", seed);

    let mut rng = RngSource::seeded(seed);
    let mut generator = LeagueGenerator::new();

    let teams = generator.generate_teams(TEAMS_PER_CONFERENCE, &mut rng);
    let mut players = Vec::new();
    for team in &teams {
        players.extend(generator.generate_roster(team.id, &mut rng)?);
    }

    info!("league generated: {} teams, {} players", teams.len(), players.len());

    // Fixtures
    let fixtures = ScheduleGenerator::generate(&teams, &mut rng)?;
    info!("season schedule: {} fixtures", fixtures.len());

    // Draft lottery
    let mut lottery = DraftLottery::build(&teams, &config.lottery);
    lottery.run(&mut rng)?;

    while lottery.has_unrevealed() {
        let revealed = lottery.reveal_next()?;
        if let Some(team) = teams.iter().find(|team| team.id == revealed.team_id) {
            info!("draft pick {}: {}", revealed.pick, team);
        }
    }

    // Training week
    for team in &teams {
        let (mut roster, rest): (Vec<_>, Vec<_>) = players
            .into_iter()
            .partition(|player| player.team_id == Some(team.id));

        for (day_index, day) in TRAINING_DAYS.iter().enumerate() {
            let session_seed = seed ^ ((team.id as u64) << 32) ^ day_index as u64;
            TeamTraining::train_day(team, &mut roster, *day, &config, session_seed)?;
        }

        players = rest;
        players.extend(roster);
    }

    // Wages
    for team in &teams {
        let payroll = TeamPayroll::refresh(team.id, &mut players, &config.valuation)?;
        let cash_after = payroll.cash_after(team);

        if cash_after < 0 {
            warn!("{}: payroll {} exceeds cash {}", team.name, payroll.total_wages, team.cash);
        } else {
            info!("{}: payroll {}, cash after {}", team.name, payroll.total_wages, cash_after);
        }
    }

    // Market
    if let Some(star) = players.iter().max_by_key(|player| player.wage) {
        let seller = star.team_id.unwrap_or_default();
        let asking_price = star.wage as i64 * 10;
        let ends_at = Local::now().naive_local() + Duration::days(3);

        for (listing, staff_level) in [
            (MarketListing::auction(star.id, seller, asking_price, ends_at), 0),
            (MarketListing::buy_now(star.id, seller, asking_price), 10),
        ] {
            let settlement = listing.settle(staff_level, &config.commission)?;
            info!(
                "{:?} sale of {}: gross {}, commission {} ({:.1}%), net {}",
                listing.listing_type,
                star,
                settlement.gross,
                settlement.commission,
                settlement.rate_percent(),
                settlement.net
            );
        }
    }

    info!("off-season run finished");

    Ok(())
}

fn load_config() -> color_eyre::Result<LeagueConfig> {
    match env::var("LEAGUE_CONFIG") {
        Ok(path) => {
            let content = fs::read_to_string(&path)
                .wrap_err_with(|| format!("failed to read config file {path}"))?;
            let config = serde_json::from_str(&content)
                .wrap_err_with(|| format!("failed to parse config file {path}"))?;

            info!("config loaded from {}", path);
            Ok(config)
        }
        Err(_) => Ok(LeagueConfig::default()),
    }
}
