use crate::club::team::{Conference, Team};
use crate::error::{LeagueError, Result};
use crate::shared::{RandomSource, SourceRng};
use itertools::Itertools;
use log::{debug, info};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FixtureType {
    League,
    Cup,
    Friendly,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fixture {
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub fixture_type: FixtureType,
}

impl Fixture {
    pub fn new(home_team_id: u32, away_team_id: u32, fixture_type: FixtureType) -> Result<Self> {
        if home_team_id == away_team_id {
            return Err(LeagueError::invalid_input(
                "team_id",
                format!("team {home_team_id} cannot play itself"),
            ));
        }

        Ok(Fixture {
            home_team_id,
            away_team_id,
            fixture_type,
        })
    }

    fn league(home_team_id: u32, away_team_id: u32) -> Self {
        Fixture {
            home_team_id,
            away_team_id,
            fixture_type: FixtureType::League,
        }
    }

    pub fn involves(&self, team_id: u32) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }
}

pub struct ScheduleGenerator;

impl ScheduleGenerator {
    /// Builds the season's league fixtures: a home-and-away round robin inside
    /// each conference plus one game against every team of the other
    /// conference. The returned order is shuffled; no dates are assigned.
    pub fn generate(teams: &[Team], rng: &mut dyn RandomSource) -> Result<Vec<Fixture>> {
        let mut seen = HashSet::with_capacity(teams.len());
        if let Some(duplicate) = teams.iter().find(|team| !seen.insert(team.id)) {
            return Err(LeagueError::invalid_input(
                "team_id",
                format!("team {} appears more than once", duplicate.id),
            ));
        }

        let west = Self::conference_ids(teams, Conference::West);
        let east = Self::conference_ids(teams, Conference::East);

        let mut fixtures = Vec::with_capacity(
            west.len() * west.len().saturating_sub(1)
                + east.len() * east.len().saturating_sub(1)
                + west.len() * east.len(),
        );

        fixtures.extend(Self::conference_round_robin(&west));
        fixtures.extend(Self::conference_round_robin(&east));
        fixtures.extend(Self::cross_conference(&west, &east));

        fixtures.shuffle(&mut SourceRng(rng));

        info!(
            "schedule: generated {} fixtures (west = {}, east = {})",
            fixtures.len(),
            west.len(),
            east.len()
        );

        Ok(fixtures)
    }

    fn conference_ids(teams: &[Team], conference: Conference) -> Vec<u32> {
        teams
            .iter()
            .filter(|team| team.conference() == conference)
            .map(|team| team.id)
            .collect()
    }

    /// Every pair twice, once at each venue.
    fn conference_round_robin(team_ids: &[u32]) -> Vec<Fixture> {
        team_ids
            .iter()
            .tuple_combinations()
            .flat_map(|(&first, &second)| [Fixture::league(first, second), Fixture::league(second, first)])
            .collect()
    }

    /// Every west/east pair once. Hosting alternates with the parity of the two
    /// conference indexes, so each team hosts half of its cross-conference
    /// games, rounded either way.
    fn cross_conference(west: &[u32], east: &[u32]) -> Vec<Fixture> {
        let fixtures: Vec<Fixture> = west
            .iter()
            .enumerate()
            .cartesian_product(east.iter().enumerate())
            .map(|((west_index, &west_id), (east_index, &east_id))| {
                if (west_index + east_index) % 2 == 0 {
                    Fixture::league(west_id, east_id)
                } else {
                    Fixture::league(east_id, west_id)
                }
            })
            .collect();

        debug!("schedule: {} cross-conference fixtures", fixtures.len());

        fixtures
    }
}
