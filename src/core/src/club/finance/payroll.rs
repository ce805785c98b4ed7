use crate::config::ValuationConfig;
use crate::error::Result;
use crate::{Player, Team};
use log::debug;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamPayroll {
    pub team_id: u32,
    pub player_count: usize,
    pub total_wages: u64,
    pub highest_wage: u32,
}

impl TeamPayroll {
    /// Sums the stored wages of the players rostered on `team_id`.
    pub fn from_roster(team_id: u32, players: &[Player]) -> Self {
        players
            .iter()
            .filter(|player| player.team_id == Some(team_id))
            .fold(
                TeamPayroll {
                    team_id,
                    ..TeamPayroll::default()
                },
                |mut payroll, player| {
                    payroll.player_count += 1;
                    payroll.total_wages += player.wage as u64;
                    payroll.highest_wage = payroll.highest_wage.max(player.wage);
                    payroll
                },
            )
    }

    /// Recomputes the wage of every rostered player, then sums them. Wages are
    /// only written once every player has been valued successfully.
    pub fn refresh(team_id: u32, players: &mut [Player], config: &ValuationConfig) -> Result<Self> {
        let wages = players
            .iter()
            .filter(|player| player.team_id == Some(team_id))
            .map(|player| player.calculate_wage(config).map(|wage| (player.id, wage)))
            .collect::<Result<Vec<(u32, u32)>>>()?;

        for player in players.iter_mut() {
            if let Some((_, wage)) = wages.iter().find(|(id, _)| *id == player.id) {
                player.wage = *wage;
            }
        }

        let payroll = Self::from_roster(team_id, players);

        debug!(
            "team: {}, payroll refreshed, players = {}, total = {}",
            team_id, payroll.player_count, payroll.total_wages
        );

        Ok(payroll)
    }

    /// Cash left after paying one payroll cycle.
    pub fn cash_after(&self, team: &Team) -> i64 {
        team.cash - self.total_wages as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::player::skills::PlayerSkills;
    use crate::club::team::Conference;

    fn player(id: u32, team_id: Option<u32>, rating: f32, age: u8) -> Player {
        Player::new(id, format!("P{id}"), team_id, age, 80, PlayerSkills::uniform(rating)).unwrap()
    }

    #[test]
    fn test_refresh_only_touches_rostered_players() {
        let mut players = vec![
            player(1, Some(10), 80.0, 26),
            player(2, Some(10), 70.0, 26),
            player(3, Some(11), 90.0, 26),
            player(4, None, 75.0, 26),
        ];

        let payroll = TeamPayroll::refresh(10, &mut players, &ValuationConfig::default()).unwrap();

        assert_eq!(payroll.player_count, 2);
        assert_eq!(payroll.total_wages, 65_000);
        assert_eq!(payroll.highest_wage, 50_000);
        assert_eq!(players[2].wage, 0);
        assert_eq!(players[3].wage, 0);
    }

    #[test]
    fn test_cash_after_payroll() {
        let mut team = Team::new(10, String::from("Harbor"), Conference::East);
        team.cash = 60_000;

        let mut players = vec![player(1, Some(10), 80.0, 26), player(2, Some(10), 70.0, 26)];
        let payroll = TeamPayroll::refresh(10, &mut players, &ValuationConfig::default()).unwrap();

        assert_eq!(payroll.cash_after(&team), -5_000);
    }

    #[test]
    fn test_refresh_failure_writes_nothing() {
        let mut players = vec![player(1, Some(10), 80.0, 26), player(2, Some(10), 70.0, 26)];
        players[1].skills = PlayerSkills::uniform(f32::NAN);

        assert!(TeamPayroll::refresh(10, &mut players, &ValuationConfig::default()).is_err());
        assert_eq!(players[0].wage, 0);
    }
}
