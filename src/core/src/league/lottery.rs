use crate::club::team::Team;
use crate::config::LotteryConfig;
use crate::error::{LeagueError, Result};
use crate::shared::RandomSource;
use log::{debug, info};
use serde::Serialize;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum LotteryState {
    /// Ticket pool assigned, nothing drawn.
    Built,
    /// Some weighted picks resolved.
    Drawing,
    /// Full order fixed.
    Finalized,
}

impl LotteryState {
    fn name(self) -> &'static str {
        match self {
            LotteryState::Built => "built",
            LotteryState::Drawing => "drawing",
            LotteryState::Finalized => "finalized",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LotteryEntry {
    pub team_id: u32,
    pub tickets: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevealedPick {
    /// 1-based draft position.
    pub pick: usize,
    pub team_id: u32,
    /// Picks still hidden after this one.
    pub remaining: usize,
}

/// Weighted draft lottery. Owned by the caller; independent lotteries share
/// nothing.
#[derive(Debug, Clone)]
pub struct DraftLottery {
    /// Worst record first, with the tickets each team started with.
    entries: Vec<LotteryEntry>,
    /// Entries still in the weighted pool.
    pool: Vec<LotteryEntry>,
    order: Vec<u32>,
    lottery_picks: usize,
    state: LotteryState,
    revealed: usize,
}

impl DraftLottery {
    pub fn build(teams: &[Team], config: &LotteryConfig) -> Self {
        let mut standings: Vec<&Team> = teams.iter().collect();
        standings.sort_by(|a, b| a.cmp_worst_first(b));

        let entries: Vec<LotteryEntry> = standings
            .iter()
            .enumerate()
            .map(|(position, team)| LotteryEntry {
                team_id: team.id,
                tickets: config.tickets_for(position),
            })
            .collect();

        let mut lottery = DraftLottery {
            pool: entries.clone(),
            entries,
            order: Vec::with_capacity(teams.len()),
            lottery_picks: config.lottery_picks.min(teams.len()),
            state: LotteryState::Built,
            revealed: 0,
        };

        // nothing to draw for an empty or single-team league
        if lottery.entries.len() <= 1 || lottery.lottery_picks == 0 {
            lottery.fill_remaining();
        }

        debug!(
            "lottery: built for {} teams, {} tickets, {} weighted picks",
            lottery.entries.len(),
            lottery.total_tickets(),
            lottery.lottery_picks
        );

        lottery
    }

    pub fn state(&self) -> LotteryState {
        self.state
    }

    pub fn entries(&self) -> &[LotteryEntry] {
        &self.entries
    }

    /// Tickets in the pool before any draw.
    pub fn total_tickets(&self) -> u64 {
        self.entries.iter().map(|entry| entry.tickets as u64).sum()
    }

    /// Resolved picks so far, pick 1 first.
    pub fn order(&self) -> &[u32] {
        &self.order
    }

    /// Resolves the next weighted pick. Once the weighted picks are done the
    /// rest of the order is filled in standings order and the lottery is
    /// finalized.
    pub fn draw_next(&mut self, rng: &mut dyn RandomSource) -> Result<u32> {
        if self.state == LotteryState::Finalized {
            return Err(LeagueError::invalid_state(self.state.name(), "draw a pick"));
        }

        let remaining_tickets: u64 = self.pool.iter().map(|entry| entry.tickets as u64).sum();
        let mut ticket = rng.next_below(remaining_tickets);

        let index = self
            .pool
            .iter()
            .position(|entry| {
                if ticket < entry.tickets as u64 {
                    true
                } else {
                    ticket -= entry.tickets as u64;
                    false
                }
            })
            .unwrap_or(self.pool.len() - 1);

        let drawn = self.pool.remove(index);
        self.order.push(drawn.team_id);
        self.state = LotteryState::Drawing;

        info!(
            "lottery: pick {} goes to team {} ({} of {} tickets)",
            self.order.len(),
            drawn.team_id,
            drawn.tickets,
            remaining_tickets
        );

        if self.order.len() >= self.lottery_picks {
            self.fill_remaining();
        }

        Ok(drawn.team_id)
    }

    /// Draws until the order is final and returns it.
    pub fn run(&mut self, rng: &mut dyn RandomSource) -> Result<&[u32]> {
        while self.state != LotteryState::Finalized {
            self.draw_next(rng)?;
        }

        Ok(&self.order)
    }

    /// Exposes the finalized order one pick at a time, last pick first.
    pub fn reveal_next(&mut self) -> Result<RevealedPick> {
        if self.state != LotteryState::Finalized {
            return Err(LeagueError::invalid_state(self.state.name(), "reveal a pick"));
        }

        if self.revealed >= self.order.len() {
            return Err(LeagueError::invalid_state("exhausted", "reveal a pick"));
        }

        let position = self.order.len() - 1 - self.revealed;
        self.revealed += 1;

        Ok(RevealedPick {
            pick: position + 1,
            team_id: self.order[position],
            remaining: position,
        })
    }

    pub fn has_unrevealed(&self) -> bool {
        self.state == LotteryState::Finalized && self.revealed < self.order.len()
    }

    fn fill_remaining(&mut self) {
        // pool keeps standings order, so the leftovers are already worst first
        self.order.extend(self.pool.drain(..).map(|entry| entry.team_id));
        self.state = LotteryState::Finalized;

        debug!("lottery: finalized order {:?}", self.order);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::team::Conference;
    use crate::shared::{FixedSequence, RngSource};

    /// Team `i` has `i` wins, so lower ids have worse records.
    fn standings(count: u32) -> Vec<Team> {
        (1..=count)
            .map(|id| {
                let conference = if id % 2 == 0 { Conference::East } else { Conference::West };
                Team::new(id, format!("Team {id}"), conference).with_record(id as u16, 82 - id as u16)
            })
            .rev()
            .collect()
    }

    #[test]
    fn test_tickets_follow_standings() {
        let lottery = DraftLottery::build(&standings(16), &LotteryConfig::default());

        let ids: Vec<u32> = lottery.entries().iter().map(|e| e.team_id).collect();
        assert_eq!(ids, (1..=16).collect::<Vec<u32>>());

        let tickets: Vec<u32> = lottery.entries().iter().map(|e| e.tickets).collect();
        assert_eq!(
            tickets,
            vec![140, 140, 140, 125, 105, 90, 75, 60, 45, 30, 20, 15, 10, 5, 1, 1]
        );
        assert_eq!(lottery.total_tickets(), 1002);
        assert_eq!(lottery.state(), LotteryState::Built);
    }

    #[test]
    fn test_total_tickets_truncated_for_small_league() {
        let lottery = DraftLottery::build(&standings(5), &LotteryConfig::default());
        assert_eq!(lottery.total_tickets(), 140 + 140 + 140 + 125 + 105);
    }

    #[test]
    fn test_fixed_draws_select_expected_teams() {
        let mut lottery = DraftLottery::build(&standings(16), &LotteryConfig::default());

        // ticket 0 -> team 1; ticket 431 of 862 is past teams 2-4 (405 tickets)
        // and lands on team 5; the last ticket of the pool belongs to team 16;
        // finally ticket 0 -> team 2
        let mut rng = FixedSequence::new(vec![0.0, 0.5, 0.999_999, 0.0]);

        assert_eq!(lottery.draw_next(&mut rng).unwrap(), 1);
        assert_eq!(lottery.state(), LotteryState::Drawing);
        assert_eq!(lottery.draw_next(&mut rng).unwrap(), 5);
        assert_eq!(lottery.draw_next(&mut rng).unwrap(), 16);
        assert_eq!(lottery.draw_next(&mut rng).unwrap(), 2);

        assert_eq!(lottery.state(), LotteryState::Finalized);
        assert_eq!(
            lottery.order(),
            &[1, 5, 16, 2, 3, 4, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]
        );
    }

    #[test]
    fn test_minimum_ticket_team_can_win() {
        let mut lottery = DraftLottery::build(&standings(16), &LotteryConfig::default());
        let mut rng = FixedSequence::repeat(0.999_999);

        assert_eq!(lottery.draw_next(&mut rng).unwrap(), 16);
        assert_eq!(lottery.draw_next(&mut rng).unwrap(), 15);
    }

    #[test]
    fn test_zero_minimum_keeps_every_team_in_the_draw() {
        let config = LotteryConfig {
            min_tickets: 0,
            ..LotteryConfig::default()
        };
        let mut lottery = DraftLottery::build(&standings(16), &config);

        assert!(lottery.entries().iter().all(|entry| entry.tickets >= 1));
        assert_eq!(lottery.total_tickets(), 1002);

        let mut rng = FixedSequence::repeat(0.999_999);
        assert_eq!(lottery.draw_next(&mut rng).unwrap(), 16);
        assert_eq!(lottery.draw_next(&mut rng).unwrap(), 15);
    }

    #[test]
    fn test_run_produces_permutation() {
        let teams = standings(30);
        let mut lottery = DraftLottery::build(&teams, &LotteryConfig::default());

        let mut order = lottery.run(&mut RngSource::seeded(77)).unwrap().to_vec();
        assert_eq!(order.len(), 30);

        // non-lottery slots stay in standings order
        let tail = order[4..].to_vec();
        let mut sorted_tail = tail.clone();
        sorted_tail.sort();
        assert_eq!(tail, sorted_tail);

        order.sort();
        assert_eq!(order, (1..=30).collect::<Vec<u32>>());
    }

    #[test]
    fn test_reveal_walks_from_last_pick() {
        let mut lottery = DraftLottery::build(&standings(6), &LotteryConfig::default());
        let order = lottery.run(&mut RngSource::seeded(3)).unwrap().to_vec();

        for expected_pick in (1..=6).rev() {
            assert!(lottery.has_unrevealed());
            let revealed = lottery.reveal_next().unwrap();
            assert_eq!(revealed.pick, expected_pick);
            assert_eq!(revealed.team_id, order[expected_pick - 1]);
            assert_eq!(revealed.remaining, expected_pick - 1);
        }

        assert!(!lottery.has_unrevealed());
        assert_eq!(
            lottery.reveal_next().unwrap_err(),
            LeagueError::invalid_state("exhausted", "reveal a pick")
        );
        // revealing never changes the order
        assert_eq!(lottery.order(), order.as_slice());
    }

    #[test]
    fn test_reveal_before_finalized_fails() {
        let mut lottery = DraftLottery::build(&standings(6), &LotteryConfig::default());
        assert!(matches!(
            lottery.reveal_next(),
            Err(LeagueError::InvalidState { state: "built", .. })
        ));

        lottery.draw_next(&mut RngSource::seeded(1)).unwrap();
        assert!(matches!(
            lottery.reveal_next(),
            Err(LeagueError::InvalidState { state: "drawing", .. })
        ));
    }

    #[test]
    fn test_draw_after_finalized_fails() {
        let mut lottery = DraftLottery::build(&standings(4), &LotteryConfig::default());
        lottery.run(&mut RngSource::seeded(1)).unwrap();

        assert!(lottery.draw_next(&mut RngSource::seeded(1)).is_err());
        // run is idempotent once final
        assert_eq!(lottery.run(&mut RngSource::seeded(9)).unwrap().len(), 4);
    }

    #[test]
    fn test_empty_league() {
        let mut lottery = DraftLottery::build(&[], &LotteryConfig::default());

        assert_eq!(lottery.state(), LotteryState::Finalized);
        assert!(lottery.order().is_empty());
        assert_eq!(lottery.total_tickets(), 0);
        assert!(lottery.reveal_next().is_err());
    }

    #[test]
    fn test_single_team_league() {
        let mut lottery = DraftLottery::build(&standings(1), &LotteryConfig::default());

        assert_eq!(lottery.state(), LotteryState::Finalized);
        assert_eq!(lottery.order(), &[1]);
        assert_eq!(
            lottery.reveal_next().unwrap(),
            RevealedPick { pick: 1, team_id: 1, remaining: 0 }
        );
    }

    #[test]
    fn test_fewer_teams_than_lottery_picks() {
        let mut lottery = DraftLottery::build(&standings(3), &LotteryConfig::default());
        let order = lottery.run(&mut RngSource::seeded(5)).unwrap().to_vec();

        assert_eq!(order.len(), 3);
        assert_eq!(lottery.state(), LotteryState::Finalized);
    }

    #[test]
    fn test_independent_lotteries() {
        let config = LotteryConfig::default();
        let mut first = DraftLottery::build(&standings(14), &config);
        let mut second = DraftLottery::build(&standings(14), &config);

        first.run(&mut RngSource::seeded(8)).unwrap();
        assert_eq!(second.state(), LotteryState::Built);

        second.run(&mut RngSource::seeded(8)).unwrap();
        assert_eq!(first.order(), second.order());
    }
}
