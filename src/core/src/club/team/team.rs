use crate::club::team::training::{TrainingFocus, TrainingSchedule};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Conference {
    East,
    West,
}

impl Display for Conference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Conference::East => write!(f, "East"),
            Conference::West => write!(f, "West"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    conference: Conference,
    pub wins: u16,
    pub losses: u16,
    pub cash: i64,
    pub ticket_price: u32,
    pub training_schedule: TrainingSchedule,
}

impl Team {
    pub fn new(id: u32, name: String, conference: Conference) -> Self {
        Team {
            id,
            name,
            conference,
            wins: 0,
            losses: 0,
            cash: 0,
            ticket_price: 0,
            training_schedule: TrainingSchedule::default(),
        }
    }

    pub fn with_record(mut self, wins: u16, losses: u16) -> Self {
        self.wins = wins;
        self.losses = losses;
        self
    }

    pub fn with_training(mut self, schedule: TrainingSchedule) -> Self {
        self.training_schedule = schedule;
        self
    }

    /// Fixed for the whole season; only the roster provider may reassign it.
    pub fn conference(&self) -> Conference {
        self.conference
    }

    pub fn games_played(&self) -> u32 {
        self.wins as u32 + self.losses as u32
    }

    /// Teams that have not played yet count as 0.000.
    pub fn win_percentage(&self) -> f64 {
        match self.games_played() {
            0 => 0.0,
            played => self.wins as f64 / played as f64,
        }
    }

    pub fn training_focus(&self, day: chrono::Weekday) -> Option<TrainingFocus> {
        self.training_schedule.focus_on(day)
    }

    /// Worst record first: lower win percentage, then more losses, then lower id.
    pub fn cmp_worst_first(&self, other: &Team) -> Ordering {
        self.win_percentage()
            .total_cmp(&other.win_percentage())
            .then_with(|| other.losses.cmp(&self.losses))
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}-{})", self.name, self.wins, self.losses)
    }
}
