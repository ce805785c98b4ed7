use crate::club::player::calculators::PlayerWageCalculator;
use crate::club::player::skills::PlayerSkills;
use crate::config::{MAX_RATING, ValuationConfig};
use crate::error::{LeagueError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    /// `None` for free agents and draft prospects.
    pub team_id: Option<u32>,
    pub age: u8,
    /// Growth ceiling on the 0..=100 scale, fixed at creation.
    potential: u8,
    pub skills: PlayerSkills,
    pub wage: u32,
}

impl Player {
    pub fn new(
        id: u32,
        name: String,
        team_id: Option<u32>,
        age: u8,
        potential: u8,
        skills: PlayerSkills,
    ) -> Result<Self> {
        if potential > MAX_RATING {
            return Err(LeagueError::invalid_input(
                "potential",
                format!("{potential} exceeds {MAX_RATING}"),
            ));
        }

        Ok(Player {
            id,
            name,
            team_id,
            age,
            potential,
            skills,
            wage: 0,
        })
    }

    pub fn potential(&self) -> u8 {
        self.potential
    }

    pub fn is_free_agent(&self) -> bool {
        self.team_id.is_none()
    }

    pub fn overall(&self) -> Result<u8> {
        self.skills.overall()
    }

    pub fn calculate_wage(&self, config: &ValuationConfig) -> Result<u32> {
        PlayerWageCalculator::calculate(self.overall()?, self.potential, self.age, config)
    }

    /// Recomputes the stored wage. On failure the previous wage is kept.
    pub fn refresh_wage(&mut self, config: &ValuationConfig) -> Result<u32> {
        self.wage = self.calculate_wage(config)?;
        Ok(self.wage)
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
