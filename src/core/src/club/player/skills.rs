use crate::config::MAX_RATING;
use crate::error::{LeagueError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillType {
    Shooting,
    ThreePoint,
    FreeThrow,
    Passing,
    BallHandling,
    Rebounding,
    PerimeterDefense,
    InteriorDefense,
    Athleticism,
    Stamina,
}

impl SkillType {
    pub const COUNT: usize = 10;

    pub const ALL: [SkillType; SkillType::COUNT] = [
        SkillType::Shooting,
        SkillType::ThreePoint,
        SkillType::FreeThrow,
        SkillType::Passing,
        SkillType::BallHandling,
        SkillType::Rebounding,
        SkillType::PerimeterDefense,
        SkillType::InteriorDefense,
        SkillType::Athleticism,
        SkillType::Stamina,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Per-skill ratings on a 0..=cap scale, kept fractional so training can
/// accumulate small gains.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerSkills {
    values: [f32; SkillType::COUNT],
}

impl PlayerSkills {
    pub fn uniform(value: f32) -> Self {
        PlayerSkills {
            values: [value; SkillType::COUNT],
        }
    }

    pub fn get(&self, skill: SkillType) -> f32 {
        self.values[skill.index()]
    }

    pub fn set(&mut self, skill: SkillType, value: f32) {
        self.values[skill.index()] = value;
    }

    pub fn with(mut self, skill: SkillType, value: f32) -> Self {
        self.set(skill, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (SkillType, f32)> + '_ {
        SkillType::ALL
            .into_iter()
            .map(move |skill| (skill, self.get(skill)))
    }

    pub fn average(&self) -> f32 {
        self.values.iter().sum::<f32>() / SkillType::COUNT as f32
    }

    /// Overall rating on the 0..=100 integer scale used by the valuation model.
    pub fn overall(&self) -> Result<u8> {
        let average = self.average();

        if !average.is_finite() || average < 0.0 {
            return Err(LeagueError::invalid_input(
                "skills",
                format!("average rating {average} is not a valid rating"),
            ));
        }

        Ok(average.round().min(MAX_RATING as f32) as u8)
    }

    /// Checks every rating lies within `0..=cap`.
    pub fn validate(&self, cap: f32) -> Result<()> {
        for (skill, value) in self.iter() {
            if !value.is_finite() || !(0.0..=cap).contains(&value) {
                return Err(LeagueError::invalid_input(
                    "skills",
                    format!("{skill:?} rating {value} outside 0..={cap}"),
                ));
            }
        }

        Ok(())
    }
}
