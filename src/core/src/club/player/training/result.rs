use crate::club::player::skills::SkillType;
use crate::club::team::TrainingFocus;
use crate::error::{LeagueError, Result};
use crate::Player;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SkillGain {
    pub skill: SkillType,
    pub before: f32,
    pub after: f32,
}

impl SkillGain {
    pub fn delta(&self) -> f32 {
        self.after - self.before
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerTrainingResult {
    pub player_id: u32,
    pub focus: TrainingFocus,
    pub gains: Vec<SkillGain>,
}

impl PlayerTrainingResult {
    pub fn new(player_id: u32, focus: TrainingFocus, gains: Vec<SkillGain>) -> Self {
        PlayerTrainingResult {
            player_id,
            focus,
            gains,
        }
    }

    pub fn empty(player_id: u32) -> Self {
        PlayerTrainingResult::new(player_id, TrainingFocus::Rest, Vec::new())
    }

    pub fn total_gain(&self) -> f32 {
        self.gains.iter().map(SkillGain::delta).sum()
    }

    /// Writes every gain to the player in one step. A result computed for a
    /// different player is rejected before anything is written.
    pub fn apply(&self, player: &mut Player) -> Result<()> {
        if player.id != self.player_id {
            return Err(LeagueError::invalid_input(
                "player_id",
                format!(
                    "training result for {} applied to {}",
                    self.player_id, player.id
                ),
            ));
        }

        let mut skills = player.skills;
        for gain in &self.gains {
            skills.set(gain.skill, gain.after);
        }
        player.skills = skills;

        Ok(())
    }
}
