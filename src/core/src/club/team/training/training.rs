use crate::club::player::skills::SkillType;
use crate::club::player::training::{PlayerTraining, PlayerTrainingResult};
use crate::config::LeagueConfig;
use crate::error::Result;
use crate::shared::RngSource;
use crate::{Player, Team};
use chrono::Weekday;
use log::{debug, info};
use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, IntoParallelRefMutIterator, ParallelIterator};
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingFocus {
    Shooting,
    Playmaking,
    Defense,
    Rebounding,
    Conditioning,
    Rest,
}

impl TrainingFocus {
    pub const ALL: [TrainingFocus; 6] = [
        TrainingFocus::Shooting,
        TrainingFocus::Playmaking,
        TrainingFocus::Defense,
        TrainingFocus::Rebounding,
        TrainingFocus::Conditioning,
        TrainingFocus::Rest,
    ];

    /// Skills that receive a growth increment under this focus.
    pub const fn skills(self) -> &'static [SkillType] {
        match self {
            TrainingFocus::Shooting => &[SkillType::Shooting, SkillType::ThreePoint, SkillType::FreeThrow],
            TrainingFocus::Playmaking => &[SkillType::Passing, SkillType::BallHandling],
            TrainingFocus::Defense => &[SkillType::PerimeterDefense, SkillType::InteriorDefense],
            TrainingFocus::Rebounding => &[SkillType::Rebounding],
            TrainingFocus::Conditioning => &[SkillType::Athleticism, SkillType::Stamina],
            TrainingFocus::Rest => &[],
        }
    }
}

pub struct TeamTraining;

impl TeamTraining {
    /// Runs the team's session for `day`, if it has one.
    pub fn train_day(
        team: &Team,
        players: &mut [Player],
        day: Weekday,
        config: &LeagueConfig,
        seed: u64,
    ) -> Result<Vec<PlayerTrainingResult>> {
        match team.training_focus(day) {
            Some(focus) => Self::run_session(players, focus, config, seed),
            None => {
                debug!("team: {}, no training on {}", team.name, day);
                Ok(Vec::new())
            }
        }
    }

    /// Trains every player in parallel. Each player draws from its own
    /// generator seeded from `seed` and the player id, so the outcome does not
    /// depend on thread scheduling. Either every player is updated or none is.
    pub fn run_session(
        players: &mut [Player],
        focus: TrainingFocus,
        config: &LeagueConfig,
        seed: u64,
    ) -> Result<Vec<PlayerTrainingResult>> {
        let results = players
            .par_iter()
            .map(|player| {
                let mut rng = RngSource::seeded(player_seed(seed, player.id));
                PlayerTraining::train(player, focus, &config.development, config.skill_cap, &mut rng)
            })
            .collect::<Result<Vec<PlayerTrainingResult>>>()?;

        players
            .par_iter_mut()
            .zip(results.par_iter())
            .try_for_each(|(player, result)| result.apply(player))?;

        info!(
            "training: {:?} session for {} players, total gain = {:.2}",
            focus,
            results.len(),
            results.iter().map(PlayerTrainingResult::total_gain).sum::<f32>()
        );

        Ok(results)
    }
}

fn player_seed(seed: u64, player_id: u32) -> u64 {
    seed ^ (player_id as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
