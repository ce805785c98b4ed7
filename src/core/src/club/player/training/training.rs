use crate::club::player::training::result::{PlayerTrainingResult, SkillGain};
use crate::club::team::TrainingFocus;
use crate::config::{DevelopmentConfig, MAX_RATING};
use crate::error::{LeagueError, Result};
use crate::shared::RandomSource;
use crate::Player;
use log::debug;

pub struct PlayerTraining;

impl PlayerTraining {
    /// Computes the gains for every skill the focus targets. Nothing is written
    /// to the player until the returned result is applied.
    pub fn train(
        player: &Player,
        focus: TrainingFocus,
        config: &DevelopmentConfig,
        cap: f32,
        rng: &mut dyn RandomSource,
    ) -> Result<PlayerTrainingResult> {
        if focus.skills().is_empty() {
            return Ok(PlayerTrainingResult::empty(player.id));
        }

        let mut gains = Vec::with_capacity(focus.skills().len());

        for &skill in focus.skills() {
            let before = player.skills.get(skill);
            let after = Self::develop_skill(before, player.age, player.potential(), config, cap, rng)?;

            gains.push(SkillGain { skill, before, after });
        }

        debug!(
            "player: {}, training: {:?}, gains = {:?}",
            player.id, focus, gains
        );

        Ok(PlayerTrainingResult::new(player.id, focus, gains))
    }

    /// Advances one skill value. The result is never below `current` and
    /// never above `cap`.
    pub fn develop_skill(
        current: f32,
        age: u8,
        potential: u8,
        config: &DevelopmentConfig,
        cap: f32,
        rng: &mut dyn RandomSource,
    ) -> Result<f32> {
        if !current.is_finite() || current < 0.0 || current > cap {
            return Err(LeagueError::invalid_input(
                "skill",
                format!("{current} outside 0..={cap}"),
            ));
        }

        if potential > MAX_RATING {
            return Err(LeagueError::invalid_input(
                "potential",
                format!("{potential} exceeds {MAX_RATING}"),
            ));
        }

        let draw = config.min_growth as f64
            + rng.next_f64() * (config.max_growth - config.min_growth) as f64;

        let increment = draw as f32 * (potential as f32 / 100.0) * age_development_factor(age, config);

        Ok((current + increment.max(0.0)).min(cap))
    }
}

fn age_development_factor(age: u8, config: &DevelopmentConfig) -> f32 {
    match age {
        a if a < config.junior_age => config.junior_multiplier,
        a if a < config.veteran_age => config.prime_multiplier,
        a if a < config.late_veteran_age => config.veteran_multiplier,
        _ => config.late_veteran_multiplier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::player::skills::{PlayerSkills, SkillType};
    use crate::config::SKILL_CAP;
    use crate::shared::{FixedSequence, RngSource};

    fn develop(current: f32, age: u8, potential: u8, draw: f64) -> f32 {
        PlayerTraining::develop_skill(
            current,
            age,
            potential,
            &DevelopmentConfig::default(),
            SKILL_CAP,
            &mut FixedSequence::repeat(draw),
        )
        .unwrap()
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_age_bands() {
        let config = DevelopmentConfig::default();
        assert_eq!(age_development_factor(19, &config), 1.6);
        assert_eq!(age_development_factor(21, &config), 1.6);
        assert_eq!(age_development_factor(22, &config), 1.0);
        assert_eq!(age_development_factor(29, &config), 1.0);
        assert_eq!(age_development_factor(30, &config), 0.35);
        assert_eq!(age_development_factor(32, &config), 0.35);
        assert_eq!(age_development_factor(33, &config), 0.05);
        assert_eq!(age_development_factor(40, &config), 0.05);
    }

    #[test]
    fn test_exact_growth_with_fixed_draws() {
        // draw 0.5 -> 0.25 + 0.5 * 1.0 = 0.75
        assert_close(develop(50.0, 20, 100, 0.5), 50.0 + 0.75 * 1.6);
        assert_close(develop(50.0, 25, 80, 0.5), 50.0 + 0.75 * 0.8);
        assert_close(develop(50.0, 31, 100, 0.0), 50.0 + 0.25 * 0.35);
        assert_close(develop(50.0, 35, 100, 0.0), 50.0 + 0.25 * 0.05);
    }

    #[test]
    fn test_growth_is_capped() {
        assert_eq!(develop(98.9, 19, 100, 0.99), SKILL_CAP);
        assert_eq!(develop(SKILL_CAP, 19, 100, 0.99), SKILL_CAP);
    }

    #[test]
    fn test_zero_potential_never_grows() {
        assert_eq!(develop(40.0, 19, 0, 0.99), 40.0);
    }

    #[test]
    fn test_never_decreases() {
        let mut rng = RngSource::seeded(11);
        let config = DevelopmentConfig::default();

        for age in 16..45 {
            for potential in [0, 30, 60, 90, 100] {
                for current in [0.0, 12.5, 50.0, 87.3, 98.99, SKILL_CAP] {
                    let after = PlayerTraining::develop_skill(
                        current, age, potential, &config, SKILL_CAP, &mut rng,
                    )
                    .unwrap();
                    assert!(after >= current);
                    assert!(after <= SKILL_CAP);
                }
            }
        }
    }

    #[test]
    fn test_rejects_invalid_current_value() {
        let config = DevelopmentConfig::default();
        let mut rng = FixedSequence::repeat(0.5);

        for current in [-0.1, f32::NAN, 99.5] {
            let err = PlayerTraining::develop_skill(current, 20, 80, &config, SKILL_CAP, &mut rng)
                .unwrap_err();
            assert_eq!(err.field(), Some("skill"));
        }

        let err = PlayerTraining::develop_skill(50.0, 20, 101, &config, SKILL_CAP, &mut rng)
            .unwrap_err();
        assert_eq!(err.field(), Some("potential"));
    }

    #[test]
    fn test_train_uses_one_draw_per_targeted_skill() {
        let player = Player::new(
            3,
            String::from("Lee"),
            Some(1),
            24,
            100,
            PlayerSkills::uniform(60.0),
        )
        .unwrap();

        let mut rng = FixedSequence::new(vec![0.0, 0.5, 1.0]);
        let result = PlayerTraining::train(
            &player,
            TrainingFocus::Shooting,
            &DevelopmentConfig::default(),
            SKILL_CAP,
            &mut rng,
        )
        .unwrap();

        assert_eq!(rng.draws(), 3);
        assert_eq!(result.gains.len(), 3);
        assert_eq!(result.gains[0].skill, SkillType::Shooting);
        assert_close(result.gains[0].after, 60.25);
        assert_close(result.gains[1].after, 60.75);
        assert!(result.gains[2].after > 61.2);

        // the player itself is untouched until the result is applied
        assert_eq!(player.skills.get(SkillType::Shooting), 60.0);
    }

    #[test]
    fn test_rest_focus_draws_nothing() {
        let player = Player::new(4, String::from("Ray"), None, 20, 90, PlayerSkills::uniform(40.0)).unwrap();
        let mut rng = FixedSequence::repeat(0.5);

        let result = PlayerTraining::train(
            &player,
            TrainingFocus::Rest,
            &DevelopmentConfig::default(),
            SKILL_CAP,
            &mut rng,
        )
        .unwrap();

        assert_eq!(result, PlayerTrainingResult::empty(4));
        assert_eq!(result.total_gain(), 0.0);
        assert_eq!(rng.draws(), 0);
    }
}
