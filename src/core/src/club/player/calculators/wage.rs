use crate::config::{MAX_RATING, ValuationConfig};
use crate::error::{LeagueError, Result};

pub struct PlayerWageCalculator;

impl PlayerWageCalculator {
    pub fn calculate(rating: u8, potential: u8, age: u8, config: &ValuationConfig) -> Result<u32> {
        if rating > MAX_RATING {
            return Err(LeagueError::invalid_input(
                "rating",
                format!("{rating} exceeds {MAX_RATING}"),
            ));
        }

        if potential > MAX_RATING {
            return Err(LeagueError::invalid_input(
                "potential",
                format!("{potential} exceeds {MAX_RATING}"),
            ));
        }

        // The upside premium vanishes as the gap to potential closes, so take
        // the best figure reachable at or below this rating.
        let base = (0..=rating)
            .map(|r| determine_base_wage(r) + determine_growth_premium(r, potential, age, config))
            .max()
            .unwrap_or(0);

        let wage = (base as f64 * determine_age_multiplier(age, config)).round() as u32;

        Ok(wage.clamp(config.min_wage, config.max_wage))
    }
}

/// Tiered base wage: steeper per-point slope at every higher tier.
fn determine_base_wage(rating: u8) -> u32 {
    let rating = rating as u32;

    match rating {
        r if r >= 95 => 200_000 + (r - 95) * 10_000,
        r if r >= 90 => 130_000 + (r - 90) * 14_000,
        r if r >= 80 => 50_000 + (r - 80) * 8_000,
        r if r >= 70 => 15_000 + (r - 70) * 3_500,
        r => 3_000 + r.saturating_sub(60) * 1_200,
    }
}

/// Young players are paid for their ceiling as well as their current level.
fn determine_growth_premium(rating: u8, potential: u8, age: u8, config: &ValuationConfig) -> u32 {
    if age >= config.premium_age_limit {
        return 0;
    }

    let mut premium = match potential {
        p if p >= 95 => 40_000,
        p if p >= 88 => 15_000,
        _ => 0,
    };

    if potential.saturating_sub(rating) > 15 {
        premium += 5_000;
    }

    premium
}

fn determine_age_multiplier(age: u8, config: &ValuationConfig) -> f64 {
    match age {
        a if a <= config.rookie_age => config.rookie_multiplier,
        a if (config.peak_age_start..=config.peak_age_end).contains(&a) => config.peak_multiplier,
        a if a > config.veteran_age => config.veteran_multiplier,
        _ => 1.0,
    }
}
