use serde::{Deserialize, Serialize};

pub const SKILL_CAP: f32 = 99.0;
pub const MAX_RATING: u8 = 100;

pub const MIN_WAGE: u32 = 2_000;
pub const MAX_WAGE: u32 = 250_000;

pub const ROOKIE_AGE: u8 = 23;
pub const PREMIUM_AGE_LIMIT: u8 = 25;
pub const PEAK_AGE_START: u8 = 27;
pub const PEAK_AGE_END: u8 = 30;
pub const VETERAN_AGE: u8 = 32;

pub const AUCTION_BASE_RATE_BP: u32 = 700;
pub const BUY_NOW_BASE_RATE_BP: u32 = 1_000;
pub const STAFF_LEVEL_REDUCTION_BP: u32 = 50;
pub const MIN_COMMISSION_RATE_BP: u32 = 100;
pub const MAX_STAFF_LEVEL: u8 = 10;

pub const JUNIOR_AGE: u8 = 22;
pub const DEVELOPMENT_VETERAN_AGE: u8 = 30;
pub const LATE_VETERAN_AGE: u8 = 33;

pub const LOTTERY_WEIGHTS: [u32; 14] = [140, 140, 140, 125, 105, 90, 75, 60, 45, 30, 20, 15, 10, 5];
pub const LOTTERY_PICKS: usize = 4;

/// Every tunable of the simulation core. Missing fields in a loaded document
/// fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueConfig {
    pub skill_cap: f32,
    pub valuation: ValuationConfig,
    pub commission: CommissionConfig,
    pub development: DevelopmentConfig,
    pub lottery: LotteryConfig,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        LeagueConfig {
            skill_cap: SKILL_CAP,
            valuation: ValuationConfig::default(),
            commission: CommissionConfig::default(),
            development: DevelopmentConfig::default(),
            lottery: LotteryConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationConfig {
    pub min_wage: u32,
    pub max_wage: u32,
    /// Players at or below this age get the rookie discount.
    pub rookie_age: u8,
    /// Growth premiums only apply strictly below this age.
    pub premium_age_limit: u8,
    pub peak_age_start: u8,
    pub peak_age_end: u8,
    /// Players strictly above this age get the veteran discount.
    pub veteran_age: u8,
    pub rookie_multiplier: f64,
    pub peak_multiplier: f64,
    pub veteran_multiplier: f64,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        ValuationConfig {
            min_wage: MIN_WAGE,
            max_wage: MAX_WAGE,
            rookie_age: ROOKIE_AGE,
            premium_age_limit: PREMIUM_AGE_LIMIT,
            peak_age_start: PEAK_AGE_START,
            peak_age_end: PEAK_AGE_END,
            veteran_age: VETERAN_AGE,
            rookie_multiplier: 0.45,
            peak_multiplier: 1.25,
            veteran_multiplier: 0.8,
        }
    }
}

/// Rates are in basis points (1/100 of a percent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommissionConfig {
    pub auction_rate_bp: u32,
    pub buy_now_rate_bp: u32,
    pub staff_level_reduction_bp: u32,
    pub min_rate_bp: u32,
    pub max_staff_level: u8,
}

impl Default for CommissionConfig {
    fn default() -> Self {
        CommissionConfig {
            auction_rate_bp: AUCTION_BASE_RATE_BP,
            buy_now_rate_bp: BUY_NOW_BASE_RATE_BP,
            staff_level_reduction_bp: STAFF_LEVEL_REDUCTION_BP,
            min_rate_bp: MIN_COMMISSION_RATE_BP,
            max_staff_level: MAX_STAFF_LEVEL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevelopmentConfig {
    pub min_growth: f32,
    pub max_growth: f32,
    pub junior_age: u8,
    pub veteran_age: u8,
    pub late_veteran_age: u8,
    pub junior_multiplier: f32,
    pub prime_multiplier: f32,
    pub veteran_multiplier: f32,
    pub late_veteran_multiplier: f32,
}

impl Default for DevelopmentConfig {
    fn default() -> Self {
        DevelopmentConfig {
            min_growth: 0.25,
            max_growth: 1.25,
            junior_age: JUNIOR_AGE,
            veteran_age: DEVELOPMENT_VETERAN_AGE,
            late_veteran_age: LATE_VETERAN_AGE,
            junior_multiplier: 1.6,
            prime_multiplier: 1.0,
            veteran_multiplier: 0.35,
            late_veteran_multiplier: 0.05,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LotteryConfig {
    /// Tickets by standings position, worst record first.
    pub weights: Vec<u32>,
    /// Tickets for every team past the end of `weights`.
    pub min_tickets: u32,
    /// Number of slots resolved by weighted draw.
    pub lottery_picks: usize,
}

impl Default for LotteryConfig {
    fn default() -> Self {
        LotteryConfig {
            weights: LOTTERY_WEIGHTS.to_vec(),
            min_tickets: 1,
            lottery_picks: LOTTERY_PICKS,
        }
    }
}

impl LotteryConfig {
    /// Never below one, so every team keeps a chance at the draw.
    pub fn tickets_for(&self, position: usize) -> u32 {
        let floor = self.min_tickets.max(1);

        self.weights
            .get(position)
            .copied()
            .unwrap_or(floor)
            .max(floor)
    }
}
