pub mod club;
pub mod config;
pub mod error;
pub mod league;
pub mod shared;
pub mod transfers;

pub use club::{
    // Player exports
    Player, PlayerSkills, SkillType, PlayerWageCalculator,
    PlayerTraining, PlayerTrainingResult, SkillGain,
    // Team exports
    Team, Conference, TeamTraining, TrainingFocus, TrainingSchedule,
    // Finance exports
    TeamPayroll,
};

pub use config::LeagueConfig;
pub use error::{LeagueError, Result};

pub use league::{
    DraftLottery, LotteryEntry, LotteryState, RevealedPick,
    Fixture, FixtureType, ScheduleGenerator,
};

pub use shared::{FixedSequence, RandomSource, RngSource};

pub use transfers::{CommissionCalculator, ListingType, MarketListing, TransferSettlement};
