use crate::config::CommissionConfig;
use crate::error::{LeagueError, Result};
use crate::transfers::market::ListingType;
use log::debug;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransferSettlement {
    pub gross: i64,
    pub commission: i64,
    pub net: i64,
    pub rate_bp: u32,
}

impl TransferSettlement {
    /// Effective commission rate as a percentage, for display.
    pub fn rate_percent(&self) -> f64 {
        self.rate_bp as f64 / 100.0
    }
}

pub struct CommissionCalculator;

impl CommissionCalculator {
    /// Commission rate in basis points. Staff levels past the maximum count
    /// as the maximum; the rate never drops below the configured floor.
    pub fn rate_bp(listing_type: ListingType, staff_level: u8, config: &CommissionConfig) -> u32 {
        let base = match listing_type {
            ListingType::Auction => config.auction_rate_bp,
            ListingType::BuyNow => config.buy_now_rate_bp,
        };

        let reduction = staff_level.min(config.max_staff_level) as u32 * config.staff_level_reduction_bp;

        base.saturating_sub(reduction).max(config.min_rate_bp)
    }

    pub fn settle(
        gross: i64,
        listing_type: ListingType,
        staff_level: u8,
        config: &CommissionConfig,
    ) -> Result<TransferSettlement> {
        if gross < 0 {
            return Err(LeagueError::invalid_input(
                "amount",
                format!("sale amount {gross} is negative"),
            ));
        }

        let rate_bp = Self::rate_bp(listing_type, staff_level, config);
        let commission = (gross as i128 * rate_bp as i128 / 10_000) as i64;

        debug!(
            "market: settle {:?} sale, gross = {}, rate = {}bp, commission = {}",
            listing_type, gross, rate_bp, commission
        );

        Ok(TransferSettlement {
            gross,
            commission,
            net: gross - commission,
            rate_bp,
        })
    }
}
