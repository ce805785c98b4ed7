use crate::config::CommissionConfig;
use crate::error::Result;
use crate::transfers::commission::{CommissionCalculator, TransferSettlement};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingType {
    Auction,
    BuyNow,
}

/// A market listing as stored by the market service. The core only reads it
/// to settle a sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketListing {
    pub player_id: u32,
    pub seller_team_id: u32,
    pub listing_type: ListingType,
    pub current_price: i64,
    pub ends_at: Option<NaiveDateTime>,
}

impl MarketListing {
    pub fn auction(player_id: u32, seller_team_id: u32, current_price: i64, ends_at: NaiveDateTime) -> Self {
        MarketListing {
            player_id,
            seller_team_id,
            listing_type: ListingType::Auction,
            current_price,
            ends_at: Some(ends_at),
        }
    }

    pub fn buy_now(player_id: u32, seller_team_id: u32, price: i64) -> Self {
        MarketListing {
            player_id,
            seller_team_id,
            listing_type: ListingType::BuyNow,
            current_price: price,
            ends_at: None,
        }
    }

    /// Payout split if the listing sells at its current price.
    pub fn settle(&self, staff_level: u8, config: &CommissionConfig) -> Result<TransferSettlement> {
        CommissionCalculator::settle(self.current_price, self.listing_type, staff_level, config)
    }
}
