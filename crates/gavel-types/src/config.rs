//! Configuration for the auction house: global fee parameters and the
//! finalize-authorization policy.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{PartyId, constants};

/// Who may finalize an expired auction.
///
/// Deployments disagree on this actor set, so it is an explicit policy knob
/// rather than hardcoded behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FinalizeAuthority {
    /// The seller of the auction or any administrator.
    #[default]
    SellerOrAdministrator,
    /// Administrators only.
    AdministratorOnly,
    /// Any caller, once the deadline has passed.
    Anyone,
}

impl std::fmt::Display for FinalizeAuthority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SellerOrAdministrator => write!(f, "SELLER_OR_ADMINISTRATOR"),
            Self::AdministratorOnly => write!(f, "ADMINISTRATOR_ONLY"),
            Self::Anyone => write!(f, "ANYONE"),
        }
    }
}

/// Global house parameters. Two of these (`listing_fee`,
/// `min_bid_increment`) are mutable at runtime through the guarded
/// administrator setters; the rest are fixed at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HousePolicy {
    /// Fee charged when listing an asset, in minor units. Must be attached
    /// exactly; refunded to the seller only on the no-bid path.
    pub listing_fee: Decimal,
    /// The amount a new bid must exceed the current highest bid by,
    /// strictly.
    pub min_bid_increment: Decimal,
    /// Percentage of the winning bid routed to the platform beneficiary.
    pub royalty_rate_pct: u32,
    /// Upper bound on listing duration, in seconds.
    pub max_duration_secs: i64,
    /// The platform beneficiary credited with royalties.
    pub beneficiary: PartyId,
    /// Who may finalize an expired auction.
    pub finalize_authority: FinalizeAuthority,
}

impl HousePolicy {
    /// Default parameters with the given beneficiary.
    #[must_use]
    pub fn new(beneficiary: PartyId) -> Self {
        Self {
            listing_fee: Decimal::new(constants::DEFAULT_LISTING_FEE, 0),
            min_bid_increment: Decimal::new(constants::DEFAULT_MIN_BID_INCREMENT, 0),
            royalty_rate_pct: constants::DEFAULT_ROYALTY_RATE_PCT,
            max_duration_secs: constants::MAX_AUCTION_DURATION_SECS,
            beneficiary,
            finalize_authority: FinalizeAuthority::default(),
        }
    }
}
