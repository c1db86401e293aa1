//! Error types for the Gavel auction engine.
//!
//! All errors use the `GV_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Listing errors
//! - 2xx: Bidding errors
//! - 3xx: Settlement errors
//! - 4xx: Custody / ledger errors
//! - 5xx: Administration errors
//!
//! Every error aborts the single operation that raised it, with no partial
//! effects; nothing is fatal to the engine as a whole.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::{AssetId, PartyId};

/// Central error enum for all Gavel operations.
#[derive(Debug, Error)]
pub enum GavelError {
    // =================================================================
    // Listing Errors (1xx)
    // =================================================================
    /// The asset does not exist in the external asset registry.
    #[error("GV_ERR_100: Asset not found: {0}")]
    AssetNotFound(AssetId),

    /// The caller does not own the asset it is trying to list.
    #[error("GV_ERR_101: {caller} is not the owner of {asset_id}")]
    NotAssetOwner { asset_id: AssetId, caller: PartyId },

    /// The attached fee does not exactly match the configured listing fee.
    #[error("GV_ERR_102: Listing fee mismatch: expected {expected}, attached {attached}")]
    ListingFeeMismatch { expected: Decimal, attached: Decimal },

    /// The requested duration is out of bounds (non-positive or above the
    /// configured maximum).
    #[error("GV_ERR_103: Duration {requested_secs}s out of bounds (max {max_secs}s)")]
    DurationOutOfBounds { requested_secs: i64, max_secs: i64 },

    /// The asset already has an active (not yet ended) auction.
    #[error("GV_ERR_104: Auction already active for {0}")]
    AuctionAlreadyActive(AssetId),

    // =================================================================
    // Bidding Errors (2xx)
    // =================================================================
    /// No auction record exists for the asset.
    #[error("GV_ERR_200: No auction found for {0}")]
    AuctionNotFound(AssetId),

    /// The attached amount does not exceed the current highest bid plus the
    /// minimum increment.
    #[error("GV_ERR_201: Bid {attached} too low: must exceed {must_exceed}")]
    BidTooLow {
        attached: Decimal,
        must_exceed: Decimal,
    },

    /// The auction deadline has passed; bids are no longer accepted.
    #[error("GV_ERR_202: Bidding closed for {asset_id}: deadline was {end_time}")]
    BiddingClosed {
        asset_id: AssetId,
        end_time: DateTime<Utc>,
    },

    // =================================================================
    // Settlement Errors (3xx)
    // =================================================================
    /// The auction deadline has not been reached yet.
    #[error("GV_ERR_300: Auction {asset_id} not expired: deadline is {end_time}")]
    AuctionNotExpired {
        asset_id: AssetId,
        end_time: DateTime<Utc>,
    },

    /// The record is already in the terminal ended state.
    #[error("GV_ERR_301: Auction already ended for {0}")]
    AuctionAlreadyEnded(AssetId),

    /// The caller is not permitted to finalize this auction.
    #[error("GV_ERR_302: {caller} is not authorized to finalize {asset_id}")]
    NotAuthorizedToFinalize { asset_id: AssetId, caller: PartyId },

    /// The external asset registry refused the ownership transfer.
    #[error("GV_ERR_303: Asset transfer failed for {asset_id}: {reason}")]
    AssetTransferFailed { asset_id: AssetId, reason: String },

    // =================================================================
    // Custody / Ledger Errors (4xx)
    // =================================================================
    /// The party has no credited funds to withdraw.
    #[error("GV_ERR_400: Nothing to withdraw for {0}")]
    NothingToWithdraw(PartyId),

    /// The custody conservation invariant does not hold — critical alert.
    #[error("GV_ERR_401: Custody invariant violation: {reason}")]
    CustodyInvariantViolation { reason: String },

    /// Checked amount arithmetic overflowed.
    #[error("GV_ERR_402: Arithmetic overflow in {context}")]
    ArithmeticOverflow { context: &'static str },

    // =================================================================
    // Administration Errors (5xx)
    // =================================================================
    /// The operation is restricted to administrators.
    #[error("GV_ERR_500: {0} is not an administrator")]
    AdministratorOnly(PartyId),

    /// A policy parameter value is invalid (e.g., negative).
    #[error("GV_ERR_501: Invalid parameter: {reason}")]
    InvalidParameter { reason: String },
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, GavelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = GavelError::AuctionNotFound(AssetId(7));
        let msg = format!("{err}");
        assert!(msg.starts_with("GV_ERR_200"), "Got: {msg}");
        assert!(msg.contains("asset:7"));
    }

    #[test]
    fn bid_too_low_display() {
        let err = GavelError::BidTooLow {
            attached: Decimal::new(25, 0),
            must_exceed: Decimal::new(30, 0),
        };
        let msg = format!("{err}");
        assert!(msg.contains("GV_ERR_201"));
        assert!(msg.contains("25"));
        assert!(msg.contains("30"));
    }

    #[test]
    fn all_errors_have_gv_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(GavelError::AssetNotFound(AssetId(1))),
            Box::new(GavelError::AuctionAlreadyActive(AssetId(1))),
            Box::new(GavelError::AuctionAlreadyEnded(AssetId(1))),
            Box::new(GavelError::NothingToWithdraw(PartyId::new())),
            Box::new(GavelError::ArithmeticOverflow { context: "test" }),
            Box::new(GavelError::AdministratorOnly(PartyId::new())),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("GV_ERR_"),
                "Error missing GV_ERR_ prefix: {msg}"
            );
        }
    }
}
