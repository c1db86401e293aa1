//! Bid submission: guards first, then an infallible commit.
//!
//! A bid must *strictly* exceed the current highest bid plus the minimum
//! increment — matching the bound exactly is rejected, so a bidder can
//! never tie the leader. On acceptance the record is updated first, the
//! attached amount enters custody, and the displaced bidder's escrow is
//! credited back in full through the pull ledger. No payment is ever pushed
//! mid-operation, so there is no window in which an outside party can
//! observe intermediate state.
//!
//! Every guard failure returns before any mutation: the record, the ledger,
//! and the caller's attached funds are all left exactly as they were.

use chrono::{DateTime, Utc};
use gavel_types::{AssetId, AuctionEvent, GavelError, HousePolicy, PartyId, Result};
use rust_decimal::Decimal;

use gavel_registry::{AuctionStore, CustodyLedger};

/// Submit a bid of `attached` minor units on `asset_id`.
///
/// Guards, in order: the record exists; it is not ended; the deadline has
/// not passed; `attached > highest_bid + min_bid_increment`. Custody
/// pre-flight checks then make the commit stage infallible, so a rejected
/// bid can never strand the caller's attached funds.
///
/// The record's reserve price is not consulted; it is advisory.
///
/// # Errors
/// - [`GavelError::AuctionNotFound`] — never listed, or slot replaced
/// - [`GavelError::AuctionAlreadyEnded`] — record is terminal
/// - [`GavelError::BiddingClosed`] — `now` is at or past the deadline
/// - [`GavelError::BidTooLow`] — the strict increment rule failed
pub fn place_bid(
    store: &mut AuctionStore,
    ledger: &mut CustodyLedger,
    policy: &HousePolicy,
    asset_id: AssetId,
    caller: PartyId,
    attached: Decimal,
    now: DateTime<Utc>,
) -> Result<AuctionEvent> {
    let auction = store
        .get_mut(asset_id)
        .ok_or(GavelError::AuctionNotFound(asset_id))?;

    if auction.ended {
        return Err(GavelError::AuctionAlreadyEnded(asset_id));
    }
    if now >= auction.end_time {
        return Err(GavelError::BiddingClosed {
            asset_id,
            end_time: auction.end_time,
        });
    }
    let must_exceed = auction
        .highest_bid
        .checked_add(policy.min_bid_increment)
        .ok_or(GavelError::ArithmeticOverflow {
            context: "bid increment bound",
        })?;
    if attached <= must_exceed {
        return Err(GavelError::BidTooLow {
            attached,
            must_exceed,
        });
    }

    // Pre-flight the custody arithmetic so the commit below cannot fail.
    ledger.ensure_depositable(attached)?;
    if let Some(prev) = auction.highest_bidder {
        ledger.ensure_creditable(prev, auction.highest_bid)?;
    }

    // Commit: record first, then custody, then the displacement credit.
    let displaced = auction.record_bid(asset_id, caller, attached)?;
    ledger.deposit(attached)?;
    if let Some((prev_bidder, prev_amount)) = displaced {
        ledger.credit(prev_bidder, prev_amount)?;
        tracing::debug!(
            %asset_id,
            displaced = %prev_bidder,
            refund = %prev_amount,
            "previous escrow credited back"
        );
    }
    tracing::debug!(%asset_id, bidder = %caller, amount = %attached, "bid accepted");

    Ok(AuctionEvent::NewBidPlaced {
        asset_id,
        bidder: caller,
        amount: attached,
    })
}
