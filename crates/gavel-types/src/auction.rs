//! # Auction — the per-asset bidding record
//!
//! One `Auction` exists per listed asset. The record is created by the
//! listing operation, mutated only by accepted bids, and closed exactly once
//! by settlement.
//!
//! ## State Machine
//!
//! ```text
//!   ┌──────────┐  list   ┌────────┐  finalize  ┌───────┐
//!   │ UNLISTED ├────────▶│ ACTIVE ├───────────▶│ ENDED │
//!   └──────────┘         └───┬────┘            └───────┘
//!                            │ ▲
//!                            └─┘ accepted bid
//! ```
//!
//! `ENDED` is terminal. A new listing for the same asset replaces an ended
//! record; it is rejected while a record is still active.
//!
//! ## Structural Properties
//!
//! - **Monotonic bids**: `record_bid` rejects any amount not strictly above
//!   the current highest bid
//! - **Write-once terminal flag**: `ended` goes false → true exactly once;
//!   `mark_ended` refuses a second call
//! - **Escrow mirror**: while `highest_bidder` is set and the record is not
//!   ended, the custody ledger holds exactly `highest_bid` on that party's
//!   behalf

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AssetId, GavelError, PartyId, Result};

/// The per-asset auction record.
///
/// Records persist after `ended == true` as an audit trail; `AuctionStore`
/// keeps the terminal snapshot until the asset is listed again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auction {
    /// The lister; owner of the asset at listing time.
    pub seller: PartyId,
    /// Advisory reserve price. Stored and surfaced, but not validated
    /// against submitted bids.
    pub starting_price: Decimal,
    /// Current highest bid. Zero until the first bid is accepted.
    pub highest_bid: Decimal,
    /// The party whose funds are currently escrowed as the leading bid.
    pub highest_bidder: Option<PartyId>,
    /// The listing fee actually collected, refunded on the no-bid path.
    pub listing_fee_paid: Decimal,
    /// Absolute bidding deadline. Fixed at creation, never mutated.
    pub end_time: DateTime<Utc>,
    /// When the listing was created.
    pub listed_at: DateTime<Utc>,
    /// Terminal marker. False → true exactly once.
    pub ended: bool,
}

impl Auction {
    /// Create a fresh active record. The caller (the store's `list`
    /// operation) is responsible for all listing guards.
    #[must_use]
    pub fn new(
        seller: PartyId,
        starting_price: Decimal,
        listing_fee_paid: Decimal,
        listed_at: DateTime<Utc>,
        duration: Duration,
    ) -> Self {
        Self {
            seller,
            starting_price,
            highest_bid: Decimal::ZERO,
            highest_bidder: None,
            listing_fee_paid,
            end_time: listed_at + duration,
            listed_at,
            ended: false,
        }
    }

    /// Whether a bid has been accepted on this record.
    #[must_use]
    pub fn has_bid(&self) -> bool {
        self.highest_bidder.is_some()
    }

    /// Whether the record still accepts bids at `now`.
    #[must_use]
    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        !self.ended && now < self.end_time
    }

    /// Whether the deadline has passed at `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.end_time
    }

    /// Record an accepted bid, returning the displaced bidder and the
    /// escrow amount owed back to them, if any.
    ///
    /// This enforces only the structural invariants (not ended, strictly
    /// increasing amount); policy checks — deadline, minimum increment —
    /// belong to the bidding engine.
    ///
    /// # Errors
    /// - [`GavelError::AuctionAlreadyEnded`] if the record is terminal
    /// - [`GavelError::BidTooLow`] if `amount` is not strictly above the
    ///   current highest bid
    pub fn record_bid(
        &mut self,
        asset_id: AssetId,
        bidder: PartyId,
        amount: Decimal,
    ) -> Result<Option<(PartyId, Decimal)>> {
        if self.ended {
            return Err(GavelError::AuctionAlreadyEnded(asset_id));
        }
        if amount <= self.highest_bid {
            return Err(GavelError::BidTooLow {
                attached: amount,
                must_exceed: self.highest_bid,
            });
        }

        let displaced = self.highest_bidder.map(|prev| (prev, self.highest_bid));
        self.highest_bid = amount;
        self.highest_bidder = Some(bidder);
        Ok(displaced)
    }

    /// Transition to the terminal ended state.
    ///
    /// # Errors
    /// Returns an error if the record is already ended — the flag is
    /// write-once and never reverses.
    pub fn mark_ended(&mut self, asset_id: AssetId) -> Result<()> {
        if self.ended {
            return Err(GavelError::AuctionAlreadyEnded(asset_id));
        }
        self.ended = true;
        Ok(())
    }
}

/// Dummy record for unit tests in dependent crates.
#[cfg(any(test, feature = "test-helpers"))]
impl Auction {
    /// An active auction listed at `now` with a one-day deadline,
    /// reserve 1000 and fee 50.
    pub fn dummy(seller: PartyId, now: DateTime<Utc>) -> Self {
        Self::new(
            seller,
            Decimal::new(1000, 0),
            Decimal::new(50, 0),
            now,
            Duration::days(1),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_auction() -> Auction {
        Auction::dummy(PartyId::new(), Utc::now())
    }

    #[test]
    fn new_record_is_open_and_unbid() {
        let now = Utc::now();
        let a = Auction::dummy(PartyId::new(), now);
        assert!(a.is_open(now));
        assert!(!a.has_bid());
        assert_eq!(a.highest_bid, Decimal::ZERO);
        assert!(!a.ended);
    }

    #[test]
    fn end_time_fixed_at_creation() {
        let now = Utc::now();
        let a = Auction::new(
            PartyId::new(),
            Decimal::new(1000, 0),
            Decimal::new(50, 0),
            now,
            Duration::seconds(86_400),
        );
        assert_eq!(a.end_time, now + Duration::seconds(86_400));
        assert!(a.is_expired(now + Duration::seconds(86_400)));
        assert!(!a.is_expired(now + Duration::seconds(86_399)));
    }

    #[test]
    fn first_bid_sets_leader_without_displacement() {
        let mut a = make_auction();
        let bidder = PartyId::new();
        let displaced = a.record_bid(AssetId(7), bidder, Decimal::new(20, 0)).unwrap();
        assert!(displaced.is_none());
        assert_eq!(a.highest_bid, Decimal::new(20, 0));
        assert_eq!(a.highest_bidder, Some(bidder));
    }

    #[test]
    fn higher_bid_displaces_previous_leader() {
        let mut a = make_auction();
        let first = PartyId::new();
        let second = PartyId::new();
        a.record_bid(AssetId(7), first, Decimal::new(20, 0)).unwrap();
        let displaced = a.record_bid(AssetId(7), second, Decimal::new(35, 0)).unwrap();
        assert_eq!(displaced, Some((first, Decimal::new(20, 0))));
        assert_eq!(a.highest_bid, Decimal::new(35, 0));
        assert_eq!(a.highest_bidder, Some(second));
    }

    #[test]
    fn non_increasing_bid_rejected_and_record_unchanged() {
        let mut a = make_auction();
        let first = PartyId::new();
        a.record_bid(AssetId(7), first, Decimal::new(20, 0)).unwrap();

        let err = a.record_bid(AssetId(7), PartyId::new(), Decimal::new(20, 0)).unwrap_err();
        assert!(matches!(err, GavelError::BidTooLow { .. }));
        assert_eq!(a.highest_bid, Decimal::new(20, 0));
        assert_eq!(a.highest_bidder, Some(first));
    }

    #[test]
    fn mark_ended_is_write_once() {
        let mut a = make_auction();
        a.mark_ended(AssetId(7)).unwrap();
        assert!(a.ended);

        let err = a.mark_ended(AssetId(7)).unwrap_err();
        assert!(matches!(err, GavelError::AuctionAlreadyEnded(AssetId(7))));
        assert!(a.ended);
    }

    #[test]
    fn ended_record_rejects_bids() {
        let mut a = make_auction();
        a.mark_ended(AssetId(7)).unwrap();
        assert!(
            a.record_bid(AssetId(7), PartyId::new(), Decimal::new(100, 0))
                .is_err()
        );
        assert!(!a.has_bid());
    }

    #[test]
    fn serde_roundtrip() {
        let a = make_auction();
        let json = serde_json::to_string(&a).unwrap();
        let back: Auction = serde_json::from_str(&json).unwrap();
        assert_eq!(a, back);
    }
}
