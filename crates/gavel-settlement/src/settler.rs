//! Finalize — the terminal transition of an auction.
//!
//! Ordering discipline: every fallible step (guards, payout arithmetic,
//! credit pre-flight, the external asset transfer) runs before the first
//! state mutation. The commit — marking the record ended and recording the
//! credits — then cannot fail, so a finalize either happens completely or
//! leaves no trace. Funds are only ever *credited*; actual egress goes
//! through the ledger's withdraw step.
//!
//! The `ended` flag on the record is the idempotency guard: a second
//! finalize of the same asset is rejected before anything runs.

use chrono::{DateTime, Utc};
use gavel_types::{
    AssetId, AuctionEvent, GavelError, HousePolicy, PartyId, Receipt, ReceiptKind, Result,
};
use rust_decimal::Decimal;

use gavel_registry::{AccessControl, AssetRegistry, AuctionStore, CustodyLedger};

use crate::payout::PayoutSplit;

/// Executes finalize operations and keeps the settlement audit trail.
#[derive(Debug, Default)]
pub struct Settler {
    receipts: Vec<Receipt>,
}

impl Settler {
    /// Create a settler with an empty audit trail.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finalize the auction on `asset_id`.
    ///
    /// Guards: the record exists, is not ended, has expired
    /// (`now >= end_time`), and `caller` is authorized under the policy's
    /// [`FinalizeAuthority`](gavel_types::FinalizeAuthority).
    ///
    /// **Winner path** — the asset moves seller → winner through the asset
    /// registry; the seller is credited `bid − royalty`; the beneficiary is
    /// credited the royalty plus the listing fee.
    ///
    /// **No-bid path** — no transfer (the asset never left the seller);
    /// the seller is credited back the exact fee collected at listing time.
    #[allow(clippy::too_many_arguments)]
    pub fn finalize<A: AssetRegistry>(
        &mut self,
        store: &mut AuctionStore,
        ledger: &mut CustodyLedger,
        assets: &mut A,
        access: &AccessControl,
        policy: &HousePolicy,
        asset_id: AssetId,
        caller: PartyId,
        now: DateTime<Utc>,
    ) -> Result<AuctionEvent> {
        let auction = store
            .get(asset_id)
            .ok_or(GavelError::AuctionNotFound(asset_id))?;

        if auction.ended {
            return Err(GavelError::AuctionAlreadyEnded(asset_id));
        }
        if now < auction.end_time {
            return Err(GavelError::AuctionNotExpired {
                asset_id,
                end_time: auction.end_time,
            });
        }
        if !access.may_finalize(policy.finalize_authority, auction, caller) {
            return Err(GavelError::NotAuthorizedToFinalize { asset_id, caller });
        }

        let seller = auction.seller;
        let fee = auction.listing_fee_paid;
        let winner = auction.highest_bidder;
        let bid = auction.highest_bid;

        match winner {
            Some(winner) => {
                let split = PayoutSplit::compute(bid, policy.royalty_rate_pct)?;
                let beneficiary_total =
                    split
                        .royalty
                        .checked_add(fee)
                        .ok_or(GavelError::ArithmeticOverflow {
                            context: "beneficiary payout",
                        })?;
                ledger.ensure_creditable(seller, split.seller_proceeds)?;
                ledger.ensure_creditable(policy.beneficiary, beneficiary_total)?;

                // Last fallible step: the external collaborator.
                assets.transfer_asset(seller, winner, asset_id)?;

                // Commit.
                store
                    .get_mut(asset_id)
                    .ok_or(GavelError::AuctionNotFound(asset_id))?
                    .mark_ended(asset_id)?;
                ledger.credit(seller, split.seller_proceeds)?;
                ledger.credit(policy.beneficiary, beneficiary_total)?;

                self.receipts.push(Receipt::settlement(
                    ReceiptKind::WinnerSettled,
                    asset_id,
                    Some(winner),
                    bid,
                    now,
                ));
                tracing::info!(
                    %asset_id,
                    %seller,
                    winner = %winner,
                    %bid,
                    royalty = %split.royalty,
                    proceeds = %split.seller_proceeds,
                    "auction settled with winner"
                );

                Ok(AuctionEvent::AuctionEnded {
                    asset_id,
                    winner: Some(winner),
                    amount: bid,
                })
            }
            None => {
                ledger.ensure_creditable(seller, fee)?;

                // Commit. No transfer: the asset never left the seller.
                store
                    .get_mut(asset_id)
                    .ok_or(GavelError::AuctionNotFound(asset_id))?
                    .mark_ended(asset_id)?;
                ledger.credit(seller, fee)?;

                self.receipts.push(Receipt::settlement(
                    ReceiptKind::NoSaleClosed,
                    asset_id,
                    None,
                    Decimal::ZERO,
                    now,
                ));
                tracing::info!(%asset_id, %seller, refunded_fee = %fee, "auction closed with no bids");

                Ok(AuctionEvent::AuctionEnded {
                    asset_id,
                    winner: None,
                    amount: Decimal::ZERO,
                })
            }
        }
    }

    /// The settlement audit trail, in commit order.
    #[must_use]
    pub fn receipts(&self) -> &[Receipt] {
        &self.receipts
    }
}
