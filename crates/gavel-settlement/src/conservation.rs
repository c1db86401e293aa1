//! Custody conservation invariant checker.
//!
//! Mathematical invariant, checkable after every operation:
//! ```text
//! held == Σ(active escrowed bids) + Σ(active listing fees) + Σ(credits)
//! held == total_in − total_out
//! ```
//! Ended auctions contribute nothing — their escrow and fee have been
//! converted to credits at settlement. If either identity ever breaks,
//! funds have been lost or conjured and the embedding application should
//! halt intake.

use gavel_types::{GavelError, Result};

use gavel_registry::{AuctionStore, CustodyLedger};

/// Verify both custody identities over the current state.
///
/// # Errors
/// Returns [`GavelError::CustodyInvariantViolation`] with a diagnostic
/// reason if either identity fails, and `ArithmeticOverflow` if the
/// attribution sum itself overflows.
pub fn verify_custody(store: &AuctionStore, ledger: &CustodyLedger) -> Result<()> {
    let flow_expected =
        ledger
            .total_in()
            .checked_sub(ledger.total_out())
            .ok_or(GavelError::ArithmeticOverflow {
                context: "custody flow balance",
            })?;
    if ledger.held() != flow_expected {
        let reason = format!(
            "held {} != inflow {} - outflow {}",
            ledger.held(),
            ledger.total_in(),
            ledger.total_out()
        );
        tracing::warn!(%reason, "custody invariant violated");
        return Err(GavelError::CustodyInvariantViolation { reason });
    }

    let mut attributed = ledger.total_credits();
    for (_, auction) in store.iter() {
        if auction.ended {
            continue;
        }
        attributed =
            attributed
                .checked_add(auction.listing_fee_paid)
                .ok_or(GavelError::ArithmeticOverflow {
                    context: "custody attribution",
                })?;
        if auction.highest_bidder.is_some() {
            attributed =
                attributed
                    .checked_add(auction.highest_bid)
                    .ok_or(GavelError::ArithmeticOverflow {
                        context: "custody attribution",
                    })?;
        }
    }

    if ledger.held() != attributed {
        let reason = format!(
            "held {} != attributed {} (escrows + fees + credits)",
            ledger.held(),
            attributed
        );
        tracing::warn!(%reason, "custody invariant violated");
        return Err(GavelError::CustodyInvariantViolation { reason });
    }

    Ok(())
}
