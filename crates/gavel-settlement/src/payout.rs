//! Payout arithmetic for the winner path.
//!
//! The royalty is `floor(winning_bid × rate / 100)`; the seller receives
//! the rest. Computing the seller side by subtraction makes the split exact
//! by construction — the truncation remainder accrues to the seller, and
//! `royalty + seller_proceeds == winning_bid` always holds. All steps are
//! overflow-checked.

use gavel_types::{GavelError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The exact division of a winning bid between beneficiary and seller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutSplit {
    /// The platform beneficiary's cut: `floor(bid × rate / 100)`.
    pub royalty: Decimal,
    /// The seller's proceeds: `bid − royalty`.
    pub seller_proceeds: Decimal,
}

impl PayoutSplit {
    /// Split `winning_bid` at `royalty_rate_pct` percent.
    ///
    /// # Errors
    /// - `InvalidParameter` if the rate exceeds 100
    /// - `ArithmeticOverflow` if any checked step overflows
    pub fn compute(winning_bid: Decimal, royalty_rate_pct: u32) -> Result<Self> {
        if royalty_rate_pct > 100 {
            return Err(GavelError::InvalidParameter {
                reason: format!("royalty rate {royalty_rate_pct}% exceeds 100%"),
            });
        }

        let royalty = winning_bid
            .checked_mul(Decimal::from(royalty_rate_pct))
            .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
            .ok_or(GavelError::ArithmeticOverflow {
                context: "royalty computation",
            })?
            .floor();
        let seller_proceeds =
            winning_bid
                .checked_sub(royalty)
                .ok_or(GavelError::ArithmeticOverflow {
                    context: "seller proceeds",
                })?;

        Ok(Self {
            royalty,
            seller_proceeds,
        })
    }

    /// The two sides recombined; equals the winning bid.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.royalty + self.seller_proceeds
    }
}
