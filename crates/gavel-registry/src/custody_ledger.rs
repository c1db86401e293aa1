//! Custody ledger — the engine's shared fund balance and pull-payment
//! credits.
//!
//! All funds attached to accepted operations land here (`deposit`), and all
//! money owed to parties — displaced escrows, sale proceeds, royalties, fee
//! refunds — is recorded as a credit (`credit`) against the held balance.
//! Funds only ever leave through `withdraw`, the always-available pull step.
//! The engines never push a payment mid-operation, so no external party can
//! observe intermediate state.
//!
//! All mutations are atomic: either the full operation succeeds or the
//! ledger is unchanged.

use std::collections::HashMap;

use gavel_types::{GavelError, PartyId, Result};
use rust_decimal::Decimal;

/// Custodied funds plus per-party withdrawable credits.
///
/// Invariant maintained with the help of the settlement plane's
/// conservation check: `held` always equals the sum of active escrows,
/// active listing fees, and unwithdrawn credits.
#[derive(Debug, Default)]
pub struct CustodyLedger {
    /// Total funds currently in custody.
    held: Decimal,
    /// Withdrawable balance per party.
    credits: HashMap<PartyId, Decimal>,
    /// Lifetime inflow, for conservation checks.
    total_in: Decimal,
    /// Lifetime outflow, for conservation checks.
    total_out: Decimal,
}

impl CustodyLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take custody of funds attached to an accepted operation.
    ///
    /// # Errors
    /// Returns `ArithmeticOverflow` if the held balance would overflow.
    pub fn deposit(&mut self, amount: Decimal) -> Result<()> {
        let held = self
            .held
            .checked_add(amount)
            .ok_or(GavelError::ArithmeticOverflow {
                context: "ledger deposit",
            })?;
        let total_in =
            self.total_in
                .checked_add(amount)
                .ok_or(GavelError::ArithmeticOverflow {
                    context: "ledger inflow counter",
                })?;
        self.held = held;
        self.total_in = total_in;
        Ok(())
    }

    /// Record that `amount` of the held balance is owed to `party`.
    /// Custody does not change; the party collects via [`withdraw`].
    ///
    /// # Errors
    /// Returns `ArithmeticOverflow` if the party's credit would overflow.
    ///
    /// [`withdraw`]: CustodyLedger::withdraw
    pub fn credit(&mut self, party: PartyId, amount: Decimal) -> Result<()> {
        let entry = self.credits.entry(party).or_insert(Decimal::ZERO);
        *entry = entry
            .checked_add(amount)
            .ok_or(GavelError::ArithmeticOverflow {
                context: "party credit",
            })?;
        Ok(())
    }

    /// Pay out `party`'s full credited balance.
    ///
    /// # Errors
    /// Returns `NothingToWithdraw` if the party has no credit.
    pub fn withdraw(&mut self, party: PartyId) -> Result<Decimal> {
        let amount = match self.credits.remove(&party) {
            Some(a) if a > Decimal::ZERO => a,
            _ => return Err(GavelError::NothingToWithdraw(party)),
        };

        // held >= amount holds whenever credits were only ever issued
        // against deposited funds; a shortfall here is a conservation bug.
        let held = self
            .held
            .checked_sub(amount)
            .filter(|h| !h.is_sign_negative())
            .ok_or_else(|| {
                self.credits.insert(party, amount);
                GavelError::CustodyInvariantViolation {
                    reason: format!("withdraw of {amount} exceeds held balance"),
                }
            })?;
        let total_out =
            self.total_out
                .checked_add(amount)
                .ok_or(GavelError::ArithmeticOverflow {
                    context: "ledger outflow counter",
                })?;

        self.held = held;
        self.total_out = total_out;
        tracing::debug!(%party, %amount, "credit withdrawn");
        Ok(amount)
    }

    /// Pre-flight check that `deposit(amount)` cannot fail.
    pub fn ensure_depositable(&self, amount: Decimal) -> Result<()> {
        self.held
            .checked_add(amount)
            .and_then(|_| self.total_in.checked_add(amount))
            .map(|_| ())
            .ok_or(GavelError::ArithmeticOverflow {
                context: "ledger deposit",
            })
    }

    /// Pre-flight check that `credit(party, amount)` cannot fail.
    pub fn ensure_creditable(&self, party: PartyId, amount: Decimal) -> Result<()> {
        self.credits
            .get(&party)
            .copied()
            .unwrap_or(Decimal::ZERO)
            .checked_add(amount)
            .map(|_| ())
            .ok_or(GavelError::ArithmeticOverflow {
                context: "party credit",
            })
    }

    /// Total funds currently in custody.
    #[must_use]
    pub fn held(&self) -> Decimal {
        self.held
    }

    /// The withdrawable balance of a party.
    #[must_use]
    pub fn credit_of(&self, party: PartyId) -> Decimal {
        self.credits.get(&party).copied().unwrap_or(Decimal::ZERO)
    }

    /// Sum of all unwithdrawn credits.
    #[must_use]
    pub fn total_credits(&self) -> Decimal {
        self.credits.values().copied().sum()
    }

    /// Lifetime inflow.
    #[must_use]
    pub fn total_in(&self) -> Decimal {
        self.total_in
    }

    /// Lifetime outflow.
    #[must_use]
    pub fn total_out(&self) -> Decimal {
        self.total_out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposit_increases_held() {
        let mut ledger = CustodyLedger::new();
        ledger.deposit(Decimal::new(50, 0)).unwrap();
        assert_eq!(ledger.held(), Decimal::new(50, 0));
        assert_eq!(ledger.total_in(), Decimal::new(50, 0));
        assert_eq!(ledger.total_out(), Decimal::ZERO);
    }

    #[test]
    fn credit_leaves_held_unchanged() {
        let mut ledger = CustodyLedger::new();
        let party = PartyId::new();
        ledger.deposit(Decimal::new(100, 0)).unwrap();
        ledger.credit(party, Decimal::new(40, 0)).unwrap();
        assert_eq!(ledger.held(), Decimal::new(100, 0));
        assert_eq!(ledger.credit_of(party), Decimal::new(40, 0));
        assert_eq!(ledger.total_credits(), Decimal::new(40, 0));
    }

    #[test]
    fn withdraw_drains_credit_and_held() {
        let mut ledger = CustodyLedger::new();
        let party = PartyId::new();
        ledger.deposit(Decimal::new(100, 0)).unwrap();
        ledger.credit(party, Decimal::new(40, 0)).unwrap();

        let paid = ledger.withdraw(party).unwrap();
        assert_eq!(paid, Decimal::new(40, 0));
        assert_eq!(ledger.held(), Decimal::new(60, 0));
        assert_eq!(ledger.credit_of(party), Decimal::ZERO);
        assert_eq!(ledger.total_out(), Decimal::new(40, 0));
    }

    #[test]
    fn second_withdraw_fails() {
        let mut ledger = CustodyLedger::new();
        let party = PartyId::new();
        ledger.deposit(Decimal::new(100, 0)).unwrap();
        ledger.credit(party, Decimal::new(40, 0)).unwrap();
        ledger.withdraw(party).unwrap();

        let err = ledger.withdraw(party).unwrap_err();
        assert!(matches!(err, GavelError::NothingToWithdraw(p) if p == party));
    }

    #[test]
    fn withdraw_without_credit_fails() {
        let mut ledger = CustodyLedger::new();
        let err = ledger.withdraw(PartyId::new()).unwrap_err();
        assert!(matches!(err, GavelError::NothingToWithdraw(_)));
    }

    #[test]
    fn credits_accumulate() {
        let mut ledger = CustodyLedger::new();
        let party = PartyId::new();
        ledger.deposit(Decimal::new(100, 0)).unwrap();
        ledger.credit(party, Decimal::new(20, 0)).unwrap();
        ledger.credit(party, Decimal::new(15, 0)).unwrap();
        assert_eq!(ledger.credit_of(party), Decimal::new(35, 0));
    }

    #[test]
    fn uncovered_credit_cannot_be_withdrawn() {
        // Credit issued without a matching deposit: the withdraw is refused
        // and the credit restored, so funds are never conjured.
        let mut ledger = CustodyLedger::new();
        let party = PartyId::new();
        ledger.credit(party, Decimal::new(10, 0)).unwrap();

        let err = ledger.withdraw(party).unwrap_err();
        assert!(matches!(err, GavelError::CustodyInvariantViolation { .. }));
        assert_eq!(ledger.credit_of(party), Decimal::new(10, 0));
        assert_eq!(ledger.held(), Decimal::ZERO);
    }

    #[test]
    fn preflight_checks_pass_on_fresh_ledger() {
        let ledger = CustodyLedger::new();
        assert!(ledger.ensure_depositable(Decimal::new(1_000, 0)).is_ok());
        assert!(
            ledger
                .ensure_creditable(PartyId::new(), Decimal::new(1_000, 0))
                .is_ok()
        );
    }

    #[test]
    fn held_tracks_in_minus_out() {
        let mut ledger = CustodyLedger::new();
        let a = PartyId::new();
        let b = PartyId::new();
        ledger.deposit(Decimal::new(50, 0)).unwrap();
        ledger.deposit(Decimal::new(20, 0)).unwrap();
        ledger.credit(a, Decimal::new(50, 0)).unwrap();
        ledger.credit(b, Decimal::new(20, 0)).unwrap();
        ledger.withdraw(a).unwrap();

        assert_eq!(ledger.held(), ledger.total_in() - ledger.total_out());
        assert_eq!(ledger.held(), Decimal::new(20, 0));
    }
}
