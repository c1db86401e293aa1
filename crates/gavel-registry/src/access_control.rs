//! Authorization predicates and guarded parameter setters.
//!
//! All checks are pure and fail-closed: a caller not in the administrator
//! set is refused, and a failed check aborts the requested operation before
//! any state is touched.

use gavel_types::{Auction, FinalizeAuthority, GavelError, HousePolicy, PartyId, Result};
use rust_decimal::Decimal;

/// The set of administrator identities.
#[derive(Debug, Clone, Default)]
pub struct AccessControl {
    admins: std::collections::HashSet<PartyId>,
}

impl AccessControl {
    /// An empty administrator set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an initial administrator list.
    #[must_use]
    pub fn with_admins(admins: impl IntoIterator<Item = PartyId>) -> Self {
        Self {
            admins: admins.into_iter().collect(),
        }
    }

    /// Add an administrator.
    pub fn grant(&mut self, party: PartyId) {
        self.admins.insert(party);
    }

    /// Whether `party` is an administrator.
    #[must_use]
    pub fn is_administrator(&self, party: PartyId) -> bool {
        self.admins.contains(&party)
    }

    /// Whether `caller` may finalize the given auction under `authority`.
    #[must_use]
    pub fn may_finalize(
        &self,
        authority: FinalizeAuthority,
        auction: &Auction,
        caller: PartyId,
    ) -> bool {
        match authority {
            FinalizeAuthority::SellerOrAdministrator => {
                is_seller(caller, auction) || self.is_administrator(caller)
            }
            FinalizeAuthority::AdministratorOnly => self.is_administrator(caller),
            FinalizeAuthority::Anyone => true,
        }
    }
}

/// Whether `party` is the seller of `auction`.
#[must_use]
pub fn is_seller(party: PartyId, auction: &Auction) -> bool {
    auction.seller == party
}

/// Update the global listing fee. Administrator only; the new fee applies
/// to subsequent listings (records store the fee they collected).
pub fn set_listing_fee(
    access: &AccessControl,
    policy: &mut HousePolicy,
    caller: PartyId,
    new_fee: Decimal,
) -> Result<()> {
    guard_admin_parameter(access, caller, new_fee, "listing fee")?;
    tracing::info!(%caller, old = %policy.listing_fee, new = %new_fee, "listing fee updated");
    policy.listing_fee = new_fee;
    Ok(())
}

/// Update the global minimum bid increment. Administrator only.
pub fn set_min_bid_increment(
    access: &AccessControl,
    policy: &mut HousePolicy,
    caller: PartyId,
    new_increment: Decimal,
) -> Result<()> {
    guard_admin_parameter(access, caller, new_increment, "minimum bid increment")?;
    tracing::info!(
        %caller,
        old = %policy.min_bid_increment,
        new = %new_increment,
        "minimum bid increment updated"
    );
    policy.min_bid_increment = new_increment;
    Ok(())
}

fn guard_admin_parameter(
    access: &AccessControl,
    caller: PartyId,
    value: Decimal,
    name: &str,
) -> Result<()> {
    if !access.is_administrator(caller) {
        return Err(GavelError::AdministratorOnly(caller));
    }
    if value.is_sign_negative() {
        return Err(GavelError::InvalidParameter {
            reason: format!("{name} must be non-negative, got {value}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn admin_membership() {
        let admin = PartyId::new();
        let access = AccessControl::with_admins([admin]);
        assert!(access.is_administrator(admin));
        assert!(!access.is_administrator(PartyId::new()));
    }

    #[test]
    fn grant_adds_admin() {
        let mut access = AccessControl::new();
        let party = PartyId::new();
        assert!(!access.is_administrator(party));
        access.grant(party);
        assert!(access.is_administrator(party));
    }

    #[test]
    fn seller_predicate() {
        let seller = PartyId::new();
        let auction = Auction::dummy(seller, Utc::now());
        assert!(is_seller(seller, &auction));
        assert!(!is_seller(PartyId::new(), &auction));
    }

    #[test]
    fn finalize_authority_variants() {
        let admin = PartyId::new();
        let seller = PartyId::new();
        let stranger = PartyId::new();
        let access = AccessControl::with_admins([admin]);
        let auction = Auction::dummy(seller, Utc::now());

        let both = FinalizeAuthority::SellerOrAdministrator;
        assert!(access.may_finalize(both, &auction, seller));
        assert!(access.may_finalize(both, &auction, admin));
        assert!(!access.may_finalize(both, &auction, stranger));

        let admin_only = FinalizeAuthority::AdministratorOnly;
        assert!(!access.may_finalize(admin_only, &auction, seller));
        assert!(access.may_finalize(admin_only, &auction, admin));

        let anyone = FinalizeAuthority::Anyone;
        assert!(access.may_finalize(anyone, &auction, stranger));
    }

    #[test]
    fn set_listing_fee_requires_admin() {
        let admin = PartyId::new();
        let access = AccessControl::with_admins([admin]);
        let mut policy = HousePolicy::new(PartyId::new());

        let err =
            set_listing_fee(&access, &mut policy, PartyId::new(), Decimal::new(75, 0)).unwrap_err();
        assert!(matches!(err, GavelError::AdministratorOnly(_)));
        assert_eq!(policy.listing_fee, Decimal::new(50, 0));

        set_listing_fee(&access, &mut policy, admin, Decimal::new(75, 0)).unwrap();
        assert_eq!(policy.listing_fee, Decimal::new(75, 0));
    }

    #[test]
    fn set_min_bid_increment_rejects_negative() {
        let admin = PartyId::new();
        let access = AccessControl::with_admins([admin]);
        let mut policy = HousePolicy::new(PartyId::new());

        let err = set_min_bid_increment(&access, &mut policy, admin, Decimal::new(-1, 0))
            .unwrap_err();
        assert!(matches!(err, GavelError::InvalidParameter { .. }));
        assert_eq!(policy.min_bid_increment, Decimal::new(10, 0));
    }

    #[test]
    fn set_min_bid_increment_updates() {
        let admin = PartyId::new();
        let access = AccessControl::with_admins([admin]);
        let mut policy = HousePolicy::new(PartyId::new());

        set_min_bid_increment(&access, &mut policy, admin, Decimal::new(25, 0)).unwrap();
        assert_eq!(policy.min_bid_increment, Decimal::new(25, 0));
    }
}
