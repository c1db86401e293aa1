//! Auction store — the owned mapping from asset identifier to live or
//! terminal [`Auction`] records.
//!
//! The store is passed explicitly to the bidding and settlement engines;
//! there is no ambient global registry. At most one *active* auction exists
//! per asset; an ended record stays queryable until the asset is listed
//! again, at which point the fresh record replaces it.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use gavel_types::{AssetId, Auction, AuctionEvent, GavelError, HousePolicy, PartyId, Result};
use rust_decimal::Decimal;

use crate::{AssetRegistry, CustodyLedger};

/// Keyed store of auction records plus the listing operation.
#[derive(Debug, Default)]
pub struct AuctionStore {
    auctions: HashMap<AssetId, Auction>,
}

impl AuctionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// List an asset for auction.
    ///
    /// Guards, in order: the asset exists; `caller` owns it; the reserve is
    /// non-negative; `attached_fee` matches the configured listing fee
    /// exactly; the duration is positive and within the configured maximum;
    /// and the asset has no active auction. Only then is the fee taken into
    /// custody and the record created. A failed guard leaves the store and
    /// ledger untouched, and the attached fee stays with the caller.
    ///
    /// The reserve (`starting_price`) is advisory: it is stored on the
    /// record but bids are not validated against it.
    #[allow(clippy::too_many_arguments)]
    pub fn list<A: AssetRegistry>(
        &mut self,
        assets: &A,
        ledger: &mut CustodyLedger,
        policy: &HousePolicy,
        asset_id: AssetId,
        starting_price: Decimal,
        duration_secs: i64,
        caller: PartyId,
        attached_fee: Decimal,
        now: DateTime<Utc>,
    ) -> Result<AuctionEvent> {
        if !assets.asset_exists(asset_id) {
            return Err(GavelError::AssetNotFound(asset_id));
        }
        if assets.owner_of(asset_id) != Some(caller) {
            return Err(GavelError::NotAssetOwner { asset_id, caller });
        }
        if starting_price.is_sign_negative() {
            return Err(GavelError::InvalidParameter {
                reason: format!("starting price must be non-negative, got {starting_price}"),
            });
        }
        if attached_fee != policy.listing_fee {
            return Err(GavelError::ListingFeeMismatch {
                expected: policy.listing_fee,
                attached: attached_fee,
            });
        }
        if duration_secs <= 0 || duration_secs > policy.max_duration_secs {
            return Err(GavelError::DurationOutOfBounds {
                requested_secs: duration_secs,
                max_secs: policy.max_duration_secs,
            });
        }
        if let Some(existing) = self.auctions.get(&asset_id) {
            if !existing.ended {
                return Err(GavelError::AuctionAlreadyActive(asset_id));
            }
        }
        ledger.ensure_depositable(attached_fee)?;

        ledger.deposit(attached_fee)?;
        self.auctions.insert(
            asset_id,
            Auction::new(
                caller,
                starting_price,
                attached_fee,
                now,
                Duration::seconds(duration_secs),
            ),
        );
        tracing::info!(%asset_id, seller = %caller, %starting_price, duration_secs, "asset listed");

        Ok(AuctionEvent::ArtworkListed {
            asset_id,
            starting_price,
        })
    }

    /// Read-only snapshot of a record. Defined for terminal records too —
    /// the `ended` snapshot persists until the asset is listed again.
    #[must_use]
    pub fn get(&self, asset_id: AssetId) -> Option<&Auction> {
        self.auctions.get(&asset_id)
    }

    /// Mutable access for the bidding and settlement engines.
    pub fn get_mut(&mut self, asset_id: AssetId) -> Option<&mut Auction> {
        self.auctions.get_mut(&asset_id)
    }

    /// Iterate all records, live and terminal.
    pub fn iter(&self) -> impl Iterator<Item = (&AssetId, &Auction)> {
        self.auctions.iter()
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.auctions.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.auctions.is_empty()
    }
}
