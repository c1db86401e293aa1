//! Notifications emitted by engine operations.
//!
//! Operations return an [`AuctionEvent`] on success; the embedding
//! application routes them to whatever transport it uses (log stream,
//! message bus, chain events). The engine itself never pushes anything.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AssetId, PartyId};

/// A notification describing a committed state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuctionEvent {
    /// An asset was listed for auction.
    ArtworkListed {
        asset_id: AssetId,
        starting_price: Decimal,
    },
    /// A bid was accepted and is now the leading escrow.
    NewBidPlaced {
        asset_id: AssetId,
        bidder: PartyId,
        amount: Decimal,
    },
    /// An auction was finalized. `winner` is `None` and `amount` zero on
    /// the no-bid path.
    AuctionEnded {
        asset_id: AssetId,
        winner: Option<PartyId>,
        amount: Decimal,
    },
    /// A party withdrew its full credited balance from custody.
    FundsWithdrawn { party: PartyId, amount: Decimal },
}

impl std::fmt::Display for AuctionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArtworkListed {
                asset_id,
                starting_price,
            } => write!(f, "ARTWORK_LISTED {asset_id} price={starting_price}"),
            Self::NewBidPlaced {
                asset_id,
                bidder,
                amount,
            } => write!(f, "NEW_BID_PLACED {asset_id} {bidder} amount={amount}"),
            Self::AuctionEnded {
                asset_id,
                winner,
                amount,
            } => match winner {
                Some(w) => write!(f, "AUCTION_ENDED {asset_id} winner={w} amount={amount}"),
                None => write!(f, "AUCTION_ENDED {asset_id} winner=none amount={amount}"),
            },
            Self::FundsWithdrawn { party, amount } => {
                write!(f, "FUNDS_WITHDRAWN {party} amount={amount}")
            }
        }
    }
}
