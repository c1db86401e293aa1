//! Settlement receipts for the Gavel audit trail.
//!
//! Every finalized auction produces a [`Receipt`] carrying a SHA-256 digest
//! over a canonical payload, so a settlement ledger exported from the engine
//! can be checked for tampering without replaying the auction history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{AssetId, PartyId};
use rust_decimal::Decimal;

/// The settlement outcome this receipt proves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReceiptKind {
    /// The auction closed with a winner; asset and proceeds changed hands.
    WinnerSettled,
    /// The auction closed with no bids; the listing fee went back to the
    /// seller.
    NoSaleClosed,
}

impl std::fmt::Display for ReceiptKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WinnerSettled => write!(f, "WINNER_SETTLED"),
            Self::NoSaleClosed => write!(f, "NO_SALE_CLOSED"),
        }
    }
}

/// A digest-carrying record of one settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Which settlement path was taken.
    pub kind: ReceiptKind,
    /// The settled asset.
    pub asset_id: AssetId,
    /// The winning bidder, absent on the no-sale path.
    pub winner: Option<PartyId>,
    /// The winning bid (zero on the no-sale path).
    pub amount: Decimal,
    /// SHA-256 over the canonical payload of the fields above.
    pub payload_hash: [u8; 32],
    /// When settlement committed, per the engine's ordering clock.
    pub issued_at: DateTime<Utc>,
}

impl Receipt {
    /// Build a receipt for a committed settlement, computing the digest.
    #[must_use]
    pub fn settlement(
        kind: ReceiptKind,
        asset_id: AssetId,
        winner: Option<PartyId>,
        amount: Decimal,
        issued_at: DateTime<Utc>,
    ) -> Self {
        let payload_hash = Self::digest(kind, asset_id, winner, amount);
        Self {
            kind,
            asset_id,
            winner,
            amount,
            payload_hash,
            issued_at,
        }
    }

    /// Recompute the digest from the receipt's own fields and compare.
    #[must_use]
    pub fn verify(&self) -> bool {
        Self::digest(self.kind, self.asset_id, self.winner, self.amount) == self.payload_hash
    }

    /// Hex rendering of the payload hash, for logs and exports.
    #[must_use]
    pub fn digest_hex(&self) -> String {
        hex::encode(self.payload_hash)
    }

    /// Canonical payload digest.
    ///
    /// Format: `"gavel:receipt:v1:" || kind || asset_id || winner-or-zeros || amount`
    fn digest(
        kind: ReceiptKind,
        asset_id: AssetId,
        winner: Option<PartyId>,
        amount: Decimal,
    ) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(b"gavel:receipt:v1:");
        hasher.update(kind.to_string().as_bytes());
        hasher.update(asset_id.0.to_le_bytes());
        match winner {
            Some(w) => hasher.update(w.0.as_bytes()),
            None => hasher.update([0u8; 16]),
        }
        hasher.update(amount.to_string().as_bytes());
        hasher.finalize().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_receipt() -> Receipt {
        Receipt::settlement(
            ReceiptKind::WinnerSettled,
            AssetId(7),
            Some(PartyId::new()),
            Decimal::new(35, 0),
            Utc::now(),
        )
    }

    #[test]
    fn fresh_receipt_verifies() {
        let r = make_receipt();
        assert!(r.verify());
    }

    #[test]
    fn tampered_amount_fails_verification() {
        let mut r = make_receipt();
        r.amount = Decimal::new(36, 0);
        assert!(!r.verify());
    }

    #[test]
    fn digest_differs_by_winner() {
        let now = Utc::now();
        let a = Receipt::settlement(
            ReceiptKind::WinnerSettled,
            AssetId(7),
            Some(PartyId::new()),
            Decimal::new(35, 0),
            now,
        );
        let b = Receipt::settlement(
            ReceiptKind::WinnerSettled,
            AssetId(7),
            Some(PartyId::new()),
            Decimal::new(35, 0),
            now,
        );
        assert_ne!(a.payload_hash, b.payload_hash);
    }

    #[test]
    fn digest_hex_is_64_chars() {
        assert_eq!(make_receipt().digest_hex().len(), 64);
    }

    #[test]
    fn no_sale_receipt_verifies() {
        let r = Receipt::settlement(
            ReceiptKind::NoSaleClosed,
            AssetId(9),
            None,
            Decimal::ZERO,
            Utc::now(),
        );
        assert!(r.verify());
        assert_eq!(r.kind.to_string(), "NO_SALE_CLOSED");
    }

    #[test]
    fn serde_roundtrip() {
        let r = make_receipt();
        let json = serde_json::to_string(&r).unwrap();
        let back: Receipt = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
        assert!(back.verify());
    }
}
