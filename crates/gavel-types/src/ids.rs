//! Identifiers used throughout Gavel.
//!
//! Asset identifiers come from the external asset registry and are plain
//! integers. Party identifiers use UUIDv7 for time-ordered lexicographic
//! sorting.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// AssetId
// ---------------------------------------------------------------------------

/// Identifier of a uniquely-owned digital asset, as issued by the external
/// asset registry. Gavel never mints these — it only keys auctions by them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AssetId(pub u64);

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "asset:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// PartyId
// ---------------------------------------------------------------------------

/// Identity of any party interacting with the engine: seller, bidder,
/// administrator, or the platform beneficiary. Uses UUIDv7 so freshly
/// minted identities sort by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct PartyId(pub Uuid);

impl PartyId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }
}

impl Default for PartyId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "party:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn party_id_uniqueness() {
        let a = PartyId::new();
        let b = PartyId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn party_id_ordering() {
        let a = PartyId::new();
        let b = PartyId::new();
        assert!(a < b);
    }

    #[test]
    fn asset_id_display() {
        assert_eq!(AssetId(7).to_string(), "asset:7");
    }

    #[test]
    fn party_id_from_bytes_roundtrip() {
        let p = PartyId::from_bytes([9u8; 16]);
        assert_eq!(p, PartyId::from_bytes([9u8; 16]));
    }

    #[test]
    fn serde_roundtrips() {
        let aid = AssetId(42);
        let json = serde_json::to_string(&aid).unwrap();
        let back: AssetId = serde_json::from_str(&json).unwrap();
        assert_eq!(aid, back);

        let pid = PartyId::new();
        let json = serde_json::to_string(&pid).unwrap();
        let back: PartyId = serde_json::from_str(&json).unwrap();
        assert_eq!(pid, back);
    }
}
