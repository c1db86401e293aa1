//! The asset collaborator seam.
//!
//! Minting, metadata, and ownership bookkeeping for the underlying assets
//! live outside this engine. Everything the engine needs from that world
//! fits in three calls: existence, current owner, and transfer.

use std::collections::HashMap;

use gavel_types::{AssetId, GavelError, PartyId, Result};

/// Narrow interface onto the external asset ownership system.
pub trait AssetRegistry {
    /// Whether the asset has been issued at all.
    fn asset_exists(&self, asset_id: AssetId) -> bool;

    /// The current owner of the asset, if it exists.
    fn owner_of(&self, asset_id: AssetId) -> Option<PartyId>;

    /// Transfer ownership from `from` to `to`.
    ///
    /// # Errors
    /// Returns `AssetTransferFailed` if the asset does not exist or `from`
    /// is not its current owner.
    fn transfer_asset(&mut self, from: PartyId, to: PartyId, asset_id: AssetId) -> Result<()>;
}

/// HashMap-backed registry for embedding and tests.
#[derive(Debug, Default)]
pub struct MemoryAssetRegistry {
    owners: HashMap<AssetId, PartyId>,
}

impl MemoryAssetRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an asset with its initial owner. Overwrites any prior
    /// owner, mirroring an external registry's re-issue.
    pub fn register(&mut self, asset_id: AssetId, owner: PartyId) {
        self.owners.insert(asset_id, owner);
    }
}

impl AssetRegistry for MemoryAssetRegistry {
    fn asset_exists(&self, asset_id: AssetId) -> bool {
        self.owners.contains_key(&asset_id)
    }

    fn owner_of(&self, asset_id: AssetId) -> Option<PartyId> {
        self.owners.get(&asset_id).copied()
    }

    fn transfer_asset(&mut self, from: PartyId, to: PartyId, asset_id: AssetId) -> Result<()> {
        match self.owners.get_mut(&asset_id) {
            Some(owner) if *owner == from => {
                *owner = to;
                Ok(())
            }
            Some(_) => Err(GavelError::AssetTransferFailed {
                asset_id,
                reason: format!("{from} is not the current owner"),
            }),
            None => Err(GavelError::AssetTransferFailed {
                asset_id,
                reason: "asset does not exist".to_string(),
            }),
        }
    }
}
