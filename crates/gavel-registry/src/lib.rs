//! # gavel-registry
//!
//! The registry plane of the Gavel auction engine: who may do what, where
//! the records live, and where the money sits.
//!
//! - [`AccessControl`] — administrator set, authorization predicates, and
//!   the guarded global-parameter setters
//! - [`AssetRegistry`] — the narrow collaborator trait for asset existence,
//!   ownership, and transfer (plus [`MemoryAssetRegistry`] for embedding
//!   and tests)
//! - [`CustodyLedger`] — custodied funds and pull-payment credits; the only
//!   place funds ever enter or leave the engine
//! - [`AuctionStore`] — the owned asset → [`Auction`] map; listing and
//!   read access
//!
//! [`Auction`]: gavel_types::Auction

pub mod access_control;
pub mod asset_registry;
pub mod auction_store;
pub mod custody_ledger;

pub use access_control::AccessControl;
pub use asset_registry::{AssetRegistry, MemoryAssetRegistry};
pub use auction_store::AuctionStore;
pub use custody_ledger::CustodyLedger;
