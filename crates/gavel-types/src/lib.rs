//! # gavel-types
//!
//! Shared types, errors, and configuration for the **Gavel** timed-auction
//! engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`AssetId`], [`PartyId`]
//! - **Auction model**: [`Auction`] and its lifecycle rules
//! - **Event model**: [`AuctionEvent`]
//! - **Receipt model**: [`Receipt`], [`ReceiptKind`]
//! - **Configuration**: [`HousePolicy`], [`FinalizeAuthority`]
//! - **Errors**: [`GavelError`] with `GV_ERR_` prefix codes
//! - **Constants**: engine-wide defaults and limits

pub mod auction;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod ids;
pub mod receipt;

// Re-export all primary types at crate root for ergonomic imports:
//   use gavel_types::{Auction, AuctionEvent, HousePolicy, ...};

pub use auction::*;
pub use config::*;
pub use error::*;
pub use event::*;
pub use ids::*;
pub use receipt::*;

// Constants are accessed via `gavel_types::constants::FOO`
// (not re-exported to avoid name collisions).
