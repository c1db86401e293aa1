//! # gavel-settlement
//!
//! The finality plane of the Gavel auction engine: closing an auction
//! exactly once, splitting the proceeds, and proving that custody adds up.
//!
//! - [`Settler`] — the finalize operation: winner path (asset transfer +
//!   royalty split) and no-bid path (fee refund), each committing the
//!   terminal `ended` flag before any credit is recorded
//! - [`PayoutSplit`] — exact royalty arithmetic:
//!   `royalty + seller_proceeds == winning_bid`, always
//! - [`conservation`] — the custody invariant checker: every held unit is
//!   attributable to an active escrow, an active listing fee, or an
//!   unwithdrawn credit

pub mod conservation;
pub mod payout;
pub mod settler;

pub use conservation::verify_custody;
pub use payout::PayoutSplit;
pub use settler::Settler;
