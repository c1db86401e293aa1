//! # gavel-bidding
//!
//! The bidding engine of the Gavel auction engine: validates bid
//! submissions against the auction record and house policy, takes the
//! attached amount into custody, and credits the displaced bidder's escrow
//! back through the pull-payment ledger.
//!
//! The engine owns no state of its own — it operates on the
//! [`AuctionStore`] and [`CustodyLedger`] passed to each call, so the whole
//! operation is a single borrow-checked atomic unit.
//!
//! [`AuctionStore`]: gavel_registry::AuctionStore
//! [`CustodyLedger`]: gavel_registry::CustodyLedger

pub mod bid_engine;

pub use bid_engine::place_bid;
