//! Engine-wide constants for the Gavel auction engine.

/// Default listing fee, in minor currency units.
pub const DEFAULT_LISTING_FEE: i64 = 50;

/// Default minimum bid increment, in minor currency units.
pub const DEFAULT_MIN_BID_INCREMENT: i64 = 10;

/// Default royalty rate routed to the platform beneficiary, in whole percent.
pub const DEFAULT_ROYALTY_RATE_PCT: u32 = 5;

/// Maximum auction duration in seconds (30 days). Bounds how long a
/// bidder's escrow can be locked up by a single listing.
pub const MAX_AUCTION_DURATION_SECS: i64 = 30 * 24 * 60 * 60;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "Gavel";
