//! Constants shared by the election crates
//!
//! Storage TTL windows are expressed in ledgers. At roughly five seconds per
//! ledger, one day is 17,280 ledgers.

// ===== Storage TTL =====

/// Ledgers per day (~5s per ledger)
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage (admin, status, counters) is bumped to 7 days
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;

/// Instance storage is bumped once fewer than 6 days remain
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Voter and proposal records are bumped to 30 days
pub const RECORD_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// Voter and proposal records are bumped once fewer than 29 days remain
pub const RECORD_LIFETIME_THRESHOLD: u32 = RECORD_BUMP_AMOUNT - DAY_IN_LEDGERS;

// ===== Identifiers =====

/// Id assigned to the first proposal
pub const FIRST_PROPOSAL_ID: u32 = 1;

/// Reserved id: no proposal ever has it, and it is the tally result when
/// nothing was voted for
pub const NO_WINNER: u32 = 0;
