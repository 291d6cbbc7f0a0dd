// Constants for storage bump amounts
pub const DAY_IN_LEDGERS: u32 = 17280;

// When the instance TTL falls below the threshold it is bumped back to 7 days of ledgers.
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Balances, allowances and stake positions live for 30 days of ledgers after their last touch.
pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;
