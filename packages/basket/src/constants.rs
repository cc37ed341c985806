// ################################################################
//                             Baskets
// ################################################################

/// Number of assets every basket holds
pub const BASKET_SIZE: u32 = 5;

/// Weights and fees are whole percentages on this scale
pub const PERCENTAGE_PRECISION: u32 = 100;

pub const DEFAULT_FEE_PERCENTAGE: u32 = 10;

/// Basket ids fit in a single byte
pub const MAX_BASKETS: u32 = 256;

// ################################################################
//                             TTL
// ################################################################

pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;
