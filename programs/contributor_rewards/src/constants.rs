use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Timing gates, supply and PDA namespace tags of the contribution rewards program.
 * Every derived address is a pure function of one of the seeds below plus,
 * for contributors, the contributor handle.
 */

/// ===== TIMING CONSTANTS =====

/// Interval between two token unlocks (30 days)
/// - The first unlock is allowed 30 days after the program state was initialized
/// - Every unlock pushes the next allowed unlock another 30 days out
#[constant]
pub const TOKEN_UNLOCK_INTERVAL: i64 = 30 * 24 * 60 * 60;

/// Delay between an unlock and the opening of the claim window (28 days)
/// - Claims are accepted strictly after unlocked_at + TOKEN_CLAIM_DELAY
#[constant]
pub const TOKEN_CLAIM_DELAY: i64 = 28 * 24 * 60 * 60;

/// Cooldown between an unlock and the reset of the epoch (30 days)
/// - Leaves a 2 day claim window before unclaimed tokens move to the reserve
#[constant]
pub const RESET_COOLDOWN: i64 = 30 * 24 * 60 * 60;

/// ===== SUPPLY CONSTANTS =====

/// Whole tokens minted into the pool on every unlock, scaled by the mint decimals
#[constant]
pub const MONTHLY_UNLOCK_SUPPLY: u64 = 10_000;

/// Maximum length of a contributor handle
/// - The handle is used verbatim as a PDA seed, which is limited to 32 bytes
pub const MAX_HANDLE_LEN: usize = 32;

/// ===== PDA SEED CONSTANTS =====

/// Seed for the program state PDA
/// - Used in: ["program_state"]
#[constant]
pub const PROGRAM_STATE_SEED: &str = "program_state";

/// Seed for contribution record PDAs
/// - Used in: ["contributor", handle]
/// - One record per contributor handle
#[constant]
pub const CONTRIBUTOR_SEED: &str = "contributor";

/// Seed for the token pool vault PDA
/// - Used in: ["token_pool"]
/// - The vault is its own token authority, so only this program can move its funds
#[constant]
pub const TOKEN_POOL_SEED: &str = "token_pool";

/// Seed for the ecosystem reserve PDA
/// - Used in: ["ecosystem_reserve"]
/// - Receives every token left in the pool when an epoch is reset
#[constant]
pub const ECOSYSTEM_RESERVE_SEED: &str = "ecosystem_reserve";
