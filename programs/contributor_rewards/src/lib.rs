use anchor_lang::prelude::*;

declare_id!("2XRFdSPZhdyi7uBrg4xUHeXiBAiKiRogBSYrB1hS72TL");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Contributor Rewards Program
 *
 * Rewards open-source contributors with tokens proportional to the contribution
 * points logged for their merged pull requests.
 *
 * Key Features:
 * - Time-locked monthly unlocks of the reward supply into a program-owned pool
 * - Admin-only point logging (driven by a pull request webhook)
 * - Proportional claims: pool_balance * points / global_points
 * - Epoch reset sweeping unclaimed tokens into an ecosystem reserve
 * - Cross-program call event emission for indexers
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Program State PDA: configuration, global point counter, epoch timing gates
 * - Contribution PDAs: per-contributor points, keyed by contributor handle
 * - Token Pool PDA: holds the unlocked, unclaimed supply
 * - Ecosystem Reserve PDA: receives the pool balance on every reset
 *
 * Workflow:
 * 1. Admin initializes the program state
 * 2. Admin unlocks the monthly supply once the unlock interval has passed
 * 3. Contributors register; the admin logs points as pull requests merge
 * 4. Contributors claim their share once the claim window opens
 * 5. Admin resets the epoch after the cooldown; the cycle restarts at step 2
 */
#[program]
pub mod contributor_rewards {
    use super::*;

    /**
     * Creates the program state and the ecosystem reserve
     *
     * Access Control: First caller; becomes the admin
     */
    pub fn initialize_program_state(ctx: Context<InitializeProgramState>) -> Result<()> {
        handle_initialize_program_state(ctx)
    }

    /**
     * Mints the monthly supply into the token pool and opens an epoch
     *
     * Access Control: Admin only
     */
    pub fn unlock_tokens(ctx: Context<UnlockTokens>) -> Result<()> {
        handle_unlock_tokens(ctx)
    }

    /**
     * Registers the signer as the contributor behind `handle`
     *
     * @param handle - Contributor handle (e.g. a GitHub login), 1 to 32 bytes
     *
     * Access Control: Self-registration by the contributor
     */
    pub fn create_contributor_account(
        ctx: Context<CreateContributorAccount>,
        handle: String,
    ) -> Result<()> {
        handle_create_contributor_account(ctx, handle)
    }

    /**
     * Adds points to a contributor and to the global counter
     *
     * Access Control: Admin only
     */
    pub fn log_contributor_points(
        ctx: Context<LogContributorPoints>,
        handle: String,
        points: u64,
    ) -> Result<()> {
        handle_log_contributor_points(ctx, handle, points)
    }

    /**
     * Pays the contributor their share of the pool and zeroes their points
     *
     * Access Control: The registered contributor only
     */
    pub fn claim_contributor_tokens(
        ctx: Context<ClaimContributorTokens>,
        handle: String,
    ) -> Result<()> {
        handle_claim_contributor_tokens(ctx, handle)
    }

    /**
     * Sweeps the pool into the ecosystem reserve and starts a new epoch
     *
     * Access Control: Admin only
     */
    pub fn reset_program_state(ctx: Context<ResetProgramState>) -> Result<()> {
        handle_reset_program_state(ctx)
    }
}
