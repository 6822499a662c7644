use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::state::Contribution;
use crate::utils::calculate_award;

/**
 * Global program state account
 *
 * Singleton holding the rewards configuration, the aggregate point counter and
 * the timing gates of the current distribution epoch.
 *
 * Derivation: ["program_state"]
 *
 * Lifecycle:
 * 1. Created by initialize_program_state (admin = signer)
 * 2. unlock_tokens opens an epoch and fills the token pool
 * 3. log_contributor_points / claim_contributor_tokens move the point counter
 * 4. reset_program_state drains the pool to the reserve and closes the epoch
 * 5. Steps 2-4 repeat for every epoch
 *
 * Invariant: global_contribution_points equals the sum of the effective points
 * of every Contribution record (see Contribution::effective_points).
 */
#[account]
#[derive(Default, Debug)]
pub struct ProgramState {
    /// Identity allowed to unlock, reset and log points
    /// - Set once at initialization
    pub admin: Pubkey,

    /// Mint of the distributed token
    pub token_pool_mint: Pubkey,

    /// Token pool vault address
    /// - Pubkey::default() until the first unlock creates the vault
    /// - Derived from: ["token_pool"]
    pub token_pool_account: Pubkey,

    /// Ecosystem reserve address
    /// - Receives the remaining pool balance on every reset
    /// - Derived from: ["ecosystem_reserve"]
    pub ecosystem_reserve_account: Pubkey,

    /// Sum of all outstanding contributor points of the current epoch
    pub global_contribution_points: u64,

    /// Distribution epoch, incremented by every reset
    /// - Points logged under an older epoch are forfeited
    pub epoch: u64,

    /// Clock reading at initialization
    pub initialized_at: i64,
    pub initialized_slot: u64,

    /// Earliest unix time at which the next unlock is accepted
    pub unlock_after: i64,

    /// Unix time of the unlock that opened the current epoch
    pub unlocked_at: i64,

    /// Claims are accepted strictly after this unix time
    pub claim_after: i64,

    /// Reset is accepted strictly after this unix time
    pub reset_after: i64,

    /// Lifetime token counters
    pub total_unlocked: u64,
    pub total_claimed: u64,
    pub total_reserved: u64,

    /// Whether the current epoch has been unlocked and not yet reset
    pub unlocked: bool,

    /// Bump seeds, saved to avoid recomputation when signing for the vaults
    /// - token_pool_account_bump is 0 until the vault exists
    pub token_pool_account_bump: u8,
    pub ecosystem_reserve_account_bump: u8,
    pub state_bump: u8,
}

impl ProgramState {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ProgramState>();

    pub fn is_initialized(&self) -> bool {
        self.admin != Pubkey::default()
    }

    pub fn is_admin(&self, key: &Pubkey) -> bool {
        self.is_initialized() && self.admin == *key
    }

    pub fn has_vault(&self) -> bool {
        self.token_pool_account_bump != 0
    }

    /**
     * Writes the initial configuration
     *
     * The ecosystem reserve is fixed here; the token pool stays unset until
     * the first unlock. The first unlock is gated TOKEN_UNLOCK_INTERVAL after
     * the initialization time.
     */
    pub fn initialize(
        &mut self,
        admin: Pubkey,
        token_pool_mint: Pubkey,
        ecosystem_reserve_account: Pubkey,
        ecosystem_reserve_account_bump: u8,
        state_bump: u8,
        clock: &Clock,
    ) -> Result<()> {
        require!(!self.is_initialized(), ContributorRewardsError::AlreadyInitialized);

        let unlock_after = clock
            .unix_timestamp
            .checked_add(TOKEN_UNLOCK_INTERVAL)
            .ok_or(ContributorRewardsError::ArithmeticOverflow)?;

        *self = ProgramState {
            admin,
            token_pool_mint,
            token_pool_account: Pubkey::default(),
            ecosystem_reserve_account,
            initialized_at: clock.unix_timestamp,
            initialized_slot: clock.slot,
            unlock_after,
            ecosystem_reserve_account_bump,
            state_bump,
            ..ProgramState::default()
        };

        Ok(())
    }

    /**
     * Opens a distribution epoch
     *
     * @param token_pool_account - vault address, recorded on the first unlock only
     * @param token_pool_account_bump - vault bump, recorded on the first unlock only
     * @param amount - tokens minted into the vault by this unlock
     * @param now - current unix timestamp
     */
    pub fn unlock(
        &mut self,
        token_pool_account: Pubkey,
        token_pool_account_bump: u8,
        amount: u64,
        now: i64,
    ) -> Result<()> {
        require!(!self.unlocked, ContributorRewardsError::AlreadyUnlocked);
        require!(now >= self.unlock_after, ContributorRewardsError::EarlyUnlock);

        if self.has_vault() {
            require_keys_eq!(
                self.token_pool_account,
                token_pool_account,
                ContributorRewardsError::InvalidTokenAccount
            );
        }

        let claim_after = now
            .checked_add(TOKEN_CLAIM_DELAY)
            .ok_or(ContributorRewardsError::ArithmeticOverflow)?;
        let reset_after = now
            .checked_add(RESET_COOLDOWN)
            .ok_or(ContributorRewardsError::ArithmeticOverflow)?;
        let unlock_after = now
            .checked_add(TOKEN_UNLOCK_INTERVAL)
            .ok_or(ContributorRewardsError::ArithmeticOverflow)?;
        let total_unlocked = self
            .total_unlocked
            .checked_add(amount)
            .ok_or(ContributorRewardsError::ArithmeticOverflow)?;

        if !self.has_vault() {
            self.token_pool_account = token_pool_account;
            self.token_pool_account_bump = token_pool_account_bump;
        }
        self.unlocked = true;
        self.unlocked_at = now;
        self.claim_after = claim_after;
        self.reset_after = reset_after;
        self.unlock_after = unlock_after;
        self.total_unlocked = total_unlocked;

        Ok(())
    }

    /// Credits points to a contributor and to the global counter.
    /// Returns the contributor's new accumulated points.
    pub fn log_points(&mut self, contribution: &mut Contribution, points: u64) -> Result<u64> {
        let accumulated_points = contribution
            .effective_points(self.epoch)
            .checked_add(points)
            .ok_or(ContributorRewardsError::ArithmeticOverflow)?;
        let global_contribution_points = self
            .global_contribution_points
            .checked_add(points)
            .ok_or(ContributorRewardsError::ArithmeticOverflow)?;

        contribution.accumulated_points = accumulated_points;
        contribution.epoch = self.epoch;
        self.global_contribution_points = global_contribution_points;

        Ok(accumulated_points)
    }

    /**
     * Settles a contributor's claim against the current pool balance
     *
     * Zeroes the contributor's points and removes them from the global counter.
     * The caller transfers the returned award out of the vault.
     *
     * Points whose share rounds down to zero tokens are not settled: the claim
     * fails with ClaimTooSmall and the record keeps them.
     *
     * @param contribution - the claiming contributor's record
     * @param vault_balance - current token pool balance
     * @param now - current unix timestamp
     *
     * @returns the award in token base units
     */
    pub fn claim(
        &mut self,
        contribution: &mut Contribution,
        vault_balance: u64,
        now: i64,
    ) -> Result<u64> {
        require!(self.unlocked, ContributorRewardsError::VaultNotReady);
        require!(now > self.claim_after, ContributorRewardsError::EarlyTokenClaim);

        let points = contribution.effective_points(self.epoch);
        let award = calculate_award(vault_balance, points, self.global_contribution_points)?;
        require!(points == 0 || award > 0, ContributorRewardsError::ClaimTooSmall);

        let global_contribution_points = self
            .global_contribution_points
            .checked_sub(points)
            .ok_or(ContributorRewardsError::ArithmeticUnderflow)?;
        let total_claimed = self
            .total_claimed
            .checked_add(award)
            .ok_or(ContributorRewardsError::ArithmeticOverflow)?;
        let contributor_total_claimed = contribution
            .total_claimed
            .checked_add(award)
            .ok_or(ContributorRewardsError::ArithmeticOverflow)?;

        self.global_contribution_points = global_contribution_points;
        self.total_claimed = total_claimed;
        contribution.accumulated_points = 0;
        contribution.epoch = self.epoch;
        contribution.total_claimed = contributor_total_claimed;
        contribution.last_claim_at = now;

        Ok(award)
    }

    /**
     * Closes the current epoch
     *
     * Outstanding points are forfeited by moving to the next epoch; the caller
     * sweeps the whole vault balance into the ecosystem reserve.
     *
     * @returns the number of points forfeited
     */
    pub fn reset(&mut self, vault_balance: u64, now: i64) -> Result<u64> {
        require!(self.unlocked, ContributorRewardsError::VaultNotReady);
        require!(now > self.reset_after, ContributorRewardsError::EarlyReset);

        let epoch = self
            .epoch
            .checked_add(1)
            .ok_or(ContributorRewardsError::ArithmeticOverflow)?;
        let total_reserved = self
            .total_reserved
            .checked_add(vault_balance)
            .ok_or(ContributorRewardsError::ArithmeticOverflow)?;
        let forfeited_points = self.global_contribution_points;

        self.global_contribution_points = 0;
        self.epoch = epoch;
        self.total_reserved = total_reserved;
        self.unlocked = false;

        Ok(forfeited_points)
    }
}
