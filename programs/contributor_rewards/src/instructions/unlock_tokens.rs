use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{mint_to_vault, unlock_supply};

/**
 * Account context for unlocking an epoch's tokens
 *
 * Creates the token pool vault on first use and mints the monthly supply into it.
 *
 * Access Control: Only the admin, who must also be the mint authority
 *
 * Business Logic:
 * - The first unlock is allowed TOKEN_UNLOCK_INTERVAL after initialization
 * - Later unlocks require the previous epoch to be reset and
 *   TOKEN_UNLOCK_INTERVAL to have passed since the previous unlock
 * - Opens the claim window at unlock + TOKEN_CLAIM_DELAY and the reset
 *   window at unlock + RESET_COOLDOWN
 */
#[event_cpi]
#[derive(Accounts)]
pub struct UnlockTokens<'info> {
    #[account(
        mut,
        seeds = [PROGRAM_STATE_SEED.as_bytes()],
        bump = program_state.state_bump,
        constraint = program_state.is_admin(&admin.key()) @ ContributorRewardsError::Unauthorized
    )]
    pub program_state: Account<'info, ProgramState>,

    /// Token pool vault (PDA)
    /// - Its own token authority, so only this program can sign transfers out
    /// - Derived from: ["token_pool"]
    #[account(
        init_if_needed,
        payer = admin,
        token::mint = token_pool_mint,
        token::authority = token_pool_account,
        token::token_program = token_program,
        seeds = [TOKEN_POOL_SEED.as_bytes()],
        bump
    )]
    pub token_pool_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        mint::token_program = token_program,
        address = program_state.token_pool_mint @ ContributorRewardsError::TokenMintMismatch
    )]
    pub token_pool_mint: InterfaceAccount<'info, Mint>,

    /// Admin and mint authority
    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_unlock_tokens(ctx: Context<UnlockTokens>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let amount = unlock_supply(ctx.accounts.token_pool_mint.decimals)?;

    // ===== EFFECTS PHASE (State Updates) =====

    let program_state = &mut ctx.accounts.program_state;
    program_state.unlock(
        ctx.accounts.token_pool_account.key(),
        ctx.bumps.token_pool_account,
        amount,
        now,
    )?;

    let event = TokensUnlocked {
        admin: ctx.accounts.admin.key(),
        token_pool_account: program_state.token_pool_account,
        epoch: program_state.epoch,
        amount,
        claim_after: program_state.claim_after,
        reset_after: program_state.reset_after,
    };

    // ===== INTERACTIONS PHASE (Mint) =====

    mint_to_vault(
        ctx.accounts.token_pool_mint.to_account_info(),
        ctx.accounts.token_pool_account.to_account_info(),
        ctx.accounts.admin.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
    )?;

    emit_cpi!(event);

    Ok(())
}
