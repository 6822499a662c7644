use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{read_vault_balance, transfer_from_vault};

/**
 * Account context for resetting the program state
 *
 * Ends the current distribution epoch: the whole token pool moves to the
 * ecosystem reserve and every unclaimed point is forfeited.
 *
 * Access Control: Only the admin
 *
 * Business Logic:
 * - The epoch must be unlocked (VaultNotReady otherwise)
 * - Accepted strictly after unlocked_at + RESET_COOLDOWN
 * - Afterwards a new epoch can be unlocked
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ResetProgramState<'info> {
    #[account(
        mut,
        seeds = [PROGRAM_STATE_SEED.as_bytes()],
        bump = program_state.state_bump,
        has_one = token_pool_mint @ ContributorRewardsError::TokenMintMismatch,
        has_one = ecosystem_reserve_account @ ContributorRewardsError::InvalidTokenAccount,
        constraint = program_state.is_admin(&admin.key()) @ ContributorRewardsError::Unauthorized
    )]
    pub program_state: Account<'info, ProgramState>,

    /// Token pool vault
    /// CHECK: Does not exist before the first unlock; validated when its balance is read
    #[account(
        mut,
        seeds = [TOKEN_POOL_SEED.as_bytes()],
        bump
    )]
    pub token_pool_account: UncheckedAccount<'info>,

    #[account(
        mut,
        token::mint = token_pool_mint,
        token::authority = ecosystem_reserve_account,
        token::token_program = token_program,
        seeds = [ECOSYSTEM_RESERVE_SEED.as_bytes()],
        bump = program_state.ecosystem_reserve_account_bump
    )]
    pub ecosystem_reserve_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mint::token_program = token_program,
    )]
    pub token_pool_mint: InterfaceAccount<'info, Mint>,

    pub admin: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_reset_program_state(ctx: Context<ResetProgramState>) -> Result<()> {
    let vault_balance = read_vault_balance(
        &ctx.accounts.token_pool_account.to_account_info(),
        &ctx.accounts.token_pool_mint.key(),
        &ctx.accounts.token_program.key(),
    )?;
    let now = Clock::get()?.unix_timestamp;

    // ===== EFFECTS PHASE (State Updates) =====

    let program_state = &mut ctx.accounts.program_state;
    let forfeited_points = program_state.reset(vault_balance, now)?;

    let event = ProgramStateReset {
        admin: ctx.accounts.admin.key(),
        epoch: program_state.epoch,
        amount_reserved: vault_balance,
        forfeited_points,
    };

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    if vault_balance > 0 {
        let seeds = &[TOKEN_POOL_SEED.as_bytes(), &[ctx.bumps.token_pool_account]];
        let signer = &[&seeds[..]];

        transfer_from_vault(
            ctx.accounts.token_pool_account.to_account_info(),
            ctx.accounts.ecosystem_reserve_account.to_account_info(),
            ctx.accounts.token_pool_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            vault_balance,
            ctx.accounts.token_pool_mint.decimals,
            signer,
        )?;
    }

    emit_cpi!(event);

    Ok(())
}
