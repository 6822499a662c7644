use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for initializing the program state
 *
 * Creates the singleton program state and the ecosystem reserve token account.
 * The token pool vault is not created here; the first unlock creates it.
 *
 * Access Control: Anyone may initialize once; the signer becomes the admin
 *
 * Both accounts use init_if_needed so that a second initialization reaches the
 * handler and fails with AlreadyInitialized instead of a system program error.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct InitializeProgramState<'info> {
    /// The program state account (PDA)
    /// - Derived from: ["program_state"]
    #[account(
        init_if_needed,
        payer = signer,
        space = ProgramState::LEN,
        seeds = [PROGRAM_STATE_SEED.as_bytes()],
        bump
    )]
    pub program_state: Account<'info, ProgramState>,

    /// Ecosystem reserve token account (PDA)
    /// - Its own token authority
    /// - Derived from: ["ecosystem_reserve"]
    #[account(
        init_if_needed,
        payer = signer,
        token::mint = token_pool_mint,
        token::authority = ecosystem_reserve_account,
        token::token_program = token_program,
        seeds = [ECOSYSTEM_RESERVE_SEED.as_bytes()],
        bump
    )]
    pub ecosystem_reserve_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Mint of the token distributed to contributors
    #[account(
        mint::token_program = token_program,
    )]
    pub token_pool_mint: InterfaceAccount<'info, Mint>,

    /// Pays for the accounts and becomes the admin
    #[account(mut)]
    pub signer: Signer<'info>,

    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_initialize_program_state(ctx: Context<InitializeProgramState>) -> Result<()> {
    let clock = Clock::get()?;

    let program_state = &mut ctx.accounts.program_state;
    program_state.initialize(
        ctx.accounts.signer.key(),
        ctx.accounts.token_pool_mint.key(),
        ctx.accounts.ecosystem_reserve_account.key(),
        ctx.bumps.ecosystem_reserve_account,
        ctx.bumps.program_state,
        &clock,
    )?;

    let event = ProgramStateInitialized {
        program_state: program_state.key(),
        admin: program_state.admin,
        token_pool_mint: program_state.token_pool_mint,
        ecosystem_reserve_account: program_state.ecosystem_reserve_account,
        unlock_after: program_state.unlock_after,
    };
    emit_cpi!(event);

    Ok(())
}
