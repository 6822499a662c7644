use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::validate_handle;

/**
 * Account context for registering a contributor
 *
 * The contributor signs for themselves. Their associated token account for the
 * reward mint is created if needed and recorded as the claim destination.
 *
 * Derivation: ["contributor", handle]
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(handle: String)]
pub struct CreateContributorAccount<'info> {
    #[account(
        seeds = [PROGRAM_STATE_SEED.as_bytes()],
        bump = program_state.state_bump,
        has_one = token_pool_mint @ ContributorRewardsError::TokenMintMismatch
    )]
    pub program_state: Account<'info, ProgramState>,

    /// Contribution record; an existing record reaches the handler and fails with AlreadyExists
    #[account(
        init_if_needed,
        payer = signer,
        space = Contribution::LEN,
        seeds = [CONTRIBUTOR_SEED.as_bytes(), handle.as_bytes()],
        bump
    )]
    pub contribution: Account<'info, Contribution>,

    #[account(
        init_if_needed,
        payer = signer,
        associated_token::mint = token_pool_mint,
        associated_token::authority = signer,
        associated_token::token_program = token_program,
    )]
    pub contributor_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mint::token_program = token_program,
    )]
    pub token_pool_mint: InterfaceAccount<'info, Mint>,

    /// The contributor
    #[account(mut)]
    pub signer: Signer<'info>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handle_create_contributor_account(
    ctx: Context<CreateContributorAccount>,
    handle: String,
) -> Result<()> {
    validate_handle(&handle)?;

    let epoch = ctx.accounts.program_state.epoch;
    let contribution = &mut ctx.accounts.contribution;
    contribution.initialize(
        ctx.accounts.signer.key(),
        ctx.accounts.contributor_token_account.key(),
        epoch,
        ctx.bumps.contribution,
    )?;

    let event = ContributorCreated {
        contribution: contribution.key(),
        contributor: contribution.contributor_address,
        handle,
        token_pool_account: contribution.token_pool_account,
    };
    emit_cpi!(event);

    Ok(())
}
