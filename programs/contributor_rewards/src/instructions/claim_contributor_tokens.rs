use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{read_vault_balance, transfer_from_vault};

/**
 * Account context for claiming contributor tokens
 *
 * Pays the contributor their share of the token pool and zeroes their points.
 *
 * Access Control: Only the contributor recorded in the contribution record
 *
 * Business Logic:
 * - The epoch must be unlocked (VaultNotReady otherwise)
 * - Claims are accepted strictly after unlocked_at + TOKEN_CLAIM_DELAY
 * - award = pool_balance * points / global_points (see utils::calculate_award)
 * - A nonzero share that rounds down to zero tokens fails with ClaimTooSmall
 * - The claimed points leave the global counter
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(handle: String)]
pub struct ClaimContributorTokens<'info> {
    #[account(
        mut,
        seeds = [PROGRAM_STATE_SEED.as_bytes()],
        bump = program_state.state_bump,
        has_one = token_pool_mint @ ContributorRewardsError::TokenMintMismatch
    )]
    pub program_state: Account<'info, ProgramState>,

    /// Contribution record of the handle
    /// CHECK: Deserialized in the handler so that a missing record reports NotFound
    #[account(
        mut,
        seeds = [CONTRIBUTOR_SEED.as_bytes(), handle.as_bytes()],
        bump
    )]
    pub contribution: UncheckedAccount<'info>,

    /// Token pool vault
    /// CHECK: Does not exist before the first unlock; validated when its balance is read
    #[account(
        mut,
        seeds = [TOKEN_POOL_SEED.as_bytes()],
        bump
    )]
    pub token_pool_account: UncheckedAccount<'info>,

    /// Destination recorded at contributor creation
    #[account(
        mut,
        token::mint = token_pool_mint,
        token::token_program = token_program,
    )]
    pub contributor_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mint::token_program = token_program,
    )]
    pub token_pool_mint: InterfaceAccount<'info, Mint>,

    pub signer: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_claim_contributor_tokens(
    ctx: Context<ClaimContributorTokens>,
    _handle: String,
) -> Result<()> {
    let contribution_info = ctx.accounts.contribution.to_account_info();
    let mut contribution = Contribution::load(&contribution_info)?;

    // ===== VALIDATION PHASE =====

    require_keys_eq!(
        ctx.accounts.signer.key(),
        contribution.contributor_address,
        ContributorRewardsError::Unauthorized
    );
    require_keys_eq!(
        ctx.accounts.contributor_token_account.key(),
        contribution.token_pool_account,
        ContributorRewardsError::InvalidTokenAccount
    );

    let vault_balance = read_vault_balance(
        &ctx.accounts.token_pool_account.to_account_info(),
        &ctx.accounts.token_pool_mint.key(),
        &ctx.accounts.token_program.key(),
    )?;
    let now = Clock::get()?.unix_timestamp;

    // ===== EFFECTS PHASE (State Updates) =====

    let program_state = &mut ctx.accounts.program_state;
    let points = contribution.effective_points(program_state.epoch);
    let amount = program_state.claim(&mut contribution, vault_balance, now)?;
    contribution.store(&contribution_info)?;

    let event = ContributorTokensClaimed {
        contribution: contribution_info.key(),
        contributor: contribution.contributor_address,
        points,
        amount,
        global_contribution_points: program_state.global_contribution_points,
    };

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    if amount > 0 {
        let seeds = &[TOKEN_POOL_SEED.as_bytes(), &[ctx.bumps.token_pool_account]];
        let signer = &[&seeds[..]];

        transfer_from_vault(
            ctx.accounts.token_pool_account.to_account_info(),
            ctx.accounts.contributor_token_account.to_account_info(),
            ctx.accounts.token_pool_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            amount,
            ctx.accounts.token_pool_mint.decimals,
            signer,
        )?;
    }

    emit_cpi!(event);

    Ok(())
}
