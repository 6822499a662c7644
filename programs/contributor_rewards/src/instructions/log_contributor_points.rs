use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for logging contributor points
 *
 * Called by the admin (the webhook bridge's key) when a pull request is merged.
 * This is the only way points enter the program.
 *
 * Access Control: Only the admin
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(handle: String)]
pub struct LogContributorPoints<'info> {
    #[account(
        mut,
        seeds = [PROGRAM_STATE_SEED.as_bytes()],
        bump = program_state.state_bump,
        constraint = program_state.is_admin(&authority.key()) @ ContributorRewardsError::Unauthorized
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

    pub authority: Signer<'info>,
}

/**
 * Credits points to a contributor
 *
 * @param ctx - The account context
 * @param handle - Contributor handle used for the record derivation
 * @param points - Points to add; overflow of either counter aborts
 */
pub fn handle_log_contributor_points(
    ctx: Context<LogContributorPoints>,
    handle: String,
    points: u64,
) -> Result<()> {
    let contribution_info = ctx.accounts.contribution.to_account_info();
    let mut contribution = Contribution::load(&contribution_info)?;

    let program_state = &mut ctx.accounts.program_state;
    let accumulated_points = program_state.log_points(&mut contribution, points)?;
    contribution.store(&contribution_info)?;

    let event = ContributorPointsLogged {
        contribution: contribution_info.key(),
        handle,
        points,
        accumulated_points,
        global_contribution_points: program_state.global_contribution_points,
    };
    emit_cpi!(event);

    Ok(())
}
