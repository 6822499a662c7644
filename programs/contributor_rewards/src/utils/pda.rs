use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;

/**
 * Address derivation
 *
 * Shared by the instruction contexts, clients and tests. Every address is
 * find_program_address(namespace tag [+ seed], program id).
 */

pub fn find_program_state_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PROGRAM_STATE_SEED.as_bytes()], &crate::ID)
}

/// Contribution record of a contributor handle; the handle must pass `validate_handle`
pub fn find_contributor_address(handle: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[CONTRIBUTOR_SEED.as_bytes(), handle.as_bytes()],
        &crate::ID,
    )
}

pub fn find_token_pool_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TOKEN_POOL_SEED.as_bytes()], &crate::ID)
}

pub fn find_ecosystem_reserve_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ECOSYSTEM_RESERVE_SEED.as_bytes()], &crate::ID)
}

/// A handle is used as a raw PDA seed, so it must be non-empty and at most 32 bytes
pub fn validate_handle(handle: &str) -> Result<()> {
    require!(
        !handle.is_empty() && handle.len() <= MAX_HANDLE_LEN,
        ContributorRewardsError::InvalidContributorHandle
    );
    Ok(())
}
