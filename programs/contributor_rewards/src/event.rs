use anchor_lang::prelude::*;

/// Event emitted when the program state is initialized
#[event]
pub struct ProgramStateInitialized {
    /// The program state account public key
    pub program_state: Pubkey,
    /// Admin allowed to unlock, reset and log points
    pub admin: Pubkey,
    /// Mint of the distributed token
    pub token_pool_mint: Pubkey,
    /// Ecosystem reserve token account
    pub ecosystem_reserve_account: Pubkey,
    /// Earliest time of the first unlock
    pub unlock_after: i64,
}

/// Event emitted when an epoch's supply is unlocked into the token pool
#[event]
pub struct TokensUnlocked {
    pub admin: Pubkey,
    pub token_pool_account: Pubkey,
    /// Epoch opened by this unlock
    pub epoch: u64,
    /// Amount of tokens minted into the pool
    pub amount: u64,
    /// Claims open strictly after this time
    pub claim_after: i64,
    /// Reset allowed strictly after this time
    pub reset_after: i64,
}

/// Event emitted when a contributor registers
#[event]
pub struct ContributorCreated {
    pub contribution: Pubkey,
    pub contributor: Pubkey,
    pub handle: String,
    /// Token account that will receive claimed tokens
    pub token_pool_account: Pubkey,
}

/// Event emitted when points are credited to a contributor
#[event]
pub struct ContributorPointsLogged {
    pub contribution: Pubkey,
    pub handle: String,
    /// Points credited by this instruction
    pub points: u64,
    /// Contributor's points after the credit
    pub accumulated_points: u64,
    /// Global points after the credit
    pub global_contribution_points: u64,
}

/// Event emitted when a contributor claims tokens
#[event]
pub struct ContributorTokensClaimed {
    pub contribution: Pubkey,
    pub contributor: Pubkey,
    /// Points settled by this claim
    pub points: u64,
    /// Tokens transferred to the contributor
    pub amount: u64,
    /// Global points remaining after the claim
    pub global_contribution_points: u64,
}

/// Event emitted when an epoch is reset
#[event]
pub struct ProgramStateReset {
    pub admin: Pubkey,
    /// Epoch that starts with this reset
    pub epoch: u64,
    /// Tokens moved to the ecosystem reserve
    pub amount_reserved: u64,
    /// Unclaimed points forfeited by the reset
    pub forfeited_points: u64,
}
