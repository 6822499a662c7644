use anchor_lang::prelude::*;

#[error_code]
pub enum ContributorRewardsError {
    // Access control errors
    #[msg("Unauthorized: You do not have permission to perform this action")]
    Unauthorized,

    // Record lifecycle errors
    #[msg("Program state is already initialized")]
    AlreadyInitialized,
    #[msg("Contributor account already exists")]
    AlreadyExists,
    #[msg("Contributor account not found")]
    NotFound,
    #[msg("Contributor handle must be between 1 and 32 bytes")]
    InvalidContributorHandle,

    // Time validation errors
    #[msg("Early Token Unlock: the unlock interval has not elapsed")]
    EarlyUnlock,
    #[msg("Tokens are already unlocked for the current epoch")]
    AlreadyUnlocked,
    #[msg("Early Claim: Cannot claim tokens before the unlock period has elapsed")]
    EarlyTokenClaim,
    #[msg("Early Reset: Cannot perform reset operation before the required time period")]
    EarlyReset,

    // Vault errors
    #[msg("Token pool is not unlocked for the current epoch")]
    VaultNotReady,
    #[msg("Token account does not match the recorded destination")]
    InvalidTokenAccount,
    #[msg("Token mint does not match the program's token mint")]
    TokenMintMismatch,
    #[msg("Claim would pay zero tokens; points are kept for a later claim")]
    ClaimTooSmall,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Arithmetic underflow")]
    ArithmeticUnderflow,
}
