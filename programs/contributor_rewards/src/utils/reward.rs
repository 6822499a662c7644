use anchor_lang::prelude::*;
use crate::constants::MONTHLY_UNLOCK_SUPPLY;
use crate::error::*;

/**
 * Calculates a contributor's share of the token pool
 *
 * award = vault_balance * points / global_points, rounded down
 *
 * Guarantees:
 * - zero when the contributor has no points
 * - never more than vault_balance, since points <= global_points
 * - claims settled one after another never overdraw the pool: every claim
 *   removes its points from global_points, so the last outstanding
 *   contributor receives exactly the remaining balance
 *
 * @param vault_balance - current token pool balance
 * @param points - the claiming contributor's points
 * @param global_points - outstanding points of all contributors, including `points`
 */
pub fn calculate_award(vault_balance: u64, points: u64, global_points: u64) -> Result<u64> {
    if points == 0 || vault_balance == 0 {
        return Ok(0);
    }

    // A contributor can never hold more than the global total
    require!(points <= global_points, ContributorRewardsError::ArithmeticUnderflow);

    let award = (vault_balance as u128)
        .checked_mul(points as u128)
        .ok_or(ContributorRewardsError::ArithmeticOverflow)?
        .checked_div(global_points as u128)
        .ok_or(ContributorRewardsError::ArithmeticUnderflow)?;

    let award = u64::try_from(award).map_err(|_| ContributorRewardsError::ArithmeticOverflow)?;
    Ok(award)
}

/// Tokens minted by one unlock, in base units of a mint with `decimals`
pub fn unlock_supply(decimals: u8) -> Result<u64> {
    let scale = 10u64
        .checked_pow(decimals as u32)
        .ok_or(ContributorRewardsError::ArithmeticOverflow)?;
    let supply = MONTHLY_UNLOCK_SUPPLY
        .checked_mul(scale)
        .ok_or(ContributorRewardsError::ArithmeticOverflow)?;
    Ok(supply)
}
