use anchor_lang::prelude::*;
use crate::error::*;

/**
 * Per-contributor record
 *
 * Tracks the points a contributor accrued since their last claim and where
 * their tokens are paid to.
 *
 * Derivation: ["contributor", handle]
 *
 * Lifecycle:
 * 1. Created by the contributor through create_contributor_account
 * 2. Credited by log_contributor_points
 * 3. Zeroed by claim_contributor_tokens
 * 4. Never closed
 *
 * Points are only meaningful for the epoch they were logged in; a reset moves
 * the program to the next epoch and older points count as zero.
 */
#[account]
#[derive(Default, Debug)]
pub struct Contribution {
    /// Wallet of the contributor, the only signer allowed to claim
    pub contributor_address: Pubkey,

    /// Associated token account receiving claimed tokens
    pub token_pool_account: Pubkey,

    /// Points accrued in `epoch` and not yet claimed
    pub accumulated_points: u64,

    /// Program epoch the accumulated points belong to
    pub epoch: u64,

    /// Lifetime tokens paid to this contributor
    pub total_claimed: u64,

    /// Unix time of the last successful claim, 0 if none
    pub last_claim_at: i64,

    pub bump: u8,
}

impl Contribution {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Contribution>();

    pub fn is_initialized(&self) -> bool {
        self.contributor_address != Pubkey::default()
    }

    pub fn initialize(
        &mut self,
        contributor_address: Pubkey,
        token_pool_account: Pubkey,
        epoch: u64,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_initialized(), ContributorRewardsError::AlreadyExists);

        *self = Contribution {
            contributor_address,
            token_pool_account,
            accumulated_points: 0,
            epoch,
            total_claimed: 0,
            last_claim_at: 0,
            bump,
        };

        Ok(())
    }

    /// Points that still count towards the given program epoch
    pub fn effective_points(&self, epoch: u64) -> u64 {
        if self.epoch == epoch {
            self.accumulated_points
        } else {
            0
        }
    }

    /// Reads a record from a raw account, mapping a missing account to NotFound
    pub fn load(info: &AccountInfo) -> Result<Contribution> {
        if info.data_is_empty() || info.owner != &crate::ID {
            return err!(ContributorRewardsError::NotFound);
        }

        let data = info.try_borrow_data()?;
        Contribution::try_deserialize(&mut data.as_ref())
    }

    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
    }
}
