use anchor_lang::prelude::*;
use anchor_spl::token_interface::{mint_to, transfer_checked, MintTo, TokenAccount, TransferChecked};
use crate::error::*;

/// Token transfer out of a self-owned PDA vault, for both SPL Token and Token 2022
pub fn transfer_from_vault<'a>(
    vault: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from: vault.clone(),
        mint,
        to,
        authority: vault,
    };

    let cpi_ctx = CpiContext::new_with_signer(token_program, cpi_accounts, signer_seeds);

    transfer_checked(cpi_ctx, amount, decimals)
}

/// Mints freshly unlocked supply into the vault; the mint authority signs the transaction
pub fn mint_to_vault<'a>(
    mint: AccountInfo<'a>,
    vault: AccountInfo<'a>,
    mint_authority: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
) -> Result<()> {
    let cpi_accounts = MintTo {
        mint,
        to: vault,
        authority: mint_authority,
    };

    mint_to(CpiContext::new(token_program, cpi_accounts), amount)
}

/// Reads the balance of a vault passed as an unchecked account
/// - A vault that was never created reports VaultNotReady
pub fn read_vault_balance(
    vault: &AccountInfo,
    mint: &Pubkey,
    token_program: &Pubkey,
) -> Result<u64> {
    if vault.data_is_empty() {
        return err!(ContributorRewardsError::VaultNotReady);
    }
    require_keys_eq!(
        *vault.owner,
        *token_program,
        ContributorRewardsError::InvalidTokenAccount
    );

    let data = vault.try_borrow_data()?;
    let token_account = TokenAccount::try_deserialize(&mut data.as_ref())?;
    require_keys_eq!(
        token_account.mint,
        *mint,
        ContributorRewardsError::TokenMintMismatch
    );

    Ok(token_account.amount)
}
