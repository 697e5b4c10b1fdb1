use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, TransferChecked};

use crate::error::ClaimDistributorError;
use crate::settlement::TokenTransfer;

/// Universal token transfer function that supports both SPL Token and Token 2022
pub fn transfer_token<'a>(
    authority: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from,
        mint,
        to,
        authority,
    };

    let cpi_ctx = match signer_seeds {
        Some(seeds) => CpiContext::new_with_signer(token_program, cpi_accounts, seeds),
        None => CpiContext::new(token_program, cpi_accounts),
    };

    transfer_checked(cpi_ctx, amount, decimals)
}

/// Pays claims out of a distributor vault, signing as the distributor PDA
pub struct VaultTransfer<'a, 'info> {
    pub distributor: AccountInfo<'info>,
    pub vault: AccountInfo<'info>,
    pub recipient_token_account: AccountInfo<'info>,
    /// Token authority of `recipient_token_account`
    pub recipient_owner: Pubkey,
    pub mint: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub decimals: u8,
    /// Vault balance observed when the claim started
    pub vault_balance: u64,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl TokenTransfer for VaultTransfer<'_, '_> {
    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(
            *to,
            self.recipient_owner,
            ClaimDistributorError::RecipientMismatch
        );
        require!(
            self.vault_balance >= amount,
            ClaimDistributorError::InsufficientVaultBalance
        );
        transfer_token(
            self.distributor.clone(),
            self.vault.clone(),
            self.recipient_token_account.clone(),
            self.mint.clone(),
            self.token_program.clone(),
            amount,
            self.decimals,
            Some(self.signer_seeds),
        )
    }
}
