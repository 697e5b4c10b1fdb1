use anchor_lang::prelude::*;

use crate::error::ClaimDistributorError;
use crate::settlement::ClaimRegistry;

/**
 * Individual claim status account
 *
 * The claim registry entry for one account of one distribution. It holds a
 * single write-once flag: false until the account's claim settles, true forever
 * after.
 *
 * Derivation: ["claim", distributor_key, account]
 *
 * Lifecycle:
 * 1. Created on the first claim attempt (using init_if_needed)
 * 2. is_claimed flipped to true by the settling claim
 * 3. Never reset and never closed
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimStatus {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Whether the account has claimed its allocation
    pub is_claimed: bool,
}

impl ClaimStatus {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimStatus>();
}

/// Registry view over a single claim status PDA
///
/// The PDA seeds already bind the entry to one account, so lookups for any
/// other key are rejected instead of silently answering for the wrong account.
pub struct ClaimStatusEntry<'a> {
    pub account: Pubkey,
    pub status: &'a mut ClaimStatus,
}

impl<'a> ClaimStatusEntry<'a> {
    pub fn new(account: Pubkey, status: &'a mut ClaimStatus) -> Self {
        Self { account, status }
    }
}

impl ClaimRegistry for ClaimStatusEntry<'_> {
    fn is_claimed(&self, account: &Pubkey) -> Result<bool> {
        require_keys_eq!(
            *account,
            self.account,
            ClaimDistributorError::ClaimStatusMismatch
        );
        Ok(self.status.is_claimed)
    }

    fn mark_claimed(&mut self, account: &Pubkey) -> Result<()> {
        require_keys_eq!(
            *account,
            self.account,
            ClaimDistributorError::ClaimStatusMismatch
        );
        self.status.is_claimed = true;
        Ok(())
    }
}
