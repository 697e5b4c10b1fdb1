use anchor_lang::prelude::*;

/// Event emitted when a new distributor is created
#[event]
pub struct DistributorCreated {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Nonce of the distributor
    pub nonce: u32,
    /// Owner of the distributor
    pub owner: Pubkey,
    /// Token mint address
    pub token_mint: Pubkey,
    /// Token vault address
    pub token_vault: Pubkey,
    /// Merkle root the distributor is committed to
    pub merkle_root: [u8; 32],
    /// Domain separator claim authorizations are bound to
    pub domain_separator: [u8; 32],
    /// Initial total amount of tokens deposited
    pub initial_total_amount: u64,
}

/// Event emitted exactly once per successful claim
#[event]
pub struct ClaimSettled {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Account named in the claim message
    pub account: Pubkey,
    /// Amount of tokens transferred to the account
    pub amount: u64,
    /// Total amount claimed from the distributor by all accounts
    pub total_claimed: u64,
}
