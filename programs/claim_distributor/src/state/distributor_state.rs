use anchor_lang::prelude::*;

use crate::utils::{message_hash, ClaimMessage};

/**
 * Main distributor state account
 *
 * This struct holds the immutable commitment of a claim distribution: the
 * merkle root of all eligible (account, amount) pairs, the token being
 * distributed and the signing domain claim authorizations are bound to.
 *
 * Derivation: ["distributor", token_mint, owner, nonce]
 *
 * Lifecycle:
 * 1. Created during create_distributor instruction
 * 2. total_claimed incremented by every successful claim
 *
 * Design Notes:
 * - No instruction writes merkle_root, token_mint or domain_separator after creation
 * - The distributor is never closed, so claim status PDAs stay meaningful
 */
#[account]
#[derive(Default, Debug)]
pub struct TokenDistributor {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation during claim operations
    pub bump: u8,

    /// Nonce number for this distributor
    /// - Allows multiple distributions for the same token/owner pair
    pub nonce: u32,

    /// Owner who created and funded the distributor
    pub owner: Pubkey,

    /// Token mint address
    /// - Specifies which token is being distributed
    pub token_mint: Pubkey,

    /// Token vault account address
    /// - PDA that holds the tokens to be distributed
    /// - Derived from: ["vault", distributor_key]
    pub token_vault: Pubkey,

    /// Initial total amount of tokens deposited
    pub initial_total_amount: u64,

    /// Total amount of tokens claimed by all accounts
    pub total_claimed: u64,

    /// Merkle root for claim verification
    /// - Leaves are keccak(keccak(account || uint256(amount)))
    pub merkle_root: [u8; 32],

    /// Domain separator for claim authorizations
    /// - Derived once from the program id and this distributor's address
    pub domain_separator: [u8; 32],
}

impl TokenDistributor {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<TokenDistributor>();

    /// Typed-message hash an account must sign to authorize a relayed claim
    pub fn message_hash(&self, account: &Pubkey, amount: u64) -> [u8; 32] {
        message_hash(&self.domain_separator, &ClaimMessage::new(*account, amount))
    }
}
