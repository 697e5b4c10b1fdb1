use anchor_lang::prelude::*;

declare_id!("6pTKsL3kbQmzXh1QwVY3X9CZ4WcVr1rPDbGfmS9Hr7FJ");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod settlement;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;
use utils::SignatureAuthorization;

/**
 * Claim Distributor Program
 *
 * A Solana program that pays out one-time token claims against a merkle
 * commitment of eligible (account, amount) pairs.
 *
 * Key Features:
 * - Merkle membership checks over double-hashed leaves
 * - At most one claim per account, tracked by a write-once claim status PDA
 * - Relayed claims: a third party submits and pays for a claim authorized by
 *   the account's off-chain signature over a domain-separated typed message
 * - Direct claims signed by the account itself
 * - Immutable root and token for the distributor's whole lifetime
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Nonce State PDA: Tracks nonce counter for each owner
 * - Distributor PDA: Stores the merkle root, token and signing domain
 * - Token Vault PDA: Holds tokens to be distributed
 * - Claim Status PDAs: One claimed flag per (distributor, account)
 *
 * Workflow:
 * 1. Owner creates a distributor with its merkle root and deposits tokens
 * 2. Accounts claim directly, or sign get_message_hash(account, amount)
 *    and hand the signature to a relayer
 * 3. Each account's claim settles exactly once
 */
#[program]
pub mod claim_distributor {
    use super::*;

    /**
     * Creates a new claim distributor
     *
     * @param ctx - Account context containing distributor, vault, counter, and owner accounts
     * @param merkle_root - Root of the eligibility tree, fixed for the distributor's lifetime
     * @param initial_total_amount - Total amount of tokens to distribute
     *
     * Access Control: Owner only
     */
    pub fn create_distributor(
        ctx: Context<CreateDistributor>,
        merkle_root: [u8; 32],
        initial_total_amount: u64,
    ) -> Result<()> {
        handle_create_distributor(ctx, merkle_root, initial_total_amount)
    }

    /**
     * Claims tokens on behalf of an account holding a signed authorization
     *
     * @param ctx - Account context, preceded by an ed25519 verification of `authorization`
     * over get_message_hash(account, amount)
     * @param account - Account named in the claim
     * @param amount - Amount allocated to the account
     * @param proof - Array of 32-byte hashes forming the merkle proof
     * @param authorization - The account's signature
     *
     * Access Control: Any relayer; consent comes from the signature
     */
    pub fn claim_with_signature(
        ctx: Context<ClaimWithSignature>,
        account: Pubkey,
        amount: u64,
        proof: Vec<[u8; 32]>,
        authorization: SignatureAuthorization,
    ) -> Result<()> {
        handle_claim_with_signature(ctx, account, amount, proof, authorization)
    }

    /**
     * Claims tokens for the signing account
     *
     * @param ctx - Account context containing distributor, claim status, and token accounts
     * @param amount - Amount allocated to the claimant
     * @param proof - Array of 32-byte hashes forming the merkle proof
     *
     * Access Control: The eligible account itself
     */
    pub fn claim(ctx: Context<Claim>, amount: u64, proof: Vec<[u8; 32]>) -> Result<()> {
        handle_claim(ctx, amount, proof)
    }

    /// Returns the hash `account` must sign to authorize a relayed claim of `amount`
    pub fn get_message_hash(
        ctx: Context<ViewDistributor>,
        account: Pubkey,
        amount: u64,
    ) -> Result<[u8; 32]> {
        handle_get_message_hash(ctx, account, amount)
    }

    /// Returns the distributor's merkle root
    pub fn get_merkle_root(ctx: Context<ViewDistributor>) -> Result<[u8; 32]> {
        handle_get_merkle_root(ctx)
    }

    /// Returns the mint of the distributed token
    pub fn get_token(ctx: Context<ViewDistributor>) -> Result<Pubkey> {
        handle_get_token(ctx)
    }
}
