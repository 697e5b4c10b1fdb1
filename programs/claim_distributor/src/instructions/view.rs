use anchor_lang::prelude::*;
use crate::state::*;

/**
 * Account context for read-only distributor queries
 *
 * Values are returned through the transaction return data, so clients can
 * read them with a simulated transaction.
 */
#[derive(Accounts)]
pub struct ViewDistributor<'info> {
    /// The distributor being queried
    pub distributor: Account<'info, TokenDistributor>,
}

/// Typed-message hash `account` must sign to authorize a relayed claim of `amount`
pub fn handle_get_message_hash(
    ctx: Context<ViewDistributor>,
    account: Pubkey,
    amount: u64,
) -> Result<[u8; 32]> {
    Ok(ctx.accounts.distributor.message_hash(&account, amount))
}

/// Merkle root the distributor was created with
pub fn handle_get_merkle_root(ctx: Context<ViewDistributor>) -> Result<[u8; 32]> {
    Ok(ctx.accounts.distributor.merkle_root)
}

/// Mint of the token the distributor pays out
pub fn handle_get_token(ctx: Context<ViewDistributor>) -> Result<Pubkey> {
    Ok(ctx.accounts.distributor.token_mint)
}
