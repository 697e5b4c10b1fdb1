use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::event::*;
use crate::settlement::{settle_claim, ClaimCommitment, RecoverSigner};
use crate::utils::{ClaimMessage, VaultTransfer};

/**
 * Account context for a direct claim
 *
 * The claiming account signs the transaction itself, so no off-chain
 * authorization is needed. The claimant pays for its own claim status PDA.
 *
 * Access Control: Any signer whose (key, amount) pair is in the merkle tree
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The distributor account holding the merkle commitment
    /// - total_claimed is updated on success
    #[account(mut)]
    pub distributor: Account<'info, TokenDistributor>,

    /// Claim registry entry for this claimant
    /// - Derived from: ["claim", distributor_key, claimant_key]
    #[account(
        init_if_needed,
        payer = claimant,
        space = ClaimStatus::LEN,
        seeds = [CLAIM_SEED.as_bytes(), distributor.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_status: Account<'info, ClaimStatus>,

    /// Token vault holding the tokens to be distributed
    /// - Derived from: ["vault", distributor_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account to receive the tokens
    #[account(
        mut,
        token::mint = distributor.token_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == distributor.token_mint @ ClaimDistributorError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The account claiming its allocation
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a direct claim
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Amount allocated to the claimant in the merkle tree
 * @param proof - Sibling hashes from the claimant's leaf up to the root
 */
pub fn handle_claim(ctx: Context<Claim>, amount: u64, proof: Vec<[u8; 32]>) -> Result<()> {
    let message = ClaimMessage::new(ctx.accounts.claimant.key(), amount);

    let total_claimed = settle_from_vault(
        VaultClaim {
            distributor: &mut ctx.accounts.distributor,
            claim_status: &mut ctx.accounts.claim_status,
            claim_status_bump: ctx.bumps.claim_status,
            token_vault: &ctx.accounts.token_vault,
            recipient_token_account: &ctx.accounts.claimant_token_account,
            token_mint: &ctx.accounts.token_mint,
            token_program: &ctx.accounts.token_program,
        },
        &message,
        &proof,
        None,
    )?;

    emit_cpi!(ClaimSettled {
        distributor: ctx.accounts.distributor.key(),
        account: message.account,
        amount: message.amount,
        total_claimed,
    });

    Ok(())
}

/// Accounts both claim entry points settle against
pub(crate) struct VaultClaim<'a, 'info> {
    pub distributor: &'a mut Account<'info, TokenDistributor>,
    pub claim_status: &'a mut Account<'info, ClaimStatus>,
    pub claim_status_bump: u8,
    pub token_vault: &'a InterfaceAccount<'info, TokenAccount>,
    pub recipient_token_account: &'a InterfaceAccount<'info, TokenAccount>,
    pub token_mint: &'a InterfaceAccount<'info, Mint>,
    pub token_program: &'a Interface<'info, TokenInterface>,
}

/// Settles a claim out of the distributor vault and returns the new total claimed
pub(crate) fn settle_from_vault(
    accounts: VaultClaim,
    message: &ClaimMessage,
    proof: &[[u8; 32]],
    recover_signer: Option<RecoverSigner>,
) -> Result<u64> {
    let VaultClaim {
        distributor,
        claim_status,
        claim_status_bump,
        token_vault,
        recipient_token_account,
        token_mint,
        token_program,
    } = accounts;

    let commitment = ClaimCommitment::from(&**distributor);

    let nonce_bytes = distributor.nonce.to_le_bytes();
    let token_mint_key = distributor.token_mint;
    let owner_key = distributor.owner;
    let bump_seed = [distributor.bump];
    let seeds: [&[u8]; 5] = [
        DISTRIBUTOR_SEED.as_bytes(),
        token_mint_key.as_ref(),
        owner_key.as_ref(),
        nonce_bytes.as_ref(),
        &bump_seed,
    ];
    let signer_seeds: [&[&[u8]]; 1] = [&seeds];

    let mut token = VaultTransfer {
        distributor: distributor.to_account_info(),
        vault: token_vault.to_account_info(),
        recipient_token_account: recipient_token_account.to_account_info(),
        recipient_owner: recipient_token_account.owner,
        mint: token_mint.to_account_info(),
        token_program: token_program.to_account_info(),
        decimals: token_mint.decimals,
        vault_balance: token_vault.amount,
        signer_seeds: &signer_seeds,
    };
    let mut registry = ClaimStatusEntry::new(message.account, &mut **claim_status);

    settle_claim(&commitment, &mut registry, &mut token, message, proof, recover_signer)?;

    // A failure past this point still reverts the mark and the transfer
    claim_status.bump = claim_status_bump;
    let new_total_claimed = distributor
        .total_claimed
        .checked_add(message.amount)
        .ok_or(ClaimDistributorError::ArithmeticOverflow)?;
    distributor.total_claimed = new_total_claimed;

    Ok(new_total_claimed)
}
