use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions as sysvar_instructions;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::event::*;
use crate::instructions::claim::{settle_from_vault, VaultClaim};
use crate::settlement::RecoverSigner;
use crate::utils::{recover_signer, ClaimMessage, SignatureAuthorization};

/**
 * Account context for a relayed, signature-gated claim
 *
 * A relayer submits the claim and pays fees and rent on behalf of `account`.
 * The account's consent is an ed25519 signature over
 * `get_message_hash(account, amount)`, verified by an ed25519 program
 * instruction placed immediately before this one in the same transaction.
 *
 * Access Control: Anyone holding a valid authorization from an eligible account
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(account: Pubkey)]
pub struct ClaimWithSignature<'info> {
    /// The distributor account holding the merkle commitment
    /// - total_claimed is updated on success
    #[account(mut)]
    pub distributor: Account<'info, TokenDistributor>,

    /// Claim registry entry for the claiming account
    /// - Derived from: ["claim", distributor_key, account]
    /// - Rent is paid by the relayer
    #[account(
        init_if_needed,
        payer = payer,
        space = ClaimStatus::LEN,
        seeds = [CLAIM_SEED.as_bytes(), distributor.key().as_ref(), account.as_ref()],
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

    /// Token account receiving the tokens
    /// - Its token authority must be the claiming account, so the relayer
    ///   cannot redirect the payout
    #[account(
        mut,
        token::mint = distributor.token_mint,
        token::token_program = token_program,
        constraint = recipient_token_account.owner == account @ ClaimDistributorError::RecipientMismatch
    )]
    pub recipient_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == distributor.token_mint @ ClaimDistributorError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Relayer submitting the claim and paying for it
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Instructions sysvar, read to find the ed25519 verification
    /// CHECK: address is constrained to the instructions sysvar
    #[account(address = sysvar_instructions::ID)]
    pub instructions_sysvar: UncheckedAccount<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a signature-gated claim
 *
 * @param ctx - The account context containing all required accounts
 * @param account - Account named in the claim message
 * @param amount - Amount allocated to the account in the merkle tree
 * @param proof - Sibling hashes from the account's leaf up to the root
 * @param authorization - The account's signature over the typed-message hash
 */
pub fn handle_claim_with_signature(
    ctx: Context<ClaimWithSignature>,
    account: Pubkey,
    amount: u64,
    proof: Vec<[u8; 32]>,
    authorization: SignatureAuthorization,
) -> Result<()> {
    let message = ClaimMessage::new(account, amount);

    let instructions_sysvar = ctx.accounts.instructions_sysvar.to_account_info();
    let recover = |message_hash: &[u8; 32]| {
        recover_signer(&instructions_sysvar, message_hash, &authorization)
    };

    let total_claimed = settle_from_vault(
        VaultClaim {
            distributor: &mut ctx.accounts.distributor,
            claim_status: &mut ctx.accounts.claim_status,
            claim_status_bump: ctx.bumps.claim_status,
            token_vault: &ctx.accounts.token_vault,
            recipient_token_account: &ctx.accounts.recipient_token_account,
            token_mint: &ctx.accounts.token_mint,
            token_program: &ctx.accounts.token_program,
        },
        &message,
        &proof,
        Some(&recover as RecoverSigner),
    )?;

    emit_cpi!(ClaimSettled {
        distributor: ctx.accounts.distributor.key(),
        account: message.account,
        amount: message.amount,
        total_claimed,
    });

    Ok(())
}
