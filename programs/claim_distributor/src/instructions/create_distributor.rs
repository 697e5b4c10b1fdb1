use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{domain_separator, transfer_token};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new claim distributor
 *
 * This instruction commits a distribution to its merkle root:
 * - Creates or updates a nonce state PDA to track nonce numbers
 * - Creates a distributor PDA with auto-incremented nonce number
 * - Creates a token vault PDA to hold the tokens to be distributed
 * - Transfers the initial token amount from owner to the vault
 * - Fixes the merkle root and signing domain for the distributor's lifetime
 *
 * Access Control: Anyone can create a distributor they fund themselves
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateDistributor<'info> {
    /// Nonce state account (PDA) that tracks nonce numbers for this owner
    /// - Derived from: ["owner_nonce", owner]
    #[account(
        init_if_needed,
        payer = owner,
        space = NonceState::LEN,
        seeds = [OWNER_NONCE_SEED.as_bytes(), owner.key().as_ref()],
        bump
    )]
    pub owner_nonce: Account<'info, NonceState>,

    /// The main distributor account (PDA)
    /// - Derived from: ["distributor", token_mint, owner, current_nonce]
    /// - Nonce is automatically determined from owner_nonce.nonce + 1
    #[account(
        init,
        payer = owner,
        space = TokenDistributor::LEN,
        seeds = [
            DISTRIBUTOR_SEED.as_bytes(),
            token_mint.key().as_ref(),
            owner.key().as_ref(),
            (owner_nonce.nonce + 1).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub distributor: Account<'info, TokenDistributor>,

    /// Token vault account (PDA) that holds the tokens to be distributed
    /// - Controlled by the distributor PDA as token authority
    /// - Derived from: ["vault", distributor_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = distributor,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump,
        payer = owner,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for the tokens being distributed
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Owner's token account funding the vault
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The owner creating and funding the distributor
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Creates a new claim distributor
 *
 * @param ctx - The account context containing all required accounts
 * @param merkle_root - Root of the tree of keccak(keccak(account || uint256(amount))) leaves
 * @param initial_total_amount - Total amount of tokens to be distributed
 */
pub fn handle_create_distributor(
    ctx: Context<CreateDistributor>,
    merkle_root: [u8; 32],
    initial_total_amount: u64,
) -> Result<()> {
    // An all-zero root commits to nothing any proof could reach
    require!(merkle_root != [0; 32], ClaimDistributorError::InvalidMerkleRoot);
    require!(
        initial_total_amount > 0,
        ClaimDistributorError::InvalidAmount
    );

    let current_nonce = ctx
        .accounts
        .owner_nonce
        .next()
        .ok_or(ClaimDistributorError::ArithmeticOverflow)?;

    let distributor_key = ctx.accounts.distributor.key();
    let domain_separator = domain_separator(ctx.program_id, &distributor_key);

    let distributor = &mut ctx.accounts.distributor;
    distributor.bump = ctx.bumps.distributor;
    distributor.nonce = current_nonce;
    distributor.owner = ctx.accounts.owner.key();
    distributor.token_mint = ctx.accounts.token_mint.key();
    distributor.token_vault = ctx.accounts.token_vault.key();
    distributor.initial_total_amount = initial_total_amount;
    distributor.total_claimed = 0;
    distributor.merkle_root = merkle_root;
    distributor.domain_separator = domain_separator;

    // Owner-signed deposit into the vault
    transfer_token(
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.owner_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        initial_total_amount,
        ctx.accounts.token_mint.decimals,
        None,
    )?;

    emit_cpi!(DistributorCreated {
        distributor: distributor_key,
        nonce: current_nonce,
        owner: ctx.accounts.owner.key(),
        token_mint: ctx.accounts.token_mint.key(),
        token_vault: ctx.accounts.token_vault.key(),
        merkle_root,
        domain_separator,
        initial_total_amount,
    });

    msg!(
        "Distributor {} created with nonce {}",
        distributor_key,
        current_nonce
    );

    Ok(())
}
