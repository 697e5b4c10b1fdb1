use anchor_lang::prelude::*;

#[error_code]
pub enum ClaimDistributorError {
    // Claim gate errors, listed in the order they are checked
    #[msg("Account has already claimed")]
    AlreadyClaimed,
    #[msg("Invalid signature")]
    InvalidSignature,
    #[msg("Invalid proof")]
    InvalidProof,

    // Construction errors
    #[msg("Invalid merkle root")]
    InvalidMerkleRoot,

    // Amount validation errors
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Insufficient vault balance for this claim")]
    InsufficientVaultBalance,

    // Account validation errors
    #[msg("Token mint does not match distributor's token mint")]
    TokenMintMismatch,
    #[msg("Recipient token account is not owned by the claiming account")]
    RecipientMismatch,
    #[msg("Claim status account does not belong to the claiming account")]
    ClaimStatusMismatch,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
